use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use client_logging::{client_debug, client_warn};

use crate::service::{dispatch, ResumeService};
use crate::{ClientEvent, FailureKind, RequestError, RequestTag, ServiceRequest};

enum ClientCommand {
    Submit {
        tag: RequestTag,
        request: ServiceRequest,
    },
}

/// Runs service requests on a background tokio runtime.
///
/// Requests run concurrently and are never cancelled; each one reports exactly
/// one `ClientEvent::Completed` on the event channel returned by `spawn`.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_tx: mpsc::Sender<ClientEvent>,
}

impl ClientHandle {
    pub fn spawn(
        service: Arc<dyn ResumeService>,
    ) -> io::Result<(Self, mpsc::Receiver<ClientEvent>)> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("resume-client")
            .build()?;

        let worker_events = event_tx.clone();
        thread::Builder::new()
            .name("resume-client-commands".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let service = service.clone();
                    let event_tx = worker_events.clone();
                    runtime.spawn(async move {
                        handle_command(service.as_ref(), command, event_tx).await;
                    });
                }
                client_debug!("Client handle dropped; shutting down request runtime");
            })?;

        Ok((Self { cmd_tx, event_tx }, event_rx))
    }

    /// Queues `request`. If the worker is gone the request completes at once
    /// with a `FailureKind::Stopped` error.
    pub fn submit(&self, tag: RequestTag, request: ServiceRequest) {
        let kind = request.kind();
        if self
            .cmd_tx
            .send(ClientCommand::Submit { tag, request })
            .is_ok()
        {
            return;
        }

        client_warn!("Request worker stopped; failing {} request tag={}", kind, tag);
        let result = Err(RequestError::new(
            FailureKind::Stopped,
            "request worker is not running",
        ));
        let _ = self.event_tx.send(ClientEvent::Completed { tag, kind, result });
    }
}

async fn handle_command(
    service: &dyn ResumeService,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::Submit { tag, request } => {
            let kind = request.kind();
            client_debug!("Running {} request tag={}", kind, tag);
            let result = dispatch(service, &request).await;
            let _ = event_tx.send(ClientEvent::Completed { tag, kind, result });
        }
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{RequestKind, ResumeUpload};

    #[test]
    fn submit_after_worker_stopped_reports_failure() {
        client_logging::initialize_for_tests();
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        drop(cmd_rx);
        let handle = ClientHandle { cmd_tx, event_tx };

        handle.submit(
            4,
            ServiceRequest::Rewrite {
                resume: ResumeUpload::new("resume.pdf", Bytes::from_static(b"%PDF")),
            },
        );

        let event = event_rx.try_recv().expect("synthesized completion");
        let ClientEvent::Completed { tag, kind, result } = event;
        assert_eq!(tag, 4);
        assert_eq!(kind, RequestKind::Rewrite);
        assert_eq!(result.unwrap_err().kind, FailureKind::Stopped);
    }
}
