use std::io;
use std::ops::ControlFlow;
use std::sync::{mpsc, Arc};
use std::thread;

use client_logging::{client_info, client_warn};
use resume_client::{
    ClientEvent, ClientHandle, RequestKind, ResumeService, ResumeUpload, ServiceRequest,
};
use resume_core::{Effect, Msg, Operation, RequestOutcome, SelectedFile};

use super::app::AppEvent;

pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    pub fn new(
        service: Arc<dyn ResumeService>,
        event_tx: mpsc::Sender<AppEvent>,
    ) -> io::Result<Self> {
        let (client, events) = ClientHandle::spawn(service)?;
        spawn_event_loop(events, event_tx)?;
        Ok(Self { client })
    }

    /// Executes `effects`; breaks when one of them asks to quit.
    pub fn enqueue(&self, effects: Vec<Effect>) -> ControlFlow<()> {
        let mut flow = ControlFlow::Continue(());
        for effect in effects {
            match effect {
                Effect::SubmitAnalyze {
                    visit,
                    resume,
                    job_description,
                } => {
                    client_info!(
                        "SubmitAnalyze visit={} file={} jd_len={}",
                        visit,
                        resume.name,
                        job_description.len()
                    );
                    self.client.submit(
                        visit,
                        ServiceRequest::Analyze {
                            resume: to_upload(resume),
                            job_description,
                        },
                    );
                }
                Effect::SubmitRewrite { visit, resume } => {
                    client_info!("SubmitRewrite visit={} file={}", visit, resume.name);
                    self.client.submit(
                        visit,
                        ServiceRequest::Rewrite {
                            resume: to_upload(resume),
                        },
                    );
                }
                Effect::Quit => flow = ControlFlow::Break(()),
            }
        }
        flow
    }
}

fn spawn_event_loop(
    events: mpsc::Receiver<ClientEvent>,
    event_tx: mpsc::Sender<AppEvent>,
) -> io::Result<()> {
    thread::Builder::new()
        .name("client-events".to_string())
        .spawn(move || {
            for event in events {
                if event_tx.send(AppEvent::Core(map_event(event))).is_err() {
                    break;
                }
            }
        })?;
    Ok(())
}

fn map_event(event: ClientEvent) -> Msg {
    match event {
        ClientEvent::Completed { tag, kind, result } => Msg::RequestFinished {
            visit: tag,
            operation: map_kind(kind),
            outcome: match result {
                Ok(text) => RequestOutcome::Succeeded(text),
                Err(err) => {
                    client_warn!("{} request for visit {} failed: {}", kind, tag, err);
                    RequestOutcome::Failed
                }
            },
        },
    }
}

fn map_kind(kind: RequestKind) -> Operation {
    match kind {
        RequestKind::Analyze => Operation::Analyze,
        RequestKind::Rewrite => Operation::Rewrite,
    }
}

fn to_upload(file: SelectedFile) -> ResumeUpload {
    ResumeUpload::new(file.name, file.bytes)
}
