use std::sync::{Arc, Mutex};
use std::time::Duration;

use resume_client::{
    ClientEvent, ClientHandle, FailureKind, RequestError, RequestKind, ResumeService,
    ResumeUpload, ServiceRequest,
};

/// Answers from canned values and records what it was asked.
#[derive(Default)]
struct FakeService {
    calls: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl ResumeService for FakeService {
    async fn analyze(
        &self,
        resume: &ResumeUpload,
        job_description: &str,
    ) -> Result<Option<String>, RequestError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("analyze {} [{}]", resume.file_name, job_description));
        Ok(Some(format!("analysis of {}", resume.file_name)))
    }

    async fn rewrite(&self, resume: &ResumeUpload) -> Result<Option<String>, RequestError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("rewrite {}", resume.file_name));
        Err(RequestError {
            kind: FailureKind::HttpStatus(503),
            message: "unavailable".to_string(),
        })
    }
}

fn upload() -> ResumeUpload {
    ResumeUpload::new("resume.pdf", b"resume".to_vec())
}

#[test]
fn submitted_requests_complete_with_their_tag() {
    let service = Arc::new(FakeService::default());
    let (handle, events) = ClientHandle::spawn(service.clone()).expect("spawn");

    handle.submit(
        7,
        ServiceRequest::Analyze {
            resume: upload(),
            job_description: "Rust".to_string(),
        },
    );
    handle.submit(9, ServiceRequest::Rewrite { resume: upload() });

    let mut completed = Vec::new();
    for _ in 0..2 {
        let event = events
            .recv_timeout(Duration::from_secs(5))
            .expect("completion event");
        completed.push(event);
    }
    completed.sort_by_key(|event| match event {
        ClientEvent::Completed { tag, .. } => *tag,
    });

    assert_eq!(
        completed,
        vec![
            ClientEvent::Completed {
                tag: 7,
                kind: RequestKind::Analyze,
                result: Ok(Some("analysis of resume.pdf".to_string())),
            },
            ClientEvent::Completed {
                tag: 9,
                kind: RequestKind::Rewrite,
                result: Err(RequestError {
                    kind: FailureKind::HttpStatus(503),
                    message: "unavailable".to_string(),
                }),
            },
        ]
    );

    let mut calls = service.calls.lock().unwrap().clone();
    calls.sort();
    assert_eq!(calls, vec!["analyze resume.pdf [Rust]", "rewrite resume.pdf"]);
}

#[test]
fn request_kind_matches_endpoint() {
    let analyze = ServiceRequest::Analyze {
        resume: upload(),
        job_description: String::new(),
    };
    let rewrite = ServiceRequest::Rewrite { resume: upload() };

    assert_eq!(analyze.kind().path(), "/analyze");
    assert_eq!(rewrite.kind().path(), "/rewrite");
    assert_eq!(rewrite.kind().to_string(), "rewrite");
}
