//! Resume client: HTTP adapter for the analysis service and request execution.
mod handle;
mod service;
mod types;

pub use handle::ClientHandle;
pub use service::{dispatch, ReqwestResumeService, ResumeService, ServiceSettings};
pub use types::{
    ClientEvent, FailureKind, RequestError, RequestKind, RequestTag, ResumeUpload,
    ServiceRequest,
};
