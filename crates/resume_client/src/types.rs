use std::fmt;

use bytes::Bytes;
use thiserror::Error;

/// Caller-chosen tag echoed back with the completion of a request.
pub type RequestTag = u64;

/// Resume file as sent in the `resume` multipart field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeUpload {
    pub file_name: String,
    pub bytes: Bytes,
}

impl ResumeUpload {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Analyze,
    Rewrite,
}

impl RequestKind {
    /// Endpoint path relative to the service base URL.
    pub fn path(self) -> &'static str {
        match self {
            RequestKind::Analyze => "/analyze",
            RequestKind::Rewrite => "/rewrite",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestKind::Analyze => write!(f, "analyze"),
            RequestKind::Rewrite => write!(f, "rewrite"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceRequest {
    Analyze {
        resume: ResumeUpload,
        job_description: String,
    },
    Rewrite {
        resume: ResumeUpload,
    },
}

impl ServiceRequest {
    pub fn kind(&self) -> RequestKind {
        match self {
            ServiceRequest::Analyze { .. } => RequestKind::Analyze,
            ServiceRequest::Rewrite { .. } => RequestKind::Rewrite,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    Completed {
        tag: RequestTag,
        kind: RequestKind,
        result: Result<Option<String>, RequestError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct RequestError {
    pub kind: FailureKind,
    pub message: String,
}

impl RequestError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    InvalidRequest,
    HttpStatus(u16),
    Decode,
    Network,
    /// The request worker is gone; nothing was sent.
    Stopped,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::InvalidRequest => write!(f, "invalid request"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Decode => write!(f, "undecodable response"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Stopped => write!(f, "request worker stopped"),
        }
    }
}
