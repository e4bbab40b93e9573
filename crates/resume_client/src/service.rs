use client_logging::{client_debug, client_info};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::{FailureKind, RequestError, RequestKind, ResumeUpload, ServiceRequest};

const RESUME_FIELD: &str = "resume";
const JOB_DESCRIPTION_FIELD: &str = "job_description";
const STATUS_DETAIL_LIMIT: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSettings {
    pub base_url: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
        }
    }
}

/// Remote analysis service.
#[async_trait::async_trait]
pub trait ResumeService: Send + Sync {
    /// Returns the `analysis` text for the resume against the job description,
    /// or `None` when the answer carries none.
    async fn analyze(
        &self,
        resume: &ResumeUpload,
        job_description: &str,
    ) -> Result<Option<String>, RequestError>;

    /// Returns the `rewritten_resume` text for the resume, if any.
    async fn rewrite(&self, resume: &ResumeUpload) -> Result<Option<String>, RequestError>;
}

/// Routes a request to the matching service operation.
pub async fn dispatch(
    service: &dyn ResumeService,
    request: &ServiceRequest,
) -> Result<Option<String>, RequestError> {
    match request {
        ServiceRequest::Analyze {
            resume,
            job_description,
        } => service.analyze(resume, job_description).await,
        ServiceRequest::Rewrite { resume } => service.rewrite(resume).await,
    }
}

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    #[serde(default)]
    analysis: Option<String>,
    #[serde(default)]
    filename: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RewriteResponse {
    #[serde(default)]
    rewritten_resume: Option<String>,
    #[serde(default)]
    filename: Option<String>,
}

/// `ResumeService` over HTTP: multipart POSTs, JSON responses.
///
/// No timeout, retry or cancellation policy is applied.
#[derive(Debug, Clone)]
pub struct ReqwestResumeService {
    client: reqwest::Client,
    base_url: Url,
}

impl ReqwestResumeService {
    pub fn new(settings: ServiceSettings) -> Result<Self, RequestError> {
        let base_url = Url::parse(settings.base_url.trim())
            .map_err(|err| RequestError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(RequestError::new(
                FailureKind::InvalidUrl,
                format!("{base_url} cannot be used as a base url"),
            ));
        }
        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| RequestError::new(FailureKind::Network, err.to_string()))?;

        client_info!("Resume service at {}", base_url);
        Ok(Self { client, base_url })
    }

    /// Full URL of `path`, appended to the base URL's own path.
    pub fn endpoint(&self, path: &str) -> Result<Url, RequestError> {
        let raw = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&raw).map_err(|err| RequestError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    /// POSTs `form` to `path` and decodes the JSON response body.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, RequestError> {
        let url = self.endpoint(path)?;
        client_debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            let detail: String = detail.chars().take(STATUS_DETAIL_LIMIT).collect();
            return Err(RequestError::new(
                FailureKind::HttpStatus(status.as_u16()),
                format!("{status} {detail}").trim_end().to_string(),
            ));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        serde_json::from_slice(&body)
            .map_err(|err| RequestError::new(FailureKind::Decode, err.to_string()))
    }
}

#[async_trait::async_trait]
impl ResumeService for ReqwestResumeService {
    async fn analyze(
        &self,
        resume: &ResumeUpload,
        job_description: &str,
    ) -> Result<Option<String>, RequestError> {
        let form = Form::new()
            .part(RESUME_FIELD, resume_part(resume)?)
            .text(JOB_DESCRIPTION_FIELD, job_description.to_string());
        let response: AnalyzeResponse = self
            .post_multipart(RequestKind::Analyze.path(), form)
            .await?;
        if let Some(filename) = response.filename {
            client_debug!("analyze answered for {}", filename);
        }
        Ok(response.analysis)
    }

    async fn rewrite(&self, resume: &ResumeUpload) -> Result<Option<String>, RequestError> {
        let form = Form::new().part(RESUME_FIELD, resume_part(resume)?);
        let response: RewriteResponse = self
            .post_multipart(RequestKind::Rewrite.path(), form)
            .await?;
        if let Some(filename) = response.filename {
            client_debug!("rewrite answered for {}", filename);
        }
        Ok(response.rewritten_resume)
    }
}

fn resume_part(resume: &ResumeUpload) -> Result<Part, RequestError> {
    Part::bytes(resume.bytes.to_vec())
        .file_name(resume.file_name.clone())
        .mime_str(content_type_for(&resume.file_name))
        .map_err(|err| RequestError::new(FailureKind::InvalidRequest, err.to_string()))
}

fn content_type_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

fn map_reqwest_error(err: reqwest::Error) -> RequestError {
    if err.is_builder() {
        return RequestError::new(FailureKind::InvalidRequest, err.to_string());
    }
    if err.is_decode() {
        return RequestError::new(FailureKind::Decode, err.to_string());
    }
    RequestError::new(FailureKind::Network, err.to_string())
}
