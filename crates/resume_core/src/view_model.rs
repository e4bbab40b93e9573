use crate::Notice;

pub const APP_TITLE: &str = "AI Resume Analyzer";
pub const LANDING_TAGLINE: &str = "Upload your resume and get instant AI feedback";
pub const UPLOAD_ACTION_LABEL: &str = "Upload Resume";
pub const JOB_DESCRIPTION_PLACEHOLDER: &str = "Paste Job Description";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub page: PageView,
    /// Notice currently blocking interaction.
    pub notice: Option<Notice>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    Landing(LandingView),
    Upload(UploadView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingView {
    pub title: &'static str,
    pub tagline: &'static str,
    pub action_label: &'static str,
}

impl Default for LandingView {
    fn default() -> Self {
        Self {
            title: APP_TITLE,
            tagline: LANDING_TAGLINE,
            action_label: UPLOAD_ACTION_LABEL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadView {
    pub resume_name: Option<String>,
    pub job_description: String,
    pub analysis: Option<String>,
    pub rewritten_resume: Option<String>,
    pub analyze_in_flight: bool,
    pub rewrite_in_flight: bool,
}

impl AppViewModel {
    /// The upload page view, if that page is open.
    pub fn upload(&self) -> Option<&UploadView> {
        match &self.page {
            PageView::Upload(upload) => Some(upload),
            PageView::Landing(_) => None,
        }
    }
}
