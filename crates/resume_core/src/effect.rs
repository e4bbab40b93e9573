use crate::{SelectedFile, VisitId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST the resume and job description to the analyze endpoint.
    SubmitAnalyze {
        visit: VisitId,
        resume: SelectedFile,
        job_description: String,
    },
    /// POST the resume to the rewrite endpoint.
    SubmitRewrite { visit: VisitId, resume: SelectedFile },
    /// Leave the application.
    Quit,
}
