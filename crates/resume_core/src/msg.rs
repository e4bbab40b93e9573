#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Location change requested by the user (address bar or link).
    Navigate(crate::Route),
    /// User clicked "Upload Resume" on the landing page.
    UploadResumeClicked,
    /// User picked a resume file.
    FileSelected(crate::SelectedFile),
    /// User edited the job description text.
    JobDescriptionEdited(String),
    /// User clicked Analyze.
    AnalyzeClicked,
    /// User clicked Rewrite.
    RewriteClicked,
    /// A request issued during `visit` finished.
    RequestFinished {
        visit: crate::VisitId,
        operation: crate::Operation,
        outcome: RequestOutcome,
    },
    /// User dismissed the notice on screen.
    NoticeDismissed,
    /// User asked to leave the application.
    QuitRequested,
    /// A blank input line; changes nothing.
    NoOp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    /// The service answered. `None` when the response carried no result
    /// text, which clears the stored result.
    Succeeded(Option<String>),
    /// Network failure, non-success status or undecodable body.
    Failed,
}
