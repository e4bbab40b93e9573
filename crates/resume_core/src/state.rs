use std::collections::VecDeque;

use bytes::Bytes;

use crate::view_model::{AppViewModel, LandingView, PageView, UploadView};
use crate::Route;

/// Identifies one visit to the upload page.
pub type VisitId = u64;

/// A resume picked by the user. Replaced wholesale on re-selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Bytes,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Analyze,
    Rewrite,
}

/// Blocking notice shown to the user until dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    MissingResume,
    AnalyzeFailed,
    RewriteFailed,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::MissingResume => "Upload your resume first!",
            Notice::AnalyzeFailed => "Analyze failed!",
            Notice::RewriteFailed => "Rewrite failed!",
        }
    }

    pub(crate) fn for_failure(operation: Operation) -> Self {
        match operation {
            Operation::Analyze => Notice::AnalyzeFailed,
            Operation::Rewrite => Notice::RewriteFailed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct UploadForm {
    pub(crate) visit: VisitId,
    pub(crate) resume: Option<SelectedFile>,
    pub(crate) job_description: String,
    pub(crate) analysis: Option<String>,
    pub(crate) rewritten_resume: Option<String>,
    pub(crate) analyze_in_flight: bool,
    pub(crate) rewrite_in_flight: bool,
}

impl UploadForm {
    fn new(visit: VisitId) -> Self {
        Self {
            visit,
            ..Self::default()
        }
    }

    pub(crate) fn in_flight_mut(&mut self, operation: Operation) -> &mut bool {
        match operation {
            Operation::Analyze => &mut self.analyze_in_flight,
            Operation::Rewrite => &mut self.rewrite_in_flight,
        }
    }

    pub(crate) fn result_mut(&mut self, operation: Operation) -> &mut Option<String> {
        match operation {
            Operation::Analyze => &mut self.analysis,
            Operation::Rewrite => &mut self.rewritten_resume,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum Page {
    #[default]
    Landing,
    Upload(UploadForm),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    page: Page,
    last_visit: VisitId,
    notices: VecDeque<Notice>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State opened directly at `route`, as when a location is loaded fresh.
    pub fn at(route: Route) -> Self {
        let mut state = Self::new();
        state.navigate(route);
        state.dirty = false;
        state
    }

    pub fn route(&self) -> Route {
        match self.page {
            Page::Landing => Route::Landing,
            Page::Upload(_) => Route::Upload,
        }
    }

    /// Visit id of the open upload page, if any.
    pub fn current_visit(&self) -> Option<VisitId> {
        match &self.page {
            Page::Upload(form) => Some(form.visit),
            Page::Landing => None,
        }
    }

    pub fn view(&self) -> AppViewModel {
        let page = match &self.page {
            Page::Landing => PageView::Landing(LandingView::default()),
            Page::Upload(form) => PageView::Upload(UploadView {
                resume_name: form.resume.as_ref().map(|file| file.name.clone()),
                job_description: form.job_description.clone(),
                analysis: form.analysis.clone(),
                rewritten_resume: form.rewritten_resume.clone(),
                analyze_in_flight: form.analyze_in_flight,
                rewrite_in_flight: form.rewrite_in_flight,
            }),
        };
        AppViewModel {
            page,
            notice: self.notices.front().copied(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn notice_open(&self) -> bool {
        !self.notices.is_empty()
    }

    pub(crate) fn push_notice(&mut self, notice: Notice) {
        self.notices.push_back(notice);
        self.mark_dirty();
    }

    pub(crate) fn dismiss_notice(&mut self) -> bool {
        let dismissed = self.notices.pop_front().is_some();
        if dismissed {
            self.mark_dirty();
        }
        dismissed
    }

    /// Switches pages. Leaving the upload page discards its form; entering it
    /// starts a new visit with an empty form.
    pub(crate) fn navigate(&mut self, route: Route) -> bool {
        if self.route() == route {
            return false;
        }
        self.page = match route {
            Route::Landing => Page::Landing,
            Route::Upload => {
                self.last_visit += 1;
                Page::Upload(UploadForm::new(self.last_visit))
            }
        };
        self.mark_dirty();
        true
    }

    pub(crate) fn upload_form_mut(&mut self) -> Option<&mut UploadForm> {
        match &mut self.page {
            Page::Upload(form) => Some(form),
            Page::Landing => None,
        }
    }

    /// The open form, but only if it belongs to `visit`.
    pub(crate) fn form_for_visit(&mut self, visit: VisitId) -> Option<&mut UploadForm> {
        self.upload_form_mut().filter(|form| form.visit == visit)
    }
}
