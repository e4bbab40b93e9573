//! Resume client core: pure state machine, routing and view-model helpers.
mod effect;
mod msg;
mod route;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{Msg, RequestOutcome};
pub use route::Route;
pub use state::{AppState, Notice, Operation, SelectedFile, VisitId};
pub use update::update;
pub use view_model::{
    AppViewModel, LandingView, PageView, UploadView, APP_TITLE, JOB_DESCRIPTION_PLACEHOLDER,
    LANDING_TAGLINE, UPLOAD_ACTION_LABEL,
};
