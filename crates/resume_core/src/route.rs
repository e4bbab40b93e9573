use url::Url;

const LANDING_PATH: &str = "/";
const UPLOAD_PATH: &str = "/upload";

/// Navigable locations of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Landing,
    Upload,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Landing => LANDING_PATH,
            Route::Upload => UPLOAD_PATH,
        }
    }

    /// Resolves a location string to a route.
    ///
    /// The leading slash is optional; trailing slashes, query and fragment are
    /// ignored and matching is case-insensitive. Unknown paths have no view.
    pub fn from_path(raw: &str) -> Option<Self> {
        let base = Url::parse("http://localhost/").ok()?;
        let relative = format!("/{}", raw.trim().trim_start_matches('/'));
        let url = base.join(&relative).ok()?;
        let path = url.path().trim_end_matches('/');

        if path.is_empty() {
            Some(Route::Landing)
        } else if path.eq_ignore_ascii_case(UPLOAD_PATH) {
            Some(Route::Upload)
        } else {
            None
        }
    }
}
