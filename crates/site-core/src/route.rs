//! Path parsing for the two logical views. Unknown paths and non-numeric
//! project ids both resolve to the terminal not-found view.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Project(u32),
    NotFound,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("unrecognized path: {0}")]
    UnknownPath(String),
    #[error("project id is not numeric: {0}")]
    BadProjectId(String),
}

impl Route {
    /// Parse a location pathname. Trailing slashes are tolerated. Anything
    /// that does not parse resolves to `NotFound` rather than an error the
    /// caller could forget to handle.
    pub fn parse(path: &str) -> Route {
        Route::try_parse(path).unwrap_or_else(|e| {
            log::debug!("route fell through to not-found: {e}");
            Route::NotFound
        })
    }

    /// Strict variant used by tests to distinguish the failure modes.
    pub fn try_parse(path: &str) -> Result<Route, RouteError> {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Ok(Route::Home);
        }
        match trimmed.strip_prefix("/project/") {
            Some(id) => id
                .parse::<u32>()
                .map(Route::Project)
                .map_err(|_| RouteError::BadProjectId(id.to_string())),
            None => Err(RouteError::UnknownPath(path.to_string())),
        }
    }

    /// The pathname to push for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Project(id) => format!("/project/{id}"),
            Route::NotFound => "/404".to_string(),
        }
    }
}
