//! Application routes.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Login,
    Dashboard,
    Patients,
    Medicines,
    Appointments,
    Settings,
    /// Any path without a page.
    Unknown(String),
}

impl Route {
    /// Every page with a fixed path, in navigation order.
    pub const PAGES: [Route; 6] = [
        Route::Login,
        Route::Dashboard,
        Route::Patients,
        Route::Medicines,
        Route::Appointments,
        Route::Settings,
    ];

    /// Map a path to its route. A trailing slash is ignored.
    pub fn parse(path: &str) -> Route {
        let trimmed = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        match trimmed {
            "/login" => Route::Login,
            "/" => Route::Dashboard,
            "/patients" => Route::Patients,
            "/medicines" => Route::Medicines,
            "/appointments" => Route::Appointments,
            "/settings" => Route::Settings,
            _ => Route::Unknown(path.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/",
            Route::Patients => "/patients",
            Route::Medicines => "/medicines",
            Route::Appointments => "/appointments",
            Route::Settings => "/settings",
            Route::Unknown(path) => path,
        }
    }

    /// Everything except the login page needs a signed-in user.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login | Route::Unknown(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// The outcome of navigating to a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Render(Route),
    Redirect(Route),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for page in Route::PAGES {
            assert_eq!(Route::parse(page.path()), page);
        }
    }

    #[test]
    fn trailing_slash_and_unknown() {
        assert_eq!(Route::parse("/patients/"), Route::Patients);
        assert_eq!(Route::parse(""), Route::Dashboard);
        assert_eq!(Route::parse("/reports"), Route::Unknown("/reports".to_string()));
        assert!(!Route::parse("/reports").is_protected());
        assert!(Route::Settings.is_protected());
    }
}
