//! The login gate.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use medidash_contracts::{
    ids::UserId,
    user::{Role, User},
};

use crate::route::{Route, RouteDecision};

/// The one accepted credential pair and the user it signs in as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub email: String,
    pub password: String,
    pub user: User,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            email: "doctor@hospital.com".to_string(),
            password: "password123".to_string(),
            user: User {
                id: UserId::from("1"),
                name: "Dr. Priya Mehta".to_string(),
                email: "doctor@hospital.com".to_string(),
                role: Role::Doctor,
                avatar: None,
            },
        }
    }
}

/// Tracks the signed-in user for one session.
#[derive(Debug)]
pub struct AuthGate {
    config: AuthConfig,
    current: Option<User>,
}

impl AuthGate {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config,
            current: None,
        }
    }

    /// Sign in if `email` and `password` exactly match the configured pair.
    ///
    /// A failed attempt leaves any existing session untouched.
    pub fn login(&mut self, email: &str, password: &str) -> bool {
        if email == self.config.email && password == self.config.password {
            info!(user_id = %self.config.user.id, role = %self.config.user.role, "login succeeded");
            self.current = Some(self.config.user.clone());
            true
        } else {
            warn!(email, "login rejected");
            false
        }
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.current.take() {
            info!(user_id = %user.id, "logged out");
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Decide what navigating to `route` does in the current session.
    ///
    /// - Protected pages render when signed in and redirect to `/login`
    ///   otherwise.
    /// - `/login` renders when signed out and redirects to `/` otherwise.
    /// - Unknown paths always redirect to `/`.
    pub fn guard(&self, route: Route) -> RouteDecision {
        match route {
            Route::Unknown(_) => RouteDecision::Redirect(Route::Dashboard),
            Route::Login if self.is_authenticated() => RouteDecision::Redirect(Route::Dashboard),
            Route::Login => RouteDecision::Render(Route::Login),
            page if self.is_authenticated() => RouteDecision::Render(page),
            _ => RouteDecision::Redirect(Route::Login),
        }
    }

    /// Follow redirects from `path` until a page renders.
    ///
    /// At most two hops are possible: unknown to `/`, then `/` to `/login`.
    pub fn resolve(&self, path: &str) -> Route {
        let mut route = Route::parse(path);
        loop {
            match self.guard(route) {
                RouteDecision::Render(page) => return page,
                RouteDecision::Redirect(next) => route = next,
            }
        }
    }
}
