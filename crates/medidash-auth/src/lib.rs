//! # medidash-auth
//!
//! The authentication boundary in front of the dashboard.
//!
//! `AuthGate` accepts exactly one configured credential pair and remembers
//! who is signed in. `Route` and `AuthGate::guard` decide which page a path
//! renders or where it redirects. The store never consults either.

pub mod gate;
pub mod route;
pub mod strength;

pub use gate::{AuthConfig, AuthGate};
pub use route::{Route, RouteDecision};
pub use strength::{password_strength, PasswordStrength};
