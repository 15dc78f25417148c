//! # medidash-config
//!
//! Startup configuration for the dashboard, read from TOML, and the
//! file-backed `PreferenceStore` that keeps the theme across restarts.

pub mod app;
pub mod preferences;

pub use app::{AppConfig, DashboardConfig, PreferencesConfig};
pub use preferences::FilePreferenceStore;
