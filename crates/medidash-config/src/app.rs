//! Application configuration.
//!
//! Every field has a default, so an empty document (or no file at all) gives
//! the stock demo setup:
//!
//! ```toml
//! seed_demo_data = true
//!
//! [auth]
//! email = "doctor@hospital.com"
//! password = "password123"
//!
//! [auth.user]
//! id = "1"
//! name = "Dr. Priya Mehta"
//! email = "doctor@hospital.com"
//! role = "doctor"
//!
//! [preferences]
//! path = "medidash-preferences.toml"
//!
//! [dashboard]
//! recent_limit = 5
//! expiry_window_days = 30
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use medidash_auth::AuthConfig;
use medidash_contracts::error::{MedidashError, MedidashResult};
use medidash_core::{traits::PreferenceStore, MemoryPreferences};
use medidash_query::dashboard::{DEFAULT_EXPIRY_WINDOW_DAYS, DEFAULT_RECENT_LIMIT};

use crate::preferences::FilePreferenceStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Load the sample patients, medicines and notifications at startup.
    pub seed_demo_data: bool,
    pub auth: AuthConfig,
    pub preferences: PreferencesConfig,
    pub dashboard: DashboardConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
            auth: AuthConfig::default(),
            preferences: PreferencesConfig::default(),
            dashboard: DashboardConfig::default(),
        }
    }
}

/// Where the theme preference lives. No path keeps it in memory only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub recent_limit: usize,
    pub expiry_window_days: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_limit: DEFAULT_RECENT_LIMIT,
            expiry_window_days: DEFAULT_EXPIRY_WINDOW_DAYS,
        }
    }
}

impl AppConfig {
    /// Parse `s` as TOML.
    ///
    /// Returns `MedidashError::ConfigError` if the TOML is malformed or a
    /// field has the wrong shape.
    pub fn from_toml_str(s: &str) -> MedidashResult<Self> {
        let config: AppConfig = toml::from_str(s).map_err(|e| MedidashError::ConfigError {
            reason: format!("failed to parse config TOML: {}", e),
        })?;
        debug!(
            seed_demo_data = config.seed_demo_data,
            preferences = ?config.preferences.path,
            "config loaded"
        );
        Ok(config)
    }

    /// Read and parse the file at `path`.
    pub fn from_file(path: &Path) -> MedidashResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| MedidashError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// The preference store this config asks for.
    pub fn preference_store(&self) -> Box<dyn PreferenceStore> {
        match &self.preferences.path {
            Some(path) => Box::new(FilePreferenceStore::new(path)),
            None => Box::new(MemoryPreferences::default()),
        }
    }
}
