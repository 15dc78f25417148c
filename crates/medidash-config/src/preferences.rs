//! File-backed theme preference.
//!
//! The file is a one-key TOML document:
//!
//! ```toml
//! theme = "dark"
//! ```
//!
//! A missing file means nothing was saved yet. A file that exists but cannot
//! be parsed is an error, not a silent reset.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use medidash_contracts::{
    error::{MedidashError, MedidashResult},
    user::Theme,
};
use medidash_core::traits::PreferenceStore;

#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferenceFile {
    theme: Option<Theme>,
}

#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn error(&self, action: &str, e: impl std::fmt::Display) -> MedidashError {
        MedidashError::PreferenceError {
            reason: format!("failed to {} '{}': {}", action, self.path.display(), e),
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load_theme(&self) -> MedidashResult<Option<Theme>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no saved preferences");
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&self.path).map_err(|e| self.error("read", e))?;
        let file: PreferenceFile = toml::from_str(&contents).map_err(|e| self.error("parse", e))?;
        Ok(file.theme)
    }

    fn save_theme(&self, theme: Theme) -> MedidashResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.error("create directory for", e))?;
        }
        let contents = toml::to_string(&PreferenceFile { theme: Some(theme) })
            .map_err(|e| self.error("serialize", e))?;
        std::fs::write(&self.path, contents).map_err(|e| self.error("write", e))?;
        debug!(path = %self.path.display(), theme = %theme, "theme saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use medidash_core::{ManualClock, Store};

    use super::*;

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("absent.toml"));
        assert_eq!(store.load_theme().unwrap(), None);
    }

    #[test]
    fn saved_theme_survives_a_new_handle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.toml");

        FilePreferenceStore::new(&path).save_theme(Theme::Dark).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.trim(), r#"theme = "dark""#);

        assert_eq!(FilePreferenceStore::new(&path).load_theme().unwrap(), Some(Theme::Dark));
    }

    #[test]
    fn garbage_file_is_a_preference_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        std::fs::write(&path, "theme = \"sepia\"").unwrap();

        let err = FilePreferenceStore::new(&path).load_theme().unwrap_err();
        assert!(matches!(err, MedidashError::PreferenceError { .. }));
    }

    #[test]
    fn theme_is_reapplied_across_store_restarts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2026, 3, 10, 8, 0, 0).unwrap());

        let mut first = Store::new(Box::new(clock.clone()), Box::new(FilePreferenceStore::new(&path))).unwrap();
        assert!(!first.is_dark_mode());
        first.toggle_dark_mode().unwrap();
        drop(first);

        let second = Store::new(Box::new(clock), Box::new(FilePreferenceStore::new(&path))).unwrap();
        assert!(second.is_dark_mode(), "dark mode must be restored from disk");
    }
}
