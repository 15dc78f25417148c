//! In-memory `PreferenceStore`.
//!
//! Used by tests and by stores built without a preferences file. Nothing
//! survives the process.

use std::sync::{Arc, Mutex};

use medidash_contracts::{
    error::{MedidashError, MedidashResult},
    user::Theme,
};

use crate::traits::PreferenceStore;

/// A preference store backed by a shared in-memory slot.
///
/// Clones share the slot, so a caller can keep a handle to inspect what the
/// store persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    theme: Arc<Mutex<Option<Theme>>>,
}

impl MemoryPreferences {
    /// Start with a theme already saved, as if from a previous session.
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme: Arc::new(Mutex::new(Some(theme))),
        }
    }

    /// The currently saved theme, if any.
    pub fn saved(&self) -> Option<Theme> {
        *self.theme.lock().expect("preference lock poisoned")
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load_theme(&self) -> MedidashResult<Option<Theme>> {
        let slot = self.theme.lock().map_err(|e| MedidashError::PreferenceError {
            reason: format!("preference lock poisoned: {}", e),
        })?;
        Ok(*slot)
    }

    fn save_theme(&self, theme: Theme) -> MedidashResult<()> {
        let mut slot = self.theme.lock().map_err(|e| MedidashError::PreferenceError {
            reason: format!("preference lock poisoned: {}", e),
        })?;
        *slot = Some(theme);
        Ok(())
    }
}
