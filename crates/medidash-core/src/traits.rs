//! Core trait definitions for the Medidash store.
//!
//! These three traits are the seams between the store and its environment:
//!
//! - `Clock`: where "now" and "today" come from
//! - `PreferenceStore`: where the theme preference is persisted
//! - `StoreObserver`: who hears about changes after they happen
//!
//! The store owns its collections outright. Observers are told what changed
//! and re-read through the store's accessors; they never receive a mutable
//! handle.

use chrono::{DateTime, NaiveDate, Utc};

use medidash_contracts::{error::MedidashResult, event::StoreEvent, user::Theme};

pub use medidash_contracts::calendar::local_date;

/// A source of wall-clock time.
///
/// All timestamps are stored in UTC. "Today" is the local calendar date of
/// `now()`, which is what the date-only comparisons use.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// The local calendar date of `now()`.
    fn today(&self) -> NaiveDate {
        local_date(self.now())
    }
}

/// Persistence for the single surviving preference: the display theme.
pub trait PreferenceStore: Send + Sync {
    /// Return the saved theme, or `None` if nothing was ever saved.
    fn load_theme(&self) -> MedidashResult<Option<Theme>>;

    /// Persist `theme`, replacing any previous value.
    fn save_theme(&self, theme: Theme) -> MedidashResult<()>;
}

/// Receives a `StoreEvent` after every mutation that changed state.
///
/// Called synchronously from inside the mutator, after the collections have
/// been updated. Observers hold no store handle; a read through the store
/// once the mutator returns sees the state the event describes.
pub trait StoreObserver: Send + Sync {
    fn on_event(&self, event: &StoreEvent);
}
