//! # medidash-core
//!
//! The in-memory domain store for the Medidash hospital dashboard.
//!
//! This crate provides:
//! - The three seam traits (`Clock`, `PreferenceStore`, `StoreObserver`)
//! - The `Store` that owns every collection and applies mutations in order
//! - `dashboard_stats`, the pure derivation behind the dashboard counters
//! - In-memory implementations of each seam for tests and demos
//!
//! ## Usage
//!
//! ```rust,ignore
//! use medidash_core::{Store, SystemClock};
//!
//! let mut store = Store::in_memory(Box::new(SystemClock));
//! let stats = store.dashboard_stats();
//! ```

pub mod clock;
pub mod preferences;
pub mod recorder;
pub mod stats;
pub mod store;
pub mod traits;

pub use clock::{ManualClock, SystemClock};
pub use preferences::MemoryPreferences;
pub use recorder::{ChangeRecorder, RecordedEvent};
pub use store::{SeedData, Store};
