//! Hospital walk-through scenarios.
//!
//! Each scenario is a self-contained module that wires up real Medidash
//! components (store, queries, form validation, auth gate) with the sample
//! ward and prints what a user of that page would see.

use medidash_contracts::error::MedidashResult;
use medidash_core::{MemoryPreferences, Store, SystemClock};

use crate::mock_data::seeded_store;

pub mod access_control;
pub mod dashboard_overview;
pub mod inventory_review;
pub mod patient_intake;

/// The store every scenario starts from: wall clock, in-memory theme, sample
/// ward.
pub(crate) fn demo_store() -> MedidashResult<Store> {
    seeded_store(SystemClock, Box::new(MemoryPreferences::default()))
}
