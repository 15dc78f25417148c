//! # medidash-ref-hospital
//!
//! Reference hospital for the Medidash store.
//!
//! - `mock_data` holds the sample ward: four patients, five medicines and
//!   three notifications, timestamped from whatever clock the store uses.
//! - `workflow` is the page layer: validate a form, call the store, and
//!   raise the notifications the store itself does not.
//! - `scenarios` are printed walk-throughs that drive real components end
//!   to end.
//!
//! All data is fictional.

pub mod mock_data;
pub mod scenarios;
pub mod workflow;
