//! # medidash-contracts
//!
//! Shared entity types, inputs, events, and errors for the Medidash hospital
//! store.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate beyond derived predicates on the entities themselves (stock
//! buckets, priority rank, theme toggling).

#[macro_use]
mod macros;

pub mod appointment;
pub mod calendar;
pub mod error;
pub mod event;
pub mod ids;
pub mod medicine;
pub mod notification;
pub mod patient;
pub mod record;
pub mod stats;
pub mod user;
pub mod validate;
