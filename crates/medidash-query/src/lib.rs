//! # medidash-query
//!
//! Read-only derivations over the store's collections: the filtered and
//! sorted views behind the list pages, and the small widget lists on the
//! dashboard.
//!
//! Every function here borrows its input slice and returns a new `Vec` of
//! references. The source collection is never reordered or mutated.

pub mod dashboard;
pub mod medicines;
pub mod patients;
pub mod sort;

pub use medicines::{MedicineQuery, MedicineSortKey};
pub use patients::{PatientQuery, PatientSortKey};
pub use sort::SortDirection;

/// Case-insensitive substring match of `term` against any of `fields`.
///
/// An empty term matches everything.
pub(crate) fn matches_term(term: &str, fields: &[&str]) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    fields.iter().any(|f| f.to_lowercase().contains(&needle))
}
