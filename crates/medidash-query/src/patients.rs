//! The patient list view: search, status/priority filters, and sorting.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use medidash_contracts::{
    error::MedidashError,
    patient::{Patient, PatientStatus, Priority},
};

use crate::{
    matches_term,
    sort::{cmp_name, SortDirection},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientSortKey {
    /// Case-insensitive name.
    Name,
    /// Appointment date, chronologically.
    Date,
    /// Priority rank, `low` lowest.
    Priority,
}

impl PatientSortKey {
    fn compare(self, a: &Patient, b: &Patient) -> Ordering {
        match self {
            PatientSortKey::Name => cmp_name(&a.name, &b.name),
            PatientSortKey::Date => a.appointment_date.cmp(&b.appointment_date),
            PatientSortKey::Priority => a.priority.rank().cmp(&b.priority.rank()),
        }
    }
}

impl FromStr for PatientSortKey {
    type Err = MedidashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(PatientSortKey::Name),
            "date" => Ok(PatientSortKey::Date),
            "priority" => Ok(PatientSortKey::Priority),
            _ => Err(MedidashError::InvalidValue {
                field: "patient sort key".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Inputs to the patient list.
///
/// `None` filters are inactive. The default sorts by appointment date,
/// newest first, with no search or filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientQuery {
    pub search: String,
    pub status: Option<PatientStatus>,
    pub priority: Option<Priority>,
    pub sort_by: PatientSortKey,
    pub direction: SortDirection,
}

impl Default for PatientQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: None,
            priority: None,
            sort_by: PatientSortKey::Date,
            direction: SortDirection::Desc,
        }
    }
}

impl PatientQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn status(mut self, status: PatientStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn sort(mut self, key: PatientSortKey, direction: SortDirection) -> Self {
        self.sort_by = key;
        self.direction = direction;
        self
    }

    /// True if `patient` passes the search term and every active filter.
    pub fn matches(&self, patient: &Patient) -> bool {
        matches_term(
            &self.search,
            &[
                patient.name.as_str(),
                patient.email.as_str(),
                patient.phone.as_str(),
                patient.symptoms.as_str(),
            ],
        ) && self.status.map_or(true, |s| patient.status == s)
            && self.priority.map_or(true, |p| patient.priority == p)
    }

    /// Filter and sort `patients` into a new view.
    ///
    /// The sort is stable: patients with equal keys keep their store order.
    pub fn run<'a>(&self, patients: &'a [Patient]) -> Vec<&'a Patient> {
        let mut view: Vec<&Patient> = patients.iter().filter(|p| self.matches(p)).collect();
        view.sort_by(|a, b| self.direction.apply(self.sort_by.compare(a, b)));
        debug!(
            total = patients.len(),
            matched = view.len(),
            sort_by = ?self.sort_by,
            direction = self.direction.as_str(),
            "patient query"
        );
        view
    }
}
