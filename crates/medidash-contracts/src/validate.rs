//! Form validation report types.
//!
//! Validation happens before the store is called. A report lists at most one
//! failure per field, in the order the fields were checked.

use serde::{Deserialize, Serialize};

use crate::error::MedidashError;

/// The outcome of validating one form (or one step of a multi-step form).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True only if no field failed.
    pub passed: bool,
    pub failures: Vec<FieldError>,
}

/// An inline error message for one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl ValidationReport {
    /// Build a report from collected failures.
    pub fn from_failures(failures: Vec<FieldError>) -> Self {
        Self {
            passed: failures.is_empty(),
            failures,
        }
    }

    /// The message recorded for `field`, if it failed.
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.failures
            .iter()
            .find(|f| f.field == field)
            .map(|f| f.message.as_str())
    }

    /// Fold another report into this one, keeping the first failure per field.
    pub fn merge(mut self, other: ValidationReport) -> Self {
        for failure in other.failures {
            if self.error_for(&failure.field).is_none() {
                self.failures.push(failure);
            }
        }
        self.passed = self.failures.is_empty();
        self
    }

    /// Convert a failing report into `MedidashError::ValidationFailed`.
    pub fn into_result(self) -> Result<(), MedidashError> {
        if self.passed {
            return Ok(());
        }
        let summary = self
            .failures
            .iter()
            .map(|f| format!("{}: {}", f.field, f.message))
            .collect::<Vec<_>>()
            .join("; ");
        Err(MedidashError::ValidationFailed {
            count: self.failures.len(),
            summary,
        })
    }
}
