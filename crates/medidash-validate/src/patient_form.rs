//! The three-step patient registration form.
//!
//! Step 1 is personal details, step 2 contact and medical basics, step 3 the
//! visit itself. The view advances a step only once `validate_step` passes
//! for the current one; submission validates all three.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use medidash_contracts::{
    error::{MedidashError, MedidashResult},
    patient::{Gender, NewPatient, Patient, PatientStatus, Priority},
    validate::ValidationReport,
};

use crate::{
    push_unique,
    rule::{evaluate, FieldRule, RuleKind},
};

/// Number of steps in the registration flow.
pub const STEPS: u8 = 3;

/// Raw patient form state, as entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Gender,
    pub address: String,
    pub emergency_contact: String,
    pub blood_type: String,
    pub allergies: Vec<String>,
    pub symptoms: String,
    pub priority: Priority,
    pub status: PatientStatus,
    /// Blank means unassigned.
    pub assigned_doctor: String,
    pub appointment_date: Option<DateTime<Utc>>,
}

impl Default for PatientForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            date_of_birth: None,
            gender: Gender::Male,
            address: String::new(),
            emergency_contact: String::new(),
            blood_type: String::new(),
            allergies: Vec::new(),
            symptoms: String::new(),
            priority: Priority::Medium,
            status: PatientStatus::Waiting,
            assigned_doctor: String::new(),
            appointment_date: None,
        }
    }
}

fn step_rules(step: u8) -> Option<Vec<FieldRule>> {
    let rules = match step {
        1 => vec![
            FieldRule::required("name", "Name is required"),
            FieldRule::required("email", "Email is required"),
            FieldRule::new("email", RuleKind::Email, "Email is invalid"),
            FieldRule::required("phone", "Phone is required"),
            FieldRule::required("dateOfBirth", "Date of birth is required"),
        ],
        2 => vec![
            FieldRule::required("address", "Address is required"),
            FieldRule::required("emergencyContact", "Emergency contact is required"),
            FieldRule::required("bloodType", "Blood type is required"),
        ],
        3 => vec![
            FieldRule::required("symptoms", "Symptoms are required"),
            FieldRule::required("appointmentDate", "Appointment date is required"),
        ],
        _ => return None,
    };
    Some(rules)
}

impl PatientForm {
    /// A blank form whose appointment defaults to `now`.
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            appointment_date: Some(now),
            ..Self::default()
        }
    }

    /// Prefill the form for editing an existing patient.
    pub fn from_patient(patient: &Patient) -> Self {
        Self {
            name: patient.name.clone(),
            email: patient.email.clone(),
            phone: patient.phone.clone(),
            date_of_birth: Some(patient.date_of_birth),
            gender: patient.gender,
            address: patient.address.clone(),
            emergency_contact: patient.emergency_contact.clone(),
            blood_type: patient.blood_type.clone(),
            allergies: patient.allergies.clone(),
            symptoms: patient.symptoms.clone(),
            priority: patient.priority,
            status: patient.status,
            assigned_doctor: patient.assigned_doctor.clone().unwrap_or_default(),
            appointment_date: Some(patient.appointment_date),
        }
    }

    /// Add an allergy tag. Blank and duplicate entries are ignored.
    pub fn add_allergy(&mut self, allergy: &str) -> bool {
        push_unique(&mut self.allergies, allergy)
    }

    pub fn remove_allergy(&mut self, allergy: &str) {
        self.allergies.retain(|a| a != allergy);
    }

    /// Validate one step (1 to 3).
    pub fn validate_step(&self, step: u8) -> MedidashResult<ValidationReport> {
        let rules = step_rules(step).ok_or_else(|| MedidashError::InvalidValue {
            field: "patient form step".to_string(),
            value: step.to_string(),
        })?;
        let report = evaluate(&rules, &serde_json::to_value(self)?);
        debug!(step, passed = report.passed, failures = report.failures.len(), "patient form step validated");
        Ok(report)
    }

    /// Validate every step.
    pub fn validate(&self) -> MedidashResult<ValidationReport> {
        let mut report = ValidationReport::from_failures(Vec::new());
        for step in 1..=STEPS {
            report = report.merge(self.validate_step(step)?);
        }
        Ok(report)
    }

    /// Validate, then convert into a store input.
    ///
    /// Returns `ValidationFailed` if any field fails.
    pub fn into_new_patient(self) -> MedidashResult<NewPatient> {
        self.validate()?.into_result()?;

        let (Some(date_of_birth), Some(appointment_date)) = (self.date_of_birth, self.appointment_date)
        else {
            return Err(MedidashError::ValidationFailed {
                count: 1,
                summary: "date fields missing after validation".to_string(),
            });
        };

        let assigned_doctor = match self.assigned_doctor.trim() {
            "" => None,
            doctor => Some(doctor.to_string()),
        };

        Ok(NewPatient {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            date_of_birth,
            gender: self.gender,
            address: self.address,
            emergency_contact: self.emergency_contact,
            blood_type: self.blood_type,
            allergies: self.allergies,
            status: self.status,
            priority: self.priority,
            appointment_date,
            symptoms: self.symptoms,
            assigned_doctor,
        })
    }
}
