//! Patient registration types.
//!
//! `status` (where the patient is in today's visit) and `priority` (triage
//! urgency) are independent axes: a `critical` priority patient may still be
//! `waiting`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{PatientId, RecordId};

string_enum! {
    /// Where a patient currently is in their visit.
    pub enum PatientStatus as "patient status" {
        Waiting => "waiting",
        InConsultation => "in-consultation",
        Completed => "completed",
        Critical => "critical",
    }
}

string_enum! {
    /// Triage urgency.
    pub enum Priority as "priority" {
        Low => "low",
        Medium => "medium",
        High => "high",
        Critical => "critical",
    }
}

impl Priority {
    /// Fixed sort rank: `critical=4 > high=3 > medium=2 > low=1`.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
            Priority::Critical => 4,
        }
    }
}

string_enum! {
    pub enum Gender as "gender" {
        Male => "male",
        Female => "female",
        Other => "other",
    }
}

/// A registered patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub address: String,
    pub emergency_contact: String,
    pub blood_type: String,
    pub allergies: Vec<String>,
    /// Records linked to this patient by id. The store starts this empty and
    /// never maintains it on its own.
    pub medical_history: Vec<RecordId>,
    pub status: PatientStatus,
    pub priority: Priority,
    pub appointment_date: DateTime<Utc>,
    pub symptoms: String,
    pub assigned_doctor: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Always `>= created_at`.
    pub updated_at: DateTime<Utc>,
}

/// Everything the caller supplies when registering a patient.
///
/// The store assigns the id, the timestamps, and an empty medical history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub address: String,
    pub emergency_contact: String,
    pub blood_type: String,
    pub allergies: Vec<String>,
    pub status: PatientStatus,
    pub priority: Priority,
    pub appointment_date: DateTime<Utc>,
    pub symptoms: String,
    pub assigned_doctor: Option<String>,
}

impl NewPatient {
    /// Materialize the input into a stored patient.
    pub fn into_patient(self, id: PatientId, now: DateTime<Utc>) -> Patient {
        Patient {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            date_of_birth: self.date_of_birth,
            gender: self.gender,
            address: self.address,
            emergency_contact: self.emergency_contact,
            blood_type: self.blood_type,
            allergies: self.allergies,
            medical_history: Vec::new(),
            status: self.status,
            priority: self.priority,
            appointment_date: self.appointment_date,
            symptoms: self.symptoms,
            assigned_doctor: self.assigned_doctor,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A partial update. Only `Some` fields are merged.
///
/// `assigned_doctor` is doubly optional: `Some(None)` clears the assignment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatientPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
    pub blood_type: Option<String>,
    pub allergies: Option<Vec<String>>,
    pub medical_history: Option<Vec<RecordId>>,
    pub status: Option<PatientStatus>,
    pub priority: Option<Priority>,
    pub appointment_date: Option<DateTime<Utc>>,
    pub symptoms: Option<String>,
    pub assigned_doctor: Option<Option<String>>,
}

impl PatientPatch {
    /// Merge the supplied fields into `patient` and stamp `updated_at`.
    ///
    /// `updated_at` never moves backwards, even when the clock does.
    pub fn apply(self, patient: &mut Patient, now: DateTime<Utc>) {
        if let Some(v) = self.name {
            patient.name = v;
        }
        if let Some(v) = self.email {
            patient.email = v;
        }
        if let Some(v) = self.phone {
            patient.phone = v;
        }
        if let Some(v) = self.date_of_birth {
            patient.date_of_birth = v;
        }
        if let Some(v) = self.gender {
            patient.gender = v;
        }
        if let Some(v) = self.address {
            patient.address = v;
        }
        if let Some(v) = self.emergency_contact {
            patient.emergency_contact = v;
        }
        if let Some(v) = self.blood_type {
            patient.blood_type = v;
        }
        if let Some(v) = self.allergies {
            patient.allergies = v;
        }
        if let Some(v) = self.medical_history {
            patient.medical_history = v;
        }
        if let Some(v) = self.status {
            patient.status = v;
        }
        if let Some(v) = self.priority {
            patient.priority = v;
        }
        if let Some(v) = self.appointment_date {
            patient.appointment_date = v;
        }
        if let Some(v) = self.symptoms {
            patient.symptoms = v;
        }
        if let Some(v) = self.assigned_doctor {
            patient.assigned_doctor = v;
        }
        patient.updated_at = now.max(patient.updated_at);
    }
}
