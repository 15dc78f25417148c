//! Medical records and prescription line items.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::{MedicineId, PatientId, RecordId, UserId};
use crate::medicine::Medicine;

/// A single consultation outcome for one patient.
///
/// `patient_id` is a plain foreign key; nothing checks that the patient exists
/// and deleting the patient leaves the record in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    pub id: RecordId,
    pub patient_id: PatientId,
    pub date: NaiveDate,
    pub diagnosis: String,
    pub prescription: Vec<Prescription>,
    pub notes: String,
    pub doctor_id: UserId,
    pub doctor_name: String,
    pub follow_up_date: Option<NaiveDate>,
    pub attachments: Vec<String>,
}

/// One prescribed medicine.
///
/// `medicine_name` is copied when the prescription is written, so renaming
/// the medicine later does not rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    pub medicine_id: MedicineId,
    pub medicine_name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
    pub instructions: String,
    pub quantity: u32,
}

impl Prescription {
    /// Start a line item for `medicine`, copying its id, name and dosage.
    pub fn of(medicine: &Medicine, quantity: u32) -> Self {
        Self {
            medicine_id: medicine.id.clone(),
            medicine_name: medicine.name.clone(),
            dosage: medicine.dosage.clone(),
            frequency: String::new(),
            duration: String::new(),
            instructions: String::new(),
            quantity,
        }
    }
}

/// Everything the caller supplies when filing a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMedicalRecord {
    pub patient_id: PatientId,
    pub date: NaiveDate,
    pub diagnosis: String,
    pub prescription: Vec<Prescription>,
    pub notes: String,
    pub doctor_id: UserId,
    pub doctor_name: String,
    pub follow_up_date: Option<NaiveDate>,
    pub attachments: Vec<String>,
}

impl NewMedicalRecord {
    pub fn into_record(self, id: RecordId) -> MedicalRecord {
        MedicalRecord {
            id,
            patient_id: self.patient_id,
            date: self.date,
            diagnosis: self.diagnosis,
            prescription: self.prescription,
            notes: self.notes,
            doctor_id: self.doctor_id,
            doctor_name: self.doctor_name,
            follow_up_date: self.follow_up_date,
            attachments: self.attachments,
        }
    }
}
