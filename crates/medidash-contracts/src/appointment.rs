//! Appointment scheduling types.
//!
//! Appointments are a separate collection from a patient's own
//! `appointment_date` and `status`; the two are never synchronized.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::ids::{AppointmentId, PatientId, UserId};

string_enum! {
    pub enum AppointmentStatus as "appointment status" {
        Scheduled => "scheduled",
        InProgress => "in-progress",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

string_enum! {
    pub enum AppointmentKind as "appointment type" {
        Consultation => "consultation",
        FollowUp => "follow-up",
        Emergency => "emergency",
    }
}

/// A scheduled visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: AppointmentId,
    pub patient_id: PatientId,
    pub patient_name: String,
    pub doctor_id: UserId,
    pub doctor_name: String,
    /// Calendar day of the visit, in local time.
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: u32,
    pub status: AppointmentStatus,
    #[serde(rename = "type")]
    pub kind: AppointmentKind,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub patient_id: PatientId,
    pub patient_name: String,
    pub doctor_id: UserId,
    pub doctor_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: u32,
    pub status: AppointmentStatus,
    #[serde(rename = "type")]
    pub kind: AppointmentKind,
    pub notes: Option<String>,
}

impl NewAppointment {
    pub fn into_appointment(self, id: AppointmentId) -> Appointment {
        Appointment {
            id,
            patient_id: self.patient_id,
            patient_name: self.patient_name,
            doctor_id: self.doctor_id,
            doctor_name: self.doctor_name,
            date: self.date,
            time: self.time,
            duration_minutes: self.duration_minutes,
            status: self.status,
            kind: self.kind,
            notes: self.notes,
        }
    }
}

/// A partial update. Appointments carry no audit timestamps, so nothing is
/// stamped on merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppointmentPatch {
    pub patient_id: Option<PatientId>,
    pub patient_name: Option<String>,
    pub doctor_id: Option<UserId>,
    pub doctor_name: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub duration_minutes: Option<u32>,
    pub status: Option<AppointmentStatus>,
    #[serde(rename = "type")]
    pub kind: Option<AppointmentKind>,
    pub notes: Option<Option<String>>,
}

impl AppointmentPatch {
    pub fn apply(self, appointment: &mut Appointment) {
        if let Some(v) = self.patient_id {
            appointment.patient_id = v;
        }
        if let Some(v) = self.patient_name {
            appointment.patient_name = v;
        }
        if let Some(v) = self.doctor_id {
            appointment.doctor_id = v;
        }
        if let Some(v) = self.doctor_name {
            appointment.doctor_name = v;
        }
        if let Some(v) = self.date {
            appointment.date = v;
        }
        if let Some(v) = self.time {
            appointment.time = v;
        }
        if let Some(v) = self.duration_minutes {
            appointment.duration_minutes = v;
        }
        if let Some(v) = self.status {
            appointment.status = v;
        }
        if let Some(v) = self.kind {
            appointment.kind = v;
        }
        if let Some(v) = self.notes {
            appointment.notes = v;
        }
    }
}
