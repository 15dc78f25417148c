//! Change events emitted by the store after each effective mutation.
//!
//! Observers use these to decide what to re-read. A mutation that targets an
//! unknown id changes nothing and emits nothing.

use serde::{Deserialize, Serialize};

use crate::{
    ids::{AppointmentId, MedicineId, NotificationId, PatientId, RecordId},
    user::Theme,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum StoreEvent {
    /// Collections were replaced wholesale from seed data.
    Seeded,
    PatientAdded { id: PatientId },
    PatientUpdated { id: PatientId },
    PatientRemoved { id: PatientId },
    RecordAdded { id: RecordId, patient_id: PatientId },
    MedicineAdded { id: MedicineId },
    MedicineUpdated { id: MedicineId },
    MedicineRemoved { id: MedicineId },
    AppointmentAdded { id: AppointmentId },
    AppointmentUpdated { id: AppointmentId },
    NotificationAdded { id: NotificationId },
    NotificationRead { id: NotificationId },
    NotificationsCleared { removed: usize },
    SearchTermChanged { term: String },
    ThemeChanged { theme: Theme },
}
