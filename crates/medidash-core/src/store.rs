//! The Medidash domain store.
//!
//! `Store` is the single authoritative owner of every collection: patients,
//! medical records, medicines, appointments, and notifications, plus the
//! theme flag and the shared search term.
//!
//! Contract highlights:
//!
//!   - Lookups by id return `Option`; a miss is `None`, never an error.
//!   - Mutators are "look up, then merge". When the lookup misses, nothing
//!     changes, no notification is added, and no observer hears anything.
//!   - `add_notification` prepends. Index 0 is always the newest entry.
//!   - Deleting a patient leaves its medical records untouched.
//!   - No field uniqueness is enforced (duplicate emails are fine) and no
//!     input validation happens here. Forms validate before calling in.
//!
//! Construct one store at startup and pass it by reference to whatever needs
//! it. There is no global instance.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info, warn};

use medidash_contracts::{
    appointment::{Appointment, AppointmentPatch, NewAppointment},
    error::MedidashResult,
    event::StoreEvent,
    ids::{AppointmentId, MedicineId, NotificationId, PatientId, RecordId},
    medicine::{Medicine, MedicinePatch, NewMedicine},
    notification::{NewNotification, Notification, NotificationKind},
    patient::{NewPatient, Patient, PatientPatch},
    record::{MedicalRecord, NewMedicalRecord},
    stats::DashboardStats,
    user::Theme,
};

use crate::{
    preferences::MemoryPreferences,
    stats::{appointments_on, dashboard_stats},
    traits::{Clock, PreferenceStore, StoreObserver},
};

/// Collections to load wholesale at startup.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub patients: Vec<Patient>,
    pub medical_records: Vec<MedicalRecord>,
    pub medicines: Vec<Medicine>,
    pub appointments: Vec<Appointment>,
    /// Already in most-recent-first order.
    pub notifications: Vec<Notification>,
}

/// The in-memory domain store.
pub struct Store {
    clock: Box<dyn Clock>,
    preferences: Box<dyn PreferenceStore>,
    observers: Vec<Box<dyn StoreObserver>>,

    patients: Vec<Patient>,
    medical_records: Vec<MedicalRecord>,
    medicines: Vec<Medicine>,
    appointments: Vec<Appointment>,
    notifications: Vec<Notification>,

    theme: Theme,
    search_term: String,
}

impl Store {
    /// Create an empty store and re-apply the saved theme, if any.
    ///
    /// Fails only if the preference store cannot be read.
    pub fn new(clock: Box<dyn Clock>, preferences: Box<dyn PreferenceStore>) -> MedidashResult<Self> {
        let theme = preferences.load_theme()?.unwrap_or_default();
        info!(theme = %theme, "store initialized");
        Ok(Self::with_theme(clock, preferences, theme))
    }

    /// Create an empty store whose theme preference lives only in memory.
    pub fn in_memory(clock: Box<dyn Clock>) -> Self {
        Self::with_theme(clock, Box::new(MemoryPreferences::default()), Theme::default())
    }

    fn with_theme(clock: Box<dyn Clock>, preferences: Box<dyn PreferenceStore>, theme: Theme) -> Self {
        Self {
            clock,
            preferences,
            observers: Vec::new(),
            patients: Vec::new(),
            medical_records: Vec::new(),
            medicines: Vec::new(),
            appointments: Vec::new(),
            notifications: Vec::new(),
            theme,
            search_term: String::new(),
        }
    }

    /// Replace every collection with `data`.
    ///
    /// Seeding is loading, not adding: no notifications are generated.
    pub fn seed(&mut self, data: SeedData) {
        self.patients = data.patients;
        self.medical_records = data.medical_records;
        self.medicines = data.medicines;
        self.appointments = data.appointments;
        self.notifications = data.notifications;
        info!(
            patients = self.patients.len(),
            medicines = self.medicines.len(),
            notifications = self.notifications.len(),
            "store seeded"
        );
        self.emit(StoreEvent::Seeded);
    }

    /// Register an observer for all subsequent changes.
    pub fn subscribe(&mut self, observer: Box<dyn StoreObserver>) {
        self.observers.push(observer);
    }

    fn emit(&self, event: StoreEvent) {
        for observer in &self.observers {
            observer.on_event(&event);
        }
    }

    // ── Clock ─────────────────────────────────────────────────────────────────

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Today's local calendar date, as the store sees it.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    // ── Theme and search ──────────────────────────────────────────────────────

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark_mode(&self) -> bool {
        self.theme.is_dark()
    }

    /// Flip between light and dark and persist the new value.
    ///
    /// The preference is written first. If the write fails the in-memory
    /// theme is left as it was and the error is returned.
    pub fn toggle_dark_mode(&mut self) -> MedidashResult<Theme> {
        let next = self.theme.toggled();
        if let Err(e) = self.preferences.save_theme(next) {
            warn!(theme = %next, error = %e, "failed to persist theme preference");
            return Err(e);
        }
        self.theme = next;
        info!(theme = %next, "theme changed");
        self.emit(StoreEvent::ThemeChanged { theme: next });
        Ok(next)
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term == self.search_term {
            return;
        }
        self.search_term = term.clone();
        self.emit(StoreEvent::SearchTermChanged { term });
    }

    // ── Patients ──────────────────────────────────────────────────────────────

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    fn patient_index(&self, id: &PatientId) -> Option<usize> {
        self.patients.iter().position(|p| &p.id == id)
    }

    /// Register a patient and announce it with a `success` notification.
    pub fn add_patient(&mut self, data: NewPatient) -> PatientId {
        let id = PatientId::generate();
        let patient = data.into_patient(id.clone(), self.clock.now());
        let message = format!("{} has been successfully registered", patient.name);
        self.patients.push(patient);

        info!(patient_id = %id, "patient added");
        self.emit(StoreEvent::PatientAdded { id: id.clone() });
        self.add_notification(NewNotification::new(
            NotificationKind::Success,
            "Patient Added",
            message,
        ));
        id
    }

    /// Merge `patch` into the patient and refresh `updated_at`.
    ///
    /// Returns the updated patient, or `None` (and changes nothing) if the id
    /// is unknown.
    pub fn update_patient(&mut self, id: &PatientId, patch: PatientPatch) -> Option<&Patient> {
        let Some(index) = self.patient_index(id) else {
            warn!(patient_id = %id, "patient update skipped: not found");
            return None;
        };
        let now = self.clock.now();
        patch.apply(&mut self.patients[index], now);

        debug!(patient_id = %id, "patient updated");
        self.emit(StoreEvent::PatientUpdated { id: id.clone() });
        self.patients.get(index)
    }

    /// Remove the patient and announce it with an `info` notification.
    ///
    /// The patient's medical records stay in place. Returns the removed
    /// patient, or `None` if the id is unknown.
    pub fn delete_patient(&mut self, id: &PatientId) -> Option<Patient> {
        let Some(index) = self.patient_index(id) else {
            warn!(patient_id = %id, "patient delete skipped: not found");
            return None;
        };
        let removed = self.patients.remove(index);

        info!(patient_id = %id, "patient removed");
        self.emit(StoreEvent::PatientRemoved { id: id.clone() });
        self.add_notification(NewNotification::new(
            NotificationKind::Info,
            "Patient Removed",
            format!("{} has been removed from the system", removed.name),
        ));
        Some(removed)
    }

    pub fn get_patient(&self, id: &PatientId) -> Option<&Patient> {
        self.patients.iter().find(|p| &p.id == id)
    }

    // ── Medical records ───────────────────────────────────────────────────────

    pub fn medical_records(&self) -> &[MedicalRecord] {
        &self.medical_records
    }

    /// File a record. `patient_id` is not checked against the patient list.
    pub fn add_medical_record(&mut self, data: NewMedicalRecord) -> RecordId {
        let id = RecordId::generate();
        let record = data.into_record(id.clone());
        let patient_id = record.patient_id.clone();
        self.medical_records.push(record);

        debug!(record_id = %id, patient_id = %patient_id, "medical record added");
        self.emit(StoreEvent::RecordAdded {
            id: id.clone(),
            patient_id,
        });
        id
    }

    /// Every record for `patient_id`, in insertion order.
    pub fn patient_records(&self, patient_id: &PatientId) -> Vec<&MedicalRecord> {
        self.medical_records
            .iter()
            .filter(|r| &r.patient_id == patient_id)
            .collect()
    }

    // ── Medicines ─────────────────────────────────────────────────────────────

    pub fn medicines(&self) -> &[Medicine] {
        &self.medicines
    }

    fn medicine_index(&self, id: &MedicineId) -> Option<usize> {
        self.medicines.iter().position(|m| &m.id == id)
    }

    /// Add a medicine and announce it with a `success` notification.
    pub fn add_medicine(&mut self, data: NewMedicine) -> MedicineId {
        let id = MedicineId::generate();
        let medicine = data.into_medicine(id.clone(), self.clock.now());
        let message = format!("{} has been added to inventory", medicine.name);
        self.medicines.push(medicine);

        info!(medicine_id = %id, "medicine added");
        self.emit(StoreEvent::MedicineAdded { id: id.clone() });
        self.add_notification(NewNotification::new(
            NotificationKind::Success,
            "Medicine Added",
            message,
        ));
        id
    }

    pub fn update_medicine(&mut self, id: &MedicineId, patch: MedicinePatch) -> Option<&Medicine> {
        let Some(index) = self.medicine_index(id) else {
            warn!(medicine_id = %id, "medicine update skipped: not found");
            return None;
        };
        let now = self.clock.now();
        patch.apply(&mut self.medicines[index], now);

        debug!(medicine_id = %id, "medicine updated");
        self.emit(StoreEvent::MedicineUpdated { id: id.clone() });
        self.medicines.get(index)
    }

    pub fn delete_medicine(&mut self, id: &MedicineId) -> Option<Medicine> {
        let Some(index) = self.medicine_index(id) else {
            warn!(medicine_id = %id, "medicine delete skipped: not found");
            return None;
        };
        let removed = self.medicines.remove(index);

        info!(medicine_id = %id, "medicine removed");
        self.emit(StoreEvent::MedicineRemoved { id: id.clone() });
        self.add_notification(NewNotification::new(
            NotificationKind::Info,
            "Medicine Removed",
            format!("{} has been removed from inventory", removed.name),
        ));
        Some(removed)
    }

    pub fn get_medicine(&self, id: &MedicineId) -> Option<&Medicine> {
        self.medicines.iter().find(|m| &m.id == id)
    }

    // ── Appointments ──────────────────────────────────────────────────────────

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Schedule an appointment. No notification is generated.
    pub fn add_appointment(&mut self, data: NewAppointment) -> AppointmentId {
        let id = AppointmentId::generate();
        self.appointments.push(data.into_appointment(id.clone()));

        debug!(appointment_id = %id, "appointment added");
        self.emit(StoreEvent::AppointmentAdded { id: id.clone() });
        id
    }

    pub fn update_appointment(
        &mut self,
        id: &AppointmentId,
        patch: AppointmentPatch,
    ) -> Option<&Appointment> {
        let Some(index) = self.appointments.iter().position(|a| &a.id == id) else {
            warn!(appointment_id = %id, "appointment update skipped: not found");
            return None;
        };
        patch.apply(&mut self.appointments[index]);

        self.emit(StoreEvent::AppointmentUpdated { id: id.clone() });
        self.appointments.get(index)
    }

    /// Appointments on today's local calendar date, ignoring time of day.
    pub fn today_appointments(&self) -> Vec<&Appointment> {
        appointments_on(&self.appointments, self.clock.today())
    }

    // ── Notifications ─────────────────────────────────────────────────────────

    /// Most recent first.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_notification_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Stamp and prepend a notification. It becomes `notifications()[0]`.
    pub fn add_notification(&mut self, data: NewNotification) -> NotificationId {
        let id = NotificationId::generate();
        let notification = data.into_notification(id.clone(), self.clock.now());
        debug!(
            notification_id = %id,
            kind = %notification.kind,
            title = %notification.title,
            "notification added"
        );
        self.notifications.insert(0, notification);

        self.emit(StoreEvent::NotificationAdded { id: id.clone() });
        id
    }

    /// Mark one notification read. Returns it, or `None` if the id is unknown.
    pub fn mark_notification_read(&mut self, id: &NotificationId) -> Option<&Notification> {
        let Some(index) = self.notifications.iter().position(|n| &n.id == id) else {
            warn!(notification_id = %id, "mark-read skipped: not found");
            return None;
        };
        if !self.notifications[index].read {
            self.notifications[index].read = true;
            self.emit(StoreEvent::NotificationRead { id: id.clone() });
        }
        self.notifications.get(index)
    }

    /// Drop every notification. Returns how many were removed.
    pub fn clear_all_notifications(&mut self) -> usize {
        let removed = self.notifications.len();
        self.notifications.clear();
        if removed > 0 {
            info!(removed, "notifications cleared");
            self.emit(StoreEvent::NotificationsCleared { removed });
        }
        removed
    }

    // ── Statistics ────────────────────────────────────────────────────────────

    /// Recompute the dashboard counts from the current collections.
    pub fn dashboard_stats(&self) -> DashboardStats {
        dashboard_stats(
            &self.patients,
            &self.medicines,
            &self.appointments,
            self.clock.today(),
        )
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
