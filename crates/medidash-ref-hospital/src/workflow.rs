//! Page-level actions.
//!
//! Each action validates its form first and only calls the store once the
//! form passes. An invalid form comes back as `Outcome::Invalid` with the
//! inline messages and the store is left untouched.
//!
//! The store already announces adds and deletes. Edits are announced here,
//! since the store's update operations are silent. A failure surfaced by the
//! page becomes a single `error` notification through `report_failure`; it
//! is never retried.

use tracing::{info, warn};

use medidash_contracts::{
    error::MedidashResult,
    ids::{MedicineId, NotificationId, PatientId},
    medicine::{MedicinePatch, NewMedicine},
    notification::{NewNotification, NotificationKind},
    patient::{NewPatient, PatientPatch},
    user::Theme,
    validate::ValidationReport,
};
use medidash_core::Store;
use medidash_validate::{MedicineForm, PatientForm};

/// What a page action did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The store accepted the change.
    Saved(T),
    /// The form failed validation; the store was not called.
    Invalid(ValidationReport),
    /// The target id no longer exists; nothing changed.
    NotFound,
}

impl<T> Outcome<T> {
    pub fn is_saved(&self) -> bool {
        matches!(self, Outcome::Saved(_))
    }
}

/// A page action that can fail after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddPatient,
    UpdatePatient,
    AddMedicine,
    UpdateMedicine,
    SaveSettings,
}

impl Action {
    fn failure_message(self) -> &'static str {
        match self {
            Action::AddPatient => "Failed to add patient. Please try again.",
            Action::UpdatePatient => "Failed to update patient. Please try again.",
            Action::AddMedicine => "Failed to add medicine. Please try again.",
            Action::UpdateMedicine => "Failed to update medicine. Please try again.",
            Action::SaveSettings => "Failed to save settings. Please try again.",
        }
    }
}

/// Turn a failed action into a visible `error` notification.
pub fn report_failure(store: &mut Store, action: Action) -> NotificationId {
    warn!(?action, "page action failed");
    store.add_notification(NewNotification::new(
        NotificationKind::Error,
        "Error",
        action.failure_message(),
    ))
}

fn patient_patch(input: NewPatient) -> PatientPatch {
    PatientPatch {
        name: Some(input.name),
        email: Some(input.email),
        phone: Some(input.phone),
        date_of_birth: Some(input.date_of_birth),
        gender: Some(input.gender),
        address: Some(input.address),
        emergency_contact: Some(input.emergency_contact),
        blood_type: Some(input.blood_type),
        allergies: Some(input.allergies),
        medical_history: None,
        status: Some(input.status),
        priority: Some(input.priority),
        appointment_date: Some(input.appointment_date),
        symptoms: Some(input.symptoms),
        assigned_doctor: Some(input.assigned_doctor),
    }
}

fn medicine_patch(input: NewMedicine) -> MedicinePatch {
    MedicinePatch {
        name: Some(input.name),
        category: Some(input.category),
        manufacturer: Some(input.manufacturer),
        dosage: Some(input.dosage),
        unit: Some(input.unit),
        price: Some(input.price),
        stock: Some(input.stock),
        min_stock: Some(input.min_stock),
        expiry_date: Some(input.expiry_date),
        batch_number: Some(input.batch_number),
        description: Some(input.description),
        side_effects: Some(input.side_effects),
        contraindications: Some(input.contraindications),
        is_active: Some(input.is_active),
    }
}

// ── Patients ──────────────────────────────────────────────────────────────────

/// Submit the registration form.
pub fn register_patient(store: &mut Store, form: PatientForm) -> MedidashResult<Outcome<PatientId>> {
    let report = form.validate()?;
    if !report.passed {
        return Ok(Outcome::Invalid(report));
    }
    let id = store.add_patient(form.into_new_patient()?);
    Ok(Outcome::Saved(id))
}

/// Submit the edit form for an existing patient.
pub fn edit_patient(store: &mut Store, id: &PatientId, form: PatientForm) -> MedidashResult<Outcome<()>> {
    let report = form.validate()?;
    if !report.passed {
        return Ok(Outcome::Invalid(report));
    }
    let input = form.into_new_patient()?;
    let name = input.name.clone();
    if store.update_patient(id, patient_patch(input)).is_none() {
        return Ok(Outcome::NotFound);
    }
    info!(patient_id = %id, "patient edited");
    store.add_notification(NewNotification::new(
        NotificationKind::Success,
        "Patient Updated",
        format!("{name}'s information has been updated"),
    ));
    Ok(Outcome::Saved(()))
}

// ── Medicines ─────────────────────────────────────────────────────────────────

/// Submit the add-medicine form.
pub fn add_medicine(store: &mut Store, form: MedicineForm) -> MedidashResult<Outcome<MedicineId>> {
    let today = store.today();
    let report = form.validate(today)?;
    if !report.passed {
        return Ok(Outcome::Invalid(report));
    }
    let id = store.add_medicine(form.into_new_medicine(today)?);
    Ok(Outcome::Saved(id))
}

/// Submit the edit form for an existing medicine.
pub fn edit_medicine(store: &mut Store, id: &MedicineId, form: MedicineForm) -> MedidashResult<Outcome<()>> {
    let today = store.today();
    let report = form.validate(today)?;
    if !report.passed {
        return Ok(Outcome::Invalid(report));
    }
    let input = form.into_new_medicine(today)?;
    let name = input.name.clone();
    if store.update_medicine(id, medicine_patch(input)).is_none() {
        return Ok(Outcome::NotFound);
    }
    info!(medicine_id = %id, "medicine edited");
    store.add_notification(NewNotification::new(
        NotificationKind::Success,
        "Medicine Updated",
        format!("{name} has been updated"),
    ));
    Ok(Outcome::Saved(()))
}

// ── Settings ──────────────────────────────────────────────────────────────────

/// Flip the theme from the settings page.
///
/// A failed preference write leaves the theme as it was and is reported
/// with `Action::SaveSettings`.
pub fn toggle_theme(store: &mut Store) -> Option<Theme> {
    match store.toggle_dark_mode() {
        Ok(theme) => Some(theme),
        Err(e) => {
            warn!(error = %e, "theme not saved");
            report_failure(store, Action::SaveSettings);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};

    use medidash_contracts::error::MedidashError;
    use medidash_core::{traits::PreferenceStore, ManualClock, MemoryPreferences};

    use super::*;
    use crate::mock_data::seeded_store;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 11, 0, 0).unwrap()
    }

    fn store() -> Store {
        seeded_store(ManualClock::new(now()), Box::new(MemoryPreferences::default())).unwrap()
    }

    /// Loads nothing and refuses every write.
    struct FailingPreferences;

    impl PreferenceStore for FailingPreferences {
        fn load_theme(&self) -> MedidashResult<Option<Theme>> {
            Ok(None)
        }

        fn save_theme(&self, _theme: Theme) -> MedidashResult<()> {
            Err(MedidashError::PreferenceError {
                reason: "disk full".to_string(),
            })
        }
    }

    fn intake_form() -> PatientForm {
        PatientForm {
            name: "Kavya Nair".to_string(),
            email: "kavya.nair@email.com".to_string(),
            phone: "+91-90000-11111".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2001, 9, 9),
            address: "14, Marine Lines, Kochi - 682031".to_string(),
            emergency_contact: "+91-90000-11112".to_string(),
            blood_type: "O-".to_string(),
            symptoms: "Sprained ankle".to_string(),
            ..PatientForm::starting_at(now())
        }
    }

    // ── Patients ──────────────────────────────────────────────────────────────

    #[test]
    fn invalid_registration_never_reaches_the_store() {
        let mut store = store();
        let before = store.notifications().len();

        let outcome = register_patient(&mut store, PatientForm::default()).unwrap();
        let Outcome::Invalid(report) = outcome else {
            panic!("blank form must be rejected");
        };
        assert_eq!(report.error_for("name"), Some("Name is required"));
        assert_eq!(store.patients().len(), 4);
        assert_eq!(store.notifications().len(), before);
    }

    #[test]
    fn valid_registration_is_announced_once() {
        let mut store = store();
        let outcome = register_patient(&mut store, intake_form()).unwrap();
        assert!(outcome.is_saved());
        assert_eq!(store.patients().len(), 5);
        assert_eq!(store.notifications().len(), 4);
        assert_eq!(store.notifications()[0].title, "Patient Added");
        assert_eq!(store.notifications()[1].title, "Low Stock Alert");
    }

    #[test]
    fn edit_patient_announces_update() {
        let mut store = store();
        let id = PatientId::from("4");
        let mut form = PatientForm::from_patient(store.get_patient(&id).unwrap());
        form.symptoms = "Follow-up, glucose stable".to_string();

        assert!(edit_patient(&mut store, &id, form.clone()).unwrap().is_saved());
        assert_eq!(store.get_patient(&id).unwrap().symptoms, "Follow-up, glucose stable");
        assert_eq!(
            store.notifications()[0].message,
            "Anita Devi Gupta's information has been updated"
        );

        let missing = edit_patient(&mut store, &PatientId::from("99"), form).unwrap();
        assert_eq!(missing, Outcome::NotFound);
    }

    // ── Medicines ─────────────────────────────────────────────────────────────

    #[test]
    fn edit_medicine_restocks_and_announces() {
        let mut store = store();
        let id = MedicineId::from("5");
        let mut form = MedicineForm::from_medicine(store.get_medicine(&id).unwrap());
        form.stock = 200;
        // The sample expiry predates the test clock.
        form.expiry_date = NaiveDate::from_ymd_opt(2027, 8, 10);

        assert!(edit_medicine(&mut store, &id, form).unwrap().is_saved());
        assert_eq!(store.get_medicine(&id).unwrap().stock, 200);
        assert_eq!(store.notifications()[0].title, "Medicine Updated");
        assert_eq!(store.dashboard_stats().low_stock_medicines, 1);
    }

    #[test]
    fn oversized_stock_is_an_inline_error() {
        let mut store = store();
        let mut form = MedicineForm::from_medicine(store.get_medicine(&MedicineId::from("2")).unwrap());
        form.name = "Ibuprofen".to_string();
        form.expiry_date = NaiveDate::from_ymd_opt(2027, 8, 10);
        form.stock = 5_000_000_000;
        let before = store.notifications().len();

        let outcome = add_medicine(&mut store, form).unwrap();
        let Outcome::Invalid(report) = outcome else {
            panic!("stock beyond the counter range must be rejected inline");
        };
        assert_eq!(report.error_for("stock"), Some("Stock is too large"));
        assert_eq!(store.medicines().len(), 5);
        assert_eq!(store.notifications().len(), before);
    }

    #[test]
    fn stale_expiry_blocks_medicine_edit() {
        let mut store = store();
        let id = MedicineId::from("1");
        let form = MedicineForm::from_medicine(store.get_medicine(&id).unwrap());

        let outcome = edit_medicine(&mut store, &id, form).unwrap();
        assert!(matches!(outcome, Outcome::Invalid(ref r) if r.error_for("expiryDate").is_some()));
    }

    // ── Failures ──────────────────────────────────────────────────────────────

    #[test]
    fn failure_becomes_one_error_notification() {
        let mut store = store();
        let id = report_failure(&mut store, Action::AddPatient);
        let top = &store.notifications()[0];
        assert_eq!(top.id, id);
        assert_eq!(top.kind, NotificationKind::Error);
        assert_eq!(top.title, "Error");
        assert_eq!(top.message, "Failed to add patient. Please try again.");
        assert_eq!(store.notifications().len(), 4);
    }

    #[test]
    fn each_action_has_its_own_message() {
        let mut store = store();
        let actions = [
            (Action::AddPatient, "Failed to add patient. Please try again."),
            (Action::UpdatePatient, "Failed to update patient. Please try again."),
            (Action::AddMedicine, "Failed to add medicine. Please try again."),
            (Action::UpdateMedicine, "Failed to update medicine. Please try again."),
            (Action::SaveSettings, "Failed to save settings. Please try again."),
        ];
        for (action, message) in actions {
            report_failure(&mut store, action);
            assert_eq!(store.notifications()[0].message, message);
        }
        assert_eq!(store.unread_notification_count(), 8);
    }

    // ── Settings ──────────────────────────────────────────────────────────────

    #[test]
    fn toggle_theme_saves_and_flips() {
        let mut store = store();
        assert_eq!(toggle_theme(&mut store), Some(Theme::Dark));
        assert!(store.is_dark_mode());
        assert_eq!(store.notifications().len(), 3);
    }

    #[test]
    fn unsaved_theme_is_reported_as_a_settings_failure() {
        let mut store =
            seeded_store(ManualClock::new(now()), Box::new(FailingPreferences)).unwrap();
        assert_eq!(toggle_theme(&mut store), None);
        assert_eq!(store.theme(), Theme::Light);

        let top = &store.notifications()[0];
        assert_eq!(top.kind, NotificationKind::Error);
        assert_eq!(top.message, "Failed to save settings. Please try again.");
    }
}
