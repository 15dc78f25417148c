//! Scenario 2: Patient intake.
//!
//! Walks the three-step registration form: a half-filled step 1 is held
//! back with inline errors, the completed form registers the patient, and
//! the store's "Patient Added" notification lands on top of the feed. The
//! patient list is then searched, filtered and sorted the way the patients
//! page does it, and finally the patient is discharged and removed.

use chrono::{DateTime, NaiveDate, Utc};

use medidash_contracts::{
    error::MedidashResult,
    patient::{Gender, PatientStatus, Priority},
};
use medidash_query::{PatientQuery, PatientSortKey, SortDirection};
use medidash_validate::{patient_form::STEPS, PatientForm};

use super::demo_store;
use crate::workflow::{edit_patient, register_patient, report_failure, Action, Outcome};

/// A walk-in patient, fully filled in.
pub fn walk_in_form(now: DateTime<Utc>) -> PatientForm {
    let mut form = PatientForm {
        name: "Deepak Verma".to_string(),
        email: "deepak.verma@email.com".to_string(),
        phone: "+91-99887-76655".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1968, 1, 30),
        gender: Gender::Male,
        address: "52, Civil Lines, Jaipur, Rajasthan - 302006".to_string(),
        emergency_contact: "+91-99887-76656".to_string(),
        blood_type: "B-".to_string(),
        symptoms: "Dizziness, blurred vision".to_string(),
        priority: Priority::High,
        assigned_doctor: "Dr. Amit Singh".to_string(),
        ..PatientForm::starting_at(now)
    };
    form.add_allergy("Aspirin");
    form
}

/// The first step that does not pass, with its messages, or `None` once
/// every step is clean.
pub fn first_blocking_step(form: &PatientForm) -> MedidashResult<Option<(u8, Vec<String>)>> {
    for step in 1..=STEPS {
        let report = form.validate_step(step)?;
        if !report.passed {
            let messages = report.failures.into_iter().map(|f| f.message).collect();
            return Ok(Some((step, messages)));
        }
    }
    Ok(None)
}

pub fn run_scenario() -> MedidashResult<()> {
    println!("=== Scenario 2: Patient Intake ===");
    println!();

    let mut store = demo_store()?;
    let complete = walk_in_form(store.now());

    // ── Half-filled form ──────────────────────────────────────────────────────

    let partial = PatientForm {
        email: "deepak.verma".to_string(),
        phone: String::new(),
        ..complete.clone()
    };
    println!("  Step 1 submitted with a malformed email and no phone");
    if let Some((step, messages)) = first_blocking_step(&partial)? {
        println!("  Blocked at step {step}:");
        for message in messages {
            println!("    - {message}");
        }
    }
    match register_patient(&mut store, partial)? {
        Outcome::Invalid(report) => {
            println!("  Submit rejected: {} field error(s), store untouched", report.failures.len())
        }
        other => println!("  UNEXPECTED: {:?}", other),
    }
    println!();

    // ── Completed form ────────────────────────────────────────────────────────

    let Outcome::Saved(id) = register_patient(&mut store, complete.clone())? else {
        println!("  UNEXPECTED: complete form was not saved");
        return Ok(());
    };
    println!("  Registered {} as {id}", complete.name);
    if let Some(top) = store.notifications().first() {
        println!("  Newest notification:     [{}] {}: {}", top.kind, top.title, top.message);
    }
    println!("  Patients on file:        {}", store.patients().len());
    println!();

    // ── Patients page ─────────────────────────────────────────────────────────

    let high = PatientQuery::new().priority(Priority::High);
    println!("  Priority = high:");
    for p in high.run(store.patients()) {
        println!("    - {} ({})", p.name, p.status);
    }

    let by_priority = PatientQuery::new().sort(PatientSortKey::Priority, SortDirection::Desc);
    println!("  Sorted by priority, most urgent first:");
    for p in by_priority.run(store.patients()) {
        println!("    - {:<22} {}", p.name, p.priority);
    }

    store.set_search_term("verma");
    let hits = PatientQuery::new().search(store.search_term()).run(store.patients()).len();
    println!("  Header search \"verma\":   {hits} match(es)");
    println!();

    // ── Discharge ─────────────────────────────────────────────────────────────

    let mut discharge = complete;
    discharge.status = PatientStatus::Completed;
    if edit_patient(&mut store, &id, discharge)?.is_saved() {
        println!(
            "  Marked completed; dashboard shows {} completed consultation(s)",
            store.dashboard_stats().completed_consultations
        );
    }
    if let Some(removed) = store.delete_patient(&id) {
        println!("  Removed {}; {} patient(s) remain", removed.name, store.patients().len());
    }

    let failure = report_failure(&mut store, Action::UpdatePatient);
    if let Some(n) = store.notifications().iter().find(|n| n.id == failure) {
        println!("  Simulated save failure:  [{}] {}", n.kind, n.message);
    }
    println!();
    println!("Scenario 2 complete.");
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use medidash_contracts::notification::NotificationKind;
    use medidash_core::{ManualClock, MemoryPreferences, Store};

    use super::*;
    use crate::mock_data::seeded_store;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 11, 0, 0).unwrap()
    }

    fn store() -> Store {
        seeded_store(ManualClock::new(now()), Box::new(MemoryPreferences::default())).unwrap()
    }

    #[test]
    fn walk_in_form_clears_every_step() {
        assert_eq!(first_blocking_step(&walk_in_form(now())).unwrap(), None);
    }

    #[test]
    fn blocking_step_lists_its_messages_in_field_order() {
        let form = PatientForm {
            email: "deepak.verma".to_string(),
            phone: String::new(),
            blood_type: String::new(),
            ..walk_in_form(now())
        };
        let (step, messages) = first_blocking_step(&form).unwrap().unwrap();
        assert_eq!(step, 1);
        assert_eq!(messages, vec!["Email is invalid", "Phone is required"]);
    }

    #[test]
    fn later_step_blocks_once_earlier_ones_pass() {
        let form = PatientForm {
            symptoms: "  ".to_string(),
            ..walk_in_form(now())
        };
        let (step, messages) = first_blocking_step(&form).unwrap().unwrap();
        assert_eq!(step, 3);
        assert_eq!(messages, vec!["Symptoms are required"]);
    }

    #[test]
    fn registered_walk_in_is_found_by_search_and_priority() {
        let mut store = store();
        let Outcome::Saved(id) = register_patient(&mut store, walk_in_form(now())).unwrap() else {
            panic!("walk-in form must register");
        };

        let top = &store.notifications()[0];
        assert_eq!(top.kind, NotificationKind::Success);
        assert_eq!(top.message, "Deepak Verma has been successfully registered");

        let hits = PatientQuery::new().search("VERMA").run(store.patients());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, id);
        assert_eq!(hits[0].allergies, vec!["Aspirin"]);

        let high: Vec<&str> = PatientQuery::new()
            .priority(Priority::High)
            .sort(PatientSortKey::Name, SortDirection::Asc)
            .run(store.patients())
            .into_iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(high, vec!["Deepak Verma", "Priya Agarwal"]);
    }

    #[test]
    fn discharge_then_delete() {
        let mut store = store();
        let Outcome::Saved(id) = register_patient(&mut store, walk_in_form(now())).unwrap() else {
            panic!("walk-in form must register");
        };
        let mut form = walk_in_form(now());
        form.status = PatientStatus::Completed;

        assert!(edit_patient(&mut store, &id, form).unwrap().is_saved());
        assert_eq!(store.dashboard_stats().completed_consultations, 2);

        store.delete_patient(&id).unwrap();
        assert_eq!(store.patients().len(), 4);
        assert_eq!(store.notifications()[0].title, "Patient Removed");
    }

    #[test]
    fn scenario_runs() {
        run_scenario().unwrap();
    }
}
