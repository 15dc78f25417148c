//! Scenario 1: Dashboard overview.
//!
//! Books a follow-up for the critical patient, files the consultation
//! record, and prints the dashboard cards. "Patients today" counts the
//! patients' own appointment dates while "appointments today" counts the
//! appointments collection, so booking moves only the second number.

use chrono::{Days, NaiveTime};

use medidash_config::DashboardConfig;
use medidash_contracts::{
    appointment::{AppointmentKind, AppointmentStatus, NewAppointment},
    error::MedidashResult,
    ids::{AppointmentId, PatientId, RecordId, UserId},
    medicine::Medicine,
    patient::Patient,
    record::{NewMedicalRecord, Prescription},
    stats::DashboardStats,
};
use medidash_core::{ChangeRecorder, Store};
use medidash_query::dashboard;

use super::demo_store;

/// Everything the dashboard page renders, read in one pass.
#[derive(Debug)]
pub struct Overview<'a> {
    pub stats: DashboardStats,
    pub recent: Vec<&'a Patient>,
    pub critical: Vec<&'a Patient>,
    pub low_stock: Vec<&'a Medicine>,
    pub expiring: Vec<&'a Medicine>,
    pub unread: usize,
}

impl<'a> Overview<'a> {
    pub fn build(store: &'a Store, config: &DashboardConfig) -> Self {
        Self {
            stats: store.dashboard_stats(),
            recent: dashboard::recent_patients(store.patients(), config.recent_limit),
            critical: dashboard::critical_patients(store.patients()),
            low_stock: dashboard::low_stock_medicines(store.medicines()),
            expiring: dashboard::expiring_soon(
                store.medicines(),
                store.today(),
                config.expiry_window_days,
            ),
            unread: store.unread_notification_count(),
        }
    }
}

/// Book a follow-up for `patient_id` later today with their assigned doctor.
///
/// Returns `None` if the patient is unknown.
pub fn book_follow_up(store: &mut Store, patient_id: &PatientId) -> Option<AppointmentId> {
    let patient = store.get_patient(patient_id)?;
    let input = NewAppointment {
        patient_id: patient.id.clone(),
        patient_name: patient.name.clone(),
        doctor_id: UserId::from("1"),
        doctor_name: patient.assigned_doctor.clone().unwrap_or_default(),
        date: store.today(),
        time: NaiveTime::from_hms_opt(16, 30, 0).unwrap_or_default(),
        duration_minutes: 30,
        status: AppointmentStatus::Scheduled,
        kind: AppointmentKind::FollowUp,
        notes: Some("Review after admission".to_string()),
    };
    Some(store.add_appointment(input))
}

/// File today's consultation for `patient_id`, prescribing the first
/// medicine in stock.
pub fn file_consultation(
    store: &mut Store,
    patient_id: &PatientId,
    diagnosis: &str,
) -> Option<RecordId> {
    let medicine = store.medicines().iter().find(|m| !m.is_out_of_stock())?;
    let mut line = Prescription::of(medicine, 10);
    line.frequency = "Twice daily".to_string();
    line.duration = "5 days".to_string();
    line.instructions = "After meals".to_string();

    let today = store.today();
    let input = NewMedicalRecord {
        patient_id: patient_id.clone(),
        date: today,
        diagnosis: diagnosis.to_string(),
        prescription: vec![line],
        notes: "Admitted for observation".to_string(),
        doctor_id: UserId::from("1"),
        doctor_name: "Dr. Priya Mehta".to_string(),
        follow_up_date: today.checked_add_days(Days::new(7)),
        attachments: Vec::new(),
    };
    Some(store.add_medical_record(input))
}

fn print_overview(overview: &Overview<'_>) {
    let stats = &overview.stats;
    println!("  Total patients:          {}", stats.total_patients);
    println!("  Patients today:          {}", stats.patients_today);
    println!("  Critical patients:       {}", stats.critical_patients);
    println!("  Low-stock medicines:     {}", stats.low_stock_medicines);
    println!("  Appointments today:      {}", stats.appointments_today);
    println!("  Completed consultations: {}", stats.completed_consultations);
    println!("  Unread notifications:    {}", overview.unread);

    println!("  Recent patients:");
    for p in &overview.recent {
        println!("    - {:<22} {:<16} {}", p.name, p.status, p.priority);
    }
    println!("  Critical:");
    for p in &overview.critical {
        println!("    - {} ({})", p.name, p.symptoms);
    }
    println!("  Low stock:");
    for m in &overview.low_stock {
        println!("    - {:<14} {}/{} {}", m.name, m.stock, m.min_stock, m.unit);
    }
    println!("  Expiring soon:");
    for m in &overview.expiring {
        println!("    - {:<14} {}", m.name, m.expiry_date);
    }
}

pub fn run_scenario() -> MedidashResult<()> {
    println!("=== Scenario 1: Dashboard Overview ===");
    println!();

    let mut store = demo_store()?;
    let recorder = ChangeRecorder::new();
    store.subscribe(Box::new(recorder.clone()));
    let config = DashboardConfig::default();

    println!("  Sample ward loaded (today is {})", store.today());
    print_overview(&Overview::build(&store, &config));
    println!();

    let critical = PatientId::from("3");
    println!("  Booking a follow-up and filing a record for patient {critical}");
    book_follow_up(&mut store, &critical);
    file_consultation(&mut store, &critical, "Acute appendicitis, suspected");

    let overview = Overview::build(&store, &config);
    println!(
        "  Patients today: {}  Appointments today: {}",
        overview.stats.patients_today, overview.stats.appointments_today
    );
    println!(
        "  Records on file for {critical}: {}",
        store.patient_records(&critical).len()
    );
    println!("  Store events observed:   {}", recorder.len());
    println!();

    let first_unread = store.notifications().iter().find(|n| !n.read).map(|n| n.id.clone());
    if let Some(id) = first_unread {
        store.mark_notification_read(&id);
    }
    println!("  Unread after opening one: {}", store.unread_notification_count());
    let cleared = store.clear_all_notifications();
    println!("  Cleared {cleared} notification(s); unread now {}", store.unread_notification_count());

    let theme = store.toggle_dark_mode()?;
    println!("  Theme toggled to:        {theme}");
    println!();
    println!("Scenario 1 complete.");
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};

    use medidash_contracts::event::StoreEvent;
    use medidash_core::{ManualClock, MemoryPreferences};

    use super::*;
    use crate::mock_data::seeded_store;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 11, 0, 0).unwrap()
    }

    fn store() -> Store {
        seeded_store(ManualClock::new(now()), Box::new(MemoryPreferences::default())).unwrap()
    }

    #[test]
    fn overview_of_the_sample_ward() {
        let store = store();
        let overview = Overview::build(&store, &DashboardConfig::default());

        assert_eq!(overview.recent.len(), 4);
        assert_eq!(overview.critical.len(), 1);
        assert_eq!(overview.critical[0].name, "Mohammed Arif Khan");
        let low: Vec<&str> = overview.low_stock.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(low, vec!["Amoxicillin", "Azithromycin"]);
        // Every sample expiry is in 2025, already past.
        assert_eq!(overview.expiring.len(), 5);
        assert_eq!(overview.unread, 3);
    }

    #[test]
    fn day_filter_agrees_with_the_patients_today_card() {
        let clock = ManualClock::new(now());
        let store =
            seeded_store(clock.clone(), Box::new(MemoryPreferences::default())).unwrap();
        for _ in 0..4 {
            let listed = dashboard::patients_for_day(store.patients(), store.today()).len();
            assert_eq!(listed, store.dashboard_stats().patients_today);
            clock.advance(Duration::hours(7));
        }
    }

    #[test]
    fn recent_card_honours_the_configured_limit() {
        let store = store();
        let config = DashboardConfig {
            recent_limit: 2,
            ..DashboardConfig::default()
        };
        assert_eq!(Overview::build(&store, &config).recent.len(), 2);
    }

    #[test]
    fn booking_moves_only_the_appointment_count() {
        let mut store = store();
        let before = store.dashboard_stats();

        let id = book_follow_up(&mut store, &PatientId::from("3")).unwrap();
        let after = store.dashboard_stats();

        assert_eq!(after.appointments_today, before.appointments_today + 1);
        assert_eq!(after.patients_today, before.patients_today);
        assert_eq!(store.today_appointments()[0].id, id);
        assert_eq!(store.today_appointments()[0].doctor_name, "Dr. Sunita Reddy");
    }

    #[test]
    fn unknown_patient_books_nothing() {
        let mut store = store();
        assert!(book_follow_up(&mut store, &PatientId::from("99")).is_none());
        assert!(store.appointments().is_empty());
    }

    #[test]
    fn consultation_record_copies_the_medicine_name() {
        let mut store = store();
        let recorder = ChangeRecorder::new();
        store.subscribe(Box::new(recorder.clone()));

        let patient = PatientId::from("3");
        let id = file_consultation(&mut store, &patient, "Gastritis").unwrap();
        let records = store.patient_records(&patient);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, id);
        assert_eq!(records[0].prescription[0].medicine_name, "Paracetamol");
        assert_eq!(
            records[0].follow_up_date,
            store.today().checked_add_days(Days::new(7))
        );
        assert_eq!(
            recorder.events()[0].event,
            StoreEvent::RecordAdded { id, patient_id: patient }
        );
    }
}
