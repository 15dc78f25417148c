//! Dashboard statistics.
//!
//! A pure function of the collections and the current local date. The store
//! calls it on every request; nothing is cached.

use chrono::NaiveDate;

use medidash_contracts::{
    appointment::Appointment,
    medicine::Medicine,
    patient::{Patient, PatientStatus},
    stats::DashboardStats,
};

use crate::traits::local_date;

/// Appointments whose calendar date is `day`, in collection order.
pub fn appointments_on(appointments: &[Appointment], day: NaiveDate) -> Vec<&Appointment> {
    appointments.iter().filter(|a| a.date == day).collect()
}

/// Compute the headline counts.
///
/// `patients_today` reads each patient's own `appointment_date`;
/// `appointments_today` reads the appointments collection. They are
/// deliberately separate sources.
pub fn dashboard_stats(
    patients: &[Patient],
    medicines: &[Medicine],
    appointments: &[Appointment],
    today: NaiveDate,
) -> DashboardStats {
    DashboardStats {
        total_patients: patients.len(),
        patients_today: patients
            .iter()
            .filter(|p| local_date(p.appointment_date) == today)
            .count(),
        critical_patients: patients
            .iter()
            .filter(|p| p.status == PatientStatus::Critical)
            .count(),
        low_stock_medicines: medicines.iter().filter(|m| m.is_low_stock()).count(),
        appointments_today: appointments_on(appointments, today).len(),
        completed_consultations: patients
            .iter()
            .filter(|p| p.status == PatientStatus::Completed)
            .count(),
    }
}
