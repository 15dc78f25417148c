//! Dashboard widget lists.

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};

use medidash_contracts::{
    calendar::local_date,
    medicine::Medicine,
    patient::{Patient, PatientStatus},
};

/// How many patients the "recent patients" card shows by default.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// How far ahead the "expiring soon" card looks by default, in days.
pub const DEFAULT_EXPIRY_WINDOW_DAYS: u64 = 30;

/// Newest registrations first, at most `limit`. Equal timestamps keep store
/// order.
pub fn recent_patients(patients: &[Patient], limit: usize) -> Vec<&Patient> {
    let mut view: Vec<&Patient> = patients.iter().collect();
    view.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    view.truncate(limit);
    view
}

/// Patients whose appointment falls on local calendar day `day`.
///
/// Uses the same `local_date` rule as the dashboard's "patients today".
pub fn patients_for_day(patients: &[Patient], day: NaiveDate) -> Vec<&Patient> {
    patients
        .iter()
        .filter(|p| local_date(p.appointment_date) == day)
        .collect()
}

/// Patients whose status (not priority) is `critical`.
pub fn critical_patients(patients: &[Patient]) -> Vec<&Patient> {
    patients
        .iter()
        .filter(|p| p.status == PatientStatus::Critical)
        .collect()
}

/// Medicines at or below their reorder threshold, including out of stock.
pub fn low_stock_medicines(medicines: &[Medicine]) -> Vec<&Medicine> {
    medicines.iter().filter(|m| m.is_low_stock()).collect()
}

/// Medicines expiring on or before `today + window_days`.
///
/// Already-expired medicines are included.
pub fn expiring_soon(medicines: &[Medicine], today: NaiveDate, window_days: u64) -> Vec<&Medicine> {
    let horizon = today
        .checked_add_days(Days::new(window_days))
        .unwrap_or(NaiveDate::MAX);
    medicines.iter().filter(|m| m.expiry_date <= horizon).collect()
}

/// Total shelf value: price times units in stock, summed.
pub fn inventory_value(medicines: &[Medicine]) -> f64 {
    medicines.iter().map(|m| m.price * f64::from(m.stock)).sum()
}

/// Distinct categories, sorted.
pub fn categories(medicines: &[Medicine]) -> Vec<String> {
    medicines
        .iter()
        .map(|m| m.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};

    use medidash_contracts::{
        ids::{MedicineId, PatientId},
        medicine::NewMedicine,
        patient::{Gender, NewPatient, Priority},
    };

    use super::*;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
    }

    fn patient(id: &str, created: DateTime<Utc>, status: PatientStatus) -> Patient {
        NewPatient {
            name: format!("Patient {id}"),
            email: format!("{id}@email.com"),
            phone: String::new(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 5).unwrap(),
            gender: Gender::Male,
            address: String::new(),
            emergency_contact: String::new(),
            blood_type: "B+".to_string(),
            allergies: vec![],
            status,
            priority: Priority::Low,
            appointment_date: created,
            symptoms: String::new(),
            assigned_doctor: None,
        }
        .into_patient(PatientId::from(id), created)
    }

    fn medicine(name: &str, category: &str, stock: u32, min_stock: u32, expiry: NaiveDate) -> Medicine {
        NewMedicine {
            name: name.to_string(),
            category: category.to_string(),
            manufacturer: String::new(),
            dosage: String::new(),
            unit: String::new(),
            price: 1.0,
            stock,
            min_stock,
            expiry_date: expiry,
            batch_number: String::new(),
            description: String::new(),
            side_effects: vec![],
            contraindications: vec![],
            is_active: true,
        }
        .into_medicine(MedicineId::from(name), noon())
    }

    #[test]
    fn recent_patients_newest_first_and_capped() {
        let patients: Vec<Patient> = (0..7)
            .map(|i| patient(&i.to_string(), noon() + Duration::minutes(i), PatientStatus::Waiting))
            .collect();
        let recent = recent_patients(&patients, DEFAULT_RECENT_LIMIT);
        let ids: Vec<&str> = recent.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["6", "5", "4", "3", "2"]);
    }

    #[test]
    fn recent_patients_ties_keep_store_order() {
        let patients = vec![
            patient("a", noon(), PatientStatus::Waiting),
            patient("b", noon(), PatientStatus::Waiting),
        ];
        let ids: Vec<&str> = recent_patients(&patients, 5).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn day_and_status_widgets() {
        let today = local_date(noon());
        let patients = vec![
            patient("1", noon(), PatientStatus::Critical),
            patient("2", noon() - Duration::days(1), PatientStatus::Completed),
        ];
        assert_eq!(patients_for_day(&patients, today).len(), 1);
        assert_eq!(critical_patients(&patients)[0].id.as_str(), "1");
    }

    #[test]
    fn expiring_soon_includes_expired_and_window_edge() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let shelf = vec![
            medicine("Expired", "A", 5, 1, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()),
            medicine("Edge", "A", 5, 1, NaiveDate::from_ymd_opt(2026, 4, 9).unwrap()),
            medicine("Later", "B", 5, 1, NaiveDate::from_ymd_opt(2026, 4, 10).unwrap()),
        ];
        let soon: Vec<&str> = expiring_soon(&shelf, today, DEFAULT_EXPIRY_WINDOW_DAYS)
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(soon, vec!["Expired", "Edge"]);
    }

    #[test]
    fn low_stock_and_categories() {
        let expiry = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();
        let shelf = vec![
            medicine("Out", "Antibiotic", 0, 10, expiry),
            medicine("Low", "Pain Relief", 10, 10, expiry),
            medicine("Fine", "Antibiotic", 11, 10, expiry),
        ];
        assert_eq!(low_stock_medicines(&shelf).len(), 2);
        assert!(low_stock_medicines(&[]).is_empty());
        assert_eq!(categories(&shelf), vec!["Antibiotic", "Pain Relief"]);
    }

    #[test]
    fn inventory_value_weights_price_by_stock() {
        let expiry = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();
        let mut dear = medicine("Dear", "A", 3, 1, expiry);
        dear.price = 12.5;
        let shelf = vec![medicine("Out", "A", 0, 10, expiry), medicine("Cheap", "B", 40, 10, expiry), dear];
        assert_eq!(inventory_value(&shelf), 77.5);
        assert_eq!(inventory_value(&[]), 0.0);
    }
}
