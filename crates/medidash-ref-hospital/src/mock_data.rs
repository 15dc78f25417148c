//! Sample ward data.
//!
//! Timestamps come from the `now` passed in, so the first three patients are
//! always booked for today and the fourth for yesterday. Medicine expiry
//! dates are fixed calendar dates.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use medidash_contracts::{
    error::MedidashResult,
    ids::{MedicineId, NotificationId, PatientId},
    medicine::Medicine,
    notification::{Notification, NotificationKind},
    patient::{Gender, Patient, PatientStatus, Priority},
};
use medidash_core::{
    traits::{Clock, PreferenceStore},
    SeedData, Store,
};

// ── Patients ──────────────────────────────────────────────────────────────────

struct PatientSeed {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    born: (i32, u32, u32),
    gender: Gender,
    address: &'static str,
    emergency_contact: &'static str,
    blood_type: &'static str,
    allergies: &'static [&'static str],
    status: PatientStatus,
    priority: Priority,
    days_ago: i64,
    symptoms: &'static str,
    doctor: &'static str,
}

const PATIENTS: [PatientSeed; 4] = [
    PatientSeed {
        id: "1",
        name: "Rajesh Kumar Sharma",
        email: "rajesh.sharma@email.com",
        phone: "+91-98765-43210",
        born: (1985, 3, 15),
        gender: Gender::Male,
        address: "123, MG Road, Connaught Place, New Delhi - 110001",
        emergency_contact: "+91-98765-43211",
        blood_type: "O+",
        allergies: &["Penicillin", "Peanuts"],
        status: PatientStatus::Waiting,
        priority: Priority::Medium,
        days_ago: 0,
        symptoms: "Chest pain, shortness of breath",
        doctor: "Dr. Priya Mehta",
    },
    PatientSeed {
        id: "2",
        name: "Priya Agarwal",
        email: "priya.agarwal@email.com",
        phone: "+91-87654-32109",
        born: (1990, 7, 22),
        gender: Gender::Female,
        address: "456, Brigade Road, Bangalore, Karnataka - 560025",
        emergency_contact: "+91-87654-32108",
        blood_type: "A-",
        allergies: &["Latex"],
        status: PatientStatus::InConsultation,
        priority: Priority::High,
        days_ago: 0,
        symptoms: "Severe headache, nausea, fever",
        doctor: "Dr. Amit Singh",
    },
    PatientSeed {
        id: "3",
        name: "Mohammed Arif Khan",
        email: "arif.khan@email.com",
        phone: "+91-76543-21098",
        born: (1978, 11, 8),
        gender: Gender::Male,
        address: "789, Marine Drive, Mumbai, Maharashtra - 400020",
        emergency_contact: "+91-76543-21097",
        blood_type: "B+",
        allergies: &[],
        status: PatientStatus::Critical,
        priority: Priority::Critical,
        days_ago: 0,
        symptoms: "Severe abdominal pain, high fever, vomiting",
        doctor: "Dr. Sunita Reddy",
    },
    PatientSeed {
        id: "4",
        name: "Anita Devi Gupta",
        email: "anita.gupta@email.com",
        phone: "+91-65432-10987",
        born: (1992, 5, 14),
        gender: Gender::Female,
        address: "321, Park Street, Kolkata, West Bengal - 700016",
        emergency_contact: "+91-65432-10986",
        blood_type: "AB+",
        allergies: &["Sulfa drugs"],
        status: PatientStatus::Completed,
        priority: Priority::Low,
        days_ago: 1,
        symptoms: "Regular checkup, diabetes monitoring",
        doctor: "Dr. Vikram Joshi",
    },
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn date(ymd: (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap_or_default()
}

/// The four sample patients.
pub fn mock_patients(now: DateTime<Utc>) -> Vec<Patient> {
    PATIENTS
        .iter()
        .map(|seed| Patient {
            id: PatientId::from(seed.id),
            name: seed.name.to_string(),
            email: seed.email.to_string(),
            phone: seed.phone.to_string(),
            date_of_birth: date(seed.born),
            gender: seed.gender,
            address: seed.address.to_string(),
            emergency_contact: seed.emergency_contact.to_string(),
            blood_type: seed.blood_type.to_string(),
            allergies: strings(seed.allergies),
            medical_history: Vec::new(),
            status: seed.status,
            priority: seed.priority,
            appointment_date: now - Duration::days(seed.days_ago),
            symptoms: seed.symptoms.to_string(),
            assigned_doctor: Some(seed.doctor.to_string()),
            created_at: now,
            updated_at: now,
        })
        .collect()
}

// ── Medicines ─────────────────────────────────────────────────────────────────

struct MedicineSeed {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    manufacturer: &'static str,
    dosage: &'static str,
    unit: &'static str,
    price: f64,
    stock: u32,
    min_stock: u32,
    expiry: (i32, u32, u32),
    batch_number: &'static str,
    description: &'static str,
    side_effects: &'static [&'static str],
    contraindications: &'static [&'static str],
}

const MEDICINES: [MedicineSeed; 5] = [
    MedicineSeed {
        id: "1",
        name: "Paracetamol",
        category: "Pain Relief",
        manufacturer: "Cipla Ltd",
        dosage: "500mg",
        unit: "tablets",
        price: 45.50,
        stock: 150,
        min_stock: 50,
        expiry: (2025, 12, 31),
        batch_number: "PCM2024001",
        description: "Pain relief and fever reducer",
        side_effects: &["Nausea", "Dizziness"],
        contraindications: &["Liver disease"],
    },
    MedicineSeed {
        id: "2",
        name: "Amoxicillin",
        category: "Antibiotic",
        manufacturer: "Sun Pharma",
        dosage: "250mg",
        unit: "capsules",
        price: 125.75,
        stock: 25,
        min_stock: 30,
        expiry: (2025, 6, 30),
        batch_number: "AMX2024002",
        description: "Broad-spectrum antibiotic",
        side_effects: &["Diarrhea", "Nausea", "Skin rash"],
        contraindications: &["Penicillin allergy"],
    },
    MedicineSeed {
        id: "3",
        name: "Amlodipine",
        category: "Blood Pressure",
        manufacturer: "Dr. Reddy's Labs",
        dosage: "5mg",
        unit: "tablets",
        price: 89.25,
        stock: 80,
        min_stock: 40,
        expiry: (2025, 9, 15),
        batch_number: "AML2024003",
        description: "Calcium channel blocker for hypertension",
        side_effects: &["Swelling of ankles", "Dizziness"],
        contraindications: &["Pregnancy", "Severe heart failure"],
    },
    MedicineSeed {
        id: "4",
        name: "Metformin",
        category: "Diabetes",
        manufacturer: "Lupin Pharmaceuticals",
        dosage: "500mg",
        unit: "tablets",
        price: 67.80,
        stock: 120,
        min_stock: 60,
        expiry: (2025, 11, 20),
        batch_number: "MET2024004",
        description: "Type 2 diabetes medication",
        side_effects: &["Nausea", "Diarrhea", "Metallic taste"],
        contraindications: &["Kidney disease", "Liver disease"],
    },
    MedicineSeed {
        id: "5",
        name: "Azithromycin",
        category: "Antibiotic",
        manufacturer: "Torrent Pharmaceuticals",
        dosage: "250mg",
        unit: "tablets",
        price: 156.90,
        stock: 8,
        min_stock: 25,
        expiry: (2025, 8, 10),
        batch_number: "AZI2024005",
        description: "Macrolide antibiotic for respiratory infections",
        side_effects: &["Stomach upset", "Diarrhea"],
        contraindications: &["Liver problems", "Heart rhythm disorders"],
    },
];

/// The five sample medicines.
pub fn mock_medicines(now: DateTime<Utc>) -> Vec<Medicine> {
    MEDICINES
        .iter()
        .map(|seed| Medicine {
            id: MedicineId::from(seed.id),
            name: seed.name.to_string(),
            category: seed.category.to_string(),
            manufacturer: seed.manufacturer.to_string(),
            dosage: seed.dosage.to_string(),
            unit: seed.unit.to_string(),
            price: seed.price,
            stock: seed.stock,
            min_stock: seed.min_stock,
            expiry_date: date(seed.expiry),
            batch_number: seed.batch_number.to_string(),
            description: seed.description.to_string(),
            side_effects: strings(seed.side_effects),
            contraindications: strings(seed.contraindications),
            is_active: true,
            created_at: now,
            updated_at: now,
        })
        .collect()
}

// ── Notifications ─────────────────────────────────────────────────────────────

/// The three sample notifications, already in display order.
pub fn mock_notifications(now: DateTime<Utc>) -> Vec<Notification> {
    [
        (
            "1",
            NotificationKind::Warning,
            "Low Stock Alert",
            "Azithromycin stock is below minimum threshold (8 remaining)",
        ),
        (
            "2",
            NotificationKind::Info,
            "New Patient Registered",
            "Rajesh Kumar Sharma has been added to the patient list",
        ),
        (
            "3",
            NotificationKind::Error,
            "Critical Patient Alert",
            "Mohammed Arif Khan requires immediate attention",
        ),
    ]
    .into_iter()
    .map(|(id, kind, title, message)| Notification {
        id: NotificationId::from(id),
        kind,
        title: title.to_string(),
        message: message.to_string(),
        read: false,
        created_at: now,
    })
    .collect()
}

/// Everything the demo store starts with.
pub fn seed_data(now: DateTime<Utc>) -> SeedData {
    SeedData {
        patients: mock_patients(now),
        medicines: mock_medicines(now),
        notifications: mock_notifications(now),
        ..SeedData::default()
    }
}

/// Build a store on `clock`, re-apply the saved theme, and load the sample
/// ward.
pub fn seeded_store(
    clock: impl Clock + 'static,
    preferences: Box<dyn PreferenceStore>,
) -> MedidashResult<Store> {
    let now = clock.now();
    let mut store = Store::new(Box::new(clock), preferences)?;
    store.seed(seed_data(now));
    Ok(store)
}
