//! Opaque identifiers for every stored entity.
//!
//! Identifiers are assigned by the store at creation time and never reused.
//! Seed data uses short fixed strings ("1", "2", …); everything the store
//! creates afterwards receives a UUID v4.

entity_id!(
    /// Identifies a `Patient`.
    PatientId
);

entity_id!(
    /// Identifies a `Medicine` in the inventory.
    MedicineId
);

entity_id!(
    /// Identifies a `MedicalRecord`.
    RecordId
);

entity_id!(
    /// Identifies an `Appointment`.
    AppointmentId
);

entity_id!(
    /// Identifies a `Notification`.
    NotificationId
);

entity_id!(
    /// Identifies a staff `User`.
    UserId
);
