//! Dashboard aggregate snapshot.

use serde::{Deserialize, Serialize};

/// Headline counts shown on the dashboard.
///
/// Always computed fresh from the current collections; never cached.
/// `patients_today` counts patients by their own `appointment_date`, while
/// `appointments_today` counts the separate appointments collection. The two
/// are independent and may disagree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_patients: usize,
    pub patients_today: usize,
    /// Patients with `status == critical` (status, not priority).
    pub critical_patients: usize,
    /// Medicines with `stock <= min_stock`.
    pub low_stock_medicines: usize,
    pub appointments_today: usize,
    pub completed_consultations: usize,
}
