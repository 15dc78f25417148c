//! Medicine inventory types.
//!
//! Stock state is derived from `stock` and `min_stock` on every read and is
//! never stored.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::MedicineId;

string_enum! {
    /// The stock bucket a medicine falls into.
    ///
    /// The three buckets partition every medicine:
    /// `out` when `stock == 0`, `low` when `0 < stock <= min_stock`,
    /// `available` when `stock > min_stock`.
    pub enum StockBucket as "stock bucket" {
        Available => "available",
        Low => "low",
        Out => "out",
    }
}

/// A medicine held in inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    pub id: MedicineId,
    pub name: String,
    pub category: String,
    pub manufacturer: String,
    pub dosage: String,
    pub unit: String,
    /// Unit price, always positive for validated input.
    pub price: f64,
    pub stock: u32,
    /// Reorder threshold.
    pub min_stock: u32,
    pub expiry_date: NaiveDate,
    pub batch_number: String,
    pub description: String,
    pub side_effects: Vec<String>,
    pub contraindications: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Medicine {
    /// True when `stock <= min_stock`. Includes out-of-stock medicines.
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock
    }

    /// True when nothing is left.
    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }

    /// Classify into exactly one `StockBucket`.
    pub fn stock_bucket(&self) -> StockBucket {
        if self.stock == 0 {
            StockBucket::Out
        } else if self.stock <= self.min_stock {
            StockBucket::Low
        } else {
            StockBucket::Available
        }
    }
}

/// Everything the caller supplies when adding a medicine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMedicine {
    pub name: String,
    pub category: String,
    pub manufacturer: String,
    pub dosage: String,
    pub unit: String,
    pub price: f64,
    pub stock: u32,
    pub min_stock: u32,
    pub expiry_date: NaiveDate,
    pub batch_number: String,
    pub description: String,
    pub side_effects: Vec<String>,
    pub contraindications: Vec<String>,
    pub is_active: bool,
}

impl NewMedicine {
    pub fn into_medicine(self, id: MedicineId, now: DateTime<Utc>) -> Medicine {
        Medicine {
            id,
            name: self.name,
            category: self.category,
            manufacturer: self.manufacturer,
            dosage: self.dosage,
            unit: self.unit,
            price: self.price,
            stock: self.stock,
            min_stock: self.min_stock,
            expiry_date: self.expiry_date,
            batch_number: self.batch_number,
            description: self.description,
            side_effects: self.side_effects,
            contraindications: self.contraindications,
            is_active: self.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A partial update. Only `Some` fields are merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MedicinePatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub manufacturer: Option<String>,
    pub dosage: Option<String>,
    pub unit: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<u32>,
    pub min_stock: Option<u32>,
    pub expiry_date: Option<NaiveDate>,
    pub batch_number: Option<String>,
    pub description: Option<String>,
    pub side_effects: Option<Vec<String>>,
    pub contraindications: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

impl MedicinePatch {
    /// Merge the supplied fields into `medicine` and stamp `updated_at`.
    pub fn apply(self, medicine: &mut Medicine, now: DateTime<Utc>) {
        if let Some(v) = self.name {
            medicine.name = v;
        }
        if let Some(v) = self.category {
            medicine.category = v;
        }
        if let Some(v) = self.manufacturer {
            medicine.manufacturer = v;
        }
        if let Some(v) = self.dosage {
            medicine.dosage = v;
        }
        if let Some(v) = self.unit {
            medicine.unit = v;
        }
        if let Some(v) = self.price {
            medicine.price = v;
        }
        if let Some(v) = self.stock {
            medicine.stock = v;
        }
        if let Some(v) = self.min_stock {
            medicine.min_stock = v;
        }
        if let Some(v) = self.expiry_date {
            medicine.expiry_date = v;
        }
        if let Some(v) = self.batch_number {
            medicine.batch_number = v;
        }
        if let Some(v) = self.description {
            medicine.description = v;
        }
        if let Some(v) = self.side_effects {
            medicine.side_effects = v;
        }
        if let Some(v) = self.contraindications {
            medicine.contraindications = v;
        }
        if let Some(v) = self.is_active {
            medicine.is_active = v;
        }
        medicine.updated_at = now.max(medicine.updated_at);
    }
}
