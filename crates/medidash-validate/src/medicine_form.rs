//! The medicine add/edit form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use medidash_contracts::{
    error::{MedidashError, MedidashResult},
    medicine::{Medicine, NewMedicine},
    validate::ValidationReport,
};

use crate::{
    push_unique,
    rule::{evaluate, FieldRule, RuleKind},
};

/// Raw medicine form state.
///
/// Stock counts are signed so a negative entry can be reported instead of
/// being unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicineForm {
    pub name: String,
    pub category: String,
    pub manufacturer: String,
    pub dosage: String,
    pub unit: String,
    pub price: f64,
    pub stock: i64,
    pub min_stock: i64,
    pub expiry_date: Option<NaiveDate>,
    pub batch_number: String,
    pub description: String,
    pub side_effects: Vec<String>,
    pub contraindications: Vec<String>,
    pub is_active: bool,
}

impl Default for MedicineForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            manufacturer: String::new(),
            dosage: String::new(),
            unit: "tablets".to_string(),
            price: 0.0,
            stock: 0,
            min_stock: 10,
            expiry_date: None,
            batch_number: String::new(),
            description: String::new(),
            side_effects: Vec::new(),
            contraindications: Vec::new(),
            is_active: true,
        }
    }
}

/// Counts are stored as `u32`.
const MAX_COUNT: f64 = u32::MAX as f64;

fn rules(today: NaiveDate) -> Vec<FieldRule> {
    vec![
        FieldRule::required("name", "Medicine name is required"),
        FieldRule::required("category", "Category is required"),
        FieldRule::required("manufacturer", "Manufacturer is required"),
        FieldRule::required("dosage", "Dosage is required"),
        // NaN serializes as null.
        FieldRule::required("price", "Price must be greater than 0"),
        FieldRule::new("price", RuleKind::GreaterThan(0.0), "Price must be greater than 0"),
        FieldRule::new("stock", RuleKind::AtLeast(0.0), "Stock cannot be negative"),
        FieldRule::new("stock", RuleKind::AtMost(MAX_COUNT), "Stock is too large"),
        FieldRule::new("minStock", RuleKind::AtLeast(0.0), "Minimum stock cannot be negative"),
        FieldRule::new("minStock", RuleKind::AtMost(MAX_COUNT), "Minimum stock is too large"),
        FieldRule::required("expiryDate", "Expiry date is required"),
        FieldRule::new("expiryDate", RuleKind::After(today), "Expiry date must be in the future"),
        FieldRule::required("batchNumber", "Batch number is required"),
    ]
}

fn count(field: &str, value: i64) -> MedidashResult<u32> {
    u32::try_from(value).map_err(|_| MedidashError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    })
}

impl MedicineForm {
    pub fn from_medicine(medicine: &Medicine) -> Self {
        Self {
            name: medicine.name.clone(),
            category: medicine.category.clone(),
            manufacturer: medicine.manufacturer.clone(),
            dosage: medicine.dosage.clone(),
            unit: medicine.unit.clone(),
            price: medicine.price,
            stock: i64::from(medicine.stock),
            min_stock: i64::from(medicine.min_stock),
            expiry_date: Some(medicine.expiry_date),
            batch_number: medicine.batch_number.clone(),
            description: medicine.description.clone(),
            side_effects: medicine.side_effects.clone(),
            contraindications: medicine.contraindications.clone(),
            is_active: medicine.is_active,
        }
    }

    pub fn add_side_effect(&mut self, effect: &str) -> bool {
        push_unique(&mut self.side_effects, effect)
    }

    pub fn add_contraindication(&mut self, item: &str) -> bool {
        push_unique(&mut self.contraindications, item)
    }

    /// Validate every field. The expiry date must fall after `today`.
    pub fn validate(&self, today: NaiveDate) -> MedidashResult<ValidationReport> {
        let report = evaluate(&rules(today), &serde_json::to_value(self)?);
        debug!(passed = report.passed, failures = report.failures.len(), "medicine form validated");
        Ok(report)
    }

    /// Validate, then convert into a store input.
    pub fn into_new_medicine(self, today: NaiveDate) -> MedidashResult<NewMedicine> {
        self.validate(today)?.into_result()?;

        let expiry_date = self.expiry_date.ok_or_else(|| MedidashError::InvalidValue {
            field: "expiryDate".to_string(),
            value: "null".to_string(),
        })?;

        Ok(NewMedicine {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            manufacturer: self.manufacturer.trim().to_string(),
            dosage: self.dosage.trim().to_string(),
            unit: self.unit,
            price: self.price,
            stock: count("stock", self.stock)?,
            min_stock: count("minStock", self.min_stock)?,
            expiry_date,
            batch_number: self.batch_number.trim().to_string(),
            description: self.description,
            side_effects: self.side_effects,
            contraindications: self.contraindications,
            is_active: self.is_active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }

    fn complete() -> MedicineForm {
        MedicineForm {
            name: "Cetirizine".to_string(),
            category: "Antihistamine".to_string(),
            manufacturer: "Glenmark".to_string(),
            dosage: "10mg".to_string(),
            price: 32.4,
            stock: 60,
            min_stock: 20,
            expiry_date: NaiveDate::from_ymd_opt(2027, 2, 28),
            batch_number: "CTZ2026001".to_string(),
            ..MedicineForm::default()
        }
    }

    #[test]
    fn blank_form_reports_each_required_field() {
        let report = MedicineForm::default().validate(today()).unwrap();
        assert!(!report.passed);
        for field in ["name", "category", "manufacturer", "dosage", "expiryDate", "batchNumber"] {
            assert!(report.error_for(field).is_some(), "{field} must be reported");
        }
        assert_eq!(report.error_for("price"), Some("Price must be greater than 0"));
        assert_eq!(report.error_for("stock"), None, "zero stock is allowed");
    }

    #[test]
    fn negative_counts_are_rejected() {
        let form = MedicineForm {
            stock: -1,
            min_stock: -5,
            ..complete()
        };
        let report = form.validate(today()).unwrap();
        assert_eq!(report.error_for("stock"), Some("Stock cannot be negative"));
        assert_eq!(report.error_for("minStock"), Some("Minimum stock cannot be negative"));
    }

    #[test]
    fn counts_beyond_u32_are_reported_not_converted() {
        let form = MedicineForm {
            stock: 5_000_000_000,
            min_stock: i64::from(u32::MAX) + 1,
            ..complete()
        };
        let report = form.validate(today()).unwrap();
        assert_eq!(report.error_for("stock"), Some("Stock is too large"));
        assert_eq!(report.error_for("minStock"), Some("Minimum stock is too large"));
        assert!(matches!(
            form.into_new_medicine(today()).unwrap_err(),
            MedidashError::ValidationFailed { count: 2, .. }
        ));

        let largest = MedicineForm {
            stock: i64::from(u32::MAX),
            ..complete()
        };
        assert_eq!(largest.into_new_medicine(today()).unwrap().stock, u32::MAX);
    }

    #[test]
    fn expiry_must_be_after_today() {
        let form = MedicineForm {
            expiry_date: Some(today()),
            ..complete()
        };
        assert_eq!(
            form.validate(today()).unwrap().error_for("expiryDate"),
            Some("Expiry date must be in the future")
        );
    }

    #[test]
    fn valid_form_converts_with_unsigned_counts() {
        let mut form = complete();
        form.add_side_effect("Drowsiness");
        form.add_side_effect(" Drowsiness");
        let input = form.into_new_medicine(today()).unwrap();
        assert_eq!(input.stock, 60);
        assert_eq!(input.min_stock, 20);
        assert_eq!(input.unit, "tablets");
        assert_eq!(input.side_effects, vec!["Drowsiness"]);
    }

    #[test]
    fn nan_price_is_rejected() {
        let form = MedicineForm {
            price: f64::NAN,
            ..complete()
        };
        assert!(form.validate(today()).unwrap().error_for("price").is_some());
    }

    #[test]
    fn zero_stock_medicine_converts() {
        let form = MedicineForm {
            stock: 0,
            ..complete()
        };
        assert_eq!(form.into_new_medicine(today()).unwrap().stock, 0);
    }

    #[test]
    fn invalid_form_does_not_convert() {
        let err = MedicineForm::default().into_new_medicine(today()).unwrap_err();
        assert!(matches!(err, MedidashError::ValidationFailed { .. }));
    }
}
