//! The medicine inventory view: search, category and stock-bucket filters,
//! and sorting.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use medidash_contracts::{
    error::MedidashError,
    medicine::{Medicine, StockBucket},
};

use crate::{
    matches_term,
    sort::{cmp_name, SortDirection},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MedicineSortKey {
    Name,
    Stock,
    Expiry,
    Price,
}

impl MedicineSortKey {
    fn compare(self, a: &Medicine, b: &Medicine) -> Ordering {
        match self {
            MedicineSortKey::Name => cmp_name(&a.name, &b.name),
            MedicineSortKey::Stock => a.stock.cmp(&b.stock),
            MedicineSortKey::Expiry => a.expiry_date.cmp(&b.expiry_date),
            // Prices are finite; anything else compares equal and keeps its place.
            MedicineSortKey::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
        }
    }
}

impl FromStr for MedicineSortKey {
    type Err = MedidashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(MedicineSortKey::Name),
            "stock" => Ok(MedicineSortKey::Stock),
            "expiry" => Ok(MedicineSortKey::Expiry),
            "price" => Ok(MedicineSortKey::Price),
            _ => Err(MedidashError::InvalidValue {
                field: "medicine sort key".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Inputs to the inventory list. Defaults to name ascending, unfiltered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicineQuery {
    pub search: String,
    /// Exact category match.
    pub category: Option<String>,
    pub stock: Option<StockBucket>,
    pub sort_by: MedicineSortKey,
    pub direction: SortDirection,
}

impl Default for MedicineQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            stock: None,
            sort_by: MedicineSortKey::Name,
            direction: SortDirection::Asc,
        }
    }
}

impl MedicineQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn stock(mut self, bucket: StockBucket) -> Self {
        self.stock = Some(bucket);
        self
    }

    pub fn sort(mut self, key: MedicineSortKey, direction: SortDirection) -> Self {
        self.sort_by = key;
        self.direction = direction;
        self
    }

    pub fn matches(&self, medicine: &Medicine) -> bool {
        matches_term(
            &self.search,
            &[
                medicine.name.as_str(),
                medicine.category.as_str(),
                medicine.manufacturer.as_str(),
                medicine.batch_number.as_str(),
            ],
        ) && self
            .category
            .as_deref()
            .map_or(true, |c| medicine.category == c)
            && self.stock.map_or(true, |b| medicine.stock_bucket() == b)
    }

    /// Filter and sort `medicines` into a new view. Stable for equal keys.
    pub fn run<'a>(&self, medicines: &'a [Medicine]) -> Vec<&'a Medicine> {
        let mut view: Vec<&Medicine> = medicines.iter().filter(|m| self.matches(m)).collect();
        view.sort_by(|a, b| self.direction.apply(self.sort_by.compare(a, b)));
        debug!(
            total = medicines.len(),
            matched = view.len(),
            sort_by = ?self.sort_by,
            direction = self.direction.as_str(),
            "medicine query"
        );
        view
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use proptest::prelude::*;

    use medidash_contracts::{ids::MedicineId, medicine::NewMedicine};

    use super::*;

    fn medicine(id: &str, name: &str, category: &str, stock: u32, min_stock: u32) -> Medicine {
        NewMedicine {
            name: name.to_string(),
            category: category.to_string(),
            manufacturer: "Cipla Ltd".to_string(),
            dosage: "500mg".to_string(),
            unit: "tablets".to_string(),
            price: 10.0 + stock as f64,
            stock,
            min_stock,
            expiry_date: NaiveDate::from_ymd_opt(2027, 1, 1).unwrap()
                + chrono::Duration::days(stock as i64),
            batch_number: format!("BATCH{id}"),
            description: String::new(),
            side_effects: vec![],
            contraindications: vec![],
            is_active: true,
        }
        .into_medicine(
            MedicineId::from(id),
            Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    fn shelf() -> Vec<Medicine> {
        vec![
            medicine("1", "Paracetamol", "Pain Relief", 150, 50),
            medicine("2", "Amoxicillin", "Antibiotic", 25, 30),
            medicine("3", "Amlodipine", "Blood Pressure", 80, 40),
            medicine("4", "Metformin", "Diabetes", 120, 60),
            medicine("5", "azithromycin", "Antibiotic", 8, 25),
        ]
    }

    fn names(view: &[&Medicine]) -> Vec<String> {
        view.iter().map(|m| m.name.clone()).collect()
    }

    // ── Filters ───────────────────────────────────────────────────────────────

    #[test]
    fn default_sorts_by_name_ascending_ignoring_case() {
        let shelf = shelf();
        assert_eq!(
            names(&MedicineQuery::default().run(&shelf)),
            vec!["Amlodipine", "Amoxicillin", "azithromycin", "Metformin", "Paracetamol"]
        );
    }

    #[test]
    fn search_covers_category_manufacturer_and_batch() {
        let shelf = shelf();
        assert_eq!(MedicineQuery::new().search("antibiotic").run(&shelf).len(), 2);
        assert_eq!(MedicineQuery::new().search("cipla").run(&shelf).len(), 5);
        assert_eq!(MedicineQuery::new().search("batch3").run(&shelf).len(), 1);
    }

    #[test]
    fn category_filter_is_exact() {
        let shelf = shelf();
        assert_eq!(MedicineQuery::new().category("Antibiotic").run(&shelf).len(), 2);
        assert!(MedicineQuery::new().category("antibiotic").run(&shelf).is_empty());
    }

    #[test]
    fn stock_bucket_filters() {
        let mut shelf = shelf();
        shelf.push(medicine("6", "Ibuprofen", "Pain Relief", 0, 20));

        let out = MedicineQuery::new().stock(StockBucket::Out).run(&shelf);
        assert_eq!(names(&out), vec!["Ibuprofen"]);

        let available = MedicineQuery::new().stock(StockBucket::Available).run(&shelf);
        assert!(available.iter().all(|m| m.name != "Ibuprofen"));
        assert_eq!(available.len(), 3);

        let low = MedicineQuery::new().stock(StockBucket::Low).run(&shelf);
        assert_eq!(names(&low), vec!["Amoxicillin", "azithromycin"]);
    }

    // ── Sorting ───────────────────────────────────────────────────────────────

    #[test]
    fn numeric_and_date_keys() {
        let shelf = shelf();
        let by_stock = MedicineQuery::new()
            .sort(MedicineSortKey::Stock, SortDirection::Desc)
            .run(&shelf);
        let stocks: Vec<u32> = by_stock.iter().map(|m| m.stock).collect();
        assert_eq!(stocks, vec![150, 120, 80, 25, 8]);

        let by_price = MedicineQuery::new()
            .sort(MedicineSortKey::Price, SortDirection::Asc)
            .run(&shelf);
        assert_eq!(by_price[0].name, "azithromycin");

        let by_expiry = MedicineQuery::new()
            .sort(MedicineSortKey::Expiry, SortDirection::Asc)
            .run(&shelf);
        assert_eq!(by_expiry[4].name, "Paracetamol");
    }

    // ── Properties ────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn buckets_partition_every_medicine(stock in 0u32..500, min_stock in 0u32..500) {
            let shelf = vec![medicine("p", "Probe", "Test", stock, min_stock)];
            let hits: usize = StockBucket::ALL
                .iter()
                .map(|b| MedicineQuery::new().stock(*b).run(&shelf).len())
                .sum();
            prop_assert_eq!(hits, 1);
        }

        #[test]
        fn name_desc_is_exact_reverse_of_asc(
            raw in proptest::collection::btree_set("[a-z]{1,8}", 1..12)
        ) {
            // A set of lowercase names has no case-insensitive ties.
            let shelf: Vec<Medicine> = raw
                .iter()
                .enumerate()
                .map(|(i, n)| medicine(&i.to_string(), n, "Test", 1, 0))
                .collect();
            let asc = names(&MedicineQuery::new().sort(MedicineSortKey::Name, SortDirection::Asc).run(&shelf));
            let mut desc = names(&MedicineQuery::new().sort(MedicineSortKey::Name, SortDirection::Desc).run(&shelf));
            desc.reverse();
            prop_assert_eq!(asc, desc);
        }
    }
}
