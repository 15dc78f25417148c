//! Scenario 3: Inventory review.
//!
//! Runs the medicines page over the sample stock: category and stock-bucket
//! filters, price sorting, and the bucket totals. A new medicine arrives
//! with zero stock, Azithromycin is restocked with a fresh batch, and the
//! discontinued Amlodipine line is removed.

use chrono::{Days, NaiveDate};

use medidash_contracts::{
    error::MedidashResult,
    ids::MedicineId,
    medicine::{Medicine, StockBucket},
};
use medidash_query::{dashboard, MedicineQuery, MedicineSortKey, SortDirection};
use medidash_validate::MedicineForm;

use super::demo_store;
use crate::workflow::{add_medicine, edit_medicine, report_failure, Action, Outcome};

/// How many medicines fall into each stock bucket, in bucket order.
pub fn bucket_counts(medicines: &[Medicine]) -> Vec<(StockBucket, usize)> {
    StockBucket::ALL
        .iter()
        .map(|bucket| {
            let n = medicines.iter().filter(|m| m.stock_bucket() == *bucket).count();
            (*bucket, n)
        })
        .collect()
}

/// A new antihistamine line, received before any stock arrived.
pub fn incoming_form(today: NaiveDate) -> MedicineForm {
    let mut form = MedicineForm {
        name: "Cetirizine".to_string(),
        category: "Antihistamine".to_string(),
        manufacturer: "Glenmark Pharmaceuticals".to_string(),
        dosage: "10mg".to_string(),
        price: 32.40,
        stock: 0,
        min_stock: 20,
        expiry_date: today.checked_add_days(Days::new(540)),
        batch_number: "CTZ2026001".to_string(),
        description: "Antihistamine for allergic rhinitis".to_string(),
        ..MedicineForm::default()
    };
    form.add_side_effect("Drowsiness");
    form.add_contraindication("Severe kidney disease");
    form
}

/// Prefill the edit form from `medicine` with a new batch of `stock` units.
pub fn restock_form(
    medicine: &Medicine,
    stock: u32,
    batch_number: &str,
    today: NaiveDate,
) -> MedicineForm {
    let mut form = MedicineForm::from_medicine(medicine);
    form.stock = i64::from(stock);
    form.batch_number = batch_number.to_string();
    form.expiry_date = today.checked_add_days(Days::new(365));
    form
}

fn print_list(title: &str, medicines: &[&Medicine]) {
    println!("  {title}:");
    for m in medicines {
        println!(
            "    - {:<14} {:<15} stock {:>3}/{:<3} Rs {:>7.2}  [{}]",
            m.name,
            m.category,
            m.stock,
            m.min_stock,
            m.price,
            m.stock_bucket()
        );
    }
}

pub fn run_scenario() -> MedidashResult<()> {
    println!("=== Scenario 3: Inventory Review ===");
    println!();

    let mut store = demo_store()?;
    let today = store.today();

    println!("  Categories: {}", dashboard::categories(store.medicines()).join(", "));
    println!("  Inventory value: Rs {:.2}", dashboard::inventory_value(store.medicines()));
    print_list(
        "Antibiotics",
        &MedicineQuery::new().category("Antibiotic").run(store.medicines()),
    );
    print_list(
        "Low stock",
        &MedicineQuery::new().stock(StockBucket::Low).run(store.medicines()),
    );
    print_list(
        "By price, highest first",
        &MedicineQuery::new()
            .sort(MedicineSortKey::Price, SortDirection::Desc)
            .run(store.medicines()),
    );
    println!();

    // ── Receiving ─────────────────────────────────────────────────────────────

    match add_medicine(&mut store, incoming_form(today)) {
        Ok(Outcome::Saved(id)) => {
            if let Some(m) = store.get_medicine(&id) {
                println!("  Received {} with {} in stock [{}]", m.name, m.stock, m.stock_bucket());
            }
        }
        Ok(Outcome::Invalid(report)) => println!("  REJECTED: {:?}", report.failures),
        Ok(Outcome::NotFound) => {}
        Err(_) => {
            report_failure(&mut store, Action::AddMedicine);
        }
    }

    let oversized = MedicineForm {
        stock: 5_000_000_000,
        batch_number: "CTZ2026002".to_string(),
        ..incoming_form(today)
    };
    if let Ok(Outcome::Invalid(report)) = add_medicine(&mut store, oversized) {
        for failure in &report.failures {
            println!("  Held back: {}: {}", failure.field, failure.message);
        }
    }

    let azithromycin = MedicineId::from("5");
    let restock = store
        .get_medicine(&azithromycin)
        .map(|m| restock_form(m, 200, "AZI2026011", today));
    if let Some(form) = restock {
        match edit_medicine(&mut store, &azithromycin, form) {
            Ok(outcome) if outcome.is_saved() => {
                println!("  Restocked Azithromycin to 200 units, new batch AZI2026011");
            }
            Ok(_) => {}
            Err(_) => {
                report_failure(&mut store, Action::UpdateMedicine);
            }
        }
    }

    if let Some(removed) = store.delete_medicine(&MedicineId::from("3")) {
        println!("  Removed {} from inventory", removed.name);
    }
    println!();

    for (bucket, n) in bucket_counts(store.medicines()) {
        println!("  {:<10} {n}", bucket);
    }
    println!("  Dashboard low-stock count: {}", store.dashboard_stats().low_stock_medicines);
    println!("  Inventory value:           Rs {:.2}", dashboard::inventory_value(store.medicines()));
    if let Some(top) = store.notifications().first() {
        println!("  Newest notification:       {}: {}", top.title, top.message);
    }
    println!();
    println!("Scenario 3 complete.");
    println!();
    Ok(())
}
