//! # Seed Data
//!
//! Loads a small sample catalogue for demos and manual testing.
//!
//! ## Behaviour
//! - Empty inventory: inserts every sample product
//! - Non-empty inventory: does nothing unless `--reset` is given
//! - `--reset`: deletes all products first, then inserts the samples
//!
//! Several samples sit below the low-stock threshold so the warning
//! paths are visible straight away.

use inventory_core::ProductDraft;
use inventory_db::Database;
use serde_json::json;
use tracing::info;

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::render;

/// Sample products: (name, category, price, quantity)
const SAMPLE_PRODUCTS: &[(&str, &str, f64, i64)] = &[
    ("Laptop", "Electronics", 999.99, 3),
    ("Mouse", "Electronics", 29.99, 15),
    ("Keyboard", "Electronics", 79.99, 4),
    ("Monitor", "Electronics", 299.99, 8),
    ("Headphones", "Electronics", 149.99, 2),
    ("Pen", "Stationery", 1.50, 120),
    ("Ink", "Stationery", 3.00, 1),
];

/// Sample catalogue as drafts.
pub fn sample_drafts() -> Vec<ProductDraft> {
    SAMPLE_PRODUCTS
        .iter()
        .map(|&(name, category, price, quantity)| ProductDraft::new(name, category, price, quantity))
        .collect()
}

/// Inserts the sample catalogue.
pub async fn seed_products(db: &Database, config: &AppConfig, reset: bool) -> AppResult<String> {
    let store = db.products();

    let mut cleared = 0;
    if reset {
        cleared = store.delete_all().await?;
    } else {
        let existing = store.count().await?;
        if existing > 0 {
            info!(existing = existing, "Inventory not empty, skipping seed");
            if config.is_json() {
                return render::json(&json!({ "inserted": 0, "cleared": 0 }));
            }
            return Ok(format!(
                "Inventory already has {} product(s); use --reset to replace them",
                existing
            ));
        }
    }

    let drafts = sample_drafts();
    for draft in &drafts {
        store.create(draft).await?;
    }

    info!(inserted = drafts.len(), cleared = cleared, "Seeded sample products");

    if config.is_json() {
        return render::json(&json!({ "inserted": drafts.len(), "cleared": cleared }));
    }

    if cleared > 0 {
        return Ok(format!(
            "Cleared {} product(s) and inserted {} sample products",
            cleared,
            drafts.len()
        ));
    }

    Ok(format!("Inserted {} sample products", drafts.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_core::validation::validate_draft;
    use inventory_db::DbConfig;

    #[test]
    fn test_samples_are_valid() {
        for draft in sample_drafts() {
            assert!(validate_draft(&draft).is_ok(), "{:?}", draft);
        }
        assert!(sample_drafts().iter().any(|d| d.is_low_stock()));
    }

    #[tokio::test]
    async fn test_seed_empty_then_skip_then_reset() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let config = AppConfig::default();
        let total = SAMPLE_PRODUCTS.len() as i64;

        let out = seed_products(&db, &config, false).await.unwrap();
        assert_eq!(out, format!("Inserted {} sample products", total));
        assert_eq!(db.products().count().await.unwrap(), total);

        let out = seed_products(&db, &config, false).await.unwrap();
        assert!(out.contains("--reset"));
        assert_eq!(db.products().count().await.unwrap(), total);

        let out = seed_products(&db, &config, true).await.unwrap();
        assert_eq!(
            out,
            format!("Cleared {} product(s) and inserted {} sample products", total, total)
        );
        assert_eq!(db.products().count().await.unwrap(), total);

        // ids keep climbing after a reset
        let first = db.products().list().await.unwrap()[0].id;
        assert_eq!(first, total + 1);
    }
}
