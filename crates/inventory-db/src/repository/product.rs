//! # Product Store
//!
//! Database operations for products. The single source of truth for
//! inventory state.
//!
//! ## Key Operations
//! - CRUD: `create`, `get_by_id`, `update`, `delete`, `delete_all`
//! - Queries: `list`, `list_low_stock`, `search`
//! - Aggregates: `count`, `stats`
//!
//! ## Trust Boundary
//! The store does not validate. Whatever well-typed values it is given are
//! persisted; checking for blank names or negative prices is the front end's
//! job (see `inventory_core::validation`).
//!
//! ## Outcomes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  get_by_id(99)   → Ok(None)     no such record, not an error           │
//! │  update(99, ..)  → Ok(false)    nothing changed, nothing inserted      │
//! │  delete(99)      → Ok(false)    nothing removed                        │
//! │  disk / I/O      → Err(DbError) the store itself is broken             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ordering
//! Every list is ordered by `id`, which is insertion order because ids are
//! monotonic.

use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::DbResult;
use inventory_core::{InventoryStats, Product, ProductDraft, LOW_STOCK_THRESHOLD};

/// Store for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let store = db.products();
///
/// let id = store.create(&ProductDraft::new("Pen", "Stationery", 1.5, 10)).await?;
/// let pen = store.get_by_id(id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductStore {
    pool: SqlitePool,
    write_lock: Arc<Mutex<()>>,
}

impl ProductStore {
    /// Creates a new ProductStore.
    ///
    /// Stores that should not write concurrently must share `write_lock`;
    /// [`Database::products`](crate::Database::products) takes care of that.
    pub fn new(pool: SqlitePool, write_lock: Arc<Mutex<()>>) -> Self {
        ProductStore { pool, write_lock }
    }

    /// Inserts a new product and returns its id.
    ///
    /// ## Returns
    /// * `Ok(id)` - Newly assigned id, greater than every id handed out before
    /// * `Err(DbError)` - Storage fault
    pub async fn create(&self, draft: &ProductDraft) -> DbResult<i64> {
        debug!(name = %draft.name, category = %draft.category, "Creating product");

        let _writer = self.write_lock.lock().await;

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, category, price, quantity)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.category)
        .bind(draft.price)
        .bind(draft.quantity)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();

        debug!(id = id, "Product created");
        Ok(id)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, category, price, quantity
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        debug!(id = id, found = product.is_some(), "Fetched product");
        Ok(product)
    }

    /// Lists every product.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, category, price, quantity
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Lists products whose quantity is below the low-stock threshold.
    ///
    /// Exactly the subset of [`list`](Self::list) for which
    /// `Product::is_low_stock` holds: quantity 4 is included, 5 is not.
    pub async fn list_low_stock(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, category, price, quantity
            FROM products
            WHERE quantity < ?1
            ORDER BY id
            "#,
        )
        .bind(LOW_STOCK_THRESHOLD)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listed low-stock products");
        Ok(products)
    }

    /// Counts all products.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Replaces every field except `id` of an existing product.
    ///
    /// ## Returns
    /// * `Ok(true)` - Product updated
    /// * `Ok(false)` - No product with that id; nothing was written
    pub async fn update(&self, id: i64, draft: &ProductDraft) -> DbResult<bool> {
        debug!(id = id, "Updating product");

        let _writer = self.write_lock.lock().await;

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                category = ?3,
                price = ?4,
                quantity = ?5
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.category)
        .bind(draft.price)
        .bind(draft.quantity)
        .execute(&self.pool)
        .await?;

        let updated = result.rows_affected() > 0;
        if !updated {
            debug!(id = id, "Update matched no product");
        }

        Ok(updated)
    }

    /// Deletes a product.
    ///
    /// ## Returns
    /// * `Ok(true)` - Product removed
    /// * `Ok(false)` - No product with that id
    pub async fn delete(&self, id: i64) -> DbResult<bool> {
        debug!(id = id, "Deleting product");

        let _writer = self.write_lock.lock().await;

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes every product and returns how many were removed.
    ///
    /// One statement, so it is all-or-nothing. Ids are not reset: the next
    /// `create` still gets a fresh id.
    pub async fn delete_all(&self) -> DbResult<u64> {
        let _writer = self.write_lock.lock().await;

        let result = sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await?;

        let removed = result.rows_affected();
        info!(removed = removed, "Cleared all products");
        Ok(removed)
    }

    /// Searches products by name.
    ///
    /// Case-insensitive substring match on `name` only, using full Unicode
    /// lowercasing ("éclair" finds "Éclair"). An empty term matches every
    /// product. The term is matched literally; `%` and `_` are ordinary
    /// characters.
    ///
    /// SQLite's `LIKE` only folds ASCII, so the match runs here over the
    /// ordered product list.
    pub async fn search(&self, term: &str) -> DbResult<Vec<Product>> {
        debug!(term = %term, "Searching products");

        let needle = term.to_lowercase();
        let products: Vec<Product> = self
            .list()
            .await?
            .into_iter()
            .filter(|p| name_matches(&p.name, &needle))
            .collect();

        debug!(count = products.len(), "Search returned products");
        Ok(products)
    }

    /// Computes dashboard totals in a single query.
    ///
    /// `TOTAL()` sums in floating point and never raises an overflow; the
    /// unit count is cast back and clamps at `i64::MAX`, matching
    /// `InventoryStats::from_products`.
    pub async fn stats(&self) -> DbResult<InventoryStats> {
        let stats = sqlx::query_as::<_, InventoryStats>(
            r#"
            SELECT
                COUNT(*) AS total_products,
                COALESCE(SUM(CASE WHEN quantity < ?1 THEN 1 ELSE 0 END), 0) AS low_stock_count,
                CAST(TOTAL(quantity) AS INTEGER) AS total_units,
                TOTAL(price * quantity) AS total_value
            FROM products
            "#,
        )
        .bind(LOW_STOCK_THRESHOLD)
        .fetch_one(&self.pool)
        .await?;

        Ok(stats)
    }
}

/// Whether `name` contains `needle`, which must already be lowercased.
fn name_matches(name: &str, needle: &str) -> bool {
    needle.is_empty() || name.to_lowercase().contains(needle)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use inventory_core::UNSAVED_PRODUCT_ID;

    async fn store() -> ProductStore {
        Database::new(DbConfig::in_memory()).await.unwrap().products()
    }

    fn draft(name: &str, quantity: i64) -> ProductDraft {
        ProductDraft::new(name, "Misc", 9.99, quantity)
    }

    #[test]
    fn test_name_matches() {
        assert!(name_matches("Widget", ""));
        assert!(name_matches("SuperWidget", "wid"));
        assert!(name_matches("Éclair", &"ÉCLAIR".to_lowercase()));
        assert!(!name_matches("Gadget", "wid"));
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let store = store().await;
        let pen = ProductDraft::new("Pen", "Stationery", 1.5, 10);

        let id = store.create(&pen).await.unwrap();
        let fetched = store.get_by_id(id).await.unwrap().unwrap();

        assert_eq!(fetched, Product::from_draft(id, pen));
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let store = store().await;
        assert!(store.get_by_id(42).await.unwrap().is_none());
        assert!(store.get_by_id(UNSAVED_PRODUCT_ID).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_count_matches_creates() {
        let store = store().await;
        assert_eq!(store.count().await.unwrap(), 0);

        for n in 1..=7 {
            store.create(&draft(&format!("Item {n}"), n)).await.unwrap();
            assert_eq!(store.count().await.unwrap(), n);
        }
    }

    #[tokio::test]
    async fn test_ids_are_increasing() {
        let store = store().await;
        let a = store.create(&draft("A", 1)).await.unwrap();
        let b = store.create(&draft("B", 1)).await.unwrap();
        let c = store.create(&draft("C", 1)).await.unwrap();

        assert!(a >= 1);
        assert!(a < b && b < c);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let store = store().await;
        let a = store.create(&draft("A", 1)).await.unwrap();
        let b = store.create(&draft("B", 1)).await.unwrap();

        assert!(store.delete(b).await.unwrap());
        let c = store.create(&draft("C", 1)).await.unwrap();
        assert!(c > b);

        assert_eq!(store.delete_all().await.unwrap(), 2);
        let d = store.create(&draft("D", 1)).await.unwrap();
        assert!(d > c && d > a);
    }

    #[tokio::test]
    async fn test_update_touches_only_target() {
        let store = store().await;
        let a = store.create(&draft("A", 10)).await.unwrap();
        let b = store.create(&draft("B", 20)).await.unwrap();
        let b_before = store.get_by_id(b).await.unwrap();

        let changed = ProductDraft::new("A2", "Tools", 0.5, 3);
        assert!(store.update(a, &changed).await.unwrap());

        assert_eq!(
            store.get_by_id(a).await.unwrap(),
            Some(Product::from_draft(a, changed))
        );
        assert_eq!(store.get_by_id(b).await.unwrap(), b_before);
    }

    #[tokio::test]
    async fn test_update_missing_is_noop() {
        let store = store().await;
        store.create(&draft("A", 10)).await.unwrap();
        let before = store.list().await.unwrap();

        assert!(!store.update(UNSAVED_PRODUCT_ID, &draft("Ghost", 1)).await.unwrap());
        assert!(!store.update(999, &draft("Ghost", 1)).await.unwrap());

        assert_eq!(store.list().await.unwrap(), before);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete() {
        let store = store().await;
        let a = store.create(&draft("A", 10)).await.unwrap();
        store.create(&draft("B", 10)).await.unwrap();

        assert!(store.delete(a).await.unwrap());
        assert!(store.get_by_id(a).await.unwrap().is_none());
        assert_eq!(store.count().await.unwrap(), 1);

        assert!(!store.delete(a).await.unwrap());
        assert!(!store.delete(12345).await.unwrap());
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete_all_on_empty() {
        let store = store().await;
        assert_eq!(store.delete_all().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_low_stock_is_subset_of_list() {
        let store = store().await;
        for (name, qty) in [("Zero", 0), ("Four", 4), ("Five", 5), ("Six", 6), ("One", 1)] {
            store.create(&draft(name, qty)).await.unwrap();
        }

        let all = store.list().await.unwrap();
        let low = store.list_low_stock().await.unwrap();
        let expected: Vec<Product> = all.into_iter().filter(|p| p.quantity < 5).collect();

        assert_eq!(low, expected);
        let names: Vec<&str> = low.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Zero", "Four", "One"]);
    }

    #[tokio::test]
    async fn test_list_is_in_insertion_order() {
        let store = store().await;
        for name in ["C", "A", "B"] {
            store.create(&draft(name, 10)).await.unwrap();
        }

        let names: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[tokio::test]
    async fn test_search() {
        let store = store().await;
        for name in ["Widget", "SuperWidget", "Gadget"] {
            store.create(&draft(name, 10)).await.unwrap();
        }

        let hits: Vec<String> = store
            .search("wid")
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(hits, vec!["Widget", "SuperWidget"]);

        assert_eq!(store.search("").await.unwrap().len(), 3);
        assert_eq!(store.search("WIDGET").await.unwrap().len(), 2);
        assert!(store.search("sprocket").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_ignores_category_and_wildcards() {
        let store = store().await;
        store
            .create(&ProductDraft::new("Pen", "Widgets", 1.0, 1))
            .await
            .unwrap();
        store.create(&draft("100% Cotton", 1)).await.unwrap();
        store.create(&draft("1000 Cotton", 1)).await.unwrap();

        assert!(store.search("widget").await.unwrap().is_empty());

        let hits = store.search("100%").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "100% Cotton");

        assert!(store.search("_").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_folds_non_ascii_case() {
        let store = store().await;
        store.create(&draft("Éclair", 3)).await.unwrap();
        store.create(&draft("Ölfilter", 8)).await.unwrap();
        store.create(&draft("Straße Map", 2)).await.unwrap();

        let names = |hits: Vec<Product>| hits.into_iter().map(|p| p.name).collect::<Vec<_>>();

        assert_eq!(names(store.search("éclair").await.unwrap()), vec!["Éclair"]);
        assert_eq!(names(store.search("öl").await.unwrap()), vec!["Ölfilter"]);
        assert_eq!(names(store.search("ÖLF").await.unwrap()), vec!["Ölfilter"]);
        assert_eq!(names(store.search("STRASSE").await.unwrap()), Vec::<String>::new());
        assert_eq!(names(store.search("STRAßE").await.unwrap()), vec!["Straße Map"]);
    }

    #[tokio::test]
    async fn test_store_does_not_validate() {
        let store = store().await;
        let odd = ProductDraft::new("", "", -3.0, -7);

        let id = store.create(&odd).await.unwrap();
        assert_eq!(
            store.get_by_id(id).await.unwrap(),
            Some(Product::from_draft(id, odd))
        );
    }

    #[tokio::test]
    async fn test_stats() {
        let store = store().await;
        assert_eq!(store.stats().await.unwrap(), InventoryStats::default());

        store
            .create(&ProductDraft::new("Pen", "Stationery", 1.5, 10))
            .await
            .unwrap();
        store
            .create(&ProductDraft::new("Ink", "Stationery", 3.0, 2))
            .await
            .unwrap();

        let stats = store.stats().await.unwrap();
        assert_eq!(stats.total_products, 2);
        assert_eq!(stats.low_stock_count, 1);
        assert_eq!(stats.total_units, 12);
        assert!((stats.total_value - 21.0).abs() < 1e-9);

        let listed = store.list().await.unwrap();
        assert_eq!(stats, InventoryStats::from_products(&listed));
    }

    #[tokio::test]
    async fn test_stats_do_not_overflow() {
        let store = store().await;
        store.create(&draft("Huge", i64::MAX)).await.unwrap();
        store.create(&draft("One", 1)).await.unwrap();

        let stats = store.stats().await.unwrap();
        assert_eq!(stats.total_products, 2);
        assert_eq!(stats.low_stock_count, 1);
        assert_eq!(stats.total_units, i64::MAX);
        assert!(stats.total_value.is_finite());
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let store = store().await;

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.create(&draft(&format!("P{i}"), i)).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap());
        }
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 20);
        assert_eq!(store.count().await.unwrap(), 20);
    }

    #[tokio::test]
    async fn test_end_to_end_example() {
        let store = store().await;

        let pen = store
            .create(&ProductDraft::new("Pen", "Stationery", 1.50, 10))
            .await
            .unwrap();
        let ink = store
            .create(&ProductDraft::new("Ink", "Stationery", 3.00, 2))
            .await
            .unwrap();
        assert_eq!((pen, ink), (1, 2));

        assert_eq!(store.list().await.unwrap().len(), 2);

        let low = store.list_low_stock().await.unwrap();
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].id, 2);
        assert_eq!(low[0].quantity, 2);

        assert!(store
            .update(1, &ProductDraft::new("Pen", "Stationery", 1.75, 3))
            .await
            .unwrap());
        assert_eq!(store.get_by_id(1).await.unwrap().unwrap().price, 1.75);

        assert!(store.delete(2).await.unwrap());
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_data_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.db");

        let id = {
            let db = Database::new(DbConfig::new(&path)).await.unwrap();
            let id = db
                .products()
                .create(&ProductDraft::new("Pen", "Stationery", 1.5, 10))
                .await
                .unwrap();
            db.close().await;
            id
        };

        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        let pen = db.products().get_by_id(id).await.unwrap().unwrap();
        assert_eq!(pen.name, "Pen");
        assert_eq!(db.products().count().await.unwrap(), 1);

        let next = db.products().create(&draft("Ink", 2)).await.unwrap();
        assert!(next > id);
        db.close().await;
    }
}
