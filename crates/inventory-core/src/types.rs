//! # Domain Types
//!
//! Core domain types used throughout the inventory system.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐  create   ┌─────────────────┐                     │
//! │  │  ProductDraft   │ ────────► │    Product      │                     │
//! │  │  ─────────────  │           │  ─────────────  │                     │
//! │  │  name           │ ◄──────── │  id (store)     │                     │
//! │  │  category       │  to_draft │  name           │                     │
//! │  │  price          │           │  category       │                     │
//! │  │  quantity       │           │  price          │                     │
//! │  └─────────────────┘           │  quantity       │                     │
//! │                                └─────────────────┘                     │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │ InventoryStats  │   │  StockStatus    │                             │
//! │  │  totals for the │   │  InStock        │                             │
//! │  │  dashboard      │   │  LowStock (<5)  │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! A product has no id until the store assigns one. Unsaved data travels as
//! [`ProductDraft`]; only the store hands out [`Product`] values.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::is_low_stock;

// =============================================================================
// Product Draft
// =============================================================================

/// Product fields as entered by a user, before the store assigns an id.
///
/// Also the payload of an update: every field except `id` is replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: i64,
}

impl ProductDraft {
    /// Creates a draft from already-typed values.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> Self {
        ProductDraft {
            name: name.into(),
            category: category.into(),
            price,
            quantity,
        }
    }

    /// Whether this draft would be shown as low stock once saved.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        is_low_stock(self.quantity)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A persisted inventory record.
///
/// Values are owned copies: editing one changes nothing in the store until
/// it is written back with an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Product {
    /// Store-assigned identifier, unique and never reused.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Free-text category (e.g. "Stationery").
    pub category: String,

    /// Unit price. Plain floating point, no currency rounding.
    pub price: f64,

    /// Units on hand.
    pub quantity: i64,
}

impl Product {
    /// Builds a product from a draft and the id the store assigned to it.
    pub fn from_draft(id: i64, draft: ProductDraft) -> Self {
        Product {
            id,
            name: draft.name,
            category: draft.category,
            price: draft.price,
            quantity: draft.quantity,
        }
    }

    /// Copies the editable fields out as a draft (for pre-filling an edit).
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            category: self.category.clone(),
            price: self.price,
            quantity: self.quantity,
        }
    }

    /// Derived on read; never stored.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        is_low_stock(self.quantity)
    }

    /// Display status for list rendering.
    #[inline]
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::for_quantity(self.quantity)
    }

    /// Price × quantity.
    #[inline]
    pub fn stock_value(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

// =============================================================================
// Stock Status
// =============================================================================

/// Display emphasis for a product row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// Quantity at or above the threshold.
    InStock,
    /// Quantity below the threshold; rendered highlighted.
    LowStock,
}

impl StockStatus {
    /// Classifies a quantity.
    pub const fn for_quantity(quantity: i64) -> Self {
        if is_low_stock(quantity) {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Short human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
        }
    }
}

// =============================================================================
// Inventory Stats
// =============================================================================

/// Dashboard totals across the whole inventory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct InventoryStats {
    /// Number of product records.
    pub total_products: i64,

    /// Number of records with quantity below the low-stock threshold.
    pub low_stock_count: i64,

    /// Sum of all quantities.
    pub total_units: i64,

    /// Sum of price × quantity.
    pub total_value: f64,
}

impl InventoryStats {
    /// Folds a product list into totals.
    ///
    /// `total_units` saturates at `i64::MAX` instead of overflowing.
    ///
    /// The store computes the same numbers in SQL; this is for callers that
    /// already hold a list (and for checking the two agree).
    pub fn from_products<'a>(products: impl IntoIterator<Item = &'a Product>) -> Self {
        products
            .into_iter()
            .fold(InventoryStats::default(), |mut stats, p| {
                stats.total_products += 1;
                if p.is_low_stock() {
                    stats.low_stock_count += 1;
                }
                stats.total_units = stats.total_units.saturating_add(p.quantity);
                stats.total_value += p.stock_value();
                stats
            })
    }

    /// Whether anything needs restocking.
    #[inline]
    pub fn has_low_stock(&self) -> bool {
        self.low_stock_count > 0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, quantity: i64) -> Product {
        Product::from_draft(id, ProductDraft::new(name, "Misc", 2.5, quantity))
    }

    #[test]
    fn test_low_stock_boundary() {
        assert!(product(1, "A", 0).is_low_stock());
        assert!(product(1, "A", 4).is_low_stock());
        assert!(!product(1, "A", 5).is_low_stock());
        assert!(!product(1, "A", 50).is_low_stock());
    }

    #[test]
    fn test_stock_status() {
        assert_eq!(product(1, "A", 4).stock_status(), StockStatus::LowStock);
        assert_eq!(product(1, "A", 5).stock_status(), StockStatus::InStock);
        assert_eq!(StockStatus::LowStock.label(), "Low Stock");
    }

    #[test]
    fn test_draft_round_trip_keeps_fields() {
        let draft = ProductDraft::new("Pen", "Stationery", 1.5, 10);
        let saved = Product::from_draft(7, draft.clone());

        assert_eq!(saved.id, 7);
        assert_eq!(saved.to_draft(), draft);
    }

    #[test]
    fn test_editing_a_copy_leaves_original_alone() {
        let original = product(1, "Pen", 10);
        let mut copy = original.clone();
        copy.quantity = 0;

        assert_eq!(original.quantity, 10);
    }

    #[test]
    fn test_stats_from_products() {
        let items = vec![product(1, "A", 4), product(2, "B", 5), product(3, "C", 1)];
        let stats = InventoryStats::from_products(&items);

        assert_eq!(stats.total_products, 3);
        assert_eq!(stats.low_stock_count, 2);
        assert_eq!(stats.total_units, 10);
        assert!((stats.total_value - 25.0).abs() < 1e-9);
        assert!(stats.has_low_stock());
    }

    #[test]
    fn test_stats_units_saturate() {
        let items = vec![product(1, "A", i64::MAX), product(2, "B", 1)];
        let stats = InventoryStats::from_products(&items);

        assert_eq!(stats.total_products, 2);
        assert_eq!(stats.total_units, i64::MAX);
    }

    #[test]
    fn test_stats_empty() {
        let stats = InventoryStats::from_products(Vec::<Product>::new().iter());
        assert_eq!(stats, InventoryStats::default());
        assert!(!stats.has_low_stock());
    }

    #[test]
    fn test_stock_status_serializes_snake_case() {
        let json = serde_json::to_string(&StockStatus::LowStock).unwrap();
        assert_eq!(json, "\"low_stock\"");
    }
}
