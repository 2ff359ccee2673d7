//! # inventory-core: Pure Domain Logic for the Inventory System
//!
//! This crate holds the product model and the input rules that guard it.
//! It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Inventory Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Front end (inventory-cli)                       │   │
//! │  │    collects input ──► validates ──► calls store ──► renders     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ inventory-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────────────┐   ┌─────────────────┐   ┌─────────────┐  │   │
//! │  │   │      types      │   │   validation    │   │    error    │  │   │
//! │  │   │  Product        │   │  ProductForm    │   │ Validation  │  │   │
//! │  │   │  ProductDraft   │   │  field checks   │   │   Error     │  │   │
//! │  │   │  InventoryStats │   │                 │   │             │  │   │
//! │  │   └─────────────────┘   └─────────────────┘   └─────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                inventory-db (ProductStore)                      │   │
//! │  │              SQLite queries, migrations                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductDraft, InventoryStats)
//! - [`error`] - Validation error types
//! - [`validation`] - Form validation run by the front end
//!
//! ## Example Usage
//!
//! ```rust
//! use inventory_core::validation::{validate_product_form, ProductForm};
//!
//! let form = ProductForm::new("Pen", "Stationery", "1.50", "3");
//! let draft = validate_product_form(&form).unwrap();
//!
//! assert_eq!(draft.quantity, 3);
//! assert!(draft.is_low_stock());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Quantity below which a product counts as low stock.
///
/// Display-only: the rule never changes what gets persisted.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Sentinel id for callers that need a placeholder before a product is saved.
///
/// The store assigns real ids starting at 1, so this never collides.
pub const UNSAVED_PRODUCT_ID: i64 = -1;

/// Largest accepted quantity (the range of a 32-bit stock counter).
///
/// Keeps sums over the whole inventory far from `i64` overflow.
pub const MAX_QUANTITY: i64 = i32::MAX as i64;

/// Maximum accepted length of a search term, in characters.
pub const MAX_SEARCH_TERM_LEN: usize = 100;

/// Returns `true` when `quantity` is below [`LOW_STOCK_THRESHOLD`].
#[inline]
pub const fn is_low_stock(quantity: i64) -> bool {
    quantity < LOW_STOCK_THRESHOLD
}
