//! # Validation Module
//!
//! Turns raw form input into a [`ProductDraft`].
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end                                                    │
//! │  ├── Collects raw text (ProductForm)                                   │
//! │  └── THIS MODULE: required / numeric / non-negative checks             │
//! │           │                                                             │
//! │           ▼  ProductDraft (typed, trusted from here on)                 │
//! │  Layer 2: ProductStore                                                 │
//! │  └── No checks. Persists whatever well-typed values it is given.       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: SQLite                                                       │
//! │  └── NOT NULL constraints                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use inventory_core::validation::{validate_product_form, ProductForm};
//!
//! let form = ProductForm::new("  Ink ", "Stationery", "3.00", "2");
//! let draft = validate_product_form(&form).unwrap();
//! assert_eq!(draft.name, "Ink");
//!
//! let bad = ProductForm::new("Ink", "Stationery", "-1", "2");
//! assert!(validate_product_form(&bad).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::ProductDraft;
use crate::{MAX_QUANTITY, MAX_SEARCH_TERM_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Product Form
// =============================================================================

/// Raw, untrusted text for the four editable product fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub price: String,
    pub quantity: String,
}

impl ProductForm {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        ProductForm {
            name: name.into(),
            category: category.into(),
            price: price.into(),
            quantity: quantity.into(),
        }
    }

    /// Pre-fills a form from a draft, for editing an existing record.
    pub fn from_draft(draft: &ProductDraft) -> Self {
        ProductForm {
            name: draft.name.clone(),
            category: draft.category.clone(),
            price: draft.price.to_string(),
            quantity: draft.quantity.to_string(),
        }
    }
}

/// Validates every field of a form and builds a draft.
///
/// ## Rules
/// Checked in order name, category, price, quantity; the first failure wins.
/// - name, category: required after trimming
/// - price: required, finite decimal, `>= 0`
/// - quantity: required, integer, `0..=MAX_QUANTITY`
pub fn validate_product_form(form: &ProductForm) -> ValidationResult<ProductDraft> {
    let name = validate_product_name(&form.name)?;
    let category = validate_category(&form.category)?;
    let price = parse_price(&form.price)?;
    let quantity = parse_quantity(&form.quantity)?;

    Ok(ProductDraft {
        name,
        category,
        price,
        quantity,
    })
}

/// Re-checks an already-typed draft (e.g. one assembled from CLI flags).
pub fn validate_draft(draft: &ProductDraft) -> ValidationResult<()> {
    validate_product_name(&draft.name)?;
    validate_category(&draft.category)?;
    validate_price(draft.price)?;
    validate_quantity(draft.quantity)?;
    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

fn required(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(value.to_string())
}

/// Validates a product name. Returns the trimmed name.
///
/// ## Example
/// ```rust
/// use inventory_core::validation::validate_product_name;
///
/// assert_eq!(validate_product_name(" Pen ").unwrap(), "Pen");
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    required("name", name)
}

/// Validates a category. Returns the trimmed category.
pub fn validate_category(category: &str) -> ValidationResult<String> {
    required("category", category)
}

/// Validates a search term.
///
/// ## Rules
/// - Can be empty (matches every product)
/// - At most [`MAX_SEARCH_TERM_LEN`] characters
///
/// ## Returns
/// The trimmed term.
pub fn validate_search_term(term: &str) -> ValidationResult<String> {
    let term = term.trim();

    if term.chars().count() > MAX_SEARCH_TERM_LEN {
        return Err(ValidationError::TooLong {
            field: "search term".to_string(),
            max: MAX_SEARCH_TERM_LEN,
        });
    }

    Ok(term.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses and validates a price.
///
/// ## Example
/// ```rust
/// use inventory_core::validation::parse_price;
///
/// assert_eq!(parse_price("1.75").unwrap(), 1.75);
/// assert_eq!(parse_price("0").unwrap(), 0.0);   // free item
/// assert!(parse_price("-1").is_err());
/// assert!(parse_price("abc").is_err());
/// ```
pub fn parse_price(raw: &str) -> ValidationResult<f64> {
    let text = required("price", raw)?;

    let price: f64 = text.parse().map_err(|_| ValidationError::InvalidNumber {
        field: "price".to_string(),
        value: text.clone(),
    })?;

    // "inf" and "NaN" parse fine but are not prices
    if !price.is_finite() {
        return Err(ValidationError::InvalidNumber {
            field: "price".to_string(),
            value: text,
        });
    }

    validate_price(price)?;
    Ok(price)
}

/// Parses and validates a quantity.
pub fn parse_quantity(raw: &str) -> ValidationResult<i64> {
    let text = required("quantity", raw)?;

    let quantity: i64 = text.parse().map_err(|_| ValidationError::InvalidNumber {
        field: "quantity".to_string(),
        value: text.clone(),
    })?;

    validate_quantity(quantity)?;
    Ok(quantity)
}

/// Validates a typed price: finite and `>= 0`.
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::InvalidNumber {
            field: "price".to_string(),
            value: price.to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a typed quantity: `0..=MAX_QUANTITY`. Zero is allowed (out of stock).
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
        });
    }

    if quantity > MAX_QUANTITY {
        return Err(ValidationError::TooLarge {
            field: "quantity".to_string(),
            max: MAX_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
