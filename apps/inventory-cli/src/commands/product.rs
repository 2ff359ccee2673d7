//! # Product Commands
//!
//! Handlers for the product subcommands.
//!
//! ## Add / Edit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  --name/--category/--price/--quantity (raw text)                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductForm ──► validate_product_form ──► ProductDraft                 │
//! │       │               │                                                 │
//! │       │               └── first bad field ──► VALIDATION_ERROR          │
//! │       ▼                                                                 │
//! │  ProductStore::create / update                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Saved product rendered back to the user                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Edit pre-fills the form from the stored record, so omitted flags keep
//! their current value and the merged result is validated as a whole.

use inventory_core::validation::{validate_product_form, validate_search_term, ProductForm};
use inventory_core::Product;
use inventory_db::Database;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::cli::{AddArgs, EditArgs};
use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::render;

/// Validates raw input and stores a new product.
pub async fn add_product(db: &Database, config: &AppConfig, args: &AddArgs) -> AppResult<String> {
    let form = ProductForm::new(
        args.name.as_str(),
        args.category.as_str(),
        args.price.as_str(),
        args.quantity.as_str(),
    );
    let draft = validate_product_form(&form)?;

    let id = db.products().create(&draft).await?;
    let product = Product::from_draft(id, draft);

    info!(id = id, name = %product.name, "Product added");

    if config.is_json() {
        return render::json(&product);
    }

    Ok(format!(
        "Added product {}\n\n{}",
        id,
        render::product_detail(&product, config)
    ))
}

/// Lists every product, or only low-stock ones.
pub async fn list_products(db: &Database, config: &AppConfig, low_stock: bool) -> AppResult<String> {
    let store = db.products();
    let products = if low_stock {
        store.list_low_stock().await?
    } else {
        store.list().await?
    };

    debug!(count = products.len(), low_stock = low_stock, "list_products");

    if config.is_json() {
        return render::json(&products);
    }

    let empty = if low_stock {
        "All products are sufficiently stocked"
    } else {
        "No products yet. Add one with `inventory add` or load samples with `inventory seed`"
    };

    Ok(render::products_table(&products, config, empty))
}

/// Shows one product.
pub async fn show_product(db: &Database, config: &AppConfig, id: i64) -> AppResult<String> {
    let product = db
        .products()
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::product_not_found(id))?;

    if config.is_json() {
        return render::json(&product);
    }

    Ok(render::product_detail(&product, config))
}

/// Replaces the given fields of a stored product.
///
/// ## Returns
/// The product as stored after the update, or NOT_FOUND when no record
/// has that id (including one deleted between the read and the write).
pub async fn edit_product(db: &Database, config: &AppConfig, args: &EditArgs) -> AppResult<String> {
    let store = db.products();
    let current = store
        .get_by_id(args.id)
        .await?
        .ok_or_else(|| AppError::product_not_found(args.id))?;

    let mut form = ProductForm::from_draft(&current.to_draft());
    if let Some(name) = &args.name {
        form.name = name.clone();
    }
    if let Some(category) = &args.category {
        form.category = category.clone();
    }
    if let Some(price) = &args.price {
        form.price = price.clone();
    }
    if let Some(quantity) = &args.quantity {
        form.quantity = quantity.clone();
    }

    let draft = validate_product_form(&form)?;

    if !store.update(args.id, &draft).await? {
        return Err(AppError::product_not_found(args.id));
    }

    let product = Product::from_draft(args.id, draft);
    info!(id = args.id, "Product updated");

    if config.is_json() {
        return render::json(&product);
    }

    Ok(format!(
        "Updated product {}\n\n{}",
        args.id,
        render::product_detail(&product, config)
    ))
}

/// Deletes one product. Requires `--yes`.
pub async fn remove_product(
    db: &Database,
    config: &AppConfig,
    id: i64,
    yes: bool,
) -> AppResult<String> {
    if !yes {
        return Err(AppError::confirmation_required(&format!(
            "delete product {}",
            id
        )));
    }

    if !db.products().delete(id).await? {
        return Err(AppError::product_not_found(id));
    }

    info!(id = id, "Product removed");

    if config.is_json() {
        return render::json(&json!({ "deleted": id }));
    }

    Ok(format!("Deleted product {}", id))
}

/// Deletes every product. Requires `--yes`.
pub async fn clear_products(db: &Database, config: &AppConfig, yes: bool) -> AppResult<String> {
    if !yes {
        return Err(AppError::confirmation_required("delete all products"));
    }

    let store = db.products();
    let deleted = if store.count().await? == 0 {
        0
    } else {
        store.delete_all().await?
    };

    info!(deleted = deleted, "Inventory cleared");

    if config.is_json() {
        return render::json(&json!({ "deleted": deleted }));
    }

    if deleted == 0 {
        Ok("No products to clear".to_string())
    } else {
        Ok(format!("Deleted {} products", deleted))
    }
}

/// Case-insensitive name search. An empty term lists everything.
pub async fn search_products(db: &Database, config: &AppConfig, term: &str) -> AppResult<String> {
    let term = validate_search_term(term)?;
    let products = db.products().search(&term).await?;

    debug!(term = %term, count = products.len(), "search_products");

    if config.is_json() {
        return render::json(&products);
    }

    Ok(render::products_table(
        &products,
        config,
        &format!("No products match '{}'", term),
    ))
}

/// Dashboard totals with a restock warning.
pub async fn inventory_stats(db: &Database, config: &AppConfig) -> AppResult<String> {
    let stats = db.products().stats().await?;

    if stats.has_low_stock() {
        warn!(count = stats.low_stock_count, "Products below the low-stock threshold");
    }

    if config.is_json() {
        return render::json(&stats);
    }

    Ok(render::stats(&stats, config))
}

// =============================================================================
// Unit Tests
// =============================================================================
