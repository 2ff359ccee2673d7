//! # Rendering
//!
//! Turns store results into text or JSON.
//!
//! ## Low-Stock Emphasis
//! ```text
//!   ID  NAME   CATEGORY    PRICE  QTY  STATUS
//!   1   Pen    Stationery  $1.50  10   In Stock
//! ! 2   Ink    Stationery  $3.00  2    Low Stock
//! ^
//! └── rows below the threshold are flagged
//! ```
//!
//! With colour enabled and a colour-capable stdout, flagged rows are also
//! painted red and the stats warning yellow. The `!` marker stays either way.

use inventory_core::{InventoryStats, Product, LOW_STOCK_THRESHOLD};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::config::AppConfig;
use crate::error::AppResult;

const HEADERS: [&str; 6] = ["ID", "NAME", "CATEGORY", "PRICE", "QTY", "STATUS"];

/// Pretty-printed JSON for any serializable result.
pub fn json<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Renders products as an aligned table, or `empty_message` when there are none.
pub fn products_table(products: &[Product], config: &AppConfig, empty_message: &str) -> String {
    if products.is_empty() {
        return empty_message.to_string();
    }

    let rows: Vec<[String; 6]> = products
        .iter()
        .map(|p| {
            [
                p.id.to_string(),
                p.name.clone(),
                p.category.clone(),
                config.format_price(p.price),
                p.quantity.to_string(),
                p.stock_status().label().to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_row(' ', &HEADERS.map(str::to_string), &widths));
    for (product, row) in products.iter().zip(rows.iter()) {
        if product.is_low_stock() {
            lines.push(paint_low_stock(format_row('!', row, &widths), config));
        } else {
            lines.push(format_row(' ', row, &widths));
        }
    }

    lines.join("\n")
}

fn format_row(marker: char, cells: &[String; 6], widths: &[usize; 6]) -> String {
    let body: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();

    format!("{} {}", marker, body.join("  ")).trim_end().to_string()
}

/// Renders a single product as labelled lines.
pub fn product_detail(product: &Product, config: &AppConfig) -> String {
    let mut lines = vec![
        format!("ID:       {}", product.id),
        format!("Name:     {}", product.name),
        format!("Category: {}", product.category),
        format!("Price:    {}", config.format_price(product.price)),
        format!("Quantity: {}", product.quantity),
        format!("Status:   {}", product.stock_status().label()),
    ];

    if product.is_low_stock() {
        lines.push(format!(
            "Restock soon: quantity is below {}",
            LOW_STOCK_THRESHOLD
        ));
    }

    lines.join("\n")
}

/// Renders dashboard totals.
pub fn stats(stats: &InventoryStats, config: &AppConfig) -> String {
    let mut lines = vec![
        format!("Total products: {}", stats.total_products),
        format!("Low stock:      {}", stats.low_stock_count),
        format!("Units on hand:  {}", stats.total_units),
        format!("Stock value:    {}", config.format_price(stats.total_value)),
    ];

    if stats.has_low_stock() {
        lines.push(String::new());
        lines.push(paint_warning(low_stock_warning(stats.low_stock_count), config));
    }

    lines.join("\n")
}

/// Warning line shown when products need restocking.
pub fn low_stock_warning(count: i64) -> String {
    format!(
        "WARNING: {} product(s) have low stock (quantity < {})",
        count, LOW_STOCK_THRESHOLD
    )
}

fn paint_low_stock(line: String, config: &AppConfig) -> String {
    if !config.color {
        return line;
    }
    line.if_supports_color(Stream::Stdout, |text| text.red())
        .to_string()
}

fn paint_warning(line: String, config: &AppConfig) -> String {
    if !config.color {
        return line;
    }
    line.if_supports_color(Stream::Stdout, |text| text.yellow())
        .to_string()
}
