//! Command-line definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Manage a local product inventory.
#[derive(Debug, Parser)]
#[command(name = "inventory", version, about, long_about = None)]
pub struct Cli {
    /// Database file (defaults to the platform data directory)
    #[arg(long, global = true, env = "INVENTORY_DB_PATH", value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Symbol printed in front of prices
    #[arg(long, global = true, env = "INVENTORY_CURRENCY_SYMBOL", value_name = "SYMBOL")]
    pub currency: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Never colour output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log store activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a product
    Add(AddArgs),

    /// List products
    List {
        /// Only products with quantity below 5
        #[arg(long)]
        low_stock: bool,
    },

    /// Show one product
    Show {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// Change fields of a product; omitted fields keep their value
    Edit(EditArgs),

    /// Delete a product
    Remove {
        #[arg(allow_negative_numbers = true)]
        id: i64,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Delete every product
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Find products whose name contains a term (case-insensitive)
    Search {
        /// Empty term lists everything
        #[arg(default_value = "")]
        term: String,
    },

    /// Totals and low-stock count
    Stats,

    /// Load the sample catalogue into an empty inventory
    Seed {
        /// Clear existing products first
        #[arg(long)]
        reset: bool,
    },
}

/// Raw text for a new product; validated before it reaches the store.
#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub category: String,

    #[arg(long, allow_hyphen_values = true)]
    pub price: String,

    #[arg(long, allow_hyphen_values = true)]
    pub quantity: String,
}

#[derive(Debug, Clone, Args)]
pub struct EditArgs {
    #[arg(allow_negative_numbers = true)]
    pub id: i64,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub quantity: Option<String>,
}
