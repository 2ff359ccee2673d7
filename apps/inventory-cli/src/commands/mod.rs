//! # Commands Module
//!
//! One handler per subcommand.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (dispatch)
//! ├── product.rs  ◄─── add, list, show, edit, remove, clear, search, stats
//! └── seed.rs     ◄─── sample catalogue
//! ```
//!
//! ## Handler Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  async fn handler(db: &Database, config: &AppConfig, ..args)            │
//! │      -> AppResult<String>                                               │
//! │                                                                         │
//! │  Ok(text)  ──► printed to stdout (text or JSON per config)              │
//! │  Err(e)    ──► reported by run() with e.exit_code()                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod product;
pub mod seed;

use inventory_db::Database;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::error::AppResult;

/// Runs one parsed command against an open database.
pub async fn execute(command: &Command, config: &AppConfig, db: &Database) -> AppResult<String> {
    match command {
        Command::Add(args) => product::add_product(db, config, args).await,
        Command::List { low_stock } => product::list_products(db, config, *low_stock).await,
        Command::Show { id } => product::show_product(db, config, *id).await,
        Command::Edit(args) => product::edit_product(db, config, args).await,
        Command::Remove { id, yes } => product::remove_product(db, config, *id, *yes).await,
        Command::Clear { yes } => product::clear_products(db, config, *yes).await,
        Command::Search { term } => product::search_products(db, config, term).await,
        Command::Stats => product::inventory_stats(db, config).await,
        Command::Seed { reset } => seed::seed_products(db, config, *reset).await,
    }
}
