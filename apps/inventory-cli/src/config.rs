//! # Configuration
//!
//! Resolved settings for one CLI invocation.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--db`, `--currency`, `--json`, `--no-color`)
//! 2. Environment variables (`INVENTORY_DB_PATH`, `INVENTORY_CURRENCY_SYMBOL`),
//!    read by clap as fallbacks for the flags
//! 3. Defaults (this file): platform data directory, `$`
//!
//! Read-only after resolution.

use directories::ProjectDirs;
use inventory_db::DbConfig;
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;
use crate::error::{AppError, AppResult};

/// File name used inside the data directory.
pub const DEFAULT_DB_FILE: &str = "inventory.db";

/// Currency symbol used when none is configured.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// How long one invocation waits for a database connection before giving up.
pub const CLI_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned text for people.
    #[default]
    Text,
    /// Pretty-printed JSON for scripts.
    Json,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite file the store lives in.
    pub database_path: PathBuf,

    /// Printed before prices. Display only; prices are stored as plain numbers.
    pub currency_symbol: String,

    /// Text or JSON output.
    pub output: OutputFormat,

    /// Whether text output may be coloured. Colour is still only emitted
    /// when stdout supports it.
    pub color: bool,
}

impl Default for AppConfig {
    /// Defaults for tests and embedding: in-memory database, `$`, text output.
    fn default() -> Self {
        AppConfig {
            database_path: DbConfig::in_memory().database_path,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            output: OutputFormat::Text,
            color: false,
        }
    }
}

impl AppConfig {
    /// Resolves configuration from parsed arguments (which already include
    /// environment fallbacks) and platform defaults.
    pub fn resolve(cli: &Cli) -> AppResult<Self> {
        let database_path = match &cli.db {
            Some(path) => path.clone(),
            None => default_database_path()?,
        };

        let currency_symbol = cli
            .currency
            .clone()
            .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string());

        let output = if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        let color = output == OutputFormat::Text && !cli.no_color;

        Ok(AppConfig {
            database_path,
            currency_symbol,
            output,
            color,
        })
    }

    /// Store configuration for this invocation.
    ///
    /// A CLI run issues one command at a time, so a small pool is enough,
    /// and a locked database file should fail fast rather than hang.
    pub fn db_config(&self) -> DbConfig {
        let config = DbConfig::new(&self.database_path);
        if config.is_in_memory() {
            DbConfig::in_memory()
        } else {
            config
                .max_connections(2)
                .connect_timeout(CLI_CONNECT_TIMEOUT)
        }
    }

    /// Formats a price for display, e.g. `$1.75`.
    pub fn format_price(&self, price: f64) -> String {
        if price < 0.0 {
            format!("-{}{:.2}", self.currency_symbol, -price)
        } else {
            format!("{}{:.2}", self.currency_symbol, price)
        }
    }

    /// Whether results should be printed as JSON.
    pub fn is_json(&self) -> bool {
        self.output == OutputFormat::Json
    }
}

/// Determines the database file path based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.inventory.inventory/inventory.db`
/// - **Windows**: `%APPDATA%\inventory\inventory\data\inventory.db`
/// - **Linux**: `~/.local/share/inventory/inventory.db`
///
/// The directory is created if missing.
pub fn default_database_path() -> AppResult<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "inventory", "inventory")
        .ok_or_else(|| AppError::config("Could not determine app data directory; pass --db"))?;

    let data_dir = proj_dirs.data_dir();

    std::fs::create_dir_all(data_dir).map_err(|e| {
        AppError::config(format!(
            "Could not create data directory {}: {}",
            data_dir.display(),
            e
        ))
    })?;

    Ok(data_dir.join(DEFAULT_DB_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_format_price() {
        let config = AppConfig::default();
        assert_eq!(config.format_price(1.5), "$1.50");
        assert_eq!(config.format_price(0.0), "$0.00");
        assert_eq!(config.format_price(999.999), "$1000.00");
        assert_eq!(config.format_price(-2.0), "-$2.00");
    }

    #[test]
    fn test_custom_currency_symbol() {
        let config = AppConfig {
            currency_symbol: "₹".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.format_price(3.0), "₹3.00");
    }

    #[test]
    fn test_resolve_from_flags() {
        let cli = Cli::try_parse_from([
            "inventory",
            "--db",
            "/tmp/stock.db",
            "--currency",
            "€",
            "--json",
            "stats",
        ])
        .unwrap();

        let config = AppConfig::resolve(&cli).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/tmp/stock.db"));
        assert_eq!(config.currency_symbol, "€");
        assert!(config.is_json());

        let db_config = config.db_config();
        assert!(!db_config.is_in_memory());
        assert_eq!(db_config.max_connections, 2);
        assert_eq!(db_config.connect_timeout, CLI_CONNECT_TIMEOUT);
        assert!(!config.color);
    }

    #[test]
    fn test_resolve_color() {
        let cli = Cli::try_parse_from(["inventory", "--db", "/tmp/stock.db", "list"]).unwrap();
        assert!(AppConfig::resolve(&cli).unwrap().color);

        let cli = Cli::try_parse_from(["inventory", "--db", "/tmp/stock.db", "--no-color", "list"])
            .unwrap();
        assert!(!AppConfig::resolve(&cli).unwrap().color);
    }

    #[test]
    fn test_default_config_is_in_memory() {
        let config = AppConfig::default();
        assert!(config.db_config().is_in_memory());
        assert!(!config.is_json());
    }
}
