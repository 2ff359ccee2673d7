//! # Inventory CLI Library
//!
//! Wires argument parsing, configuration, logging and the product store
//! together for the `inventory` binary.
//!
//! ## Startup Sequence
//! 1. Parse arguments (clap, with environment fallbacks)
//! 2. Initialize tracing (stderr)
//! 3. Resolve configuration (database path, currency, output format)
//! 4. Open the database & run migrations
//! 5. Execute the command
//! 6. Print the result or the error, close the pool, exit
//!
//! ## Output Channels
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │  stdout  ◄── command result (text, or JSON with --json)        │
//! │              error payload {"code","message"} with --json      │
//! │  stderr  ◄── logs (tracing), text-mode error messages          │
//! └────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;

use clap::Parser;
use inventory_db::Database;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

pub use commands::execute;

/// Parses arguments, runs one command and reports the outcome.
pub async fn run() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let json_errors = cli.json;
    match run_cli(&cli).await {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_error(&err, json_errors);
            ExitCode::from(err.exit_code())
        }
    }
}

/// Resolves configuration, opens the store and executes the command.
pub async fn run_cli(cli: &Cli) -> AppResult<String> {
    let config = AppConfig::resolve(cli)?;

    info!(path = %config.database_path.display(), "Opening inventory database");
    let db = Database::new(config.db_config()).await?;

    let result = execute(&cli.command, &config, &db).await;

    db.close().await;
    debug!("Database closed");

    result
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or
/// store activity with `--verbose`.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "info,inventory_db=debug,inventory_cli=debug,sqlx=warn"
    } else {
        "warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn report_error(err: &AppError, json: bool) {
    if json {
        match serde_json::to_string_pretty(err) {
            Ok(payload) => println!("{}", payload),
            Err(_) => eprintln!("error: {}", err),
        }
    } else {
        eprintln!("error: {}", err);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use tempfile::TempDir;

    fn parse(dir: &TempDir, args: &[&str]) -> Cli {
        let db_path = dir.path().join("inventory.db");
        let db_arg = db_path.to_string_lossy().into_owned();

        let mut argv = vec!["inventory".to_string(), "--db".to_string(), db_arg];
        argv.extend(args.iter().map(|a| a.to_string()));
        Cli::try_parse_from(argv).unwrap()
    }

    #[tokio::test]
    async fn test_products_survive_between_invocations() {
        let dir = TempDir::new().unwrap();

        run_cli(&parse(
            &dir,
            &["add", "--name", "Pen", "--category", "Office", "--price", "1.5", "--quantity", "10"],
        ))
        .await
        .unwrap();

        let out = run_cli(&parse(&dir, &["show", "1"])).await.unwrap();
        assert!(out.contains("Name:     Pen"));
        assert!(out.contains("Price:    $1.50"));
    }

    #[tokio::test]
    async fn test_not_found_exit_code() {
        let dir = TempDir::new().unwrap();

        let err = run_cli(&parse(&dir, &["show", "99"])).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.exit_code(), 3);
    }

    #[tokio::test]
    async fn test_seed_then_low_stock_json() {
        let dir = TempDir::new().unwrap();

        run_cli(&parse(&dir, &["seed"])).await.unwrap();
        let out = run_cli(&parse(&dir, &["list", "--low-stock", "--json"]))
            .await
            .unwrap();

        let products: Vec<inventory_core::Product> = serde_json::from_str(&out).unwrap();
        assert!(!products.is_empty());
        assert!(products.iter().all(|p| p.quantity < 5));
    }
}
