//! # Inventory CLI Entry Point
//!
//! ```text
//! inventory add --name Pen --category Office --price 1.50 --quantity 10
//! inventory list --low-stock
//! inventory search pen --json
//! inventory stats
//! ```
//!
//! The actual setup is in lib.rs so it can be tested.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    inventory_cli::run().await
}
