//! # CLI Error Type
//!
//! Unified error type for front-end commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow                                           │
//! │                                                                         │
//! │  Command handler  →  AppResult<String>                                  │
//! │       │                                                                 │
//! │       ├── ValidationError ──► VALIDATION_ERROR (exit 2)                 │
//! │       ├── store said None/false ──► NOT_FOUND (exit 3)                  │
//! │       ├── DbError ──► DATABASE_ERROR (exit 4)                           │
//! │       ├── bad config ──► CONFIG_ERROR (exit 5)                          │
//! │       └── missing --yes ──► CONFIRMATION_REQUIRED (exit 6)              │
//! │                                                                         │
//! │  Text mode: message on stderr                                          │
//! │  --json:    {"code": "...", "message": "..."} on stdout                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use inventory_core::ValidationError;
use inventory_db::DbError;
use serde::Serialize;
use thiserror::Error;

/// Error returned from a command.
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct AppError {
    /// Machine-readable error code for scripts
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No product with the requested id
    NotFound,

    /// Form input rejected before reaching the store
    ValidationError,

    /// The store could not complete the operation
    DatabaseError,

    /// Configuration could not be resolved
    ConfigError,

    /// A destructive command was run without `--yes`
    ConfirmationRequired,

    /// Anything else (e.g. output serialization)
    Internal,
}

impl ErrorCode {
    /// Process exit code for this error.
    pub const fn exit_code(&self) -> u8 {
        match self {
            ErrorCode::Internal => 1,
            ErrorCode::ValidationError => 2,
            ErrorCode::NotFound => 3,
            ErrorCode::DatabaseError => 4,
            ErrorCode::ConfigError => 5,
            ErrorCode::ConfirmationRequired => 6,
        }
    }
}

impl AppError {
    /// Creates a new error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error for a product id.
    pub fn product_not_found(id: i64) -> Self {
        AppError::new(ErrorCode::NotFound, format!("Product not found: {}", id))
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ConfigError, message)
    }

    /// Creates a confirmation-required error for a destructive action.
    pub fn confirmation_required(action: &str) -> Self {
        AppError::new(
            ErrorCode::ConfirmationRequired,
            format!("Refusing to {} without --yes", action),
        )
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        self.code.exit_code()
    }
}

/// Converts storage faults to command errors.
impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        // Keep the detail in the log, give the user something short
        tracing::error!(error = %err, "Store operation failed");

        let message = match err {
            DbError::ConnectionFailed(_) => "Could not open the inventory database",
            DbError::MigrationFailed(_) => "Inventory database schema could not be upgraded",
            DbError::PoolExhausted => "Inventory database is busy",
            DbError::QueryFailed(_) | DbError::Internal(_) => "Inventory database operation failed",
        };

        AppError::new(ErrorCode::DatabaseError, message)
    }
}

/// Converts validation errors to command errors.
impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::new(ErrorCode::ValidationError, err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::internal(format!("Could not encode output: {}", err))
    }
}

/// Result type for commands.
pub type AppResult<T> = Result<T, AppError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_keeps_message() {
        let err: AppError = ValidationError::Negative {
            field: "price".to_string(),
        }
        .into();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.to_string(), "price cannot be negative");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_db_error_hides_detail() {
        let err: AppError = DbError::QueryFailed("disk I/O error".to_string()).into();

        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(!err.message.contains("disk"));
    }

    #[test]
    fn test_not_found_is_distinct_from_fault() {
        let missing = AppError::product_not_found(9);
        let broken: AppError = DbError::PoolExhausted.into();

        assert_ne!(missing.code, broken.code);
        assert_ne!(missing.exit_code(), broken.exit_code());
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(AppError::product_not_found(4)).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Product not found: 4");
    }
}
