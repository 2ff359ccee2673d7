//! # Error Types
//!
//! Input validation errors for inventory-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  inventory-core errors (this file)                                     │
//! │  └── ValidationError  - Form input rejected before it reaches the store│
//! │                                                                         │
//! │  inventory-db errors (separate crate)                                  │
//! │  └── DbError          - Storage faults                                 │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── AppError         - What the user sees                             │
//! │                                                                         │
//! │  Flow: ValidationError ─┐                                               │
//! │        DbError ─────────┴──► AppError ──► terminal / JSON               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A missing product is not an error anywhere in this stack: the store
//! answers `None`/`false` and the front end decides what to show.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the front end while turning raw form text into a
/// [`ProductDraft`](crate::ProductDraft). The store never produces these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field text could not be parsed as a number.
    #[error("{field} must be a valid number, got '{value}'")]
    InvalidNumber { field: String, value: String },

    /// Numeric value is below zero.
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// Numeric value is above the accepted maximum.
    #[error("{field} must be at most {max}")]
    TooLarge { field: String, max: i64 },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },
}

impl ValidationError {
    /// Name of the offending form field.
    ///
    /// Front ends use this to put focus back on the right input.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::InvalidNumber { field, .. }
            | ValidationError::Negative { field }
            | ValidationError::TooLarge { field, .. }
            | ValidationError::TooLong { field, .. } => field,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
