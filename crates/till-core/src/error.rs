//! # Error Types
//!
//! Domain-specific error types for till-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  till-core errors (this file)                                          │
//! │  ├── CoreError        - Change-making failures                         │
//! │  └── ValidationError  - Input and table validation failures            │
//! │                                                                         │
//! │  till-cli errors (app crate)                                           │
//! │  ├── ConfigError      - Bad environment configuration                  │
//! │  └── CliError         - What the cashier sees                          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (label, amounts, etc.)
//! 3. Errors are enum variants, never String
//! 4. A register running short of change is NOT an error (see `ChangeResult::unpaid`)

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core change-making errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The customer handed over less than the price.
    ///
    /// ## When This Occurs
    /// ```text
    /// Price: €10.00, Paid: €5.00
    ///      │
    ///      ▼
    /// change = 500 - 1000 = -500 cents
    ///      │
    ///      ▼
    /// InvalidPayment { price: €10.00, paid: €5.00 }
    /// ```
    /// The transaction does not proceed and no inventory is touched.
    #[error("The paid amount is less than the product price (price {price}, paid {paid})")]
    InvalidPayment { price: Money, paid: Money },

    /// Attempted to take more units of a denomination than the register holds.
    ///
    /// ## When This Occurs
    /// Only through direct `Inventory::withdraw` calls. The allocator clamps
    /// every withdrawal to the available count and never raises this.
    #[error("Insufficient stock of {label}: available {available}, requested {requested}")]
    InsufficientStock {
        label: String,
        available: u64,
        requested: u64,
    },

    /// Label does not name any denomination in the table.
    #[error("Unknown denomination: {0}")]
    UnknownDenomination(String),

    /// The register stock is worth more than fits in `i64` cents.
    ///
    /// ## When This Occurs
    /// Absurd unit counts, usually from a hand-edited stock file. The
    /// register refuses the stock instead of reporting a wrapped total.
    #[error("Register stock is too large to value (overflow at {label})")]
    StockOverflow { label: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation of amounts, denomination tables and inventory
/// before any change is computed.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Denomination table is not strictly descending by value.
    #[error("denomination {next} must be worth less than {previous}")]
    NotDescending { previous: String, next: String },

    /// Duplicate value (e.g., duplicate denomination label).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
