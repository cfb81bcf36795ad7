//! # till-core: Pure Change-Making Logic for Till
//!
//! This crate is the **heart** of Till. It works out the change owed for a
//! cash sale and which Euro bills and coins to hand back, optionally
//! drawing on (and depleting) the register's stock.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Till Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    till-cli (console)                           │   │
//! │  │    Prompt price ──► Prompt paid ──► Show change ──► Show stock  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ till-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌───────────┐ │   │
//! │  │   │   money   │  │denomination│  │ inventory │  │ allocator │ │   │
//! │  │   │   Money   │  │  Euro table│  │   stock   │  │  greedy   │ │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘  └───────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CONSOLE • NO FILES • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`denomination`] - The Euro bills and coins, largest first
//! - [`inventory`] - Units of each denomination held by a register
//! - [`allocator`] - Greedy change allocation
//! - [`register`] - A register owning its stock and a transaction journal
//! - [`error`] - Domain error types
//! - [`validation`] - Amount and table validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output (the stock is passed in explicitly)
//! 2. **No I/O**: console, file system and environment access are FORBIDDEN here
//! 3. **Integer Money**: every amount is in cents (i64) once past the input boundary
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use till_core::{compute_change, Inventory};
//!
//! let mut stock = Inventory::euro_starting_float();
//! stock.set("5€ bill", 0);
//!
//! // €13.87 paid with €20.00, but no 5€ bills left
//! let result = compute_change(Decimal::new(1387, 2), Decimal::new(2000, 2), Some(&mut stock)).unwrap();
//!
//! assert_eq!(result.change.cents(), 613);
//! assert_eq!(result.breakdown.count("2€ coin"), 3);
//! assert!(result.is_fully_paid());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod allocator;
pub mod denomination;
pub mod error;
pub mod inventory;
pub mod money;
pub mod register;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use till_core::Money` instead of
// `use till_core::money::Money`

pub use allocator::{
    allocate, compute_change, compute_change_with, Breakdown, BreakdownLine, ChangeResult,
    Payment,
};
pub use denomination::{Denomination, DenominationKind, DenominationTable, EURO_DENOMINATIONS};
pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::Inventory;
pub use money::Money;
pub use register::{CashRegister, ChangeTransaction};
