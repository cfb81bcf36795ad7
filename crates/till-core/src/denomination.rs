//! # Denominations
//!
//! The fixed set of Euro bills and coins, ordered largest first.
//!
//! ## The Euro Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Bills (cents)                        Coins (cents)                     │
//! │  ─────────────                        ─────────────                     │
//! │  500€  50000                          2€   200                          │
//! │  200€  20000                          1€   100                          │
//! │  100€  10000                          50c   50                          │
//! │   50€   5000                          20c   20                          │
//! │   20€   2000                          10c   10                          │
//! │   10€   1000                           5c    5                          │
//! │    5€    500                           2c    2                          │
//! │                                        1c    1                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The table is canonical: taking the largest denomination that fits at each
//! step always yields the fewest pieces, so greedy allocation is exact.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::validation::{validate_denomination_table, ValidationResult};

// =============================================================================
// Denomination Kind
// =============================================================================

/// Physical form of a denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenominationKind {
    /// Paper note.
    Bill,
    /// Metal coin.
    Coin,
}

// =============================================================================
// Denomination
// =============================================================================

/// A single bill or coin, identified by label and face value in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Denomination {
    /// Display label, also the inventory key (e.g. `"5€ bill"`).
    pub label: &'static str,
    /// Face value in cents.
    pub value_cents: i64,
    pub kind: DenominationKind,
}

impl Denomination {
    /// Creates a bill denomination.
    pub const fn bill(label: &'static str, value_cents: i64) -> Self {
        Denomination {
            label,
            value_cents,
            kind: DenominationKind::Bill,
        }
    }

    /// Creates a coin denomination.
    pub const fn coin(label: &'static str, value_cents: i64) -> Self {
        Denomination {
            label,
            value_cents,
            kind: DenominationKind::Coin,
        }
    }

    /// Returns the face value as Money.
    #[inline]
    pub const fn value(&self) -> Money {
        Money::from_cents(self.value_cents)
    }

    #[inline]
    pub fn is_bill(&self) -> bool {
        self.kind == DenominationKind::Bill
    }

    #[inline]
    pub fn is_coin(&self) -> bool {
        self.kind == DenominationKind::Coin
    }
}

/// Euro denominations in cents, from largest to smallest.
pub const EURO_DENOMINATIONS: [Denomination; 15] = [
    Denomination::bill("500€ bill", 50000),
    Denomination::bill("200€ bill", 20000),
    Denomination::bill("100€ bill", 10000),
    Denomination::bill("50€ bill", 5000),
    Denomination::bill("20€ bill", 2000),
    Denomination::bill("10€ bill", 1000),
    Denomination::bill("5€ bill", 500),
    Denomination::coin("2€ coin", 200),
    Denomination::coin("1€ coin", 100),
    Denomination::coin("50c coin", 50),
    Denomination::coin("20c coin", 20),
    Denomination::coin("10c coin", 10),
    Denomination::coin("5c coin", 5),
    Denomination::coin("2c coin", 2),
    Denomination::coin("1c coin", 1),
];

// =============================================================================
// Denomination Table
// =============================================================================

/// An ordered, strictly descending set of denominations.
///
/// ## Invariants
/// - Non-empty
/// - Every value is positive
/// - Values strictly descend
/// - Labels are unique
///
/// The Euro table satisfies these by construction; any other table goes
/// through [`DenominationTable::new`], which checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DenominationTable(&'static [Denomination]);

impl DenominationTable {
    /// The fixed Euro table.
    pub const EURO: DenominationTable = DenominationTable(&EURO_DENOMINATIONS);

    /// Creates a table after checking its invariants.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::denomination::{Denomination, DenominationTable};
    ///
    /// static ASCENDING: [Denomination; 2] = [
    ///     Denomination::coin("1c coin", 1),
    ///     Denomination::coin("2c coin", 2),
    /// ];
    /// assert!(DenominationTable::new(&ASCENDING).is_err());
    /// ```
    pub fn new(denominations: &'static [Denomination]) -> ValidationResult<Self> {
        validate_denomination_table(denominations)?;
        Ok(DenominationTable(denominations))
    }

    /// Returns the Euro table.
    #[inline]
    pub const fn euro() -> Self {
        Self::EURO
    }

    /// Iterates the denominations largest first.
    pub fn iter(&self) -> impl Iterator<Item = &'static Denomination> {
        self.0.iter()
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Looks up a denomination by label.
    pub fn get(&self, label: &str) -> Option<&'static Denomination> {
        self.0.iter().find(|d| d.label == label)
    }

    /// Checks whether the table contains a denomination with this label.
    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }
}

impl Default for DenominationTable {
    fn default() -> Self {
        Self::EURO
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
