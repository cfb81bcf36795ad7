//! # Register Inventory
//!
//! Counts of physical bills and coins held by a cash register.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Opening float ──► Transaction 1 ──► Transaction 2 ──► ... ──► Close    │
//! │       │                 │                 │                             │
//! │       │            withdraw(...)     withdraw(...)                      │
//! │       ▼                 ▼                 ▼                             │
//! │  500€: 2           500€: 2           500€: 1                            │
//! │    5€: 15            5€: 14            5€: 14                           │
//! │    ...               ...               ...                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Counts are unsigned and `withdraw` refuses to overdraw, so a count can
//! never go negative.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::denomination::{Denomination, DenominationTable};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// Opening stock of a Euro register, by denomination label.
pub const EURO_STARTING_FLOAT: [(&str, u64); 15] = [
    ("500€ bill", 2),
    ("200€ bill", 3),
    ("100€ bill", 5),
    ("50€ bill", 10),
    ("20€ bill", 20),
    ("10€ bill", 7),
    ("5€ bill", 15),
    ("2€ coin", 30),
    ("1€ coin", 30),
    ("50c coin", 40),
    ("20c coin", 40),
    ("10c coin", 40),
    ("5c coin", 20),
    ("2c coin", 20),
    ("1c coin", 20),
];

/// Available unit count per denomination label.
///
/// Serializes as a plain JSON object: `{"500€ bill": 2, "1c coin": 20}`.
/// Labels missing from the map have zero units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    counts: BTreeMap<String, u64>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an inventory from `(label, count)` pairs.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::inventory::Inventory;
    ///
    /// let stock = Inventory::from_counts([("2€ coin", 3), ("1c coin", 10)]);
    /// assert_eq!(stock.available("2€ coin"), 3);
    /// assert_eq!(stock.available("5€ bill"), 0);
    /// ```
    pub fn from_counts<I, S>(counts: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        Inventory {
            counts: counts
                .into_iter()
                .map(|(label, count)| (label.into(), count))
                .collect(),
        }
    }

    /// The opening float of a Euro register.
    pub fn euro_starting_float() -> Self {
        Self::from_counts(EURO_STARTING_FLOAT)
    }

    /// Units available for a label (0 if never stocked).
    pub fn available(&self, label: &str) -> u64 {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Overwrites the count for a label.
    pub fn set(&mut self, label: impl Into<String>, count: u64) {
        self.counts.insert(label.into(), count);
    }

    /// Adds units of a denomination (restocking).
    pub fn deposit(&mut self, label: &str, count: u64) {
        let entry = self.counts.entry(label.to_string()).or_insert(0);
        *entry = entry.saturating_add(count);
    }

    /// Removes units of a denomination.
    ///
    /// ## Errors
    /// `InsufficientStock` when fewer than `count` units are available. The
    /// count is left untouched in that case.
    pub fn withdraw(&mut self, label: &str, count: u64) -> CoreResult<()> {
        if count == 0 {
            return Ok(());
        }

        let available = self.available(label);
        if available < count {
            return Err(CoreError::InsufficientStock {
                label: label.to_string(),
                available,
                requested: count,
            });
        }

        self.counts.insert(label.to_string(), available - count);
        Ok(())
    }

    /// Total units across every label, saturating at `u64::MAX`.
    pub fn total_units(&self) -> u64 {
        self.counts
            .values()
            .fold(0u64, |total, &count| total.saturating_add(count))
    }

    /// Value of everything in the register, counting only labels in `table`.
    ///
    /// ## Errors
    /// `StockOverflow` when the value does not fit in `i64` cents.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::denomination::DenominationTable;
    /// use till_core::inventory::Inventory;
    ///
    /// let stock = Inventory::from_counts([("5€ bill", 2), ("2c coin", 3)]);
    /// assert_eq!(stock.total_value(&DenominationTable::EURO).unwrap().cents(), 1006);
    /// ```
    pub fn total_value(&self, table: &DenominationTable) -> CoreResult<Money> {
        self.iter_in(table)
            .try_fold(Money::zero(), |total, (denomination, count)| {
                denomination
                    .value()
                    .checked_multiply_count(count)
                    .and_then(|value| total.checked_add(value))
                    .ok_or_else(|| CoreError::StockOverflow {
                        label: denomination.label.to_string(),
                    })
            })
    }

    /// Iterates `(denomination, count)` in table order, including zero counts.
    pub fn iter_in<'a>(
        &'a self,
        table: &DenominationTable,
    ) -> impl Iterator<Item = (&'static Denomination, u64)> + 'a {
        table
            .iter()
            .map(move |denomination| (denomination, self.available(denomination.label)))
    }

    /// Checks that every stocked label exists in `table`.
    pub fn validate_against(&self, table: &DenominationTable) -> CoreResult<()> {
        match self.counts.keys().find(|label| !table.contains(label)) {
            Some(label) => Err(CoreError::UnknownDenomination(label.clone())),
            None => Ok(()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
