//! # Cash Register
//!
//! Owns a register inventory and keeps a journal of the change handed out.
//!
//! The inventory is a value held by the register rather than shared state:
//! each `make_change` call borrows it mutably for the duration of one
//! allocation, so stock carries over from one transaction to the next.
//!
//! ## Usage
//! ```rust
//! use rust_decimal::Decimal;
//! use till_core::register::CashRegister;
//!
//! let mut register = CashRegister::euro();
//! let tx = register.make_change(Decimal::new(1387, 2), Decimal::new(2000, 2)).unwrap();
//! assert_eq!(tx.result.change.cents(), 613);
//!
//! assert_eq!(register.inventory().available("5€ bill"), 14);
//! assert_eq!(register.transactions().len(), 1);
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::allocator::{allocate, ChangeResult, Payment};
use crate::denomination::DenominationTable;
use crate::error::{CoreError, CoreResult};
use crate::inventory::Inventory;
use crate::money::Money;

// =============================================================================
// Change Transaction
// =============================================================================

/// A completed change calculation recorded by the register.
#[derive(Debug, Clone, Serialize)]
pub struct ChangeTransaction {
    /// Unique identifier (UUID v4).
    pub id: Uuid,
    /// Product price, in cents after rounding.
    pub price: Money,
    /// Amount handed over, in cents after rounding.
    pub paid: Money,
    pub result: ChangeResult,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Cash Register
// =============================================================================

/// A register with a denomination table, its stock and a transaction journal.
///
/// The stock's value always fits in `i64` cents: oversized stock is refused
/// on creation and on restock, and change only ever lowers it.
#[derive(Debug, Clone)]
pub struct CashRegister {
    table: DenominationTable,
    inventory: Inventory,
    value: Money,
    transactions: Vec<ChangeTransaction>,
}

impl CashRegister {
    /// Creates a register over `table` holding `inventory`.
    ///
    /// ## Errors
    /// - `UnknownDenomination` when the inventory stocks a label the table
    ///   does not define
    /// - `StockOverflow` when the stock is worth more than `i64` cents
    pub fn new(table: DenominationTable, inventory: Inventory) -> CoreResult<Self> {
        inventory.validate_against(&table)?;
        let value = inventory.total_value(&table)?;
        Ok(CashRegister {
            table,
            inventory,
            value,
            transactions: Vec::new(),
        })
    }

    /// A Euro register holding the standard opening float.
    pub fn euro() -> Self {
        let table = DenominationTable::EURO;
        let inventory = Inventory::euro_starting_float();
        let value: Money = inventory
            .iter_in(&table)
            .map(|(denomination, count)| denomination.value().saturating_multiply_count(count))
            .sum();

        CashRegister {
            table,
            inventory,
            value,
            transactions: Vec::new(),
        }
    }

    /// Computes change for one sale, drawing on and updating the stock.
    ///
    /// ## Errors
    /// Same as [`compute_change_with`](crate::allocator::compute_change_with).
    /// Failed calls leave the stock and the journal untouched.
    pub fn make_change(&mut self, price: Decimal, paid: Decimal) -> CoreResult<&ChangeTransaction> {
        let payment = Payment::from_major(price, paid)?;
        let result = allocate(&self.table, payment.change(), Some(&mut self.inventory))?;
        self.value -= result.dispensed();

        self.transactions.push(ChangeTransaction {
            id: Uuid::new_v4(),
            price: payment.price,
            paid: payment.paid,
            result,
            created_at: Utc::now(),
        });

        Ok(&self.transactions[self.transactions.len() - 1])
    }

    /// Adds units of a denomination to the stock.
    ///
    /// ## Errors
    /// - `UnknownDenomination` when the table has no such label
    /// - `StockOverflow` when the new stock would be worth more than `i64`
    ///   cents; the stock is left as it was
    pub fn restock(&mut self, label: &str, count: u64) -> CoreResult<()> {
        let denomination = self
            .table
            .get(label)
            .ok_or_else(|| CoreError::UnknownDenomination(label.to_string()))?;

        let value = denomination
            .value()
            .checked_multiply_count(count)
            .and_then(|added| self.value.checked_add(added))
            .ok_or_else(|| CoreError::StockOverflow {
                label: label.to_string(),
            })?;

        self.inventory.deposit(label, count);
        self.value = value;
        Ok(())
    }

    pub fn table(&self) -> &DenominationTable {
        &self.table
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Journal of successful transactions, oldest first.
    pub fn transactions(&self) -> &[ChangeTransaction] {
        &self.transactions
    }

    /// Value of the current stock.
    pub fn total_value(&self) -> Money {
        self.value
    }

    /// Change owed but not handed out, across all transactions.
    pub fn total_unpaid(&self) -> Money {
        self.transactions.iter().map(|tx| tx.result.unpaid).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
