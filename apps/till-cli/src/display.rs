//! Rendering of change results for the cashier.
//!
//! ## Text Layout
//! ```text
//! Total change to return: €6.13
//!
//! Bills to give:
//! - 1 × 5€ bill
//!
//! Coins to give:
//! - 1 × 1€ coin
//! - 1 × 10c coin
//! ...
//!
//! ========================================
//!    Final Cash Register Inventory
//! ========================================
//! - 500€ bill: 2 units
//! ...
//! ----------------------------------------
//! Total value in register: €3262.47
//! ```
//!
//! The inventory section is only printed when a register stock is tracked.

use std::fmt;

use serde::Serialize;
use till_core::{BreakdownLine, CashRegister, ChangeResult, Inventory, Money};
use uuid::Uuid;

const WARNING_RULE: &str = "======================================================================";
const INVENTORY_RULE: &str = "========================================";
const TOTAL_RULE: &str = "----------------------------------------";

/// Everything shown after a sale.
#[derive(Debug, Clone, Copy)]
pub struct Receipt<'a> {
    pub price: Money,
    pub paid: Money,
    pub result: &'a ChangeResult,
    pub transaction_id: Option<Uuid>,
    /// Register the change was drawn from, if stock is tracked.
    pub register: Option<&'a CashRegister>,
}

impl<'a> Receipt<'a> {
    /// Renders the receipt as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&JsonReceipt {
            transaction_id: self.transaction_id,
            price: self.price,
            paid: self.paid,
            result: self.result,
            inventory: self.register.map(CashRegister::inventory),
            register_value: self.register.map(CashRegister::total_value),
        })
    }
}

#[derive(Serialize)]
struct JsonReceipt<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    transaction_id: Option<Uuid>,
    price: Money,
    paid: Money,
    #[serde(flatten)]
    result: &'a ChangeResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    inventory: Option<&'a Inventory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    register_value: Option<Money>,
}

impl fmt::Display for Receipt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Total change to return: {}", self.result.change)?;

        if !self.result.is_fully_paid() {
            writeln!(f, "{WARNING_RULE}")?;
            writeln!(
                f,
                " WARNING: Could not provide exact change. Amount pending: {}",
                self.result.unpaid
            )?;
            writeln!(f, " The cash register ran out of the required bills/coins.")?;
            writeln!(f, "{WARNING_RULE}")?;
        }

        writeln!(f)?;
        writeln!(f, "Bills to give:")?;
        write_lines(f, self.result.breakdown.bills())?;

        writeln!(f)?;
        writeln!(f, "Coins to give:")?;
        write_lines(f, self.result.breakdown.coins())?;

        if let Some(register) = self.register {
            writeln!(f)?;
            writeln!(f, "{INVENTORY_RULE}")?;
            writeln!(f, "   Final Cash Register Inventory")?;
            writeln!(f, "{INVENTORY_RULE}")?;
            for (denomination, count) in register.inventory().iter_in(register.table()) {
                writeln!(f, "- {}: {} units", denomination.label, count)?;
            }
            writeln!(f, "{TOTAL_RULE}")?;
            writeln!(f, "Total value in register: {}", register.total_value())?;
        }

        Ok(())
    }
}

fn write_lines<'a>(
    f: &mut fmt::Formatter<'_>,
    lines: impl Iterator<Item = &'a BreakdownLine>,
) -> fmt::Result {
    for line in lines {
        writeln!(f, "- {} × {}", line.count, line.denomination.label)?;
    }
    Ok(())
}
