//! # Change Allocator
//!
//! Breaks the change owed for a cash transaction into bills and coins.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  price €13.87, paid €20.00                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  to cents (Bankers Rounding): 1387, 2000                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  change = 2000 - 1387 = 613          (< 0 → InvalidPayment)            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  largest first:                                                         │
//! │    5€ bill  613 / 500 = 1  → remaining 113                              │
//! │    1€ coin  113 / 100 = 1  → remaining  13                              │
//! │    10c coin  13 /  10 = 1  → remaining   3                              │
//! │    2c coin    3 /   2 = 1  → remaining   1                              │
//! │    1c coin    1 /   1 = 1  → remaining   0  (stop)                      │
//! │                                                                         │
//! │  With an inventory, each count is capped at what the register holds.   │
//! │  Whatever is left at the end is the unpaid remainder.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No backtracking is attempted: if the register lacks a denomination, the
//! next smaller ones are tried, and a remainder that cannot be covered is
//! reported rather than searched around. A short register is a normal
//! outcome (`unpaid > 0`), not an error.
//!
//! ## Usage
//! ```rust
//! use rust_decimal::Decimal;
//! use till_core::allocator::compute_change;
//!
//! let result = compute_change(Decimal::new(1387, 2), Decimal::new(2000, 2), None).unwrap();
//! assert_eq!(result.change.cents(), 613);
//! assert_eq!(result.breakdown.count("5€ bill"), 1);
//! assert!(result.is_fully_paid());
//! ```

use rust_decimal::Decimal;
use serde::Serialize;

use crate::denomination::{Denomination, DenominationTable};
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::inventory::Inventory;
use crate::money::Money;
use crate::validation::validate_amount;

// =============================================================================
// Breakdown
// =============================================================================

/// How many units of one denomination to hand out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreakdownLine {
    #[serde(flatten)]
    pub denomination: Denomination,
    pub count: u64,
}

impl BreakdownLine {
    /// Value of this line (count × face value).
    ///
    /// Lines built by [`allocate`] never exceed the change they pay, so the
    /// product only saturates for hand-built lines.
    #[inline]
    pub fn value(&self) -> Money {
        self.denomination.value().saturating_multiply_count(self.count)
    }
}

/// Units handed out per denomination.
///
/// Holds one line for every denomination in the table, in table order,
/// with a count of zero for the ones not used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Breakdown {
    lines: Vec<BreakdownLine>,
}

impl Breakdown {
    /// An all-zero breakdown over `table`.
    pub fn empty(table: &DenominationTable) -> Self {
        Breakdown {
            lines: table
                .iter()
                .map(|denomination| BreakdownLine {
                    denomination: *denomination,
                    count: 0,
                })
                .collect(),
        }
    }

    /// Every line, largest denomination first.
    pub fn lines(&self) -> &[BreakdownLine] {
        &self.lines
    }

    /// Count for a label (0 if unused or unknown).
    pub fn count(&self, label: &str) -> u64 {
        self.lines
            .iter()
            .find(|line| line.denomination.label == label)
            .map_or(0, |line| line.count)
    }

    /// Lines with a non-zero count.
    pub fn dispensed(&self) -> impl Iterator<Item = &BreakdownLine> {
        self.lines.iter().filter(|line| line.count > 0)
    }

    /// Non-zero bill lines.
    pub fn bills(&self) -> impl Iterator<Item = &BreakdownLine> {
        self.dispensed().filter(|line| line.denomination.is_bill())
    }

    /// Non-zero coin lines.
    pub fn coins(&self) -> impl Iterator<Item = &BreakdownLine> {
        self.dispensed().filter(|line| line.denomination.is_coin())
    }

    /// Total value handed out.
    pub fn total(&self) -> Money {
        self.lines.iter().map(BreakdownLine::value).sum()
    }

    /// Total number of bills and coins handed out.
    pub fn pieces(&self) -> u64 {
        self.lines.iter().map(|line| line.count).sum()
    }

    /// True when nothing is handed out.
    pub fn is_empty(&self) -> bool {
        self.pieces() == 0
    }
}

// =============================================================================
// Change Result
// =============================================================================

/// Outcome of a change calculation.
///
/// ## Invariant
/// `breakdown.total() + unpaid == change`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeResult {
    /// Total change owed.
    pub change: Money,
    /// Bills and coins to hand out.
    pub breakdown: Breakdown,
    /// Part of the change the register could not cover.
    pub unpaid: Money,
}

impl ChangeResult {
    /// True when the breakdown covers the whole change.
    #[inline]
    pub fn is_fully_paid(&self) -> bool {
        self.unpaid.is_zero()
    }

    /// Value actually handed out.
    #[inline]
    pub fn dispensed(&self) -> Money {
        self.change - self.unpaid
    }
}

// =============================================================================
// Payment
// =============================================================================

/// Price and amount handed over for one sale, in cents.
///
/// [`Payment::from_major`] guarantees `paid >= price >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Payment {
    pub price: Money,
    pub paid: Money,
}

impl Payment {
    /// Converts typed euro amounts to cents and checks that enough was paid.
    ///
    /// ## Errors
    /// - `Validation` when an amount is negative or too large
    /// - `InvalidPayment` when `paid` rounds to fewer cents than `price`
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use till_core::allocator::Payment;
    ///
    /// let payment = Payment::from_major(Decimal::new(1387, 2), Decimal::new(20, 0)).unwrap();
    /// assert_eq!(payment.paid.cents(), 2000);
    /// assert_eq!(payment.change().cents(), 613);
    /// ```
    pub fn from_major(price: Decimal, paid: Decimal) -> CoreResult<Self> {
        let price = validate_amount("price", price)?;
        let paid = validate_amount("paid", paid)?;

        if paid < price {
            return Err(CoreError::InvalidPayment { price, paid });
        }

        Ok(Payment { price, paid })
    }

    /// Change owed for this payment.
    #[inline]
    pub fn change(&self) -> Money {
        self.paid - self.price
    }
}

// =============================================================================
// Operations
// =============================================================================

/// Computes change with the Euro table.
///
/// ## Arguments
/// * `price` - Product price in euros
/// * `paid` - Amount handed over in euros
/// * `inventory` - Register stock to draw from and decrement, or `None` for
///   an unlimited supply of every denomination
///
/// ## Errors
/// - `InvalidPayment` when `paid` rounds to fewer cents than `price`
/// - `Validation` when an amount is negative or too large
///
/// The inventory is untouched when an error is returned.
pub fn compute_change(
    price: Decimal,
    paid: Decimal,
    inventory: Option<&mut Inventory>,
) -> CoreResult<ChangeResult> {
    compute_change_with(&DenominationTable::EURO, price, paid, inventory)
}

/// Computes change with an explicit denomination table.
///
/// See [`compute_change`].
pub fn compute_change_with(
    table: &DenominationTable,
    price: Decimal,
    paid: Decimal,
    inventory: Option<&mut Inventory>,
) -> CoreResult<ChangeResult> {
    let payment = Payment::from_major(price, paid)?;
    allocate(table, payment.change(), inventory)
}

/// Greedily distributes `change` across `table`, largest denomination first.
///
/// Counts are planned against the inventory first and withdrawn afterwards,
/// so the register is updated in a single step per call.
///
/// ## Example
/// ```rust
/// use till_core::allocator::allocate;
/// use till_core::denomination::DenominationTable;
/// use till_core::inventory::Inventory;
/// use till_core::money::Money;
///
/// // No 5€ bills left: 6.13 is paid with 2€ coins instead
/// let mut stock = Inventory::from_counts([("2€ coin", 5), ("10c coin", 1), ("2c coin", 1), ("1c coin", 1)]);
/// let result = allocate(&DenominationTable::EURO, Money::from_cents(613), Some(&mut stock)).unwrap();
///
/// assert_eq!(result.breakdown.count("2€ coin"), 3);
/// assert_eq!(stock.available("2€ coin"), 2);
/// assert!(result.is_fully_paid());
/// ```
pub fn allocate(
    table: &DenominationTable,
    change: Money,
    mut inventory: Option<&mut Inventory>,
) -> CoreResult<ChangeResult> {
    if change.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "change".to_string(),
        }
        .into());
    }

    let mut breakdown = Breakdown::empty(table);
    let mut remaining = change.cents();

    for line in breakdown.lines.iter_mut() {
        if remaining == 0 {
            break;
        }

        let value = line.denomination.value_cents;
        let ideal = (remaining / value) as u64;
        let actual = match inventory.as_deref() {
            Some(stock) => ideal.min(stock.available(line.denomination.label)),
            None => ideal,
        };

        line.count = actual;
        remaining -= value * actual as i64;
    }

    if let Some(stock) = inventory.as_deref_mut() {
        for line in breakdown.dispensed() {
            stock.withdraw(line.denomination.label, line.count)?;
        }
    }

    Ok(ChangeResult {
        change,
        breakdown,
        unpaid: Money::from_cents(remaining),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::denomination::EURO_DENOMINATIONS;
    use rust_decimal_macros::dec;

    fn euro() -> DenominationTable {
        DenominationTable::EURO
    }

    #[test]
    fn test_change_for_613_cents() {
        let result = compute_change(dec!(13.87), dec!(20.00), None).unwrap();

        assert_eq!(result.change.cents(), 613);
        assert_eq!(result.breakdown.count("5€ bill"), 1);
        assert_eq!(result.breakdown.count("1€ coin"), 1);
        assert_eq!(result.breakdown.count("10c coin"), 1);
        assert_eq!(result.breakdown.count("2c coin"), 1);
        assert_eq!(result.breakdown.count("1c coin"), 1);
        assert_eq!(result.breakdown.pieces(), 5);
        assert_eq!(result.unpaid, Money::zero());
    }

    #[test]
    fn test_exact_payment_gives_nothing() {
        let result = compute_change(dec!(5.00), dec!(5.00), None).unwrap();

        assert!(result.change.is_zero());
        assert!(result.breakdown.is_empty());
        assert_eq!(result.breakdown.lines().len(), EURO_DENOMINATIONS.len());
        assert!(result.is_fully_paid());
    }

    #[test]
    fn test_underpayment_is_rejected() {
        let mut stock = Inventory::euro_starting_float();
        let before = stock.clone();

        let err = compute_change(dec!(10.00), dec!(5.00), Some(&mut stock)).unwrap_err();

        assert!(matches!(
            err,
            CoreError::InvalidPayment { price, paid }
                if price.cents() == 1000 && paid.cents() == 500
        ));
        assert_eq!(stock, before);
    }

    #[test]
    fn test_payment_keeps_rounded_amounts() {
        let payment = Payment::from_major(dec!(0.005), dec!(20.015)).unwrap();

        assert_eq!(payment.price.cents(), 0);
        assert_eq!(payment.paid.cents(), 2002);
        assert_eq!(payment.change().cents(), 2002);

        assert!(matches!(
            Payment::from_major(dec!(10.00), dec!(9.99)),
            Err(CoreError::InvalidPayment { price, paid })
                if price.cents() == 1000 && paid.cents() == 999
        ));
    }

    #[test]
    fn test_negative_amounts_are_rejected() {
        assert!(matches!(
            compute_change(dec!(-1.00), dec!(5.00), None),
            Err(CoreError::Validation(ValidationError::MustBeNonNegative { .. }))
        ));
        assert!(matches!(
            allocate(&euro(), Money::from_cents(-1), None),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn test_large_change_uses_big_bills() {
        let result = compute_change(dec!(0.01), dec!(1234.56), None).unwrap();

        assert_eq!(result.change.cents(), 123_455);
        assert_eq!(result.breakdown.count("500€ bill"), 2);
        assert_eq!(result.breakdown.count("200€ bill"), 1);
        assert_eq!(result.breakdown.count("20€ bill"), 1);
        assert_eq!(result.breakdown.count("10€ bill"), 1);
        assert_eq!(result.breakdown.count("2€ coin"), 2);
        assert_eq!(result.breakdown.count("50c coin"), 1);
        assert_eq!(result.breakdown.count("5c coin"), 1);
        assert_eq!(result.breakdown.total(), result.change);
    }

    #[test]
    fn test_amounts_use_bankers_rounding() {
        // 0.005 → 0 cents, 0.015 → 2 cents
        let result = compute_change(dec!(0.005), dec!(0.015), None).unwrap();
        assert_eq!(result.change.cents(), 2);
        assert_eq!(result.breakdown.count("2c coin"), 1);
    }

    #[test]
    fn test_missing_bill_falls_back_to_coins() {
        let mut stock = Inventory::euro_starting_float();
        stock.set("5€ bill", 0);

        let result = compute_change(dec!(13.87), dec!(20.00), Some(&mut stock)).unwrap();

        assert_eq!(result.breakdown.count("5€ bill"), 0);
        assert_eq!(result.breakdown.count("2€ coin"), 3);
        assert_eq!(result.breakdown.count("1€ coin"), 0);
        assert_eq!(result.breakdown.count("10c coin"), 1);
        assert_eq!(result.breakdown.count("2c coin"), 1);
        assert_eq!(result.breakdown.count("1c coin"), 1);
        assert!(result.is_fully_paid());

        assert_eq!(stock.available("2€ coin"), 27);
        assert_eq!(stock.available("10c coin"), 39);
        assert_eq!(stock.available("1c coin"), 19);
    }

    #[test]
    fn test_short_register_reports_unpaid() {
        let mut stock = Inventory::from_counts([("2€ coin", 1), ("1c coin", 5)]);

        let result = allocate(&euro(), Money::from_cents(613), Some(&mut stock)).unwrap();

        assert_eq!(result.breakdown.count("2€ coin"), 1);
        assert_eq!(result.breakdown.count("1c coin"), 5);
        assert_eq!(result.unpaid.cents(), 408);
        assert_eq!(result.dispensed().cents(), 205);
        assert!(!result.is_fully_paid());
        assert_eq!(stock.total_units(), 0);
    }

    #[test]
    fn test_empty_register_pays_nothing() {
        let mut stock = Inventory::new();
        let result = allocate(&euro(), Money::from_cents(250), Some(&mut stock)).unwrap();

        assert!(result.breakdown.is_empty());
        assert_eq!(result.unpaid.cents(), 250);
    }

    /// Documents the accepted greedy limitation: 60c could be paid as
    /// 3 × 20c, but the 50c coin is taken first and no 10c coin is left.
    #[test]
    fn test_no_backtracking_across_denominations() {
        let mut stock = Inventory::from_counts([("50c coin", 1), ("20c coin", 3)]);

        let result = allocate(&euro(), Money::from_cents(60), Some(&mut stock)).unwrap();

        assert_eq!(result.breakdown.count("50c coin"), 1);
        assert_eq!(result.breakdown.count("20c coin"), 0);
        assert_eq!(result.unpaid.cents(), 10);
    }

    #[test]
    fn test_stops_once_paid() {
        let mut stock = Inventory::euro_starting_float();
        let result = allocate(&euro(), Money::from_cents(50000), Some(&mut stock)).unwrap();

        assert_eq!(result.breakdown.pieces(), 1);
        assert_eq!(stock.available("500€ bill"), 1);
        assert_eq!(stock.available("1c coin"), 20);
    }

    #[test]
    fn test_bills_and_coins_split() {
        let result = compute_change(dec!(13.87), dec!(20.00), None).unwrap();

        let bills: Vec<_> = result.breakdown.bills().map(|l| l.denomination.label).collect();
        let coins: Vec<_> = result.breakdown.coins().map(|l| l.denomination.label).collect();

        assert_eq!(bills, vec!["5€ bill"]);
        assert_eq!(coins, vec!["1€ coin", "10c coin", "2c coin", "1c coin"]);
    }

    #[test]
    fn test_custom_table() {
        static TABLE: [Denomination; 3] = [
            Denomination::coin("25", 25),
            Denomination::coin("10", 10),
            Denomination::coin("1", 1),
        ];
        let table = DenominationTable::new(&TABLE).unwrap();

        let result = compute_change_with(&table, dec!(0.59), dec!(1.00), None).unwrap();

        assert_eq!(result.breakdown.count("25"), 1);
        assert_eq!(result.breakdown.count("10"), 1);
        assert_eq!(result.breakdown.count("1"), 6);
        assert!(result.is_fully_paid());
    }

    #[test]
    fn test_serializes_breakdown_lines() {
        let result = compute_change(dec!(19.00), dec!(20.00), None).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["change"], 100);
        assert_eq!(json["unpaid"], 0);
        assert_eq!(json["breakdown"][8]["label"], "1€ coin");
        assert_eq!(json["breakdown"][8]["kind"], "coin");
        assert_eq!(json["breakdown"][8]["count"], 1);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn stock_strategy() -> impl Strategy<Value = Inventory> {
            prop::collection::vec(0u64..25, EURO_DENOMINATIONS.len()).prop_map(|counts| {
                Inventory::from_counts(
                    EURO_DENOMINATIONS
                        .iter()
                        .zip(counts)
                        .map(|(denomination, count)| (denomination.label, count)),
                )
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: without an inventory the whole change is always paid,
            /// and the breakdown adds up to exactly paid - price.
            #[test]
            fn unlimited_supply_pays_everything(
                price in 0i64..10_000_000,
                extra in 0i64..10_000_000,
            ) {
                let result = compute_change(
                    Decimal::new(price, 2),
                    Decimal::new(price + extra, 2),
                    None,
                ).unwrap();

                prop_assert_eq!(result.change.cents(), extra);
                prop_assert_eq!(result.breakdown.total(), result.change);
                prop_assert!(result.is_fully_paid());
            }

            /// Property: with an inventory, counts never exceed stock, the
            /// stock shrinks by exactly the breakdown, and breakdown + unpaid
            /// equals the change.
            #[test]
            fn limited_supply_respects_stock(
                stock in stock_strategy(),
                price in 0i64..100_000,
                extra in 0i64..100_000,
            ) {
                let before = stock.clone();
                let mut after = stock;

                let result = compute_change(
                    Decimal::new(price, 2),
                    Decimal::new(price + extra, 2),
                    Some(&mut after),
                ).unwrap();

                prop_assert_eq!(result.breakdown.total() + result.unpaid, result.change);
                prop_assert!(!result.unpaid.is_negative());
                for line in result.breakdown.lines() {
                    let label = line.denomination.label;
                    prop_assert!(line.count <= before.available(label));
                    prop_assert_eq!(after.available(label), before.available(label) - line.count);
                }
            }

            /// Property: underpayment fails and the stock is untouched.
            #[test]
            fn underpayment_never_touches_stock(
                stock in stock_strategy(),
                paid in 0i64..100_000,
                short_by in 1i64..100_000,
            ) {
                let before = stock.clone();
                let mut after = stock;

                let result = compute_change(
                    Decimal::new(paid + short_by, 2),
                    Decimal::new(paid, 2),
                    Some(&mut after),
                );

                let is_invalid_payment = matches!(result, Err(CoreError::InvalidPayment { .. }));
                prop_assert!(is_invalid_payment);
                prop_assert_eq!(after, before);
            }

            /// Property: the same amounts always give the same breakdown.
            #[test]
            fn unlimited_supply_is_repeatable(
                price in 0i64..1_000_000,
                extra in 0i64..1_000_000,
            ) {
                let price = Decimal::new(price, 2);
                let paid = price + Decimal::new(extra, 2);

                let first = compute_change(price, paid, None).unwrap();
                let second = compute_change(price, paid, None).unwrap();

                prop_assert_eq!(first, second);
            }
        }
    }
}
