//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floating point:                                            │
//! │    4.35 * 100 = 434.99999999999994  ❌ WRONG!                           │
//! │    truncate to cents → 434, one cent short                              │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    2000 cents - 1387 cents = 613 cents                                  │
//! │    Every denomination divides exactly                                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Conversion Boundary
//! Amounts typed by a cashier arrive as decimals in euros. They are turned
//! into cents exactly once, by [`Money::from_major`], and never leave the
//! integer domain afterwards.
//!
//! ## Usage
//! ```rust
//! use rust_decimal::Decimal;
//! use till_core::money::Money;
//!
//! let price = Money::from_major(Decimal::new(1387, 2)).unwrap(); // €13.87
//! let paid = Money::from_cents(2000);                             // €20.00
//!
//! assert_eq!((paid - price).cents(), 613);
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Minor units (cents) per major unit (euro).
const CENTS_PER_EURO: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in euro cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: The difference `paid - price` may be negative before
///   it is rejected, so the type must be able to hold it
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let change = Money::from_cents(613); // Represents €6.13
    /// assert_eq!(change.cents(), 613);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a decimal amount in euros to cents using Bankers Rounding.
    ///
    /// Returns `None` when the amount does not fit in `i64` cents.
    ///
    /// ## Bankers Rounding Explained
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  BANKERS ROUNDING (Round Half to Even)                              │
    /// │                                                                     │
    /// │  Only applies when an amount has more than two fractional digits:  │
    /// │    €0.005 → 0.5c → 0c                                              │
    /// │    €0.015 → 1.5c → 2c                                              │
    /// │    €0.025 → 2.5c → 2c                                              │
    /// │    €0.026 → 2.6c → 3c                                              │
    /// │                                                                     │
    /// │  Ties go to the even cent, so repeated conversions carry no bias   │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use till_core::money::Money;
    ///
    /// let price = Money::from_major(Decimal::new(1387, 2)).unwrap(); // €13.87
    /// assert_eq!(price.cents(), 1387);
    ///
    /// let tie = Money::from_major(Decimal::new(25, 3)).unwrap(); // €0.025
    /// assert_eq!(tie.cents(), 2);
    /// ```
    pub fn from_major(amount: Decimal) -> Option<Self> {
        amount
            .checked_mul(Decimal::from(CENTS_PER_EURO))?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
            .to_i64()
            .map(Money)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole euro portion.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(613).euros(), 6);
    /// assert_eq!(Money::from_cents(-550).euros(), -5);
    /// ```
    #[inline]
    pub const fn euros(&self) -> i64 {
        self.0 / CENTS_PER_EURO
    }

    /// Returns the cent portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % CENTS_PER_EURO).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a unit count, returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let two_euro_coin = Money::from_cents(200);
    /// assert_eq!(two_euro_coin.checked_multiply_count(3), Some(Money::from_cents(600)));
    /// assert_eq!(two_euro_coin.checked_multiply_count(u64::MAX), None);
    /// ```
    pub fn checked_multiply_count(&self, count: u64) -> Option<Self> {
        // i64 × u64 always fits in i128
        let cents = self.0 as i128 * count as i128;
        i64::try_from(cents).ok().map(Money)
    }

    /// Multiplies money by a unit count, clamping to the `i64` range.
    pub fn saturating_multiply_count(&self, count: u64) -> Self {
        let cents = self.0 as i128 * count as i128;
        Money(cents.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows euros with two decimals, e.g. `€6.13` or `-€5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}€{}.{:02}", sign, self.euros().abs(), self.cents_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1387);
        assert_eq!(money.cents(), 1387);
        assert_eq!(money.euros(), 13);
        assert_eq!(money.cents_part(), 87);
    }

    #[test]
    fn test_from_major_exact() {
        assert_eq!(Money::from_major(dec!(13.87)), Some(Money::from_cents(1387)));
        assert_eq!(Money::from_major(dec!(20)), Some(Money::from_cents(2000)));
        assert_eq!(Money::from_major(dec!(0)), Some(Money::zero()));
        assert_eq!(Money::from_major(dec!(-5.50)), Some(Money::from_cents(-550)));
    }

    #[test]
    fn test_from_major_bankers_rounding() {
        assert_eq!(Money::from_major(dec!(0.005)).unwrap().cents(), 0);
        assert_eq!(Money::from_major(dec!(0.015)).unwrap().cents(), 2);
        assert_eq!(Money::from_major(dec!(0.025)).unwrap().cents(), 2);
        assert_eq!(Money::from_major(dec!(0.026)).unwrap().cents(), 3);
        assert_eq!(Money::from_major(dec!(1.004)).unwrap().cents(), 100);
    }

    #[test]
    fn test_from_major_overflow() {
        assert_eq!(Money::from_major(Decimal::MAX), None);
        assert_eq!(Money::from_major(dec!(100000000000000000000)), None);
    }

    #[test]
    fn test_checked_multiply_count() {
        let bill = Money::from_cents(50_000);
        assert_eq!(bill.checked_multiply_count(2), Some(Money::from_cents(100_000)));
        assert_eq!(bill.checked_multiply_count(0), Some(Money::zero()));

        // 200 trillion 500€ bills do not fit in i64 cents
        assert_eq!(bill.checked_multiply_count(200_000_000_000_000), None);
        // Counts above i64::MAX must not be truncated into range
        assert_eq!(Money::from_cents(1).checked_multiply_count(u64::MAX), None);
        assert_eq!(
            Money::from_cents(1).checked_multiply_count(i64::MAX as u64),
            Some(Money::from_cents(i64::MAX))
        );
    }

    #[test]
    fn test_saturating_multiply_count() {
        assert_eq!(Money::from_cents(200).saturating_multiply_count(3).cents(), 600);
        assert_eq!(
            Money::from_cents(50_000).saturating_multiply_count(u64::MAX).cents(),
            i64::MAX
        );
    }

    #[test]
    fn test_checked_add() {
        assert_eq!(
            Money::from_cents(1).checked_add(Money::from_cents(2)),
            Some(Money::from_cents(3))
        );
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(613)), "€6.13");
        assert_eq!(format!("{}", Money::from_cents(500)), "€5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-€5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "€0.00");
        assert_eq!(format!("{}", Money::from_cents(7)), "€0.07");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(2000);
        let b = Money::from_cents(1387);

        assert_eq!((a + b).cents(), 3387);
        assert_eq!((a - b).cents(), 613);
        assert!((b - a).is_negative());

        let mut c = a;
        c -= b;
        c += Money::from_cents(1);
        assert_eq!(c.cents(), 614);
    }

    #[test]
    fn test_sum() {
        let total: Money = [500, 100, 10, 2, 1]
            .into_iter()
            .map(Money::from_cents)
            .sum();
        assert_eq!(total.cents(), 613);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());
        assert_eq!(Money::default(), zero);
    }
}
