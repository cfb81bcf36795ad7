//! # Validation Module
//!
//! Input validation utilities for Till.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console (till-cli)                                           │
//! │  └── Text parses as a decimal number                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Amounts are non-negative and fit in i64 cents                     │
//! │  └── Denomination tables are well-formed                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Allocator                                                    │
//! │  └── paid >= price (InvalidPayment otherwise)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::denomination::Denomination;
use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Amount Validators
// =============================================================================

/// Validates a major-unit amount and converts it to cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items, exact payment of nothing)
/// - Must fit in i64 cents after rounding
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use till_core::validation::validate_amount;
///
/// assert_eq!(validate_amount("price", Decimal::new(1387, 2)).unwrap().cents(), 1387);
/// assert!(validate_amount("price", Decimal::new(-1, 0)).is_err());
/// ```
pub fn validate_amount(field: &str, amount: Decimal) -> ValidationResult<Money> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Money::from_major(amount).ok_or_else(|| ValidationError::OutOfRange {
        field: field.to_string(),
        min: 0,
        max: i64::MAX,
    })
}

// =============================================================================
// Table Validators
// =============================================================================

/// Validates a denomination table.
///
/// ## Rules
/// - Must contain at least one denomination
/// - Labels must be non-empty and unique
/// - Values must be positive
/// - Values must strictly descend
pub fn validate_denomination_table(denominations: &[Denomination]) -> ValidationResult<()> {
    if denominations.is_empty() {
        return Err(ValidationError::Required {
            field: "denominations".to_string(),
        });
    }

    let mut seen = HashSet::with_capacity(denominations.len());
    for denomination in denominations {
        if denomination.label.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "label".to_string(),
            });
        }

        if denomination.value_cents <= 0 {
            return Err(ValidationError::MustBePositive {
                field: denomination.label.to_string(),
            });
        }

        if !seen.insert(denomination.label) {
            return Err(ValidationError::Duplicate {
                field: "label".to_string(),
                value: denomination.label.to_string(),
            });
        }
    }

    if let Some(pair) = denominations
        .windows(2)
        .find(|pair| pair[0].value_cents <= pair[1].value_cents)
    {
        return Err(ValidationError::NotDescending {
            previous: pair[0].label.to_string(),
            next: pair[1].label.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::denomination::EURO_DENOMINATIONS;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_amount() {
        assert_eq!(validate_amount("price", dec!(0)).unwrap().cents(), 0);
        assert_eq!(validate_amount("price", dec!(13.87)).unwrap().cents(), 1387);
        assert_eq!(validate_amount("paid", dec!(-0.00)).unwrap().cents(), 0);

        assert!(matches!(
            validate_amount("price", dec!(-0.01)),
            Err(ValidationError::MustBeNonNegative { .. })
        ));
        assert!(matches!(
            validate_amount("paid", Decimal::MAX),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_euro_table() {
        assert!(validate_denomination_table(&EURO_DENOMINATIONS).is_ok());
    }

    #[test]
    fn test_validate_empty_table() {
        assert!(matches!(
            validate_denomination_table(&[]),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_validate_table_not_descending() {
        let table = [
            Denomination::coin("1€ coin", 100),
            Denomination::coin("2€ coin", 200),
        ];
        assert!(matches!(
            validate_denomination_table(&table),
            Err(ValidationError::NotDescending { .. })
        ));

        let equal = [
            Denomination::coin("a", 100),
            Denomination::coin("b", 100),
        ];
        assert!(validate_denomination_table(&equal).is_err());
    }

    #[test]
    fn test_validate_table_duplicate_label() {
        let table = [
            Denomination::bill("note", 500),
            Denomination::coin("note", 100),
        ];
        assert!(matches!(
            validate_denomination_table(&table),
            Err(ValidationError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_validate_table_non_positive_value() {
        let table = [Denomination::coin("nothing", 0)];
        assert!(matches!(
            validate_denomination_table(&table),
            Err(ValidationError::MustBePositive { .. })
        ));
    }
}
