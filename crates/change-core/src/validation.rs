//! # Validation Module
//!
//! Shared input checks used by both the solver and the enumerator.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend                                                     │
//! │  ├── Text sanitizing (trim, comma split, drop non-numeric)             │
//! │  └── See `input` module                                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Amount is a non-negative integer                                  │
//! │  ├── Denomination list is non-empty                                    │
//! │  └── Non-positive coins are filtered out                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: DP tables                                                    │
//! │  └── Only ever stepped by positive coin values                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::amount::Amount;
use crate::error::{UnreachableReason, ValidationError};
use crate::types::Denomination;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates that a signed value is zero or greater.
///
/// ## Example
/// ```rust
/// use change_core::validation::validate_non_negative;
///
/// assert!(validate_non_negative("amount", 0).is_ok());
/// assert!(validate_non_negative("amount", -1).is_err());
/// ```
pub fn validate_non_negative(field: &str, value: i64) -> ValidationResult<()> {
    if value < 0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
            value,
        });
    }

    Ok(())
}

/// Returns the DP table length (`amount + 1`).
///
/// Fails with `AmountTooLarge` when the amount cannot be a `usize` index
/// on this platform.
pub fn table_len(amount: Amount) -> Result<usize, UnreachableReason> {
    usize::try_from(amount.value())
        .ok()
        .and_then(|v| v.checked_add(1))
        .ok_or(UnreachableReason::AmountTooLarge {
            amount: amount.value(),
        })
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Keeps the usable (positive) denominations, in input order.
///
/// ## Rules
/// - Empty input is an error
/// - Zero and negative entries are skipped, never used as a DP step
/// - Input with no positive entry is an error
/// - Duplicates are kept; callers decide what they mean
///
/// ## Example
/// ```rust
/// use change_core::validation::usable_denominations;
///
/// let coins = usable_denominations(&[5, 0, -2, 1]).unwrap();
/// let values: Vec<u64> = coins.iter().map(|c| c.value()).collect();
/// assert_eq!(values, vec![5, 1]);
///
/// assert!(usable_denominations(&[]).is_err());
/// assert!(usable_denominations(&[0, -3]).is_err());
/// ```
pub fn usable_denominations(raw: &[i64]) -> ValidationResult<Vec<Denomination>> {
    if raw.is_empty() {
        return Err(ValidationError::EmptyDenominations);
    }

    let usable: Vec<Denomination> = raw.iter().filter_map(|&v| Denomination::new(v)).collect();

    if usable.is_empty() {
        return Err(ValidationError::NoPositiveDenominations);
    }

    Ok(usable)
}

/// Removes repeated denominations, keeping the first occurrence.
pub fn dedup_denominations(coins: &[Denomination]) -> Vec<Denomination> {
    let mut seen = std::collections::HashSet::with_capacity(coins.len());
    coins.iter().copied().filter(|c| seen.insert(*c)).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn values(coins: &[Denomination]) -> Vec<u64> {
        coins.iter().map(|c| c.value()).collect()
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("amount", 0).is_ok());
        assert!(validate_non_negative("amount", 12).is_ok());
        assert!(validate_non_negative("amount", -12).is_err());
    }

    #[test]
    fn test_usable_denominations_filters_non_positive() {
        let coins = usable_denominations(&[25, 0, 10, -5, 1]).unwrap();
        assert_eq!(values(&coins), vec![25, 10, 1]);
    }

    #[test]
    fn test_usable_denominations_errors() {
        assert_eq!(
            usable_denominations(&[]),
            Err(ValidationError::EmptyDenominations)
        );
        assert_eq!(
            usable_denominations(&[0, -1, -7]),
            Err(ValidationError::NoPositiveDenominations)
        );
    }

    #[test]
    fn test_duplicates_survive_until_deduped() {
        let coins = usable_denominations(&[2, 1, 2, 1]).unwrap();
        assert_eq!(values(&coins), vec![2, 1, 2, 1]);
        assert_eq!(values(&dedup_denominations(&coins)), vec![2, 1]);
    }

    #[test]
    fn test_table_len() {
        assert_eq!(table_len(Amount::zero()), Ok(1));
        assert_eq!(table_len(Amount::new(10)), Ok(11));
    }
}
