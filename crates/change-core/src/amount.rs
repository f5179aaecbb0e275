//! # Amount Module
//!
//! Provides the `Amount` type: the target value change is made for.
//!
//! ## Why a Newtype?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE "NOT A NUMBER" PROBLEM                                             │
//! │                                                                         │
//! │  A numeric text box hands over whatever the user typed:                │
//! │    ""      → NaN                                                        │
//! │    "2.5"   → 2.5   (not a whole amount)                                 │
//! │    "-10"   → -10   (negative)                                           │
//! │                                                                         │
//! │  OUR SOLUTION: Validate once, at construction                          │
//! │    Amount can only hold a non-negative integer.                        │
//! │    Everything downstream indexes tables with it safely.                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use change_core::amount::Amount;
//!
//! let amount = Amount::parse(" 63 ").unwrap();
//! assert_eq!(amount.value(), 63);
//!
//! assert!(Amount::parse("abc").is_err());
//! assert!(Amount::try_from_f64(f64::NAN).is_err());
//! assert!(Amount::try_from_i64(-1).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::validation::{validate_non_negative, ValidationResult};

const FIELD: &str = "amount";

// =============================================================================
// Amount Type
// =============================================================================

/// A non-negative integer target value.
///
/// ## Design Decisions
/// - **u64 (unsigned)**: negative amounts are rejected before they get here
/// - **Single field tuple struct**: Zero-cost abstraction over u64
/// - **No currency**: the core deals in abstract units, display is a frontend job
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Amount(#[ts(type = "number")] u64);

impl Amount {
    /// Creates an Amount from an already non-negative value.
    #[inline]
    pub const fn new(value: u64) -> Self {
        Amount(value)
    }

    /// Zero amount: always reachable with zero coins.
    #[inline]
    pub const fn zero() -> Self {
        Amount(0)
    }

    /// Returns the raw value.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Checks if the amount is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Validates a signed integer.
    ///
    /// ## Example
    /// ```rust
    /// use change_core::amount::Amount;
    ///
    /// assert_eq!(Amount::try_from_i64(10).unwrap().value(), 10);
    /// assert!(Amount::try_from_i64(-10).is_err());
    /// ```
    pub fn try_from_i64(value: i64) -> ValidationResult<Self> {
        validate_non_negative(FIELD, value)?;
        Ok(Amount(value.unsigned_abs()))
    }

    /// Validates a float, as produced by a browser's numeric input.
    ///
    /// ## Rules
    /// - NaN and infinities are "not a number"
    /// - Fractional values are rejected, not rounded
    /// - Negative values are rejected
    /// - Whole values from 2^64 up are out of range
    pub fn try_from_f64(value: f64) -> ValidationResult<Self> {
        if !value.is_finite() {
            return Err(ValidationError::NotANumber {
                field: FIELD.to_string(),
            });
        }

        if value.fract() != 0.0 {
            return Err(ValidationError::NotAnInteger {
                field: FIELD.to_string(),
            });
        }

        if value < 0.0 {
            return Err(ValidationError::Negative {
                field: FIELD.to_string(),
                value: value as i64,
            });
        }

        if value >= u64::MAX as f64 {
            return Err(ValidationError::OutOfRange {
                field: FIELD.to_string(),
                max: u64::MAX,
            });
        }

        Ok(Amount(value as u64))
    }

    /// Parses user-entered text.
    ///
    /// Accepts integer literals and integral float literals (`"10"`, `"10.0"`).
    /// Integer literals are exact over the whole `u64` range.
    ///
    /// ## Example
    /// ```rust
    /// use change_core::amount::Amount;
    ///
    /// assert_eq!(Amount::parse("10.0").unwrap().value(), 10);
    /// assert!(Amount::parse("").is_err());
    /// assert!(Amount::parse("2.5").is_err());
    /// ```
    pub fn parse(text: &str) -> ValidationResult<Self> {
        let text = text.trim();

        if let Ok(value) = text.parse::<i64>() {
            return Amount::try_from_i64(value);
        }

        if let Ok(value) = text.parse::<u64>() {
            return Ok(Amount(value));
        }

        match text.parse::<f64>() {
            Ok(value) => Amount::try_from_f64(value),
            Err(_) => Err(ValidationError::NotANumber {
                field: FIELD.to_string(),
            }),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::zero()
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Amount(value)
    }
}

impl TryFrom<i64> for Amount {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Amount::try_from_i64(value)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_i64() {
        assert_eq!(Amount::try_from_i64(0).unwrap(), Amount::zero());
        assert_eq!(Amount::try_from_i64(99).unwrap().value(), 99);
        assert_eq!(
            Amount::try_from_i64(-3),
            Err(ValidationError::Negative {
                field: "amount".to_string(),
                value: -3
            })
        );
    }

    #[test]
    fn test_try_from_f64() {
        assert_eq!(Amount::try_from_f64(42.0).unwrap().value(), 42);
        assert!(matches!(
            Amount::try_from_f64(f64::NAN),
            Err(ValidationError::NotANumber { .. })
        ));
        assert!(matches!(
            Amount::try_from_f64(f64::INFINITY),
            Err(ValidationError::NotANumber { .. })
        ));
        assert!(matches!(
            Amount::try_from_f64(2.5),
            Err(ValidationError::NotAnInteger { .. })
        ));
        assert!(matches!(
            Amount::try_from_f64(-4.0),
            Err(ValidationError::Negative { value: -4, .. })
        ));
        assert!(matches!(
            Amount::try_from_f64(1e20),
            Err(ValidationError::OutOfRange { max: u64::MAX, .. })
        ));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Amount::parse("  17 ").unwrap().value(), 17);
        assert_eq!(Amount::parse("8.0").unwrap().value(), 8);
        assert!(Amount::parse("").is_err());
        assert!(Amount::parse("abc").is_err());
        assert!(Amount::parse("NaN").is_err());
        assert!(Amount::parse("-1").is_err());
    }

    #[test]
    fn test_parse_above_i64_is_exact() {
        assert_eq!(
            Amount::parse("9223372036854775809").unwrap().value(),
            9_223_372_036_854_775_809
        );
        assert_eq!(
            Amount::parse("18446744073709551615").unwrap().value(),
            u64::MAX
        );
        assert!(matches!(
            Amount::parse("18446744073709551616"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_display_is_bare_number() {
        assert_eq!(Amount::new(63).to_string(), "63");
        assert_eq!(Amount::default().to_string(), "0");
    }
}
