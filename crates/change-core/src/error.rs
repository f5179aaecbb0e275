//! # Error Types
//!
//! Domain-specific error types for change-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  change-core errors (this file)                                        │
//! │  ├── UnreachableReason - Why no change could be made (a RESULT value)  │
//! │  └── ValidationError   - Input validation failures                     │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── CliError          - Argument / config failures (exit codes)       │
//! │                                                                         │
//! │  Flow: ValidationError → UnreachableReason::InvalidAmount → Frontend   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (amount, offending value)
//! 3. Errors are enum variants, never String
//! 4. Bad user input is a result variant, never a panic

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Unreachable Reason
// =============================================================================

/// Why a change request produced no coins.
///
/// Two classes share this enum:
/// - **Invalid input**: the request itself was malformed
/// - **Unreachable**: the request was fine, the coins just can't sum to it
///
/// ## User Workflow
/// ```text
/// Amount: 3, Coins: 2
///      │
///      ▼
/// solve(3, [2])
///      │
///      ▼
/// Unreachable { NoCombination { amount: 3 } }
///      │
///      ▼
/// UI shows: "There is no way to make change for 3 with the given coins."
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnreachableReason {
    /// The amount was not a non-negative integer.
    #[error("Invalid amount: {detail}")]
    InvalidAmount { detail: String },

    /// The denomination list was empty.
    #[error("No denominations given")]
    NoDenominations,

    /// Every denomination was zero or negative.
    #[error("No usable denominations: every coin must be a positive integer")]
    NoUsableDenominations,

    /// The amount cannot be indexed on this platform.
    #[error("Amount {amount} is too large to compute")]
    AmountTooLarge {
        #[ts(type = "number")]
        amount: u64,
    },

    /// Valid input, but no multiset of the coins sums to the amount.
    #[error("No combination of the given coins sums to {amount}")]
    NoCombination {
        #[ts(type = "number")]
        amount: u64,
    },
}

impl UnreachableReason {
    /// True for the invalid-input class, false for a genuinely unreachable amount.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, UnreachableReason::NoCombination { .. })
    }
}

impl From<ValidationError> for UnreachableReason {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyDenominations => UnreachableReason::NoDenominations,
            ValidationError::NoPositiveDenominations => UnreachableReason::NoUsableDenominations,
            other => UnreachableReason::InvalidAmount {
                detail: other.to_string(),
            },
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when user input doesn't meet requirements.
/// Used for early validation before any table is allocated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Text was empty or not a number.
    #[error("{field} is not a number")]
    NotANumber { field: String },

    /// Value had a fractional part.
    #[error("{field} must be a whole number")]
    NotAnInteger { field: String },

    /// Value was below zero.
    #[error("{field} must not be negative (got {value})")]
    Negative { field: String, value: i64 },

    /// Whole number too large to represent.
    #[error("{field} is too large (maximum {max})")]
    OutOfRange { field: String, max: u64 },

    /// Denomination list was empty.
    #[error("at least one denomination is required")]
    EmptyDenominations,

    /// Denomination list had no positive entries.
    #[error("at least one positive denomination is required")]
    NoPositiveDenominations,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_messages() {
        let reason = UnreachableReason::NoCombination { amount: 3 };
        assert_eq!(
            reason.to_string(),
            "No combination of the given coins sums to 3"
        );
        assert_eq!(
            UnreachableReason::NoDenominations.to_string(),
            "No denominations given"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Negative {
            field: "amount".to_string(),
            value: -5,
        };
        assert_eq!(err.to_string(), "amount must not be negative (got -5)");

        let err = ValidationError::NotANumber {
            field: "amount".to_string(),
        };
        assert_eq!(err.to_string(), "amount is not a number");

        let err = ValidationError::OutOfRange {
            field: "amount".to_string(),
            max: u64::MAX,
        };
        assert_eq!(
            err.to_string(),
            "amount is too large (maximum 18446744073709551615)"
        );
    }

    #[test]
    fn test_validation_converts_to_reason() {
        let reason: UnreachableReason = ValidationError::EmptyDenominations.into();
        assert_eq!(reason, UnreachableReason::NoDenominations);

        let reason: UnreachableReason = ValidationError::NotAnInteger {
            field: "amount".to_string(),
        }
        .into();
        assert!(matches!(reason, UnreachableReason::InvalidAmount { .. }));
        assert!(reason.is_invalid_input());
    }

    #[test]
    fn test_invalid_input_classification() {
        assert!(!UnreachableReason::NoCombination { amount: 7 }.is_invalid_input());
        assert!(UnreachableReason::NoUsableDenominations.is_invalid_input());
        assert!(UnreachableReason::AmountTooLarge { amount: u64::MAX }.is_invalid_input());
    }

    #[test]
    fn test_reason_serializes_with_kind_tag() {
        let json = serde_json::to_string(&UnreachableReason::NoCombination { amount: 3 }).unwrap();
        assert_eq!(json, r#"{"kind":"no_combination","amount":3}"#);
    }
}
