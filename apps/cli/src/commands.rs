//! # Change Command
//!
//! The single operation the CLI performs: take form-style text, hand it to
//! change-core, and package what comes back.
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "63", "25, 10, 5, 1", --all                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ChangeRequest::from_text  ──► amount over max_amount? → LimitExceeded  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  request.solve()                                                        │
//! │       │                                                                 │
//! │       ├── --all and Found ──► count or working set > max? → LimitExceeded│
//! │       │                  └──► request.enumerate()                       │
//! │       ▼                                                                 │
//! │  ChangeResponse { result, combinations }                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use change_core::enumerate::{count_combinations_amount, enumeration_cost_amount};
use change_core::{Amount, Breakdown, ChangeRequest, ChangeResult};

use crate::config::Config;
use crate::error::{CliError, CliResult};

/// Exit code for a request the core rejected as invalid input.
pub const EXIT_INVALID_INPUT: u8 = 2;

/// Everything a frontend needs to display one computation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeResponse {
    /// Amount exactly as typed.
    pub amount_text: String,

    /// Parsed amount, absent when the text was not a valid amount.
    pub amount: Option<Amount>,

    /// Coins after sanitizing, before the core drops unusable ones.
    pub denominations: Vec<i64>,

    /// Minimum-coin outcome.
    pub result: ChangeResult,

    /// Every combination, only when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combinations: Option<Vec<Breakdown>>,
}

impl ChangeResponse {
    /// 0 for any computed outcome, including unreachable amounts.
    pub fn exit_code(&self) -> u8 {
        match self.result.reason() {
            Some(reason) if reason.is_invalid_input() => EXIT_INVALID_INPUT,
            _ => 0,
        }
    }
}

/// Computes change for form-style text.
pub fn make_change(
    amount_text: &str,
    coins_text: &str,
    enumerate_all: bool,
    config: &Config,
) -> CliResult<ChangeResponse> {
    debug!(amount = amount_text, coins = coins_text, enumerate_all, "make_change command");

    let request = ChangeRequest::from_text(amount_text, coins_text);

    if let Ok(amount) = &request.amount {
        if amount.value() > config.max_amount {
            return Err(CliError::AmountOverLimit {
                amount: amount.value(),
                max: config.max_amount,
            });
        }
    }

    let result = request.solve();

    let combinations = match (&request.amount, enumerate_all) {
        (Ok(amount), true) if result.is_found() => {
            check_enumeration_size(*amount, &request.denominations, config)?;
            Some(request.enumerate())
        }
        (_, true) => Some(Vec::new()),
        (_, false) => None,
    };

    Ok(ChangeResponse {
        amount_text: amount_text.to_string(),
        amount: request.amount.as_ref().ok().copied(),
        denominations: request.denominations,
        result,
        combinations,
    })
}

/// Refuses enumerations above `max_combinations`, counted without building them.
///
/// Both the printed combinations and the partials held while building them
/// are capped.
fn check_enumeration_size(amount: Amount, denominations: &[i64], config: &Config) -> CliResult<()> {
    let max = config.max_combinations;
    let limit = u128::from(max);

    match count_combinations_amount(amount, denominations) {
        Some(count) if count <= limit => {}
        Some(count) => {
            return Err(CliError::TooManyCombinations {
                count: count.to_string(),
                max,
            })
        }
        None => {
            return Err(CliError::TooManyCombinations {
                count: format!("more than {}", u128::MAX),
                max,
            })
        }
    }

    match enumeration_cost_amount(amount, denominations) {
        Some(partials) if partials <= limit => {
            debug!(partials = %partials, "Enumeration size within limit");
            Ok(())
        }
        Some(partials) => Err(CliError::EnumerationTooLarge {
            partials: partials.to_string(),
            max,
        }),
        None => Err(CliError::EnumerationTooLarge {
            partials: format!("more than {}", u128::MAX),
            max,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use change_core::UnreachableReason;

    #[test]
    fn test_make_change_found() {
        let response = make_change("63", "25, 10, 5, 1", false, &Config::default()).unwrap();
        assert_eq!(response.amount, Some(Amount::new(63)));
        assert_eq!(response.result.count(), Some(6));
        assert!(response.combinations.is_none());
        assert_eq!(response.exit_code(), 0);
    }

    #[test]
    fn test_make_change_unreachable_is_not_an_error() {
        let response = make_change("3", "2", true, &Config::default()).unwrap();
        assert_eq!(
            response.result.reason(),
            Some(&UnreachableReason::NoCombination { amount: 3 })
        );
        assert_eq!(response.combinations, Some(Vec::new()));
        assert_eq!(response.exit_code(), 0);
    }

    #[test]
    fn test_make_change_invalid_amount() {
        let response = make_change("abc", "1, 5", false, &Config::default()).unwrap();
        assert!(response.amount.is_none());
        assert!(!response.result.is_found());
        assert_eq!(response.exit_code(), EXIT_INVALID_INPUT);
    }

    #[test]
    fn test_make_change_enumerates() {
        let response = make_change("4", "1, 2, 3, 4", true, &Config::default()).unwrap();
        assert_eq!(response.combinations.map(|c| c.len()), Some(5));
    }

    #[test]
    fn test_amount_limit() {
        let config = Config {
            max_amount: 100,
            ..Config::default()
        };
        let err = make_change("101", "1", false, &config).unwrap_err();
        assert!(matches!(err, CliError::AmountOverLimit { amount: 101, max: 100 }));
    }

    #[test]
    fn test_combination_limit() {
        let config = Config {
            max_combinations: 100,
            ..Config::default()
        };
        // 242 ways to make 100 from US coins.
        let err = make_change("100", "25, 10, 5, 1", true, &config).unwrap_err();
        assert!(matches!(err, CliError::TooManyCombinations { max: 100, .. }));

        // Solving alone is still fine.
        assert!(make_change("100", "25, 10, 5, 1", false, &config).is_ok());
    }

    #[test]
    fn test_combination_limit_counts_working_set() {
        // 83,834 combinations fit the default limit, but building them holds
        // four rows of roughly that size at once.
        let config = Config::default();
        let err = make_change("1000", "1, 2, 3", true, &config).unwrap_err();
        assert!(matches!(err, CliError::EnumerationTooLarge { max: 100_000, .. }));

        let config = Config {
            max_combinations: 400_000,
            ..Config::default()
        };
        let response = make_change("1000", "1, 2, 3", true, &config).unwrap();
        assert_eq!(response.combinations.map(|c| c.len()), Some(83_834));
    }
}
