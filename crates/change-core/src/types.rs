//! # Domain Types
//!
//! Core domain types used throughout Changemaker.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  Denomination   │   │    Breakdown    │   │  ChangeResult   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  value (u64>0)  │   │  coin → count   │   │  Found          │       │
//! │  │                 │   │  (ascending)    │   │  Unreachable    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────┐       │
//! │  │  ChangeRequest: (amount, raw denominations) from a frontend │       │
//! │  └─────────────────────────────────────────────────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every value here is built fresh per call and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::num::NonZeroU64;
use ts_rs::TS;

use crate::amount::Amount;
use crate::error::{UnreachableReason, ValidationError};
use crate::{enumerate, input, solver};

// =============================================================================
// Denomination
// =============================================================================

/// One coin value, usable any number of times.
///
/// Only positive values can be represented, so a DP loop stepping by a
/// denomination always moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Denomination(NonZeroU64);

impl Denomination {
    /// Returns `None` for zero or negative input.
    pub fn new(value: i64) -> Option<Self> {
        if value <= 0 {
            return None;
        }
        NonZeroU64::new(value.unsigned_abs()).map(Denomination)
    }

    /// Returns the coin value.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Breakdown
// =============================================================================

/// How many of each coin a solution uses.
///
/// Keys are ascending coin values; repeated input denominations share a key.
/// Zero counts are kept so a frontend can show every coin it was given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Breakdown(#[ts(type = "Record<string, number>")] BTreeMap<u64, u64>);

impl Breakdown {
    /// Creates a breakdown listing every coin at count zero.
    pub fn with_denominations(coins: &[Denomination]) -> Self {
        Breakdown(coins.iter().map(|c| (c.value(), 0)).collect())
    }

    /// Uses one more of `coin`.
    pub fn add_coin(&mut self, coin: Denomination) {
        self.add_coins(coin, 1);
    }

    /// Uses `count` more of `coin`.
    pub fn add_coins(&mut self, coin: Denomination, count: u64) {
        *self.0.entry(coin.value()).or_insert(0) += count;
    }

    /// Count used of a coin value (zero if absent).
    pub fn count_of(&self, coin: u64) -> u64 {
        self.0.get(&coin).copied().unwrap_or(0)
    }

    /// Total number of coins across all denominations.
    pub fn total_coins(&self) -> u64 {
        self.0.values().sum()
    }

    /// Sum of `coin * count`. `None` if it overflows `u64`.
    pub fn total_value(&self) -> Option<u64> {
        self.0
            .iter()
            .try_fold(0u64, |acc, (&coin, &count)| acc.checked_add(coin.checked_mul(count)?))
    }

    /// Iterates `(coin, count)` pairs in ascending coin order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.0.iter().map(|(&coin, &count)| (coin, count))
    }

    /// Number of distinct coins listed.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no coin is listed at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Breakdown {
    /// `{1:2, 5:1}` style, skipping zero counts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (coin, count) in self.iter().filter(|&(_, count)| count > 0) {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}:{}", coin, count)?;
            first = false;
        }
        write!(f, "}}")
    }
}

// =============================================================================
// Change Result
// =============================================================================

/// Outcome of a minimum-coin computation.
///
/// ## Serialization
/// ```json
/// { "status": "found", "count": 3, "breakdown": { "1": 1, "5": 1, "25": 0 } }
/// { "status": "unreachable", "reason": { "kind": "no_combination", "amount": 3 } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChangeResult {
    /// Change can be made; `count` is the minimum number of coins.
    Found {
        #[ts(type = "number")]
        count: u64,
        breakdown: Breakdown,
    },
    /// Change cannot be made, or the request was invalid.
    Unreachable { reason: UnreachableReason },
}

impl ChangeResult {
    /// Shorthand for an unreachable result.
    pub fn unreachable(reason: impl Into<UnreachableReason>) -> Self {
        ChangeResult::Unreachable {
            reason: reason.into(),
        }
    }

    /// True for `Found`.
    pub fn is_found(&self) -> bool {
        matches!(self, ChangeResult::Found { .. })
    }

    /// Minimum coin count, if found.
    pub fn count(&self) -> Option<u64> {
        match self {
            ChangeResult::Found { count, .. } => Some(*count),
            ChangeResult::Unreachable { .. } => None,
        }
    }

    /// Optimal breakdown, if found.
    pub fn breakdown(&self) -> Option<&Breakdown> {
        match self {
            ChangeResult::Found { breakdown, .. } => Some(breakdown),
            ChangeResult::Unreachable { .. } => None,
        }
    }

    /// Why nothing was found, if unreachable.
    pub fn reason(&self) -> Option<&UnreachableReason> {
        match self {
            ChangeResult::Found { .. } => None,
            ChangeResult::Unreachable { reason } => Some(reason),
        }
    }
}

// =============================================================================
// Change Request
// =============================================================================

/// A request as a frontend hands it over: a possibly-invalid amount and
/// the raw coin list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRequest {
    pub amount: Result<Amount, ValidationError>,
    pub denominations: Vec<i64>,
}

impl ChangeRequest {
    /// Builds a request from form text (see [`input`]).
    ///
    /// ## Example
    /// ```rust
    /// use change_core::ChangeRequest;
    ///
    /// let request = ChangeRequest::from_text("30", "25, 10, 5, 1");
    /// assert_eq!(request.solve().count(), Some(2));
    ///
    /// let bad = ChangeRequest::from_text("abc", "1, 5");
    /// assert!(!bad.solve().is_found());
    /// assert!(bad.enumerate().is_empty());
    /// ```
    pub fn from_text(amount_text: &str, coins_text: &str) -> Self {
        ChangeRequest {
            amount: input::parse_amount(amount_text),
            denominations: input::parse_denominations(coins_text),
        }
    }

    /// Runs the minimum-coin solver.
    pub fn solve(&self) -> ChangeResult {
        match &self.amount {
            Ok(amount) => solver::solve_amount(*amount, &self.denominations),
            Err(err) => ChangeResult::unreachable(err.clone()),
        }
    }

    /// Runs the combination enumerator.
    pub fn enumerate(&self) -> Vec<Breakdown> {
        match &self.amount {
            Ok(amount) => enumerate::enumerate_amount(*amount, &self.denominations),
            Err(_) => Vec::new(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn coin(value: i64) -> Denomination {
        Denomination::new(value).unwrap()
    }

    #[test]
    fn test_denomination_rejects_non_positive() {
        assert!(Denomination::new(0).is_none());
        assert!(Denomination::new(-5).is_none());
        assert_eq!(coin(25).value(), 25);
    }

    #[test]
    fn test_breakdown_starts_at_zero_and_merges_duplicates() {
        let breakdown = Breakdown::with_denominations(&[coin(5), coin(1), coin(5)]);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown.count_of(5), 0);
        assert_eq!(breakdown.total_coins(), 0);
        assert_eq!(breakdown.total_value(), Some(0));
    }

    #[test]
    fn test_breakdown_totals() {
        let mut breakdown = Breakdown::with_denominations(&[coin(25), coin(10), coin(1)]);
        breakdown.add_coin(coin(25));
        breakdown.add_coin(coin(25));
        breakdown.add_coin(coin(1));
        assert_eq!(breakdown.total_coins(), 3);
        assert_eq!(breakdown.total_value(), Some(51));
        assert_eq!(breakdown.count_of(10), 0);
        assert_eq!(breakdown.count_of(7), 0);
    }

    #[test]
    fn test_breakdown_iterates_ascending() {
        let breakdown = Breakdown::with_denominations(&[coin(25), coin(1), coin(10)]);
        let keys: Vec<u64> = breakdown.iter().map(|(c, _)| c).collect();
        assert_eq!(keys, vec![1, 10, 25]);
    }

    #[test]
    fn test_breakdown_display_skips_zeros() {
        let mut breakdown = Breakdown::with_denominations(&[coin(1), coin(2), coin(3)]);
        breakdown.add_coin(coin(1));
        breakdown.add_coin(coin(3));
        assert_eq!(breakdown.to_string(), "{1:1, 3:1}");
    }

    #[test]
    fn test_change_result_accessors() {
        let found = ChangeResult::Found {
            count: 0,
            breakdown: Breakdown::with_denominations(&[coin(5)]),
        };
        assert!(found.is_found());
        assert_eq!(found.count(), Some(0));
        assert!(found.reason().is_none());

        let missing = ChangeResult::unreachable(UnreachableReason::NoDenominations);
        assert!(!missing.is_found());
        assert_eq!(missing.count(), None);
        assert!(missing.breakdown().is_none());
    }

    #[test]
    fn test_change_result_json_shape() {
        let mut breakdown = Breakdown::with_denominations(&[coin(5), coin(1)]);
        breakdown.add_coin(coin(5));
        let found = ChangeResult::Found { count: 1, breakdown };
        let json = serde_json::to_string(&found).unwrap();
        assert_eq!(
            json,
            r#"{"status":"found","count":1,"breakdown":{"1":0,"5":1}}"#
        );
    }

    #[test]
    fn test_request_with_invalid_amount_is_unreachable() {
        let request = ChangeRequest::from_text("", "1, 5");
        assert!(matches!(
            request.solve(),
            ChangeResult::Unreachable {
                reason: UnreachableReason::InvalidAmount { .. }
            }
        ));
        assert!(request.enumerate().is_empty());
    }
}
