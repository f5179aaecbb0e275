//! # Minimum Coin Solver
//!
//! Finds the fewest coins that sum exactly to an amount, plus one breakdown
//! achieving it. Each coin may be used any number of times.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BOTTOM-UP DP over 0..=amount                                          │
//! │                                                                         │
//! │  reach[0] = Reached(0)          every other cell starts Unreached      │
//! │                                                                         │
//! │  for v in 1..=amount                                                   │
//! │    for (i, c) in coins          (input order)                           │
//! │      if c <= v and reach[v-c] + 1 < reach[v]                           │
//! │        reach[v] = reach[v-c] + 1                                       │
//! │        via[v]   = i             (strict improvement only:              │
//! │                                  earliest coin wins ties)              │
//! │                                                                         │
//! │  Reconstruction walks back from `amount` following `via`.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cost is O(amount × coins) time and O(amount) memory.
//!
//! ## Example
//! ```rust
//! use change_core::solver::solve;
//!
//! let result = solve(63, &[25, 10, 5, 1]);
//! assert_eq!(result.count(), Some(6));
//!
//! let breakdown = result.breakdown().unwrap();
//! assert_eq!(breakdown.count_of(25), 2);
//! assert_eq!(breakdown.count_of(10), 1);
//! assert_eq!(breakdown.count_of(5), 0);
//! assert_eq!(breakdown.count_of(1), 3);
//! ```

use tracing::debug;

use crate::amount::Amount;
use crate::error::UnreachableReason;
use crate::types::{Breakdown, ChangeResult, Denomination};
use crate::validation::{table_len, usable_denominations};

/// Minimum coins to reach one table value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reach {
    Unreached,
    Reached(u64),
}

impl Reach {
    /// Whether `candidate` coins beats this cell.
    fn improved_by(self, candidate: u64) -> bool {
        match self {
            Reach::Unreached => true,
            Reach::Reached(current) => candidate < current,
        }
    }
}

/// The count table plus its side table of winning coin indices.
struct Table {
    reach: Vec<Reach>,
    via: Vec<Option<usize>>,
}

/// Solves for a raw signed amount.
///
/// A negative amount is invalid input and comes back `Unreachable`.
pub fn solve(amount: i64, denominations: &[i64]) -> ChangeResult {
    match Amount::try_from_i64(amount) {
        Ok(amount) => solve_amount(amount, denominations),
        Err(err) => {
            debug!(amount, error = %err, "Rejected amount");
            ChangeResult::unreachable(err)
        }
    }
}

/// Solves for a validated amount.
///
/// ## Outcomes
/// - Empty coin list, or no positive coin: `Unreachable` (invalid input)
/// - Amount zero: `Found` with count 0 and every coin at zero
/// - No combination: `Unreachable { NoCombination }`
pub fn solve_amount(amount: Amount, denominations: &[i64]) -> ChangeResult {
    let coins = match usable_denominations(denominations) {
        Ok(coins) => coins,
        Err(err) => {
            debug!(error = %err, "Rejected denominations");
            return ChangeResult::unreachable(err);
        }
    };

    let len = match table_len(amount) {
        Ok(len) => len,
        Err(reason) => return ChangeResult::unreachable(reason),
    };

    let table = match build_table(len, &coins) {
        Some(table) => table,
        None => {
            return ChangeResult::unreachable(UnreachableReason::AmountTooLarge {
                amount: amount.value(),
            })
        }
    };

    let target = len - 1;
    let count = match table.reach[target] {
        Reach::Reached(count) => count,
        Reach::Unreached => {
            debug!(amount = amount.value(), "No combination reaches amount");
            return ChangeResult::unreachable(UnreachableReason::NoCombination {
                amount: amount.value(),
            });
        }
    };

    match reconstruct(&table, &coins, target) {
        Some(breakdown) => {
            debug!(
                amount = amount.value(),
                coins = coins.len(),
                count,
                "Solved minimum change"
            );
            ChangeResult::Found { count, breakdown }
        }
        None => ChangeResult::unreachable(UnreachableReason::NoCombination {
            amount: amount.value(),
        }),
    }
}

/// Fills both tables. `None` if the tables cannot be allocated.
fn build_table(len: usize, coins: &[Denomination]) -> Option<Table> {
    let mut reach = Vec::new();
    reach.try_reserve_exact(len).ok()?;
    reach.resize(len, Reach::Unreached);

    let mut via = Vec::new();
    via.try_reserve_exact(len).ok()?;
    via.resize(len, None);

    reach[0] = Reach::Reached(0);

    // Coins wider than usize can never fit under an index.
    let steps: Vec<usize> = coins
        .iter()
        .map(|c| usize::try_from(c.value()).unwrap_or(usize::MAX))
        .collect();

    for value in 1..len {
        for (index, &step) in steps.iter().enumerate() {
            if step > value {
                continue;
            }
            if let Reach::Reached(prev) = reach[value - step] {
                let candidate = prev + 1;
                if reach[value].improved_by(candidate) {
                    reach[value] = Reach::Reached(candidate);
                    via[value] = Some(index);
                }
            }
        }
    }

    Some(Table { reach, via })
}

/// Walks back from `target`, one winning coin at a time.
fn reconstruct(table: &Table, coins: &[Denomination], target: usize) -> Option<Breakdown> {
    let mut breakdown = Breakdown::with_denominations(coins);
    let mut remaining = target;

    while remaining > 0 {
        let coin = coins[table.via[remaining]?];
        breakdown.add_coin(coin);
        remaining -= usize::try_from(coin.value()).ok()?;
    }

    Some(breakdown)
}

// =============================================================================
// Unit Tests
// =============================================================================
