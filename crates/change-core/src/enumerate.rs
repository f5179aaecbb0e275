//! # Combination Enumerator
//!
//! Lists every distinct multiset of coins that sums exactly to an amount.
//!
//! ## Uniqueness Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ORDER-SENSITIVE (rejected)        NON-DECREASING (used here)           │
//! │                                                                         │
//! │  amount 3, coins [1, 2]            amount 3, coins [1, 2]               │
//! │    1+1+1                             1+1+1                              │
//! │    1+2   ──┐ same multiset           1+2                                │
//! │    2+1   ──┘ listed twice                                               │
//! │                                                                         │
//! │  A sequence may only be extended by a coin whose index is >= the       │
//! │  index of its last coin, so each multiset is built in exactly one      │
//! │  order. Repeated input coins are collapsed first for the same reason.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Cost
//! The output itself grows exponentially with the amount. This is a
//! demonstration utility: use [`count_combinations`] to size the output and
//! [`enumeration_cost_amount`] to size the working set before materializing
//! it. Only the rows within one largest coin of the current value are kept.
//!
//! ## Example
//! ```rust
//! use change_core::enumerate::{count_combinations, enumerate};
//!
//! let all = enumerate(4, &[1, 2, 3, 4]);
//! assert_eq!(all.len(), 5);
//! assert_eq!(count_combinations(4, &[1, 2, 3, 4]), Some(5));
//! ```

use tracing::debug;

use crate::amount::Amount;
use crate::types::{Breakdown, Denomination};
use crate::validation::{dedup_denominations, table_len, usable_denominations};

/// One partial multiset: per-coin counts plus the index of its largest-index coin.
#[derive(Debug, Clone)]
struct Partial {
    counts: Vec<u64>,
    last: usize,
}

/// Enumerates for a raw signed amount. Invalid input gives an empty list.
pub fn enumerate(amount: i64, denominations: &[i64]) -> Vec<Breakdown> {
    match Amount::try_from_i64(amount) {
        Ok(amount) => enumerate_amount(amount, denominations),
        Err(err) => {
            debug!(amount, error = %err, "Rejected amount");
            Vec::new()
        }
    }
}

/// Enumerates for a validated amount.
///
/// Every returned breakdown lists each usable coin (zeros included) and
/// no two are equal. Amount zero yields one all-zero breakdown.
pub fn enumerate_amount(amount: Amount, denominations: &[i64]) -> Vec<Breakdown> {
    let coins = match usable_denominations(denominations) {
        Ok(coins) => dedup_denominations(&coins),
        Err(err) => {
            debug!(error = %err, "Rejected denominations");
            return Vec::new();
        }
    };

    let len = match table_len(amount) {
        Ok(len) => len,
        Err(_) => return Vec::new(),
    };

    let Some((last_row, peak)) = final_row(&coins, len) else {
        return Vec::new();
    };

    let combinations: Vec<Breakdown> = last_row
        .into_iter()
        .map(|partial| to_breakdown(&coins, &partial.counts))
        .collect();

    debug!(
        amount = amount.value(),
        coins = coins.len(),
        combinations = combinations.len(),
        peak_partials = peak,
        "Enumerated combinations"
    );
    combinations
}

/// Builds the partials for value `len - 1`, holding only the rows a lookup
/// can still reach.
///
/// Row `value` lives in slot `value % reach`. Returns the final row and the
/// largest number of partials alive at once.
fn final_row(coins: &[Denomination], len: usize) -> Option<(Vec<Partial>, usize)> {
    let steps = steps(coins);
    let reach = reach_back(&steps, len);

    let mut ring: Vec<Vec<Partial>> = Vec::new();
    ring.try_reserve_exact(reach).ok()?;
    ring.resize_with(reach, Vec::new);
    ring[0].push(Partial {
        counts: vec![0; coins.len()],
        last: 0,
    });

    let mut retained = 1;
    let mut peak = 1;

    for value in 1..len {
        let mut here = Vec::new();
        for (index, &step) in steps.iter().enumerate() {
            if step > value {
                continue;
            }
            for partial in ring[(value - step) % reach].iter().filter(|p| p.last <= index) {
                let mut counts = partial.counts.clone();
                counts[index] += 1;
                here.push(Partial {
                    counts,
                    last: index,
                });
            }
        }

        peak = peak.max(retained + here.len());
        retained += here.len();
        let evicted = std::mem::replace(&mut ring[value % reach], here);
        retained -= evicted.len();
    }

    let last = std::mem::take(&mut ring[(len - 1) % reach]);
    Some((last, peak))
}

/// Number of distinct multisets summing to `amount`, without building them.
///
/// `None` for invalid input, or if the count overflows `u128`.
///
/// ## Example
/// ```rust
/// use change_core::enumerate::count_combinations;
///
/// assert_eq!(count_combinations(5, &[1, 2, 5]), Some(4));
/// assert_eq!(count_combinations(3, &[2]), Some(0));
/// assert_eq!(count_combinations(5, &[]), None);
/// ```
pub fn count_combinations(amount: i64, denominations: &[i64]) -> Option<u128> {
    count_combinations_amount(Amount::try_from_i64(amount).ok()?, denominations)
}

/// [`count_combinations`] for a validated amount.
pub fn count_combinations_amount(amount: Amount, denominations: &[i64]) -> Option<u128> {
    let (ways, _) = count_table(amount, denominations)?;
    ways.last().copied()
}

/// Largest number of partial multisets [`enumerate_amount`] holds at once.
///
/// Enumeration keeps the rows from `value - reach` to `value` alive, where
/// `reach` is the largest coin that fits in the amount. This is the largest
/// sum of counts over any such window. It is at least the final count, and
/// stays non-zero when the amount itself is unreachable.
///
/// ## Example
/// ```rust
/// use change_core::enumerate::enumeration_cost_amount;
/// use change_core::Amount;
///
/// // Rows 0..=4 for [1, 2, 3, 4] hold 1 + 1 + 2 + 3 + 5 partials.
/// assert_eq!(enumeration_cost_amount(Amount::new(4), &[1, 2, 3, 4]), Some(12));
/// ```
pub fn enumeration_cost_amount(amount: Amount, denominations: &[i64]) -> Option<u128> {
    let (ways, reach) = count_table(amount, denominations)?;

    let mut window: u128 = 0;
    let mut peak: u128 = 0;
    for value in 0..ways.len() {
        window = window.checked_add(ways[value])?;
        if value > reach {
            window -= ways[value - reach - 1];
        }
        peak = peak.max(window);
    }
    Some(peak)
}

/// Count DP over `0..=amount`, plus the lookback used by enumeration.
fn count_table(amount: Amount, denominations: &[i64]) -> Option<(Vec<u128>, usize)> {
    let coins = dedup_denominations(&usable_denominations(denominations).ok()?);
    let len = table_len(amount).ok()?;
    let steps = steps(&coins);

    let mut ways: Vec<u128> = Vec::new();
    ways.try_reserve_exact(len).ok()?;
    ways.resize(len, 0);
    ways[0] = 1;

    // Coins in the outer loop: each multiset is counted once.
    for &step in &steps {
        for value in step..len {
            ways[value] = ways[value].checked_add(ways[value - step])?;
        }
    }

    Some((ways, reach_back(&steps, len)))
}

fn steps(coins: &[Denomination]) -> Vec<usize> {
    coins
        .iter()
        .map(|c| usize::try_from(c.value()).unwrap_or(usize::MAX))
        .collect()
}

/// Largest step that fits in a table of `len` rows, at least 1.
fn reach_back(steps: &[usize], len: usize) -> usize {
    steps
        .iter()
        .copied()
        .filter(|&step| step < len)
        .max()
        .unwrap_or(1)
        .max(1)
}

fn to_breakdown(coins: &[Denomination], counts: &[u64]) -> Breakdown {
    let mut breakdown = Breakdown::with_denominations(coins);
    for (&coin, &count) in coins.iter().zip(counts) {
        breakdown.add_coins(coin, count);
    }
    breakdown
}

// =============================================================================
// Unit Tests
// =============================================================================
