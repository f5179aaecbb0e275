//! # Input Module
//!
//! Turns form text into the values the components take.
//!
//! ## Coin List Parsing
//! ```text
//! "25, 10,5 , x, 1c"
//!      │ split on ','
//!      ▼
//! ["25", " 10", "5 ", " x", " 1c"]
//!      │ trim, keep leading integer prefix
//!      ▼
//! [25, 10, 5, 1]            ("x" has no digits and is dropped)
//! ```
//!
//! Zero and negative coins survive parsing on purpose: skipping them is
//! the core's job, so callers that bypass this module get the same result.

use crate::amount::Amount;
use crate::validation::ValidationResult;

/// Coin set a fresh form starts with.
pub const DEFAULT_DENOMINATIONS: [i64; 4] = [25, 10, 5, 1];

/// Parses the amount field.
pub fn parse_amount(text: &str) -> ValidationResult<Amount> {
    Amount::parse(text)
}

/// Parses a comma-separated coin list.
///
/// ## Example
/// ```rust
/// use change_core::input::parse_denominations;
///
/// assert_eq!(parse_denominations("25, 10, 5, 1"), vec![25, 10, 5, 1]);
/// assert_eq!(parse_denominations("3, abc, 2.5"), vec![3, 2]);
/// assert!(parse_denominations("").is_empty());
/// ```
pub fn parse_denominations(text: &str) -> Vec<i64> {
    text.split(',').filter_map(leading_integer).collect()
}

/// Reads an optional sign followed by as many digits as present.
///
/// Trailing junk is ignored (`"12abc"` is 12); no digits at all is `None`.
/// Values beyond `i64` are `None`.
fn leading_integer(token: &str) -> Option<i64> {
    let token = token.trim();
    let (negative, rest) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

// =============================================================================
// Unit Tests
// =============================================================================
