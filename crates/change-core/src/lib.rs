//! # change-core: Pure Coin Change Computation
//!
//! This crate is the **heart** of Changemaker. It answers two questions for
//! an amount and a set of coin denominations, as pure functions with zero
//! I/O dependencies:
//!
//! 1. What is the fewest coins that make exact change, and which coins?
//! 2. What are all the distinct coin multisets that make exact change?
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Changemaker Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Frontend (CLI, or a web page via ts-rs types)      │   │
//! │  │    Amount input ──► Coins input ──► Result display             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ (amount, denominations)                │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ change-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  solver   │  │ enumerate │  │   input   │  │ validation│  │   │
//! │  │   │ min coins │  │ multisets │  │ text → v  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`solver`] - Minimum coin count and one optimal breakdown
//! - [`enumerate`] - Every distinct multiset summing to the amount
//! - [`types`] - Domain types (Denomination, Breakdown, ChangeResult)
//! - [`amount`] - Amount type (non-negative integer, validated once)
//! - [`error`] - Unreachable reasons and validation errors
//! - [`validation`] - Shared input checks
//! - [`input`] - Form text sanitizing
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: file system, network and environment access are FORBIDDEN here
//! 3. **No Panics on Input**: bad input is an `Unreachable` result or an empty list
//! 4. **No Sentinels**: unreached table cells are an enum variant, not `usize::MAX`
//!
//! ## Example Usage
//!
//! ```rust
//! use change_core::{enumerate, solve, ChangeResult};
//!
//! match solve(30, &[25, 10, 5, 1]) {
//!     ChangeResult::Found { count, breakdown } => {
//!         assert_eq!(count, 2);
//!         assert_eq!(breakdown.count_of(25), 1);
//!         assert_eq!(breakdown.count_of(5), 1);
//!     }
//!     ChangeResult::Unreachable { reason } => panic!("{}", reason),
//! }
//!
//! assert_eq!(enumerate(4, &[1, 2, 3, 4]).len(), 5);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod amount;
pub mod enumerate;
pub mod error;
pub mod input;
pub mod solver;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use change_core::solve` instead of
// `use change_core::solver::solve`

pub use amount::Amount;
pub use enumerate::{count_combinations, enumerate};
pub use error::{UnreachableReason, ValidationError};
pub use input::DEFAULT_DENOMINATIONS;
pub use solver::solve;
pub use types::*;
