//! # Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (applied in `lib.rs`)
//! 2. Environment variables (`CHANGEMAKER_*`)
//! 3. Defaults (this file)
//!
//! The limits here guard the terminal, not the algorithm: change-core
//! itself accepts any amount.

use std::str::FromStr;

use change_core::DEFAULT_DENOMINATIONS;

use crate::error::{CliError, CliResult};

pub const ENV_COINS: &str = "CHANGEMAKER_COINS";
pub const ENV_MAX_AMOUNT: &str = "CHANGEMAKER_MAX_AMOUNT";
pub const ENV_MAX_COMBINATIONS: &str = "CHANGEMAKER_MAX_COMBINATIONS";
pub const ENV_OUTPUT: &str = "CHANGEMAKER_OUTPUT";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Coin list used when `--coins` is not given, as form text.
    pub coins: String,

    /// Largest amount the CLI will solve.
    pub max_amount: u64,

    /// Largest enumeration the CLI will print, and the most partial
    /// combinations it may hold while building one.
    pub max_combinations: u64,

    /// How results are printed.
    pub output: OutputFormat,
}

/// Output rendering mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,

    /// One JSON document
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("expected text or json, got '{}'", other)),
        }
    }
}

impl Default for Config {
    /// ## Default Values
    /// - Coins: 25, 10, 5, 1
    /// - Max amount: 1,000,000
    /// - Max combinations: 100,000
    /// - Output: text
    fn default() -> Self {
        Config {
            coins: DEFAULT_DENOMINATIONS
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(", "),
            max_amount: 1_000_000,
            max_combinations: 100_000,
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Loads configuration from the process environment over defaults.
    pub fn from_env() -> CliResult<Self> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from any key lookup over defaults.
    ///
    /// ## Environment Variables
    /// - `CHANGEMAKER_COINS`: default coin list, e.g. "50, 20, 10"
    /// - `CHANGEMAKER_MAX_AMOUNT`: amount ceiling
    /// - `CHANGEMAKER_MAX_COMBINATIONS`: enumeration ceiling
    /// - `CHANGEMAKER_OUTPUT`: "text" or "json"
    pub fn from_lookup<F>(lookup: F) -> CliResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(coins) = lookup(ENV_COINS) {
            config.coins = coins;
        }

        if let Some(raw) = lookup(ENV_MAX_AMOUNT) {
            config.max_amount = parse_limit(ENV_MAX_AMOUNT, &raw)?;
        }

        if let Some(raw) = lookup(ENV_MAX_COMBINATIONS) {
            config.max_combinations = parse_limit(ENV_MAX_COMBINATIONS, &raw)?;
        }

        if let Some(raw) = lookup(ENV_OUTPUT) {
            config.output = raw
                .parse()
                .map_err(|reason: String| CliError::config(ENV_OUTPUT, reason))?;
        }

        Ok(config)
    }
}

fn parse_limit(key: &str, raw: &str) -> CliResult<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| CliError::config(key, e.to_string()))
}
