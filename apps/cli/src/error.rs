//! # CLI Error Type
//!
//! Unified error type for the command-line frontend.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Changemaker                            │
//! │                                                                         │
//! │  Bad env var? ──────── CliError::Config ──────────────┐                │
//! │  Amount over limit? ── CliError::AmountOverLimit ─────┤                │
//! │  Too many combos? ──── CliError::TooManyCombinations ─┤                │
//! │  Too much memory? ──── CliError::EnumerationTooLarge ─┼──► stderr +    │
//! │  JSON failure? ─────── CliError::Serialization ───────┤    exit code   │
//! │  stdout failure? ───── CliError::Output ──────────────┘                │
//! │                                                                         │
//! │  Unreachable amount / invalid amount text are NOT errors here:         │
//! │  the core returns them as results and they are rendered normally.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;

/// Errors that stop the CLI before or while rendering a result.
#[derive(Debug, Error)]
pub enum CliError {
    /// An environment variable held a value that could not be used.
    #[error("Invalid configuration {key}: {reason}")]
    Config { key: String, reason: String },

    /// The amount is above the configured ceiling.
    #[error("Amount {amount} exceeds the configured maximum of {max}")]
    AmountOverLimit { amount: u64, max: u64 },

    /// Enumeration would produce more combinations than allowed.
    #[error("Enumeration would produce {count} combinations (maximum {max})")]
    TooManyCombinations { count: String, max: u64 },

    /// Enumeration would hold more partial combinations in memory than allowed.
    #[error("Enumeration would hold {partials} partial combinations (maximum {max})")]
    EnumerationTooLarge { partials: String, max: u64 },

    /// JSON rendering failed.
    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing the result to stdout failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Machine-readable error codes, printed alongside JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Configuration could not be loaded.
    ConfigError,

    /// A configured limit was exceeded.
    LimitExceeded,

    /// Unexpected internal failure.
    Internal,
}

/// What a failing run prints in JSON mode.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
}

impl CliError {
    /// Creates a config error.
    pub fn config(key: &str, reason: impl Into<String>) -> Self {
        CliError::Config {
            key: key.to_string(),
            reason: reason.into(),
        }
    }

    /// Maps the error to its code.
    pub fn code(&self) -> ErrorCode {
        match self {
            CliError::Config { .. } => ErrorCode::ConfigError,
            CliError::AmountOverLimit { .. }
            | CliError::TooManyCombinations { .. }
            | CliError::EnumerationTooLarge { .. } => ErrorCode::LimitExceeded,
            CliError::Serialization(_) | CliError::Output(_) => ErrorCode::Internal,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self.code() {
            ErrorCode::ConfigError => 78,
            ErrorCode::LimitExceeded => 3,
            ErrorCode::Internal => 1,
        }
    }

    /// Serializable body for JSON mode.
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

/// Convenience alias for CLI results.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_exit_codes() {
        let err = CliError::config("CHANGEMAKER_MAX_AMOUNT", "not a number");
        assert_eq!(err.code(), ErrorCode::ConfigError);
        assert_eq!(err.exit_code(), 78);

        let err = CliError::AmountOverLimit { amount: 10, max: 5 };
        assert_eq!(err.code(), ErrorCode::LimitExceeded);
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_messages() {
        let err = CliError::AmountOverLimit { amount: 10, max: 5 };
        assert_eq!(
            err.to_string(),
            "Amount 10 exceeds the configured maximum of 5"
        );

        let err = CliError::config("CHANGEMAKER_OUTPUT", "expected text or json");
        assert_eq!(
            err.to_string(),
            "Invalid configuration CHANGEMAKER_OUTPUT: expected text or json"
        );
    }

    #[test]
    fn test_body_serializes() {
        let body = CliError::TooManyCombinations {
            count: "500".to_string(),
            max: 100,
        }
        .body();
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(
            json,
            r#"{"code":"LIMIT_EXCEEDED","message":"Enumeration would produce 500 combinations (maximum 100)"}"#
        );
    }
}
