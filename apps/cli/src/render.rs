//! # Rendering
//!
//! Turns a [`ChangeResponse`] into what the terminal shows.
//!
//! ## Text Layout
//! ```text
//! Change: 6 coins needed to make 63.
//!      1 x 3
//!      5 x 0
//!     10 x 1
//!     25 x 2
//! ```

use std::fmt::Write;

use change_core::ChangeResult;

use crate::commands::ChangeResponse;
use crate::error::CliResult;

/// Human-readable output.
pub fn render_text(response: &ChangeResponse) -> String {
    let mut out = String::new();
    let amount = match &response.amount {
        Some(amount) => amount.to_string(),
        None => format!("'{}'", response.amount_text.trim()),
    };

    match &response.result {
        ChangeResult::Found { count, breakdown } => {
            let _ = writeln!(
                out,
                "Change: {} {} needed to make {}.",
                count,
                if *count == 1 { "coin" } else { "coins" },
                amount
            );
            for (coin, used) in breakdown.iter() {
                let _ = writeln!(out, "  {:>6} x {}", coin, used);
            }
        }
        ChangeResult::Unreachable { reason } => {
            let _ = writeln!(
                out,
                "There is no way to make change for {} with the given coins.",
                amount
            );
            let _ = writeln!(out, "Reason: {}", reason);
        }
    }

    if let Some(combinations) = &response.combinations {
        let _ = writeln!(
            out,
            "{} {}:",
            combinations.len(),
            if combinations.len() == 1 {
                "combination"
            } else {
                "combinations"
            }
        );
        for combination in combinations {
            let _ = writeln!(out, "  {}", combination);
        }
    }

    out.trim_end().to_string()
}

/// One pretty-printed JSON document.
pub fn render_json(response: &ChangeResponse) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(response)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::make_change;
    use crate::config::Config;

    #[test]
    fn test_render_found() {
        let response = make_change("63", "25, 10, 5, 1", false, &Config::default()).unwrap();
        let text = render_text(&response);
        assert_eq!(
            text,
            "Change: 6 coins needed to make 63.\n       1 x 3\n       5 x 0\n      10 x 1\n      25 x 2"
        );
    }

    #[test]
    fn test_render_single_coin() {
        let response = make_change("5", "5", false, &Config::default()).unwrap();
        assert!(render_text(&response).starts_with("Change: 1 coin needed to make 5."));
    }

    #[test]
    fn test_render_unreachable() {
        let response = make_change("3", "2", false, &Config::default()).unwrap();
        assert_eq!(
            render_text(&response),
            "There is no way to make change for 3 with the given coins.\nReason: No combination of the given coins sums to 3"
        );
    }

    #[test]
    fn test_render_invalid_amount_quotes_text() {
        let response = make_change(" x ", "1", false, &Config::default()).unwrap();
        assert!(render_text(&response).starts_with("There is no way to make change for 'x'"));
    }

    #[test]
    fn test_render_combinations() {
        let response = make_change("3", "1, 2", true, &Config::default()).unwrap();
        let text = render_text(&response);
        assert!(text.contains("2 combinations:"));
        assert!(text.contains("  {1:3}"));
        assert!(text.contains("  {1:1, 2:1}"));
    }

    #[test]
    fn test_render_json() {
        let response = make_change("6", "1, 3, 4", false, &Config::default()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&render_json(&response).unwrap()).unwrap();
        assert_eq!(json["amount"], 6);
        assert_eq!(json["result"]["status"], "found");
        assert_eq!(json["result"]["count"], 2);
        assert_eq!(json["result"]["breakdown"]["3"], 2);
        assert!(json.get("combinations").is_none());
    }
}
