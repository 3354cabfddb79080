//! Scorecard output formats.

mod console;

pub use console::*;

use crate::error::Result;
use crate::scorecard::Scorecard;

/// Pretty-printed JSON for a scorecard
pub fn format_scorecard_json(card: &Scorecard) -> Result<String> {
    Ok(serde_json::to_string_pretty(card)?)
}
