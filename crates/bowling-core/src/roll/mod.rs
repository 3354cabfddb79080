//! Roll symbols and parsing.
//!
//! - `Roll` - a single roll: pin count, strike or spare
//! - `parse_rolls` - tokenizer for roll sequences such as `"X 7/ 9-"`

mod parse;
mod types;

pub use parse::*;
pub use types::*;
