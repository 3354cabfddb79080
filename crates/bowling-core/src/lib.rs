//! Ten-pin bowling scorer.
//!
//! The scoring core ([`scorer`]) turns a flat sequence of rolls into
//! per-frame scores, resolving strike and spare bonuses across frame
//! boundaries. Everything else is built around it: roll parsing, an
//! optional strict validator, a scorecard with game totals, and output
//! formatting.
//!
//! ```
//! use bowling_core::{Roll, parse_rolls, score_frames};
//!
//! let rolls = parse_rolls("X 7 / 3 4").unwrap();
//! assert_eq!(score_frames(&rolls), vec![Some(20), Some(13), Some(7)]);
//! assert_eq!(rolls[0], Roll::Strike);
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod frame;
pub mod roll;
pub mod scorecard;
pub mod scorer;
pub mod validation;

pub use config::{Config, ScoringConfig, rules};
pub use error::{Error, Result};
pub use export::{format_scorecard_console, format_scorecard_json};
pub use frame::{Frame, FrameBuilder, FrameKind};
pub use roll::{Roll, parse_rolls};
pub use scorecard::{ScoredFrame, Scorecard};
pub use scorer::{LookaheadMode, resolve_frames, score_frames, score_frames_with};
pub use validation::{ValidationError, score_game_strict, validate_rolls};
