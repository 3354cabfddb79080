//! Configuration and rule constants.
//!
//! This module contains:
//! - `Config` / `ScoringConfig` - scoring options loaded from a TOML file
//! - `rules` - fixed ten-pin bowling constants

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::scorer::LookaheadMode;

/// Ten-pin bowling constants.
pub mod rules {
    /// Pins standing at the start of a frame.
    pub const PINS_PER_FRAME: u32 = 10;

    /// Frames in a complete game, not counting fill balls.
    pub const FRAMES_PER_GAME: usize = 10;

    /// Frames a strike may look ahead into for its bonus.
    pub const MAX_LOOKAHEAD: usize = 2;

    /// Highest score a single frame can reach (a strike followed by two strikes).
    pub const MAX_FRAME_SCORE: u32 = 30;

    /// Score of a perfect game.
    pub const PERFECT_GAME: u32 = 300;
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scoring: ScoringConfig,
}

/// Scoring options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// How strike bonuses look ahead into following frames
    pub lookahead: LookaheadMode,
    /// Validate games before scoring them
    pub strict: bool,
}

impl Config {
    /// Load config from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse config from TOML content
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParseError(e.to_string()))
    }
}
