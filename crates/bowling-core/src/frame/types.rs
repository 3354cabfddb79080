use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};

use crate::config::rules::PINS_PER_FRAME;
use crate::roll::Roll;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FrameKind {
    /// Two rolls that leave pins standing
    Open,
    Spare,
    Strike,
    /// A single pin-count roll still waiting for its pair
    Incomplete,
}

/// One scoring unit of a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Zero-based position in the game
    pub index: usize,
    pub rolls: Vec<Roll>,
    /// Frame score; `None` while it depends on rolls not yet thrown
    pub score: Option<u32>,
    pub is_strike: bool,
    /// Running strike bonus total, seeded at 10 for strike frames
    pub accumulator: Option<u32>,
}

impl Frame {
    pub fn new(index: usize, rolls: Vec<Roll>) -> Self {
        let is_strike = rolls.iter().any(Roll::is_strike);
        Self {
            index,
            rolls,
            score: None,
            is_strike,
            accumulator: is_strike.then_some(PINS_PER_FRAME),
        }
    }

    pub fn kind(&self) -> FrameKind {
        if self.is_strike {
            FrameKind::Strike
        } else if self.rolls.iter().any(Roll::is_spare) {
            FrameKind::Spare
        } else if self.rolls.len() >= 2 {
            FrameKind::Open
        } else {
            FrameKind::Incomplete
        }
    }

    /// Sum of the first two rolls' values
    pub fn pin_total(&self) -> u32 {
        self.rolls.iter().take(2).map(Roll::value).sum()
    }

    /// Second roll of the frame is a spare marker
    pub fn ends_in_spare(&self) -> bool {
        self.rolls.get(1).is_some_and(Roll::is_spare)
    }
}
