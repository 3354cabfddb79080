//! Strict validation of roll sequences.
//!
//! This is an optional wrapper around the scorer, which itself accepts any
//! input. It checks that each frame is written the way a score sheet would
//! write it and that the tenth frame carries the right number of fill
//! balls. Unfinished games are accepted as long as what has been rolled so
//! far is well formed.

use thiserror::Error;
use tracing::debug;

use crate::config::rules::{FRAMES_PER_GAME, PINS_PER_FRAME};
use crate::error::{Error, Result};
use crate::roll::Roll;
use crate::scorecard::Scorecard;
use crate::scorer::LookaheadMode;

/// Why a roll sequence is not a valid game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("pin count {0} is out of range (0-9)")]
    PinCountOutOfRange(u8),

    #[error("rolls {first} and {second} knock down 10 or more pins; write a spare instead")]
    FrameOverflow { first: u8, second: u8 },

    #[error("spare cannot be the first roll of a frame")]
    MisplacedSpare,

    #[error("strike cannot be the second roll of a frame")]
    MisplacedStrike,

    #[error("roll after the game is over")]
    TooManyRolls,
}

/// Tracks the pins of the open first roll of a frame
#[derive(Debug, Default)]
struct FrameCheck {
    first: Option<u8>,
}

impl FrameCheck {
    /// Accept a roll; returns true when it closes the frame
    fn accept(&mut self, roll: Roll) -> std::result::Result<bool, ValidationError> {
        if let Some(n) = roll.pins().filter(|&n| u32::from(n) >= PINS_PER_FRAME) {
            return Err(ValidationError::PinCountOutOfRange(n));
        }

        match (roll, self.first) {
            (Roll::Pins(second), Some(first)) => {
                if u32::from(first) + u32::from(second) >= PINS_PER_FRAME {
                    return Err(ValidationError::FrameOverflow { first, second });
                }
                self.first = None;
                Ok(true)
            }
            (Roll::Pins(n), None) => {
                self.first = Some(n);
                Ok(false)
            }
            (Roll::Strike, None) => Ok(true),
            (Roll::Strike, Some(_)) => Err(ValidationError::MisplacedStrike),
            (Roll::Spare, Some(_)) => {
                self.first = None;
                Ok(true)
            }
            (Roll::Spare, None) => Err(ValidationError::MisplacedSpare),
        }
    }
}

/// Check that `rolls` is a well-formed, possibly unfinished, game.
///
/// Fill balls after a tenth-frame mark follow the same rules as a fresh
/// frame: after a strike, `X X`, `7 /` and `7 2` are valid but `7 X` is not.
pub fn validate_rolls(rolls: &[Roll]) -> Result<()> {
    let mut check = FrameCheck::default();
    let mut frame: usize = 0;
    let mut fill_balls = 0;

    for (position, &roll) in rolls.iter().enumerate() {
        let fail = |reason| Error::Validation {
            frame: (frame + 1).min(FRAMES_PER_GAME),
            position,
            reason,
        };

        if frame == FRAMES_PER_GAME {
            if fill_balls == 0 {
                return Err(fail(ValidationError::TooManyRolls));
            }
            fill_balls -= 1;
            check.accept(roll).map_err(fail)?;
            continue;
        }

        if check.accept(roll).map_err(fail)? {
            frame += 1;
            if frame == FRAMES_PER_GAME {
                fill_balls = match roll {
                    Roll::Strike => 2,
                    Roll::Spare => 1,
                    Roll::Pins(_) => 0,
                };
            }
        }
    }

    debug!(rolls = rolls.len(), frames = frame, "Validated rolls");
    Ok(())
}

/// Validate, then score
pub fn score_game_strict(rolls: &[Roll], mode: LookaheadMode) -> Result<Scorecard> {
    validate_rolls(rolls)?;
    Ok(Scorecard::from_rolls(rolls, mode))
}
