use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};
use tracing::debug;

use crate::config::rules::{MAX_FRAME_SCORE, MAX_LOOKAHEAD, PINS_PER_FRAME};
use crate::frame::{Frame, FrameKind};

/// How a strike collects its bonus from the frames after it
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LookaheadMode {
    /// Standard scoring: the next two rolls. A strike stays pending until
    /// both have been thrown.
    Rolls,
    /// Whole-frame lookahead: a following two-roll frame contributes both
    /// rolls, and a frame with fewer than two rolls (a strike, or one not
    /// yet played) counts as 10.
    #[default]
    Frames,
}

/// Bonus rolls owed to a strike
const STRIKE_BONUS_ROLLS: usize = 2;

pub(crate) fn resolve_strike_bonuses(frames: &mut [Frame], mode: LookaheadMode) {
    for index in 0..frames.len() {
        let Some(seed) = frames[index].accumulator else {
            continue;
        };

        let resolved = match mode {
            LookaheadMode::Rolls => lookahead_rolls(frames, index, seed),
            LookaheadMode::Frames => Some(lookahead_frames(frames, index, seed)),
        };
        debug!(frame = index, ?resolved, "Strike bonus");

        let frame = &mut frames[index];
        if let Some(total) = resolved {
            frame.accumulator = Some(total);
        }
        frame.score = resolved;
    }
}

/// Add the pins of the next two rolls, or `None` if they have not been thrown.
fn lookahead_rolls(frames: &[Frame], index: usize, seed: u32) -> Option<u32> {
    let mut accumulator = seed;
    let mut owed = STRIKE_BONUS_ROLLS;

    for step in 1..=MAX_LOOKAHEAD {
        let next = frames.get(index + step)?;
        match (next.kind(), owed) {
            (FrameKind::Strike, _) => {
                accumulator += PINS_PER_FRAME;
                owed -= 1;
            }
            (FrameKind::Spare, STRIKE_BONUS_ROLLS) => {
                accumulator += PINS_PER_FRAME;
                owed = 0;
            }
            (FrameKind::Open, STRIKE_BONUS_ROLLS) => {
                accumulator += next.pin_total();
                owed = 0;
            }
            (FrameKind::Incomplete, STRIKE_BONUS_ROLLS) => return None,
            // One roll left to count: the first of this frame
            _ => {
                accumulator += next.rolls.first()?.value();
                owed -= 1;
            }
        }

        if owed == 0 {
            break;
        }
    }

    (owed == 0).then_some(accumulator)
}

/// Frame-by-frame lookahead, stopping at the first two-roll frame or once
/// the frame maximum of 30 is reached.
fn lookahead_frames(frames: &[Frame], index: usize, seed: u32) -> u32 {
    let mut accumulator = seed;

    for step in 1..=MAX_LOOKAHEAD {
        match frames.get(index + step) {
            Some(next) if next.rolls.len() >= 2 => {
                accumulator += if next.ends_in_spare() {
                    PINS_PER_FRAME
                } else {
                    next.pin_total()
                };
                break;
            }
            _ => {
                accumulator += PINS_PER_FRAME;
                if accumulator == MAX_FRAME_SCORE {
                    break;
                }
            }
        }
    }

    accumulator
}
