//! Game scorecard built on top of the per-frame scores.
//!
//! The scorer reports one entry per frame it discovers, including the
//! frames formed by tenth-frame fill balls. The scorecard numbers frames
//! from 1, keeps running totals, and counts only the first ten frames
//! toward the game total.

use serde::Serialize;

use crate::config::rules::{FRAMES_PER_GAME, PERFECT_GAME};
use crate::frame::{Frame, FrameKind};
use crate::roll::Roll;
use crate::scorer::{LookaheadMode, resolve_frames};

/// One frame as shown on a scorecard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredFrame {
    /// One-based frame number
    pub number: usize,
    pub rolls: Vec<Roll>,
    pub kind: FrameKind,
    pub score: Option<u32>,
    /// Game total up to and including this frame; `None` from the first
    /// pending frame on
    pub running_total: Option<u32>,
    /// Frame made up of tenth-frame fill balls
    pub fill_balls: bool,
}

/// Scored game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scorecard {
    pub lookahead: LookaheadMode,
    pub frames: Vec<ScoredFrame>,
    /// Sum of the resolved scores of the first ten frames
    pub total: u32,
    /// All ten frames are present and resolved
    pub complete: bool,
}

impl Scorecard {
    pub fn from_rolls(rolls: &[Roll], lookahead: LookaheadMode) -> Self {
        Self::from_frames(&resolve_frames(rolls, lookahead), lookahead)
    }

    pub fn from_frames(frames: &[Frame], lookahead: LookaheadMode) -> Self {
        let mut running = Some(0u32);
        let mut total = 0;

        let scored: Vec<ScoredFrame> = frames
            .iter()
            .map(|frame| {
                let fill_balls = frame.index >= FRAMES_PER_GAME;
                if !fill_balls {
                    total += frame.score.unwrap_or(0);
                    running = running.zip(frame.score).map(|(sum, score)| sum + score);
                }
                ScoredFrame {
                    number: frame.index + 1,
                    rolls: frame.rolls.clone(),
                    kind: frame.kind(),
                    score: frame.score,
                    running_total: if fill_balls { None } else { running },
                    fill_balls,
                }
            })
            .collect();

        let game_frames = scored.iter().filter(|f| !f.fill_balls);
        let complete = game_frames.clone().count() == FRAMES_PER_GAME
            && game_frames.clone().all(|f| f.score.is_some());

        Self {
            lookahead,
            frames: scored,
            total,
            complete,
        }
    }

    /// Per-frame scores in frame order, fill-ball frames included
    pub fn scores(&self) -> Vec<Option<u32>> {
        self.frames.iter().map(|f| f.score).collect()
    }

    pub fn is_perfect(&self) -> bool {
        self.complete && self.total == PERFECT_GAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::parse_rolls;

    fn card(input: &str) -> Scorecard {
        Scorecard::from_rolls(&parse_rolls(input).unwrap(), LookaheadMode::Rolls)
    }

    #[test]
    fn test_perfect_game() {
        let card = card("X X X X X X X X X X X X");
        assert_eq!(card.frames.len(), 12);
        assert!(card.frames[..10].iter().all(|f| f.score == Some(30)));
        assert!(card.frames[10].fill_balls);
        assert!(card.frames[11].fill_balls);
        assert_eq!(card.frames[9].running_total, Some(300));
        assert_eq!(card.frames[10].running_total, None);
        assert_eq!(card.total, 300);
        assert!(card.complete);
        assert!(card.is_perfect());
    }

    #[test]
    fn test_all_spares() {
        let card = card("5/ 5/ 5/ 5/ 5/ 5/ 5/ 5/ 5/ 5/ 5");
        assert_eq!(card.total, 150);
        assert!(card.complete);
        assert!(!card.is_perfect());
    }

    #[test]
    fn test_running_totals_stop_at_pending_frame() {
        let card = card("2 6 X X X X 3 / 3 4 1 3 X");
        let running: Vec<Option<u32>> = card.frames.iter().map(|f| f.running_total).collect();
        assert_eq!(
            running,
            vec![
                Some(8),
                Some(38),
                Some(68),
                Some(91),
                Some(111),
                Some(124),
                Some(131),
                Some(135),
                None
            ]
        );
        assert_eq!(card.total, 135);
        assert!(!card.complete);
    }

    #[test]
    fn test_frame_numbers_and_kinds() {
        let card = card("X 7 / 4");
        assert_eq!(card.frames[0].number, 1);
        assert_eq!(card.frames[0].kind, FrameKind::Strike);
        assert_eq!(card.frames[1].number, 2);
        assert_eq!(card.frames[1].kind, FrameKind::Spare);
        assert_eq!(card.frames[2].kind, FrameKind::Incomplete);
        assert_eq!(card.scores(), vec![Some(20), Some(14), None]);
    }

    #[test]
    fn test_empty_game() {
        let card = card("");
        assert!(card.frames.is_empty());
        assert_eq!(card.total, 0);
        assert!(!card.complete);
    }
}
