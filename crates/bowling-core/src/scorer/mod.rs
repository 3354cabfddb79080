//! Frame segmentation and scoring.
//!
//! Scoring runs in three passes over an explicit list of frame records:
//! 1. `framer` splits the roll sequence into frames and prices spares
//!    from the roll that follows them
//! 2. `base` scores open frames and marks unfinished ones as pending
//! 3. `bonus` resolves strike bonuses by looking ahead into later frames
//!
//! The core never rejects input. Malformed sequences are scored on a
//! best-effort basis; see [`crate::validation`] for a strict wrapper.

mod base;
mod bonus;
mod framer;

pub use bonus::LookaheadMode;

use tracing::debug;

use crate::frame::Frame;
use crate::roll::Roll;

/// Split rolls into frames and resolve every score that can be resolved
pub fn resolve_frames(rolls: &[Roll], mode: LookaheadMode) -> Vec<Frame> {
    let mut frames = framer::build_frames(rolls);
    base::score_open_frames(&mut frames);
    bonus::resolve_strike_bonuses(&mut frames, mode);
    debug!(
        rolls = rolls.len(),
        frames = frames.len(),
        %mode,
        "Resolved frame scores"
    );
    frames
}

/// Per-frame scores in frame order, using the default lookahead mode.
///
/// `None` marks a frame whose score depends on rolls that have not been
/// thrown yet.
pub fn score_frames(rolls: &[Roll]) -> Vec<Option<u32>> {
    score_frames_with(rolls, LookaheadMode::default())
}

/// Per-frame scores in frame order; `mode` selects how strikes look ahead.
pub fn score_frames_with(rolls: &[Roll], mode: LookaheadMode) -> Vec<Option<u32>> {
    resolve_frames(rolls, mode)
        .iter()
        .map(|frame| frame.score)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::parse_rolls;

    fn scores(input: &str) -> Vec<Option<u32>> {
        score_frames(&parse_rolls(input).unwrap())
    }

    fn standard_scores(input: &str) -> Vec<Option<u32>> {
        score_frames_with(&parse_rolls(input).unwrap(), LookaheadMode::Rolls)
    }

    #[test]
    fn test_empty_input() {
        assert!(score_frames(&[]).is_empty());
        assert!(score_frames_with(&[], LookaheadMode::Rolls).is_empty());
    }

    #[test]
    fn test_sample_standard_scoring() {
        assert_eq!(
            standard_scores("2 6 X X X X 3 / 3 4 1 3 X"),
            vec![
                Some(8),
                Some(30),
                Some(30),
                Some(23),
                Some(20),
                Some(13),
                Some(7),
                Some(4),
                None
            ]
        );
    }

    #[test]
    fn test_sample_default_scoring() {
        assert_eq!(
            scores("2 6 X X X X 3 / 3 4 1 3 X"),
            vec![
                Some(8),
                Some(30),
                Some(30),
                Some(30),
                Some(20),
                Some(13),
                Some(7),
                Some(4),
                Some(30)
            ]
        );
    }

    #[test]
    fn test_default_counts_unplayed_frames_as_ten() {
        assert_eq!(scores("X"), vec![Some(30)]);
        assert_eq!(standard_scores("X"), vec![None]);
    }

    #[test]
    fn test_frame_indices_follow_roll_order() {
        let frames = resolve_frames(
            &parse_rolls("X 7 / 3 4 5").unwrap(),
            LookaheadMode::Rolls,
        );
        let indices: Vec<usize> = frames.iter().map(|f| f.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_deterministic() {
        let rolls = parse_rolls("X 9 / 5 3 X X 2 -").unwrap();
        assert_eq!(score_frames(&rolls), score_frames(&rolls));
    }
}
