use crate::config::rules::PINS_PER_FRAME;
use crate::frame::{Frame, FrameBuilder};
use crate::roll::Roll;

/// Which roll of the current frame comes next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RollSlot {
    First,
    Second,
}

/// Partition rolls into frames, left to right.
///
/// A strike seals its frame at once, a spare or a second pin count seals
/// the frame it completes. A spare is priced from the roll right after it
/// when that roll is already known.
pub(crate) fn build_frames(rolls: &[Roll]) -> Vec<Frame> {
    let mut frames = Vec::new();
    let mut builder = FrameBuilder::new();
    let mut slot = RollSlot::First;

    for (position, &roll) in rolls.iter().enumerate() {
        builder.push(roll);
        match (roll, slot) {
            (Roll::Pins(_), RollSlot::First) => {
                slot = RollSlot::Second;
            }
            (Roll::Pins(_), RollSlot::Second) | (Roll::Strike, _) => {
                frames.push(builder.seal(frames.len()));
                slot = RollSlot::First;
            }
            (Roll::Spare, _) => {
                let mut frame = builder.seal(frames.len());
                frame.score = rolls.get(position + 1).map(spare_score);
                frames.push(frame);
                slot = RollSlot::First;
            }
        }
    }

    if let Some(frame) = builder.finish(frames.len()) {
        frames.push(frame);
    }

    frames
}

/// Spare score given the roll that follows it: a strike makes it 20
fn spare_score(next: &Roll) -> u32 {
    PINS_PER_FRAME + next.value()
}
