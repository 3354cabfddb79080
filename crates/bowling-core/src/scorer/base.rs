use crate::frame::{Frame, FrameKind};

/// Score open frames and mark unfinished ones as pending.
///
/// Strike and spare frames keep whatever the framer set.
pub(crate) fn score_open_frames(frames: &mut [Frame]) {
    for frame in frames.iter_mut() {
        match frame.kind() {
            FrameKind::Open => frame.score = Some(frame.pin_total()),
            FrameKind::Incomplete => frame.score = None,
            FrameKind::Spare | FrameKind::Strike => {}
        }
    }
}
