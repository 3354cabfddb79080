use std::mem;

use crate::frame::Frame;
use crate::roll::Roll;

/// Frame under construction.
///
/// Rolls are buffered here and only become a `Frame` once sealed, so a frame
/// waiting for its second roll is never committed and later overwritten.
#[derive(Debug, Default)]
pub struct FrameBuilder {
    rolls: Vec<Roll>,
}

impl FrameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, roll: Roll) {
        self.rolls.push(roll);
    }

    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    /// Seal the buffered rolls into a frame and reset the buffer
    pub fn seal(&mut self, index: usize) -> Frame {
        Frame::new(index, mem::take(&mut self.rolls))
    }

    /// Seal whatever is left once the input runs out
    pub fn finish(mut self, index: usize) -> Option<Frame> {
        (!self.is_empty()).then(|| self.seal(index))
    }
}
