//! Frame records.
//!
//! - `Frame` - a sealed frame with its rolls, score and strike accumulator
//! - `FrameKind` - open, spare, strike or incomplete
//! - `FrameBuilder` - the frame under construction while rolls are scanned

mod builder;
mod types;

pub use builder::*;
pub use types::*;
