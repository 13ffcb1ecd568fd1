//! Animation drivers
//!
//! Presentation-side smoothing sampled by the renderer each frame. Like the
//! timer machine these take the current time as an argument.

pub mod cube;
pub mod rings;
pub mod tween;

pub use cube::{CubeAnimator, CubeFrame, SpinState};
pub use rings::{RingAnimator, RING_COUNT};
pub use tween::Tween;
