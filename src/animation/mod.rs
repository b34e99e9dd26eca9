//! Animation primitives
//!
//! - `clock` - injectable time sources (`FrameClock`, `SystemClock`, `ManualClock`)
//! - `progress` - the single 0..1 progress value behind the make-room effect
//! - `easing` - curves applied to progress before it reaches the offsets

pub mod clock;
pub mod easing;
pub mod progress;

pub use clock::{FrameClock, ManualClock, SystemClock};
pub use easing::Easing;
pub use progress::{Completion, Direction, ProgressAnimation, RunId, DEFAULT_DURATION};
