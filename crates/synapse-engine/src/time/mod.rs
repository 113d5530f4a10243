//! Time subsystem.
//!
//! The animation core never reads the clock itself: drivers call
//! `FrameClock::tick()` once per presented frame and feed `FrameTime::dt`
//! into `AnimationController::tick`.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
