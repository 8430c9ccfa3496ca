//! Platform abstraction layer
//!
//! Handles the pieces that differ between a real window and a headless run:
//! - Time (monotonic clock, frame limiter)
//! - Input sources

pub mod input;
pub mod time;

pub use input::{InputSource, ScriptedInput};
pub use time::{Clock, FrameLimiter, ManualClock, MonotonicClock};
