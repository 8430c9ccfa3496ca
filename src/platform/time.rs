//! Monotonic time and frame pacing

use std::cell::Cell;
use std::time::{Duration, Instant};

use crate::sim::Millis;

/// Source of monotonic milliseconds
pub trait Clock {
    fn now_ms(&self) -> Millis;
}

/// Wall clock measured from construction
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> Millis {
        self.origin.elapsed().as_millis() as Millis
    }
}

/// Hand-driven clock that advances a fixed step on every read
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Millis>,
    step: Millis,
}

impl ManualClock {
    /// Starts at `start` and moves forward `step` ms after each reading
    pub fn new(start: Millis, step: Millis) -> Self {
        Self {
            now: Cell::new(start),
            step,
        }
    }

    pub fn set(&self, now: Millis) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Millis) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> Millis {
        let now = self.now.get();
        self.now.set(now + self.step);
        now
    }
}

/// Sleeps just long enough to hold a target frame rate
#[derive(Debug)]
pub struct FrameLimiter {
    frame: Duration,
    last: Option<Instant>,
}

impl FrameLimiter {
    pub fn new(tick_rate: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / tick_rate.max(1),
            last: None,
        }
    }

    /// No pacing at all (tests, fast-forward)
    pub fn unlimited() -> Self {
        Self {
            frame: Duration::ZERO,
            last: None,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Block until a frame's worth of time has passed since the last call.
    ///
    /// A late frame is not caught up; the next one is simply measured from
    /// now.
    pub fn wait(&mut self) {
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < self.frame {
                std::thread::sleep(self.frame - elapsed);
            }
        }
        self.last = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_steps() {
        let clock = ManualClock::new(100, 16);
        assert_eq!(clock.now_ms(), 100);
        assert_eq!(clock.now_ms(), 116);
        clock.advance(1_000);
        assert_eq!(clock.now_ms(), 1_132);
        clock.set(5);
        assert_eq!(clock.now_ms(), 5);
    }

    #[test]
    fn test_monotonic_clock_never_goes_back() {
        let clock = MonotonicClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }

    #[test]
    fn test_frame_duration_for_60hz() {
        let limiter = FrameLimiter::new(60);
        assert_eq!(limiter.frame_duration(), Duration::from_secs(1) / 60);
    }

    #[test]
    fn test_limiter_paces_frames() {
        let mut limiter = FrameLimiter::new(200);
        let start = Instant::now();
        limiter.wait();
        limiter.wait();
        limiter.wait();
        assert!(start.elapsed() >= Duration::from_millis(10));
    }

    #[test]
    fn test_unlimited_never_sleeps_long() {
        let mut limiter = FrameLimiter::unlimited();
        let start = Instant::now();
        for _ in 0..100 {
            limiter.wait();
        }
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
