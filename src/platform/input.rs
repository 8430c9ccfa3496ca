//! Input sources
//!
//! A windowed front end would translate keyboard and mouse events into a
//! [`FrameInput`] per frame. [`ScriptedInput`] does the same from a queue,
//! which drives the headless binary and the integration tests.

use std::collections::VecDeque;

use glam::Vec2;

use crate::sim::{FrameInput, Key};

pub trait InputSource {
    /// Input for the next frame
    fn poll(&mut self) -> FrameInput;
}

/// Replays a fixed sequence of frames, then asks to close
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<FrameInput>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, input: FrameInput) -> Self {
        self.frames.push_back(input);
        self
    }

    /// Same input for `frames` consecutive frames
    pub fn repeat(mut self, input: FrameInput, frames: usize) -> Self {
        self.frames.extend(std::iter::repeat_n(input, frames));
        self
    }

    pub fn hold(self, keys: &[Key], frames: usize) -> Self {
        self.repeat(FrameInput::holding(keys.iter().copied()), frames)
    }

    pub fn idle(self, frames: usize) -> Self {
        self.repeat(FrameInput::default(), frames)
    }

    pub fn click(self, at: Vec2) -> Self {
        self.push(FrameInput::click(at))
    }

    pub fn pause(self) -> Self {
        self.push(FrameInput::pause())
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }

    /// Short exhibition: start, both players chase the ball, a pause, then
    /// the window closes when the tape runs out.
    pub fn demo(start_button: Vec2) -> Self {
        Self::new()
            .idle(30)
            .click(start_button)
            .hold(&[Key::D], 90)
            .hold(&[Key::D, Key::Left], 60)
            .hold(&[Key::D, Key::S, Key::Left, Key::Up], 60)
            .pause()
            .idle(30)
            .pause()
            .hold(&[Key::W, Key::Left], 120)
            .idle(60)
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> FrameInput {
        self.frames.pop_front().unwrap_or_else(FrameInput::close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_in_order_then_closes() {
        let mut input = ScriptedInput::new()
            .click(Vec2::new(1.0, 2.0))
            .hold(&[Key::W], 2)
            .pause();
        assert_eq!(input.remaining(), 4);

        assert_eq!(input.poll().clicks, vec![Vec2::new(1.0, 2.0)]);
        assert!(input.poll().keys.is_pressed(Key::W));
        assert!(input.poll().keys.is_pressed(Key::W));
        assert!(input.poll().pause);
        assert!(input.poll().close_requested);
        assert!(input.poll().close_requested);
    }

    #[test]
    fn test_demo_starts_with_a_click() {
        let button = Vec2::new(500.0, 300.0);
        let mut demo = ScriptedInput::demo(button);
        let first_click = std::iter::from_fn(|| Some(demo.poll()))
            .take(100)
            .find(|f| !f.clicks.is_empty());
        assert_eq!(first_click.map(|f| f.clicks), Some(vec![button]));
    }
}
