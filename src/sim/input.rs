//! Logical input consumed by the simulation
//!
//! The simulation never talks to a keyboard or mouse. Each frame it receives
//! a [`FrameInput`] snapshot built by whatever input source is in use.

use std::collections::HashSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Logical movement keys. Pause, clicks and close arrive as separate
/// [`FrameInput`] flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
}

/// Four directional keys bound to one player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub up: Key,
    pub down: Key,
    pub left: Key,
    pub right: Key,
}

impl Controls {
    /// Left player's binding
    pub const WASD: Controls = Controls {
        up: Key::W,
        down: Key::S,
        left: Key::A,
        right: Key::D,
    };

    /// Right player's binding
    pub const ARROWS: Controls = Controls {
        up: Key::Up,
        down: Key::Down,
        left: Key::Left,
        right: Key::Right,
    };
}

/// Which keys are currently held down
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardState {
    pressed: HashSet<Key>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pressed(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            pressed: keys.into_iter().collect(),
        }
    }

    pub fn press(&mut self, key: Key) {
        self.pressed.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.pressed.remove(&key);
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }
}

/// Everything the input source reported for one frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Held keys (level-triggered)
    pub keys: KeyboardState,
    /// Pointer clicks this frame, in field coordinates
    pub clicks: Vec<Vec2>,
    /// Pause key went down this frame (edge-triggered)
    pub pause: bool,
    /// Window close / terminate request
    pub close_requested: bool,
}

impl FrameInput {
    /// Input with only held keys
    pub fn holding(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: KeyboardState::with_pressed(keys),
            ..Default::default()
        }
    }

    /// Input with a single click
    pub fn click(at: Vec2) -> Self {
        Self {
            clicks: vec![at],
            ..Default::default()
        }
    }

    pub fn pause() -> Self {
        Self {
            pause: true,
            ..Default::default()
        }
    }

    pub fn close() -> Self {
        Self {
            close_requested: true,
            ..Default::default()
        }
    }
}
