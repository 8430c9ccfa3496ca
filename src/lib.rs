//! Soccer Pong - A two-player local arcade soccer game
//!
//! Core modules:
//! - `sim`: Simulation (physics, collisions, scoring, screen state machine)
//! - `renderer`: Presentation boundary and a headless renderer
//! - `audio`: Sound cue boundary
//! - `platform`: Clock, frame limiter and input sources
//! - `tuning` / `settings` / `config`: Startup configuration
//! - `game`: Session loop tying it all together

pub mod audio;
pub mod config;
pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use config::GameConfig;
pub use error::{GameError, Result};
pub use game::{Flow, Game};
pub use settings::{Settings, Stadium, Team};
pub use tuning::{ContactShape, Tuning};

/// Game configuration constants
pub mod consts {
    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 1000.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Target frame rate (one simulation tick per frame)
    pub const TICK_RATE: u32 = 60;

    /// Player defaults (sprites are 60x60)
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_HALF_EXTENT: f32 = 30.0;
    /// Horizontal distance from the side wall to a player's kickoff spot
    pub const PLAYER_START_INSET: f32 = 80.0;

    /// Ball defaults (30x30 sprite)
    pub const BALL_RADIUS: f32 = 15.0;
    /// Magnitude of the directional part of a kick
    pub const BALL_KICK_SPEED: f32 = 6.0;
    /// Velocity multiplier applied every tick
    pub const BALL_FRICTION: f32 = 0.98;
    /// Wall bounce amplification
    pub const BOUNCE_FACTOR: f32 = 1.05;

    /// Goals needed to win
    pub const SCORE_LIMIT: u32 = 5;

    /// Boost
    pub const BOOST_DURATION_MS: u64 = 2000;
    pub const BOOST_MULTIPLIER: f32 = 2.0;
    /// Per-tick displacement a kicker must exceed to earn a boost
    pub const BOOST_TRIGGER_SPEED: f32 = 3.0;

    /// Goal band as fractions of field height
    pub const GOAL_BAND_TOP: f32 = 0.25;
    pub const GOAL_BAND_BOTTOM: f32 = 0.75;
    /// Width of the goal markers drawn on each side wall
    pub const GOAL_MARKER_WIDTH: f32 = 10.0;
}
