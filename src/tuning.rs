//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`]. Values are fixed for the
//! lifetime of a session; they can be overridden at startup through the JSON
//! config (see [`crate::config`]).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GameError, Result};

/// Shape used for the ball when testing contact against a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactShape {
    /// Ball's bounding square vs player box
    #[default]
    BoundingBox,
    /// Ball circle vs player box (tighter on the corners)
    Circle,
}

/// Gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub field_width: f32,
    pub field_height: f32,
    pub tick_rate: u32,

    pub player_speed: f32,
    pub player_half_extent: f32,
    pub player_start_inset: f32,

    pub ball_radius: f32,
    pub ball_kick_speed: f32,
    pub ball_friction: f32,
    pub bounce_factor: f32,
    pub contact_shape: ContactShape,

    pub score_limit: u32,

    pub boost_duration_ms: u64,
    pub boost_multiplier: f32,
    pub boost_trigger_speed: f32,

    /// Goal band, as fractions of field height
    pub goal_band_top: f32,
    pub goal_band_bottom: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            tick_rate: TICK_RATE,

            player_speed: PLAYER_SPEED,
            player_half_extent: PLAYER_HALF_EXTENT,
            player_start_inset: PLAYER_START_INSET,

            ball_radius: BALL_RADIUS,
            ball_kick_speed: BALL_KICK_SPEED,
            ball_friction: BALL_FRICTION,
            bounce_factor: BOUNCE_FACTOR,
            contact_shape: ContactShape::default(),

            score_limit: SCORE_LIMIT,

            boost_duration_ms: BOOST_DURATION_MS,
            boost_multiplier: BOOST_MULTIPLIER,
            boost_trigger_speed: BOOST_TRIGGER_SPEED,

            goal_band_top: GOAL_BAND_TOP,
            goal_band_bottom: GOAL_BAND_BOTTOM,
        }
    }
}

impl Tuning {
    /// Field size as a vector (width, height)
    pub fn field_size(&self) -> Vec2 {
        Vec2::new(self.field_width, self.field_height)
    }

    /// Center of the field (kickoff spot)
    pub fn field_center(&self) -> Vec2 {
        self.field_size() / 2.0
    }

    /// Vertical extent of the goal band in field units (top, bottom)
    pub fn goal_band(&self) -> (f32, f32) {
        (
            self.field_height * self.goal_band_top,
            self.field_height * self.goal_band_bottom,
        )
    }

    /// Whether a ball center height lies inside the goal band (inclusive)
    pub fn in_goal_band(&self, y: f32) -> bool {
        let (top, bottom) = self.goal_band();
        (top..=bottom).contains(&y)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        let fail = |msg: String| Err(GameError::InvalidTuning(msg));

        if !(self.field_width > 0.0 && self.field_height > 0.0) {
            return fail(format!(
                "field must have positive size, got {}x{}",
                self.field_width, self.field_height
            ));
        }
        if self.tick_rate == 0 {
            return fail("tick_rate must be positive".into());
        }
        for (name, value) in [
            ("player_speed", self.player_speed),
            ("ball_kick_speed", self.ball_kick_speed),
            ("boost_trigger_speed", self.boost_trigger_speed),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return fail(format!("{} must be a finite non-negative number, got {}", name, value));
            }
        }
        if self.player_half_extent <= 0.0
            || self.player_half_extent * 2.0 > self.field_width.min(self.field_height)
        {
            return fail(format!(
                "player_half_extent {} does not fit the field",
                self.player_half_extent
            ));
        }
        if self.ball_radius <= 0.0 || self.ball_radius * 2.0 > self.field_height {
            return fail(format!("ball_radius {} does not fit the field", self.ball_radius));
        }
        if !(self.ball_friction > 0.0 && self.ball_friction < 1.0) {
            return fail(format!("ball_friction must be in (0, 1), got {}", self.ball_friction));
        }
        if self.bounce_factor < 1.0 {
            return fail(format!("bounce_factor must be >= 1, got {}", self.bounce_factor));
        }
        if self.score_limit == 0 {
            return fail("score_limit must be positive".into());
        }
        if self.boost_multiplier < 1.0 {
            return fail(format!(
                "boost_multiplier must be >= 1, got {}",
                self.boost_multiplier
            ));
        }
        if !(0.0 <= self.goal_band_top
            && self.goal_band_top < self.goal_band_bottom
            && self.goal_band_bottom <= 1.0)
        {
            return fail(format!(
                "goal band {}..{} is not a sub-range of 0..1",
                self.goal_band_top, self.goal_band_bottom
            ));
        }
        Ok(())
    }
}
