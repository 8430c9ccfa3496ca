//! Match state and core simulation types
//!
//! Everything the simulation mutates lives in [`MatchContext`], which the
//! session owns and lends to the tick and screen functions each frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Aabb, Collidable};
use super::input::{Controls, KeyboardState};
use crate::tuning::Tuning;

/// Monotonic wall-clock milliseconds
pub type Millis = u64;

/// The two sides of the pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Blue by default, defends the left goal ("player1")
    Left,
    /// Red by default, defends the right goal ("player2")
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    /// Stable identity used in logs and snapshots
    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "player1",
            Side::Right => "player2",
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Title screen, waiting for Start
    #[default]
    Home,
    /// Active gameplay
    Playing,
    /// Gameplay frozen, positions and score kept
    Paused,
    /// A side reached the score limit
    GameOver,
}

/// Things that happened during a frame, for audio and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    MatchStarted,
    BallKicked { by: Side },
    BoostActivated { side: Side },
    GoalScored { scorer: Side },
    Paused,
    Resumed,
    MatchWon { winner: Side },
    QuitRequested,
}

/// Timed speed boost
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boost {
    /// Activation time, `None` when no boost is running
    pub started_at: Option<Millis>,
}

impl Boost {
    /// (Re)start the boost at `now`
    pub fn activate(&mut self, now: Millis) {
        self.started_at = Some(now);
    }

    pub fn is_active(&self, now: Millis, duration_ms: Millis) -> bool {
        self.started_at
            .is_some_and(|start| now.saturating_sub(start) < duration_ms)
    }

    /// Time the running boost runs out, saturating at `Millis::MAX`
    pub fn ends_at(&self, duration_ms: Millis) -> Option<Millis> {
        self.started_at.map(|start| start.saturating_add(duration_ms))
    }

    /// Clear a boost whose time is up. Returns true if it just ran out.
    pub fn expire(&mut self, now: Millis, duration_ms: Millis) -> bool {
        if self.started_at.is_some() && !self.is_active(now, duration_ms) {
            self.started_at = None;
            return true;
        }
        false
    }

    pub fn clear(&mut self) {
        self.started_at = None;
    }
}

/// A player-controlled sprite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub side: Side,
    /// Center position
    pub pos: Vec2,
    /// Center position at the start of the current tick
    pub prev_pos: Vec2,
    /// Kickoff spot
    pub start_pos: Vec2,
    pub half_extent: f32,
    pub controls: Controls,
    pub boost: Boost,
}

impl Player {
    /// Create a player at its kickoff spot for the given side
    pub fn new(side: Side, tuning: &Tuning) -> Self {
        let start_pos = Self::kickoff_spot(side, tuning);
        let controls = match side {
            Side::Left => Controls::WASD,
            Side::Right => Controls::ARROWS,
        };
        Self {
            side,
            pos: start_pos,
            prev_pos: start_pos,
            start_pos,
            half_extent: tuning.player_half_extent,
            controls,
            boost: Boost::default(),
        }
    }

    pub fn kickoff_spot(side: Side, tuning: &Tuning) -> Vec2 {
        let y = tuning.field_height / 2.0;
        match side {
            Side::Left => Vec2::new(tuning.player_start_inset, y),
            Side::Right => Vec2::new(tuning.field_width - tuning.player_start_inset, y),
        }
    }

    /// Movement per tick along each axis
    pub fn speed(&self, now: Millis, tuning: &Tuning) -> f32 {
        if self.boost.is_active(now, tuning.boost_duration_ms) {
            tuning.player_speed * tuning.boost_multiplier
        } else {
            tuning.player_speed
        }
    }

    /// Move according to held keys, then clamp inside the field.
    ///
    /// Axes are handled independently, so holding two directions moves
    /// diagonally at full speed on both axes.
    pub fn update(&mut self, keys: &KeyboardState, now: Millis, tuning: &Tuning) {
        self.prev_pos = self.pos;
        let speed = self.speed(now, tuning);

        let mut delta = Vec2::ZERO;
        if keys.is_pressed(self.controls.up) {
            delta.y -= speed;
        }
        if keys.is_pressed(self.controls.down) {
            delta.y += speed;
        }
        if keys.is_pressed(self.controls.left) {
            delta.x -= speed;
        }
        if keys.is_pressed(self.controls.right) {
            delta.x += speed;
        }

        self.pos += delta;
        self.clamp_to_field(tuning);
    }

    pub fn clamp_to_field(&mut self, tuning: &Tuning) {
        self.pos = Aabb::field(tuning.field_size()).clamp_center(self.pos, self.half_extents());
    }

    /// Displacement over the last tick (not a physical velocity)
    pub fn velocity(&self) -> Vec2 {
        self.pos - self.prev_pos
    }

    /// Back to kickoff spot, standing still, no boost
    pub fn reset(&mut self) {
        self.pos = self.start_pos;
        self.prev_pos = self.start_pos;
        self.boost.clear();
    }
}

impl Collidable for Player {
    fn center(&self) -> Vec2 {
        self.pos
    }

    fn half_extents(&self) -> Vec2 {
        Vec2::splat(self.half_extent)
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// A resting ball at the center of the field
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.field_center(),
            vel: Vec2::ZERO,
            radius: tuning.ball_radius,
        }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Advance one tick: move, apply friction, bounce off walls.
    ///
    /// Returns the side that scored if the ball left through a goal band.
    /// A ball in the goal band is never clamped back; outside the band the
    /// side walls bounce it like the top and bottom walls.
    pub fn update(&mut self, tuning: &Tuning) -> Option<Side> {
        self.pos += self.vel;
        self.vel *= tuning.ball_friction;

        let r = self.radius;
        let (w, h) = (tuning.field_width, tuning.field_height);

        // Top/bottom bounce
        if self.pos.y - r <= 0.0 || self.pos.y + r >= h {
            self.vel.y = -self.vel.y * tuning.bounce_factor;
            self.pos.y = self.pos.y.clamp(r, h - r);
        }

        let in_band = tuning.in_goal_band(self.pos.y);

        // Left wall: right player's goal when inside the band
        if self.pos.x - r <= 0.0 {
            if in_band {
                return Some(Side::Right);
            }
            self.vel.x = -self.vel.x * tuning.bounce_factor;
            self.pos.x = r;
        } else if self.pos.x + r >= w {
            if in_band {
                return Some(Side::Left);
            }
            self.vel.x = -self.vel.x * tuning.bounce_factor;
            self.pos.x = w - r;
        }

        None
    }

    /// Add an instantaneous impulse to the velocity
    pub fn apply_force(&mut self, impulse: Vec2) {
        self.vel += impulse;
    }

    /// Back to center, at rest
    pub fn reset(&mut self, tuning: &Tuning) {
        self.pos = tuning.field_center();
        self.vel = Vec2::ZERO;
    }
}

impl Collidable for Ball {
    fn center(&self) -> Vec2 {
        self.pos
    }

    fn half_extents(&self) -> Vec2 {
        Vec2::splat(self.radius)
    }
}

/// Goals per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn record_goal(&mut self, scorer: Side) {
        match scorer {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    /// Side that has reached `limit`, left checked first
    pub fn winner(&self, limit: u32) -> Option<Side> {
        Side::BOTH.into_iter().find(|&side| self.get(side) >= limit)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Complete match state, owned by the session loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchContext {
    pub tuning: Tuning,
    pub phase: MatchPhase,
    /// Set on entering GameOver, cleared on leaving it
    pub winner: Option<Side>,
    /// Indexed by [`Side::index`]
    pub players: [Player; 2],
    pub ball: Ball,
    pub score: Score,
    /// Clock reading for the current frame
    pub now: Millis,
    /// Gameplay ticks simulated since the last (re)start
    pub time_ticks: u64,
    /// Events produced during the current frame
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl MatchContext {
    /// Fresh context on the Home screen
    pub fn new(tuning: Tuning) -> Self {
        let players = [
            Player::new(Side::Left, &tuning),
            Player::new(Side::Right, &tuning),
        ];
        let ball = Ball::new(&tuning);
        Self {
            tuning,
            phase: MatchPhase::Home,
            winner: None,
            players,
            ball,
            score: Score::default(),
            now: 0,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    pub fn player_mut(&mut self, side: Side) -> &mut Player {
        &mut self.players[side.index()]
    }

    /// Kickoff state: zero score, centered ball, players on their spots
    pub fn reset_match(&mut self) {
        self.score.reset();
        self.ball.reset(&self.tuning);
        for player in &mut self.players {
            player.reset();
        }
        self.winner = None;
        self.time_ticks = 0;
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Hand over this frame's events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
