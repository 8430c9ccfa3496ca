//! Match simulation module
//!
//! All gameplay logic lives here:
//! - One tick per frame, driven by a monotonic clock reading
//! - Stable iteration order (left player before right)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod geometry;
pub mod input;
pub mod screen;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{Kick, ball_touches_player, kick_impulse, resolve_ball_player, separate_players};
pub use geometry::{Aabb, Collidable};
pub use input::{Controls, FrameInput, Key, KeyboardState};
pub use screen::{Flow, advance};
pub use snapshot::MatchSnapshot;
pub use state::{Ball, Boost, GameEvent, MatchContext, MatchPhase, Millis, Player, Score, Side};
pub use tick::tick;

#[cfg(test)]
mod proptests;
