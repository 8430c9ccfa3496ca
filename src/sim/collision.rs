//! Collision detection and response
//!
//! Ball vs player contacts produce kicks (additive impulses) and may arm a
//! boost. Player vs player overlaps are resolved a unit at a time.

use glam::Vec2;

use super::geometry::{Collidable, circle_overlaps_aabb, direction_or};
use super::state::{Ball, Millis, Player};
use crate::tuning::{ContactShape, Tuning};

/// Result of a kick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kick {
    /// Impulse applied to the ball
    pub impulse: Vec2,
    /// Whether the kick (re)armed the kicker's boost
    pub boosted: bool,
}

/// Whether the ball is touching the player
pub fn ball_touches_player(ball: &Ball, player: &Player, shape: ContactShape) -> bool {
    match shape {
        ContactShape::BoundingBox => ball.overlaps(player),
        ContactShape::Circle => circle_overlaps_aabb(ball.pos, ball.radius, &player.bounds()),
    }
}

/// Impulse a player imparts on contact.
///
/// The direction runs from the player's center to the ball's center, scaled
/// to the kick speed, plus the player's own displacement this tick.
/// Coincident centers kick to the right.
pub fn kick_impulse(ball: &Ball, player: &Player, kick_speed: f32) -> Vec2 {
    direction_or(player.pos, ball.pos, Vec2::X) * kick_speed + player.velocity()
}

/// Resolve contact between the ball and one player.
///
/// Returns `None` when they are not touching.
pub fn resolve_ball_player(
    ball: &mut Ball,
    player: &mut Player,
    now: Millis,
    tuning: &Tuning,
) -> Option<Kick> {
    if !ball_touches_player(ball, player, tuning.contact_shape) {
        return None;
    }

    let impulse = kick_impulse(ball, player, tuning.ball_kick_speed);
    ball.apply_force(impulse);

    // A hard kick always re-arms the boost, even if one is running
    let boosted = player.velocity().length() > tuning.boost_trigger_speed;
    if boosted {
        player.boost.activate(now);
    }

    Some(Kick { impulse, boosted })
}

/// Push two overlapping players one unit apart along the line between them.
///
/// Each component of the unit direction is rounded to a whole unit, so a
/// single call moves each player by at most one unit per axis. Coincident
/// centers are left alone. Returns true if anyone moved.
pub fn separate_players(a: &mut Player, b: &mut Player) -> bool {
    if !a.overlaps(&*b) {
        return false;
    }

    let offset = b.pos - a.pos;
    if offset.length_squared() == 0.0 {
        return false;
    }

    let push = offset.normalize().round();
    if push == Vec2::ZERO {
        return false;
    }

    a.pos -= push;
    b.pos += push;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Side;

    fn setup() -> (Tuning, Ball, Player, Player) {
        let tuning = Tuning::default();
        let ball = Ball::new(&tuning);
        let left = Player::new(Side::Left, &tuning);
        let right = Player::new(Side::Right, &tuning);
        (tuning, ball, left, right)
    }

    #[test]
    fn test_kick_from_left_adds_player_velocity() {
        let (tuning, mut ball, mut player, _) = setup();
        // Player moved 5 right this tick and now touches the resting ball
        player.prev_pos = Vec2::new(455.0, 300.0);
        player.pos = Vec2::new(460.0, 300.0);

        let kick = resolve_ball_player(&mut ball, &mut player, 0, &tuning).unwrap();
        assert!((ball.vel.x - (tuning.ball_kick_speed + 5.0)).abs() < 1e-5);
        assert!(ball.vel.y.abs() < 1e-5);
        assert_eq!(kick.impulse, ball.vel);
    }

    #[test]
    fn test_kick_carries_vertical_displacement() {
        let (tuning, mut ball, mut player, _) = setup();
        player.prev_pos = Vec2::new(460.0, 303.0);
        player.pos = Vec2::new(460.0, 300.0);

        resolve_ball_player(&mut ball, &mut player, 0, &tuning).unwrap();
        assert!((ball.vel.x - tuning.ball_kick_speed).abs() < 1e-5);
        assert!((ball.vel.y - (-3.0)).abs() < 1e-5);
    }

    #[test]
    fn test_coincident_centers_kick_right() {
        let (tuning, ball, mut player, _) = setup();
        player.pos = ball.pos;
        player.prev_pos = ball.pos;
        assert_eq!(kick_impulse(&ball, &player, tuning.ball_kick_speed), Vec2::new(6.0, 0.0));
    }

    #[test]
    fn test_no_kick_without_contact() {
        let (tuning, mut ball, mut player, _) = setup();
        assert!(resolve_ball_player(&mut ball, &mut player, 0, &tuning).is_none());
        assert_eq!(ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_impulses_accumulate() {
        let (tuning, mut ball, mut left, mut right) = setup();
        left.pos = Vec2::new(460.0, 300.0);
        left.prev_pos = left.pos;
        right.pos = Vec2::new(540.0, 300.0);
        right.prev_pos = right.pos;

        resolve_ball_player(&mut ball, &mut left, 0, &tuning).unwrap();
        resolve_ball_player(&mut ball, &mut right, 0, &tuning).unwrap();
        assert!(ball.vel.length() < 1e-5);
    }

    #[test]
    fn test_hard_kick_arms_boost() {
        let (tuning, mut ball, mut player, _) = setup();
        player.prev_pos = Vec2::new(456.0, 300.0);
        player.pos = Vec2::new(460.0, 300.0);

        let kick = resolve_ball_player(&mut ball, &mut player, 7_000, &tuning).unwrap();
        assert!(kick.boosted);
        assert_eq!(player.boost.started_at, Some(7_000));

        // Kicking hard again later restarts the timer
        resolve_ball_player(&mut ball, &mut player, 8_000, &tuning).unwrap();
        assert_eq!(player.boost.started_at, Some(8_000));
    }

    #[test]
    fn test_soft_touch_does_not_boost() {
        let (tuning, mut ball, mut player, _) = setup();
        player.prev_pos = Vec2::new(457.0, 300.0);
        player.pos = Vec2::new(460.0, 300.0);

        let kick = resolve_ball_player(&mut ball, &mut player, 0, &tuning).unwrap();
        assert!(!kick.boosted);
        assert_eq!(player.boost.started_at, None);
    }

    #[test]
    fn test_circle_contact_misses_corner() {
        let (mut tuning, mut ball, mut player, _) = setup();
        tuning.contact_shape = ContactShape::Circle;
        // Ball square overlaps the player's corner, the circle does not
        player.pos = ball.pos - Vec2::new(42.0, 42.0);
        player.prev_pos = player.pos;

        assert!(ball_touches_player(&ball, &player, ContactShape::BoundingBox));
        assert!(resolve_ball_player(&mut ball, &mut player, 0, &tuning).is_none());
    }

    #[test]
    fn test_separate_players_moves_one_unit() {
        let (_, _, mut a, mut b) = setup();
        a.pos = Vec2::new(400.0, 300.0);
        b.pos = Vec2::new(440.0, 300.0);

        assert!(separate_players(&mut a, &mut b));
        assert_eq!(a.pos, Vec2::new(399.0, 300.0));
        assert_eq!(b.pos, Vec2::new(441.0, 300.0));
    }

    #[test]
    fn test_separate_players_diagonal() {
        let (_, _, mut a, mut b) = setup();
        a.pos = Vec2::new(400.0, 300.0);
        b.pos = Vec2::new(420.0, 320.0);

        assert!(separate_players(&mut a, &mut b));
        assert_eq!(a.pos, Vec2::new(399.0, 299.0));
        assert_eq!(b.pos, Vec2::new(421.0, 321.0));
    }

    #[test]
    fn test_separate_coincident_players_is_noop() {
        let (_, _, mut a, mut b) = setup();
        a.pos = Vec2::new(400.0, 300.0);
        b.pos = a.pos;

        assert!(!separate_players(&mut a, &mut b));
        assert_eq!(a.pos, Vec2::new(400.0, 300.0));
        assert_eq!(b.pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_separate_non_overlapping_is_noop() {
        let (_, _, mut a, mut b) = setup();
        assert!(!separate_players(&mut a, &mut b));
    }
}
