//! Property-based tests for the simulation invariants

use glam::Vec2;
use proptest::prelude::*;

use super::collision::separate_players;
use super::geometry::{Aabb, Collidable};
use super::input::{Key, KeyboardState};
use super::state::{Ball, Player, Side};
use crate::tuning::Tuning;

const KEYS: [Key; 4] = [Key::W, Key::A, Key::S, Key::D];

fn held(mask: u8) -> KeyboardState {
    KeyboardState::with_pressed(
        KEYS.iter()
            .enumerate()
            .filter(|(i, _)| mask & (1u8 << *i) != 0)
            .map(|(_, k)| *k),
    )
}

proptest! {
    /// Property: a player's box never leaves the field, whatever it holds
    #[test]
    fn prop_player_stays_in_field(
        x in 30.0f32..970.0,
        y in 30.0f32..570.0,
        masks in prop::collection::vec(0u8..16, 1..60),
        boosted in any::<bool>(),
    ) {
        let tuning = Tuning::default();
        let field = Aabb::field(tuning.field_size());
        let mut player = Player::new(Side::Left, &tuning);
        player.pos = Vec2::new(x, y);
        if boosted {
            player.boost.activate(0);
        }

        for (i, mask) in masks.into_iter().enumerate() {
            player.update(&held(mask), i as u64 * 16, &tuning);
            prop_assert!(field.contains(&player.bounds()), "escaped at {:?}", player.pos);
        }
    }

    /// Property: away from walls, friction strictly slows the ball
    #[test]
    fn prop_friction_slows_ball(
        x in 200.0f32..800.0,
        y in 200.0f32..400.0,
        vx in -20.0f32..20.0,
        vy in -20.0f32..20.0,
    ) {
        prop_assume!(vx.abs() + vy.abs() > 0.01);
        let tuning = Tuning::default();
        let mut ball = Ball::new(&tuning);
        ball.pos = Vec2::new(x, y);
        ball.vel = Vec2::new(vx, vy);

        let before = ball.speed();
        prop_assert_eq!(ball.update(&tuning), None);
        prop_assert!(ball.speed() < before);
    }

    /// Property: crossing a side wall scores only inside the goal band
    #[test]
    fn prop_goal_only_in_band(
        y in 15.0f32..585.0,
        left_wall in any::<bool>(),
    ) {
        let tuning = Tuning::default();
        let mut ball = Ball::new(&tuning);
        let (x, vx) = if left_wall {
            (ball.radius + 2.0, -5.0)
        } else {
            (tuning.field_width - ball.radius - 2.0, 5.0)
        };
        ball.pos = Vec2::new(x, y);
        ball.vel = Vec2::new(vx, 0.0);

        let scorer = ball.update(&tuning);
        if tuning.in_goal_band(y) {
            let expected = if left_wall { Side::Right } else { Side::Left };
            prop_assert_eq!(scorer, Some(expected));
        } else {
            prop_assert_eq!(scorer, None);
            // Bounced back toward the middle, still inside
            prop_assert!(ball.vel.x * vx < 0.0);
            prop_assert!(ball.pos.x >= ball.radius && ball.pos.x <= tuning.field_width - ball.radius);
        }
    }

    /// Property: resetting the ball always lands on the same canonical state
    #[test]
    fn prop_reset_is_canonical(
        x in -100.0f32..1100.0,
        y in -100.0f32..700.0,
        vx in -50.0f32..50.0,
        vy in -50.0f32..50.0,
        times in 1usize..5,
    ) {
        let tuning = Tuning::default();
        let mut ball = Ball::new(&tuning);
        ball.pos = Vec2::new(x, y);
        ball.vel = Vec2::new(vx, vy);
        for _ in 0..times {
            ball.reset(&tuning);
        }
        prop_assert_eq!(ball.pos, tuning.field_center());
        prop_assert_eq!(ball.vel, Vec2::ZERO);
    }

    /// Property: separation moves each player at most one unit per axis
    #[test]
    fn prop_separation_is_bounded(
        ax in 100.0f32..900.0,
        ay in 100.0f32..500.0,
        dx in -70.0f32..70.0,
        dy in -70.0f32..70.0,
    ) {
        let tuning = Tuning::default();
        let mut a = Player::new(Side::Left, &tuning);
        let mut b = Player::new(Side::Right, &tuning);
        a.pos = Vec2::new(ax, ay);
        b.pos = Vec2::new(ax + dx, ay + dy);
        let (a0, b0) = (a.pos, b.pos);

        separate_players(&mut a, &mut b);
        prop_assert!(a.pos.is_finite() && b.pos.is_finite());
        prop_assert!((a.pos - a0).abs().max_element() <= 1.0 + 1e-3);
        prop_assert!((b.pos - b0).abs().max_element() <= 1.0 + 1e-3);
        // Never pushed toward each other
        prop_assert!((b.pos - a.pos).length() >= (b0 - a0).length() - 1e-3);
    }
}
