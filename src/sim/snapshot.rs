//! Read-only view of a match for the presentation layer

use glam::Vec2;
use serde::Serialize;

use super::geometry::Aabb;
use super::state::{MatchContext, MatchPhase, Score, Side};
use crate::consts::GOAL_MARKER_WIDTH;
use crate::settings::{Settings, Stadium, Team};
use crate::ui::{Button, MenuLayout};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub side: Side,
    pub team: Team,
    /// Sprite asset for the player's team
    pub sprite: &'static str,
    pub pos: Vec2,
    pub half_extent: f32,
    pub boosting: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BallView {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// Goal marker drawn on a side wall
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalZone {
    /// Side that defends this goal
    pub defender: Side,
    pub rect: Aabb,
    pub color: [u8; 3],
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSnapshot {
    pub tick: u64,
    pub phase: MatchPhase,
    pub field: Vec2,
    pub stadium: Stadium,
    /// Background asset for the stadium
    pub background: &'static str,
    pub players: [PlayerView; 2],
    pub ball: BallView,
    pub goal_zones: [GoalZone; 2],
    pub score: Score,
    pub winner: Option<Side>,
    /// "Blue: 1   Red: 0"
    pub scoreboard: String,
    /// Centered message ("Blue Wins!", "Paused"), if any
    pub banner: Option<String>,
    pub buttons: Vec<Button>,
}

impl MatchSnapshot {
    pub fn capture(ctx: &MatchContext, settings: &Settings, menu: &MenuLayout) -> Self {
        let team = |side: Side| match side {
            Side::Left => settings.left_team,
            Side::Right => settings.right_team,
        };

        let players = Side::BOTH.map(|side| {
            let player = ctx.player(side);
            PlayerView {
                side,
                team: team(side),
                sprite: team(side).sprite(),
                pos: player.pos,
                half_extent: player.half_extent,
                boosting: player.boost.is_active(ctx.now, ctx.tuning.boost_duration_ms),
            }
        });

        let (band_top, band_bottom) = ctx.tuning.goal_band();
        let width = ctx.tuning.field_width;
        let goal_zones = [
            GoalZone {
                defender: Side::Left,
                rect: Aabb::new(
                    Vec2::new(0.0, band_top),
                    Vec2::new(GOAL_MARKER_WIDTH, band_bottom),
                ),
                color: team(Side::Left).color(),
            },
            GoalZone {
                defender: Side::Right,
                rect: Aabb::new(
                    Vec2::new(width - GOAL_MARKER_WIDTH, band_top),
                    Vec2::new(width, band_bottom),
                ),
                color: team(Side::Right).color(),
            },
        ];

        let scoreboard = format!(
            "{}: {}   {}: {}",
            team(Side::Left).as_str(),
            ctx.score.left,
            team(Side::Right).as_str(),
            ctx.score.right
        );

        let banner = match (ctx.phase, ctx.winner) {
            (MatchPhase::GameOver, Some(winner)) => Some(format!("{} Wins!", team(winner).as_str())),
            (MatchPhase::Paused, _) => Some("Paused".to_string()),
            _ => None,
        };

        Self {
            tick: ctx.time_ticks,
            phase: ctx.phase,
            field: ctx.tuning.field_size(),
            stadium: settings.stadium,
            background: settings.stadium.background(),
            players,
            ball: BallView {
                pos: ctx.ball.pos,
                vel: ctx.ball.vel,
                radius: ctx.ball.radius,
            },
            goal_zones,
            score: ctx.score,
            winner: ctx.winner,
            scoreboard,
            banner,
            buttons: menu.buttons(ctx.phase),
        }
    }
}
