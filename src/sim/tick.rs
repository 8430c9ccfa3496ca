//! Per-tick match simulation
//!
//! One call advances a running match by exactly one frame. Update order:
//! boost expiry, player movement, ball physics, ball-player collisions
//! (skipped once the ball is in a goal), player-player separation, scoring,
//! win check.

use super::collision::{resolve_ball_player, separate_players};
use super::input::FrameInput;
use super::state::{GameEvent, MatchContext, MatchPhase, Millis, Side};

/// Advance the match by one tick.
///
/// Handles the pause toggle; does nothing outside Playing. `now` must come
/// from a monotonic clock and is read once for the whole tick.
pub fn tick(ctx: &mut MatchContext, input: &FrameInput, now: Millis) {
    ctx.now = now;

    // Handle pause toggle
    if input.pause {
        match ctx.phase {
            MatchPhase::Playing => {
                ctx.phase = MatchPhase::Paused;
                ctx.emit(GameEvent::Paused);
                log::info!("Paused");
                return;
            }
            MatchPhase::Paused => {
                ctx.phase = MatchPhase::Playing;
                ctx.emit(GameEvent::Resumed);
                log::info!("Resumed");
            }
            _ => {}
        }
    }

    if ctx.phase != MatchPhase::Playing {
        return;
    }

    ctx.time_ticks += 1;

    for player in &mut ctx.players {
        if player.boost.expire(now, ctx.tuning.boost_duration_ms) {
            log::debug!("{} boost expired", player.side.label());
        }
    }

    // Movement
    for player in &mut ctx.players {
        player.update(&input.keys, now, &ctx.tuning);
    }

    // Ball physics; a ball that went in is dead and cannot be kicked
    let scorer = ctx.ball.update(&ctx.tuning);

    // Ball vs each player, impulses add up
    let kickers: &[Side] = if scorer.is_none() { &Side::BOTH } else { &[] };
    for &side in kickers {
        let kick = resolve_ball_player(
            &mut ctx.ball,
            &mut ctx.players[side.index()],
            now,
            &ctx.tuning,
        );
        if let Some(kick) = kick {
            log::debug!(
                "{} kicked the ball: impulse=({:.2}, {:.2})",
                side.label(),
                kick.impulse.x,
                kick.impulse.y
            );
            ctx.emit(GameEvent::BallKicked { by: side });
            if kick.boosted {
                let ends_at = ctx.player(side).boost.ends_at(ctx.tuning.boost_duration_ms);
                log::debug!("{} boost armed until {:?} ms", side.label(), ends_at);
                ctx.emit(GameEvent::BoostActivated { side });
            }
        }
    }

    // Player vs player
    let [left, right] = &mut ctx.players;
    if separate_players(left, right) {
        log::debug!("Players separated");
        left.clamp_to_field(&ctx.tuning);
        right.clamp_to_field(&ctx.tuning);
    }

    // Scoring
    if let Some(scorer) = scorer {
        ctx.score.record_goal(scorer);
        ctx.ball.reset(&ctx.tuning);
        ctx.emit(GameEvent::GoalScored { scorer });
        log::info!(
            "Goal for {}! Score {} - {}",
            scorer.label(),
            ctx.score.left,
            ctx.score.right
        );
    }

    // Win check
    if let Some(winner) = ctx.score.winner(ctx.tuning.score_limit) {
        ctx.phase = MatchPhase::GameOver;
        ctx.winner = Some(winner);
        ctx.emit(GameEvent::MatchWon { winner });
        log::info!("{} wins after {} ticks", winner.label(), ctx.time_ticks);
    }
}
