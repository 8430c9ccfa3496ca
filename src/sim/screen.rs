//! Screen state machine
//!
//! Home -> Playing <-> Paused -> GameOver -> Playing (replay) or exit.
//! A close request ends the session from any screen.

use super::input::FrameInput;
use super::state::{GameEvent, MatchContext, MatchPhase, Millis};
use super::tick::tick;
use crate::ui::{MenuAction, MenuLayout};

/// Whether the session should keep running after this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Advance the screen state machine by one frame
pub fn advance(ctx: &mut MatchContext, input: &FrameInput, menu: &MenuLayout, now: Millis) -> Flow {
    ctx.now = now;

    if input.close_requested {
        log::info!("Close requested in {:?}", ctx.phase);
        ctx.emit(GameEvent::QuitRequested);
        return Flow::Exit;
    }

    match ctx.phase {
        MatchPhase::Home | MatchPhase::GameOver => {
            // First click landing on a live button wins
            let action = input
                .clicks
                .iter()
                .find_map(|&click| menu.action_at(ctx.phase, click));

            match action {
                Some(MenuAction::Start) | Some(MenuAction::Replay) => start_match(ctx),
                Some(MenuAction::Quit) => {
                    log::info!("Quit from game over screen");
                    ctx.emit(GameEvent::QuitRequested);
                    return Flow::Exit;
                }
                None => {}
            }
        }
        MatchPhase::Playing | MatchPhase::Paused => tick(ctx, input, now),
    }

    Flow::Continue
}

/// Kick off a fresh match from Home or GameOver
fn start_match(ctx: &mut MatchContext) {
    let from = ctx.phase;
    ctx.reset_match();
    ctx.phase = MatchPhase::Playing;
    ctx.emit(GameEvent::MatchStarted);
    log::info!("Match started (from {:?})", from);
}
