//! Session loop
//!
//! [`Game`] owns the match and its presentation collaborators. Each frame it
//! reads the clock once, advances the screen state machine, forwards events
//! to audio and hands a snapshot to the renderer.

use crate::audio::{AudioSink, cues_for};
use crate::config::GameConfig;
use crate::error::Result;
use crate::platform::{Clock, FrameLimiter, InputSource};
use crate::renderer::Renderer;
use crate::settings::Settings;
use crate::sim::{self, FrameInput, GameEvent, MatchContext, MatchSnapshot, Millis};
use crate::ui::MenuLayout;

pub use crate::sim::Flow;

/// Game instance holding all state
pub struct Game<R, A> {
    ctx: MatchContext,
    settings: Settings,
    menu: MenuLayout,
    renderer: R,
    audio: A,
    frames: u64,
}

impl<R: Renderer, A: AudioSink> Game<R, A> {
    pub fn new(config: GameConfig, renderer: R, audio: A) -> Self {
        let menu = MenuLayout::for_field(config.tuning.field_size());
        Self {
            ctx: MatchContext::new(config.tuning),
            settings: config.settings,
            menu,
            renderer,
            audio,
            frames: 0,
        }
    }

    pub fn context(&self) -> &MatchContext {
        &self.ctx
    }

    pub fn menu(&self) -> &MenuLayout {
        &self.menu
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot::capture(&self.ctx, &self.settings, &self.menu)
    }

    /// Run one frame. Returns the events it produced alongside the flow.
    pub fn frame(&mut self, input: &FrameInput, now: Millis) -> Result<(Flow, Vec<GameEvent>)> {
        let flow = sim::advance(&mut self.ctx, input, &self.menu, now);
        let events = self.ctx.drain_events();

        for event in &events {
            for cue in cues_for(event) {
                self.audio.apply(*cue);
            }
        }

        if flow == Flow::Continue {
            self.renderer.draw(&self.snapshot())?;
        }
        self.frames += 1;

        Ok((flow, events))
    }

    /// Main loop: runs until the input source asks to close or the player
    /// quits from the game over screen.
    pub fn run(
        &mut self,
        input: &mut impl InputSource,
        clock: &impl Clock,
        limiter: &mut FrameLimiter,
    ) -> Result<()> {
        log::info!(
            "Session started ({}x{} field, {} Hz)",
            self.ctx.tuning.field_width,
            self.ctx.tuning.field_height,
            self.ctx.tuning.tick_rate
        );

        loop {
            let frame_input = input.poll();
            let now = clock.now_ms();
            let (flow, _) = self.frame(&frame_input, now)?;
            if flow == Flow::Exit {
                break;
            }
            limiter.wait();
        }

        log::info!(
            "Session ended after {} frames, final score {} - {}",
            self.frames,
            self.ctx.score.left,
            self.ctx.score.right
        );
        Ok(())
    }
}
