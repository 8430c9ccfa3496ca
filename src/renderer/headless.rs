//! Windowless renderer
//!
//! Logs what a screen would show and optionally streams every frame as a
//! JSON line, which is handy for replays and debugging.

use std::io::Write;

use super::Renderer;
use crate::error::{GameError, Result};
use crate::sim::{MatchPhase, MatchSnapshot};

pub struct HeadlessRenderer {
    frames: u64,
    last: Option<MatchSnapshot>,
    /// JSON lines sink
    dump: Option<Box<dyn Write>>,
}

impl Default for HeadlessRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self {
            frames: 0,
            last: None,
            dump: None,
        }
    }

    /// Also write every snapshot as one JSON line
    pub fn with_dump(writer: impl Write + 'static) -> Self {
        Self {
            dump: Some(Box::new(writer)),
            ..Self::new()
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_snapshot(&self) -> Option<&MatchSnapshot> {
        self.last.as_ref()
    }

    fn log_changes(&self, snapshot: &MatchSnapshot) {
        let Some(prev) = &self.last else {
            let [left, right] = &snapshot.players;
            log::info!(
                "Pitch: {} ({}), sprites {} vs {}",
                snapshot.stadium.as_str(),
                snapshot.background,
                left.sprite,
                right.sprite
            );
            log::info!("[{:?}] {}", snapshot.phase, snapshot.scoreboard);
            return;
        };

        if prev.phase != snapshot.phase {
            log::info!("Screen: {:?} -> {:?}", prev.phase, snapshot.phase);
        }
        if prev.score != snapshot.score {
            log::info!("Scoreboard: {}", snapshot.scoreboard);
        }
        if snapshot.phase == MatchPhase::GameOver && prev.banner != snapshot.banner {
            if let Some(banner) = &snapshot.banner {
                log::info!("{}", banner);
            }
        }
    }
}

impl Renderer for HeadlessRenderer {
    fn draw(&mut self, snapshot: &MatchSnapshot) -> Result<()> {
        self.log_changes(snapshot);

        if let Some(dump) = self.dump.as_mut() {
            let line = serde_json::to_string(snapshot)
                .map_err(|e| GameError::Presentation(format!("snapshot encode failed: {}", e)))?;
            writeln!(dump, "{}", line)
                .map_err(|e| GameError::Presentation(format!("frame dump failed: {}", e)))?;
        }

        self.frames += 1;
        self.last = Some(snapshot.clone());
        Ok(())
    }
}
