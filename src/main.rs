//! Soccer Pong entry point
//!
//! Loads the startup config and runs a headless session: a scripted
//! exhibition tape stands in for the keyboard, the renderer and audio only
//! log. Set `SOCCER_PONG_FRAMES` to a file path to also dump every frame as
//! JSON lines.

use soccer_pong::audio::LogAudio;
use soccer_pong::platform::{FrameLimiter, MonotonicClock, ScriptedInput};
use soccer_pong::renderer::HeadlessRenderer;
use soccer_pong::{Game, GameConfig, GameError, Result};

/// Environment variable naming the optional frame dump file
const FRAME_DUMP_ENV_VAR: &str = "SOCCER_PONG_FRAMES";

fn run() -> Result<()> {
    let config = GameConfig::load()?;

    let renderer = match std::env::var_os(FRAME_DUMP_ENV_VAR) {
        Some(path) => {
            let file = std::fs::File::create(&path).map_err(|e| {
                GameError::Presentation(format!("cannot create {:?}: {}", path, e))
            })?;
            log::info!("Dumping frames to {:?}", path);
            HeadlessRenderer::with_dump(std::io::BufWriter::new(file))
        }
        None => HeadlessRenderer::new(),
    };
    let audio = LogAudio::new(&config.settings);

    let mut limiter = FrameLimiter::new(config.tuning.tick_rate);
    let clock = MonotonicClock::new();

    let mut game = Game::new(config, renderer, audio);
    let mut input = ScriptedInput::demo(game.menu().start.rect.center());

    game.run(&mut input, &clock, &mut limiter)
}

fn main() {
    env_logger::init();
    log::info!("Soccer Pong (headless) starting...");

    if let Err(e) = run() {
        log::error!("Fatal: {}", e);
        std::process::exit(1);
    }
}
