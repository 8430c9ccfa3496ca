//! Audio boundary
//!
//! The simulation emits [`GameEvent`]s; this module turns them into sound
//! cues and hands those to whatever [`AudioSink`] the session was built
//! with. Audio never stops the game: a sink that cannot play just stays
//! quiet.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Looping background track
pub const MUSIC_TRACK: &str = "music.mp3";

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball touched a player
    Kick,
    /// Ball crossed a goal line
    Goal,
}

impl SoundEffect {
    /// Asset file for this effect
    pub fn asset(&self) -> &'static str {
        match self {
            SoundEffect::Kick => "kick.mp3",
            SoundEffect::Goal => "goal.mp3",
        }
    }
}

/// A single instruction for the audio sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    Effect(SoundEffect),
    /// (Re)start the music from the top
    StartMusic,
    StopMusic,
}

/// Cues triggered by a game event
pub fn cues_for(event: &GameEvent) -> &'static [AudioCue] {
    match event {
        GameEvent::MatchStarted => &[AudioCue::StartMusic],
        GameEvent::BallKicked { .. } => &[AudioCue::Effect(SoundEffect::Kick)],
        GameEvent::GoalScored { .. } => &[AudioCue::Effect(SoundEffect::Goal)],
        GameEvent::MatchWon { .. } | GameEvent::QuitRequested => &[AudioCue::StopMusic],
        GameEvent::BoostActivated { .. } | GameEvent::Paused | GameEvent::Resumed => &[],
    }
}

/// Something that can play sounds
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
    fn start_music(&mut self);
    fn stop_music(&mut self);

    fn apply(&mut self, cue: AudioCue) {
        match cue {
            AudioCue::Effect(effect) => self.play(effect),
            AudioCue::StartMusic => self.start_music(),
            AudioCue::StopMusic => self.stop_music(),
        }
    }
}

/// Audio sink that only logs, for headless runs
#[derive(Debug, Clone)]
pub struct LogAudio {
    music_volume: f32,
    sfx_volume: f32,
    music_playing: bool,
}

impl LogAudio {
    pub fn new(settings: &Settings) -> Self {
        Self {
            music_volume: settings.effective_music_volume(),
            sfx_volume: settings.effective_sfx_volume(),
            music_playing: false,
        }
    }

    pub fn music_playing(&self) -> bool {
        self.music_playing
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        if self.sfx_volume <= 0.0 {
            return;
        }
        log::debug!("♪ {} (vol {:.2})", effect.asset(), self.sfx_volume);
    }

    fn start_music(&mut self) {
        if self.music_playing {
            log::debug!("Restarting {}", MUSIC_TRACK);
        }
        self.music_playing = true;
        log::info!("Music: {} (vol {:.2}, looping)", MUSIC_TRACK, self.music_volume);
    }

    fn stop_music(&mut self) {
        if self.music_playing {
            self.music_playing = false;
            log::info!("Music stopped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Side;

    #[test]
    fn test_kick_plays_effect() {
        assert_eq!(
            cues_for(&GameEvent::BallKicked { by: Side::Left }),
            &[AudioCue::Effect(SoundEffect::Kick)]
        );
    }

    #[test]
    fn test_match_lifecycle_controls_music() {
        let mut audio = LogAudio::new(&Settings::default());
        for cue in cues_for(&GameEvent::MatchStarted) {
            audio.apply(*cue);
        }
        assert!(audio.music_playing());

        for cue in cues_for(&GameEvent::MatchWon { winner: Side::Right }) {
            audio.apply(*cue);
        }
        assert!(!audio.music_playing());
    }

    #[test]
    fn test_boost_is_silent() {
        assert!(cues_for(&GameEvent::BoostActivated { side: Side::Left }).is_empty());
    }
}
