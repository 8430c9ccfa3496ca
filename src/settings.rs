//! Cosmetic and audio preferences
//!
//! Nothing here affects the simulation. Teams and stadiums only change what
//! the renderer draws and which names appear on the scoreboard.

use serde::{Deserialize, Serialize};

/// Team colors a side can wear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    Blue,
    Red,
}

impl Team {
    /// Display name used on the scoreboard and win banner
    pub fn as_str(&self) -> &'static str {
        match self {
            Team::Blue => "Blue",
            Team::Red => "Red",
        }
    }

    /// Sprite asset for this team
    pub fn sprite(&self) -> &'static str {
        match self {
            Team::Blue => "player1.png",
            Team::Red => "player2.png",
        }
    }

    /// RGB color for team-tinted UI (goal markers, win banner)
    pub fn color(&self) -> [u8; 3] {
        match self {
            Team::Blue => [0, 200, 255],
            Team::Red => [255, 50, 50],
        }
    }
}

/// Pitch background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stadium {
    #[default]
    Grass,
    Street,
}

impl Stadium {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stadium::Grass => "Grass",
            Stadium::Street => "Street",
        }
    }

    /// Background asset (both stadiums currently share the grass texture)
    pub fn background(&self) -> &'static str {
        match self {
            Stadium::Grass | Stadium::Street => "background_grass.jpg",
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Cosmetics ===
    /// Team worn by the left player
    pub left_team: Team,
    /// Team worn by the right player
    pub right_team: Team,
    pub stadium: Stadium,

    // === Audio ===
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            left_team: Team::Blue,
            right_team: Team::Red,
            stadium: Stadium::Grass,

            music_volume: 0.5,
            sfx_volume: 0.6,
            muted: false,
        }
    }
}

impl Settings {
    /// Effective music volume (respects mute)
    pub fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.music_volume.clamp(0.0, 1.0)
        }
    }

    /// Effective sound effect volume (respects mute)
    pub fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.sfx_volume.clamp(0.0, 1.0)
        }
    }

    /// Log settings that load fine but will not behave as written
    pub fn warn_questionable(&self) {
        for (name, volume) in [("music_volume", self.music_volume), ("sfx_volume", self.sfx_volume)] {
            if !(0.0..=1.0).contains(&volume) {
                log::warn!("{} {} outside 0..1, clamping", name, volume);
            }
        }
        if self.left_team == self.right_team {
            log::warn!("Both sides wear {}", self.left_team.as_str());
        }
    }
}
