//! Startup configuration loading
//!
//! A single optional JSON file holds both [`Tuning`] and [`Settings`]. Any
//! field left out keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::settings::Settings;
use crate::tuning::Tuning;

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "SOCCER_PONG_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub tuning: Tuning,
    pub settings: Settings,
}

impl GameConfig {
    /// Parse and validate a config from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.tuning.validate()?;
        config.settings.warn_questionable();
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| GameError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from the path in `SOCCER_PONG_CONFIG`, or defaults when unset
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load_from(path),
            None => {
                log::info!("{} not set, using default config", CONFIG_ENV_VAR);
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Team;

    #[test]
    fn test_empty_object_is_default() {
        let config = GameConfig::from_json("{}").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_nested_overrides() {
        let config = GameConfig::from_json(
            r#"{ "tuning": { "player_speed": 7.5 }, "settings": { "left_team": "red", "right_team": "blue" } }"#,
        )
        .unwrap();
        assert_eq!(config.tuning.player_speed, 7.5);
        assert_eq!(config.settings.left_team, Team::Red);
        assert_eq!(config.settings.right_team, Team::Blue);
    }

    #[test]
    fn test_invalid_tuning_is_rejected() {
        let err = GameConfig::from_json(r#"{ "tuning": { "score_limit": 0 } }"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidTuning(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, GameError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::load_from("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, GameError::ConfigRead { .. }));
    }
}
