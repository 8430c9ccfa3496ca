//! Error types
//!
//! The simulation itself never fails. Errors come from loading configuration
//! at startup or from a presentation collaborator giving up mid-session.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    /// Renderer or audio device is gone; the session cannot continue
    #[error("presentation failure: {0}")]
    Presentation(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
