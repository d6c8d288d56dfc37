use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("unknown difficulty '{tag}'")]
    UnknownDifficulty { tag: String },

    #[error("guess must be between {min} and {max}")]
    OutOfRange { min: u32, max: u32 },

    #[error("no game in progress")]
    InactiveSession,

    #[error("no hints remaining")]
    HintExhausted,

    #[error("storage error: {0}")]
    Storage(#[from] io::Error),

    #[error("invalid import document: {0}")]
    Import(#[from] serde_json::Error),
}
