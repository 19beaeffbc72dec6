use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// Startup cannot proceed: viewport too small, required sprites absent.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// A frame or frame category has nothing to load.
    #[error("asset missing: {0}")]
    AssetMissing(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
