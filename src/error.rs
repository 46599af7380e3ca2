//! Infrastructure errors. Gameplay itself never fails; losing is a state,
//! not an error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config value for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
    #[error("failed to write best score to {}: {source}", path.display())]
    ScoreWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to initialise logging: {0}")]
    Logger(String),
}
