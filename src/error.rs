// std imports
use std::io;
use std::path::PathBuf;

// third-party imports
use config::ConfigError;
use thiserror::Error;

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to read patterns from {path:?}: {source}")]
    PatternSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unknown list {name:?}, use any of {known:?}")]
    UnknownList { name: String, known: Vec<String> },
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
