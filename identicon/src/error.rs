use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color '{0}', expected #rrggbb")]
pub struct ColorParseError(pub String);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    InvalidColor(#[from] ColorParseError),

    #[error("separator must be a single character, got '{0}'")]
    InvalidSeparator(String),
}

/// Failure while writing an identicon to disk.
#[derive(Debug, Error)]
pub enum IdenticonError {
    #[error("writing {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "png")]
    #[error("encoding PNG {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: png::EncodingError,
    },
}

impl IdenticonError {
    /// Path that could not be written.
    pub fn path(&self) -> &std::path::Path {
        match self {
            IdenticonError::Io { path, .. } => path,
            #[cfg(feature = "png")]
            IdenticonError::Encode { path, .. } => path,
        }
    }
}
