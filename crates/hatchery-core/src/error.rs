use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Result type used across the Hatchery core crate.
pub type Result<T> = std::result::Result<T, GrammarError>;

/// Every failure is fatal to the run that raised it.
#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize {}: {source}", path.display())]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} is not valid UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("conversion task failed: {0}")]
    Task(String),
}

impl GrammarError {
    pub fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    pub fn is_filesystem(&self) -> bool {
        matches!(self, Self::Filesystem { .. })
    }
}
