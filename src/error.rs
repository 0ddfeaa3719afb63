// Error types for the session slot, configuration loading and the demo driver.

use std::path::PathBuf;
use thiserror::Error;

/// Failures of the process-wide session slot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("a user is already logged in")]
    AlreadyLoggedIn,
    #[error("no active session")]
    NoActiveSession,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("missing value for {flag}")]
    MissingValue { flag: String },
}

impl ConfigError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn missing_value(flag: impl Into<String>) -> Self {
        Self::MissingValue { flag: flag.into() }
    }
}

/// Everything that can stop the demonstration sequence.
#[derive(Error, Debug)]
pub enum DemoError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to install log subscriber: {0}")]
    Logging(String),
}
