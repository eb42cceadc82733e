use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("unrecognized level: {value:?}")]
    Level { value: String },

    #[error("not a valid log format: {value:?}")]
    Format { value: String },

    #[error("{category} error: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Create a flag error
    #[track_caller]
    pub fn flag<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Flag",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an environment override error
    #[track_caller]
    pub fn env<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Env",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a serde error
    #[track_caller]
    pub fn serde<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Serde",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Convert a serde error into a ConfigError
    #[track_caller]
    pub fn from_serde_error<E: std::fmt::Display>(error: E) -> Self {
        Self::serde(error.to_string())
    }

    /// True for the errors produced by [`crate::LogOptions::validate`].
    pub fn is_validation(&self) -> bool {
        matches!(self, ConfigError::Level { .. } | ConfigError::Format { .. })
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
