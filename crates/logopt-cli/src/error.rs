use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] logopt_config::ConfigError),

    #[error("Argument error: {0}")]
    Clap(#[from] clap::Error),

    #[error("Flag {flag} could not be read: {source}")]
    Matches {
        flag: &'static str,
        #[source]
        source: clap::parser::MatchesError,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    /// Create a logger error
    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type CliResult<T> = std::result::Result<T, CliError>;
