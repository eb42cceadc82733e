use crate::{CONSOLE_FORMAT, ConfigError, JSON_FORMAT};

use std::fmt;
use std::str::FromStr;

/// Line encoding of log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Human readable, optionally colored
    Console,
    /// One JSON object per line
    Json,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Console => CONSOLE_FORMAT,
            Format::Json => JSON_FORMAT,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            CONSOLE_FORMAT => Ok(Format::Console),
            JSON_FORMAT => Ok(Format::Json),
            _ => Err(ConfigError::Format {
                value: s.to_string(),
            }),
        }
    }
}
