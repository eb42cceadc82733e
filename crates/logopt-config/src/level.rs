use crate::ConfigError;

use std::fmt;
use std::str::FromStr;

use log::LevelFilter;

/// Severity tier accepted by the `level` option.
///
/// `DPanic`, `Panic` and `Fatal` exist so that configurations written for
/// stricter engines still parse; the `log` facade has nothing above `Error`,
/// so they all filter as `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    DPanic,
    Panic,
    Fatal,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::DPanic => "dpanic",
            Level::Panic => "panic",
            Level::Fatal => "fatal",
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        match self {
            Level::Debug => LevelFilter::Debug,
            Level::Info => LevelFilter::Info,
            Level::Warn => LevelFilter::Warn,
            Level::Error | Level::DPanic | Level::Panic | Level::Fatal => LevelFilter::Error,
        }
    }
}

impl From<Level> for LevelFilter {
    fn from(level: Level) -> Self {
        level.level_filter()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Empty means "unset" and falls back to info.
        match s.to_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" | "" => Ok(Level::Info),
            "warn" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "dpanic" => Ok(Level::DPanic),
            "panic" => Ok(Level::Panic),
            "fatal" => Ok(Level::Fatal),
            _ => Err(ConfigError::Level {
                value: s.to_string(),
            }),
        }
    }
}
