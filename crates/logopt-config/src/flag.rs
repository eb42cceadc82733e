use crate::{ConfigError, ConfigErrorResult};

use std::fmt;

/// Value shape of a registered flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    String,
    Bool,
    Int,
    StringList,
}

impl fmt::Display for FlagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlagKind::String => "string",
            FlagKind::Bool => "bool",
            FlagKind::Int => "int",
            FlagKind::StringList => "string list",
        };
        f.write_str(name)
    }
}

/// A flag value moving between a registrar and the options record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    String(String),
    Bool(bool),
    Int(i64),
    StringList(Vec<String>),
}

impl FlagValue {
    pub fn kind(&self) -> FlagKind {
        match self {
            FlagValue::String(_) => FlagKind::String,
            FlagValue::Bool(_) => FlagKind::Bool,
            FlagValue::Int(_) => FlagKind::Int,
            FlagValue::StringList(_) => FlagKind::StringList,
        }
    }

    /// Parse raw flag or environment text into a value of the given kind.
    ///
    /// Booleans accept `true`/`1`/`false`/`0` in any case. Lists are comma
    /// separated; items are trimmed and empty items dropped.
    pub fn parse(kind: FlagKind, raw: &str) -> ConfigErrorResult<Self> {
        match kind {
            FlagKind::String => Ok(FlagValue::String(raw.to_string())),
            FlagKind::Bool => match raw.trim().to_lowercase().as_str() {
                "true" | "1" => Ok(FlagValue::Bool(true)),
                "false" | "0" => Ok(FlagValue::Bool(false)),
                _ => Err(ConfigError::flag(format!("invalid bool value {raw:?}"))),
            },
            FlagKind::Int => raw
                .trim()
                .parse::<i64>()
                .map(FlagValue::Int)
                .map_err(|e| ConfigError::flag(format!("invalid int value {raw:?}: {e}"))),
            FlagKind::StringList => Ok(FlagValue::StringList(
                raw.split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(String::from)
                    .collect(),
            )),
        }
    }
}

/// Target that accepts flag registrations from [`crate::LogOptions::add_flags`].
///
/// Implemented over a real command-line parser by the binary, and by
/// recording fakes in tests. Each call carries the flag name, its default
/// (the record's current value) and a one-line usage string.
pub trait FlagRegistrar {
    fn register_string(&mut self, name: &'static str, default: &str, usage: &'static str);

    fn register_bool(&mut self, name: &'static str, default: bool, usage: &'static str);

    fn register_int(&mut self, name: &'static str, default: i64, usage: &'static str);

    fn register_string_list(&mut self, name: &'static str, default: &[String], usage: &'static str);
}
