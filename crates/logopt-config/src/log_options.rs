use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ERROR_OUTPUT_PATH, DEFAULT_FORMAT, DEFAULT_LEVEL,
    DEFAULT_OUTPUT_PATH, FlagRegistrar, FlagValue, Format, Level, OPTION_FIELDS, OptionField,
};

use std::fmt;
use std::path::Path;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Configuration items for the logger.
///
/// Built once with defaults, optionally layered from a file, the environment
/// and command-line flags, validated, then read-only for the rest of the
/// process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LogOptions {
    pub level: String,
    pub format: String,
    pub enable_color: bool,
    pub enable_caller: bool,
    pub output_paths: Vec<String>,
    pub error_output_paths: Vec<String>,
    pub disable_stacktrace: bool,
    pub development: bool,
    pub name: String,
    /// Rotation size threshold; `<= 0` leaves rotation to the engine's default
    pub max_size_in_mb: i64,
    /// Rotation age threshold; `<= 0` leaves rotation to the engine's default
    pub max_age_in_days: i64,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            level: String::from(DEFAULT_LEVEL),
            format: String::from(DEFAULT_FORMAT),
            enable_color: false,
            enable_caller: false,
            output_paths: vec![String::from(DEFAULT_OUTPUT_PATH)],
            error_output_paths: vec![String::from(DEFAULT_ERROR_OUTPUT_PATH)],
            disable_stacktrace: false,
            development: false,
            name: String::new(),
            max_size_in_mb: 0,
            max_age_in_days: 0,
        }
    }
}

impl LogOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document. Keys are the kebab-case JSON keys; missing
    /// keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> ConfigErrorResult<Self> {
        Self::parse_toml(contents, Path::new("<inline>"))
    }

    /// Load options from a TOML file.
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse_toml(&contents, path)
    }

    fn parse_toml(contents: &str, path: &Path) -> ConfigErrorResult<Self> {
        toml::from_str(contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Register one flag per option on `registrar`, defaulting to the
    /// current values. The record itself is left untouched.
    pub fn add_flags(&self, registrar: &mut dyn FlagRegistrar) {
        for field in &OPTION_FIELDS {
            match (field.get)(self) {
                FlagValue::String(v) => registrar.register_string(field.flag, &v, field.usage),
                FlagValue::Bool(v) => registrar.register_bool(field.flag, v, field.usage),
                FlagValue::Int(v) => registrar.register_int(field.flag, v, field.usage),
                FlagValue::StringList(v) => {
                    registrar.register_string_list(field.flag, &v, field.usage)
                }
            }
        }
    }

    /// Write a parsed flag value into the field bound to `flag`.
    pub fn set_flag(&mut self, flag: &str, value: FlagValue) -> ConfigErrorResult<()> {
        let field = OptionField::by_flag(flag)
            .ok_or_else(|| ConfigError::flag(format!("unknown flag {flag:?}")))?;
        field.apply(self, value)
    }

    /// Parse raw text for `flag` and write it into the bound field.
    pub fn set_flag_str(&mut self, flag: &str, raw: &str) -> ConfigErrorResult<()> {
        let field = OptionField::by_flag(flag)
            .ok_or_else(|| ConfigError::flag(format!("unknown flag {flag:?}")))?;
        let value = FlagValue::parse(field.kind, raw)?;
        field.apply(self, value)
    }

    /// Current value of the field bound to `flag`.
    pub fn get_flag(&self, flag: &str) -> Option<FlagValue> {
        OptionField::by_flag(flag).map(|field| (field.get)(self))
    }

    /// Check every option and return all problems found, level first.
    pub fn validate(&self) -> Vec<ConfigError> {
        OPTION_FIELDS
            .iter()
            .filter_map(|field| field.validate.and_then(|check| check(self)))
            .collect()
    }

    pub fn level(&self) -> ConfigErrorResult<Level> {
        self.level.parse()
    }

    pub fn format(&self) -> ConfigErrorResult<Format> {
        self.format.parse()
    }

    /// Compact JSON form. `Display` uses this and swallows the error.
    pub fn to_json(&self) -> ConfigErrorResult<String> {
        serde_json::to_string(self).map_err(ConfigError::from_serde_error)
    }

    pub fn to_json_pretty(&self) -> ConfigErrorResult<String> {
        serde_json::to_string_pretty(self).map_err(ConfigError::from_serde_error)
    }

    /// Apply `LOG_*` environment variable overrides.
    ///
    /// Values that don't parse for their option leave the field untouched
    /// and are returned, one error per rejected variable, so the caller can
    /// report them before a logger exists.
    pub fn apply_env_overrides(&mut self) -> Vec<ConfigError> {
        let mut rejected = Vec::new();

        for field in &OPTION_FIELDS {
            let Ok(raw) = std::env::var(field.env) else {
                continue;
            };

            match FlagValue::parse(field.kind, &raw).and_then(|v| field.apply(self, v)) {
                Ok(()) => debug!("{} overridden from {}", field.key, field.env),
                Err(e) => {
                    warn!("Ignoring {}={:?}: {}", field.env, raw, e);
                    rejected.push(ConfigError::env(format!(
                        "ignoring {}={:?}: {}",
                        field.env, raw, e
                    )));
                }
            }
        }

        rejected
    }

    /// One-line description of every option.
    pub fn summary(&self) -> String {
        format!(
            "level={}, format={}, color={}, caller={}, outputs={:?}, error_outputs={:?}, disable_stacktrace={}, development={}, name={:?}, max_size={}MB, max_age={}d",
            self.level,
            self.format,
            self.enable_color,
            self.enable_caller,
            self.output_paths,
            self.error_output_paths,
            self.disable_stacktrace,
            self.development,
            self.name,
            self.max_size_in_mb,
            self.max_age_in_days
        )
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Log options: {}", self.summary());
    }
}

impl fmt::Display for LogOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Diagnostic output only: an encoding failure renders as empty.
        f.write_str(&self.to_json().unwrap_or_default())
    }
}
