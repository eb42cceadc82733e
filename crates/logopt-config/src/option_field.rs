//! The explicit mapping between [`LogOptions`] fields and their external names.
//!
//! Every surface (flags, JSON/TOML keys, environment variables, validation)
//! is driven from [`OPTION_FIELDS`], so adding a field means adding one entry
//! here plus the struct field itself.

use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ERROR_OUTPUT_PATH, DEFAULT_FORMAT, DEFAULT_LEVEL,
    DEFAULT_OUTPUT_PATH, FLAG_DEVELOPMENT, FLAG_DISABLE_STACKTRACE, FLAG_ENABLE_CALLER,
    FLAG_ENABLE_COLOR, FLAG_ERROR_OUTPUT_PATHS, FLAG_FORMAT, FLAG_LEVEL, FLAG_MAX_AGE_IN_DAYS,
    FLAG_MAX_SIZE_IN_MB, FLAG_NAME, FLAG_OUTPUT_PATHS, FlagKind, FlagValue, Format, Level,
    LogOptions,
};

/// One recognized option.
pub struct OptionField {
    /// Rust field name on [`LogOptions`]
    pub field: &'static str,
    /// Command-line flag name
    pub flag: &'static str,
    /// JSON and TOML key
    pub key: &'static str,
    /// Environment variable consulted by [`LogOptions::apply_env_overrides`]
    pub env: &'static str,
    pub kind: FlagKind,
    pub usage: &'static str,
    /// Documented default
    pub default: fn() -> FlagValue,
    pub get: fn(&LogOptions) -> FlagValue,
    set: fn(&mut LogOptions, FlagValue),
    pub validate: Option<fn(&LogOptions) -> Option<ConfigError>>,
}

impl OptionField {
    /// Write `value` into the field, rejecting values of the wrong kind.
    pub fn apply(&self, options: &mut LogOptions, value: FlagValue) -> ConfigErrorResult<()> {
        if value.kind() != self.kind {
            return Err(ConfigError::flag(format!(
                "{} expects a {} value, got {}",
                self.flag,
                self.kind,
                value.kind()
            )));
        }

        (self.set)(options, value);
        Ok(())
    }

    pub fn by_flag(flag: &str) -> Option<&'static OptionField> {
        OPTION_FIELDS.iter().find(|field| field.flag == flag)
    }

    pub fn by_key(key: &str) -> Option<&'static OptionField> {
        OPTION_FIELDS.iter().find(|field| field.key == key)
    }
}

impl std::fmt::Debug for OptionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionField")
            .field("field", &self.field)
            .field("flag", &self.flag)
            .field("key", &self.key)
            .field("env", &self.env)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

fn validate_level(options: &LogOptions) -> Option<ConfigError> {
    options.level.parse::<Level>().err()
}

fn validate_format(options: &LogOptions) -> Option<ConfigError> {
    options.format.parse::<Format>().err()
}

/// Registration and validation order.
pub static OPTION_FIELDS: [OptionField; 11] = [
    OptionField {
        field: "level",
        flag: FLAG_LEVEL,
        key: "level",
        env: "LOG_LEVEL",
        kind: FlagKind::String,
        usage: "Minimum log output LEVEL.",
        default: || FlagValue::String(String::from(DEFAULT_LEVEL)),
        get: |o| FlagValue::String(o.level.clone()),
        set: |o, v| {
            if let FlagValue::String(v) = v {
                o.level = v;
            }
        },
        validate: Some(validate_level),
    },
    OptionField {
        field: "format",
        flag: FLAG_FORMAT,
        key: "format",
        env: "LOG_FORMAT",
        kind: FlagKind::String,
        usage: "Log output FORMAT, support console or json format.",
        default: || FlagValue::String(String::from(DEFAULT_FORMAT)),
        get: |o| FlagValue::String(o.format.clone()),
        set: |o, v| {
            if let FlagValue::String(v) = v {
                o.format = v;
            }
        },
        validate: Some(validate_format),
    },
    OptionField {
        field: "enable_color",
        flag: FLAG_ENABLE_COLOR,
        key: "enable-color",
        env: "LOG_ENABLE_COLOR",
        kind: FlagKind::Bool,
        usage: "Enable output ansi colors in console format logs.",
        default: || FlagValue::Bool(false),
        get: |o| FlagValue::Bool(o.enable_color),
        set: |o, v| {
            if let FlagValue::Bool(v) = v {
                o.enable_color = v;
            }
        },
        validate: None,
    },
    OptionField {
        field: "enable_caller",
        flag: FLAG_ENABLE_CALLER,
        key: "enable-caller",
        env: "LOG_ENABLE_CALLER",
        kind: FlagKind::Bool,
        usage: "Enable output of caller information in the log.",
        default: || FlagValue::Bool(false),
        get: |o| FlagValue::Bool(o.enable_caller),
        set: |o, v| {
            if let FlagValue::Bool(v) = v {
                o.enable_caller = v;
            }
        },
        validate: None,
    },
    OptionField {
        field: "output_paths",
        flag: FLAG_OUTPUT_PATHS,
        key: "output-paths",
        env: "LOG_OUTPUT_PATHS",
        kind: FlagKind::StringList,
        usage: "Output paths of log.",
        default: || FlagValue::StringList(vec![String::from(DEFAULT_OUTPUT_PATH)]),
        get: |o| FlagValue::StringList(o.output_paths.clone()),
        set: |o, v| {
            if let FlagValue::StringList(v) = v {
                o.output_paths = v;
            }
        },
        validate: None,
    },
    OptionField {
        field: "error_output_paths",
        flag: FLAG_ERROR_OUTPUT_PATHS,
        key: "error-output-paths",
        env: "LOG_ERROR_OUTPUT_PATHS",
        kind: FlagKind::StringList,
        usage: "Error output paths of log.",
        default: || FlagValue::StringList(vec![String::from(DEFAULT_ERROR_OUTPUT_PATH)]),
        get: |o| FlagValue::StringList(o.error_output_paths.clone()),
        set: |o, v| {
            if let FlagValue::StringList(v) = v {
                o.error_output_paths = v;
            }
        },
        validate: None,
    },
    OptionField {
        field: "development",
        flag: FLAG_DEVELOPMENT,
        key: "development",
        env: "LOG_DEVELOPMENT",
        kind: FlagKind::Bool,
        usage: "Development mode: relaxes dpanic level behavior and takes stack traces more liberally.",
        default: || FlagValue::Bool(false),
        get: |o| FlagValue::Bool(o.development),
        set: |o, v| {
            if let FlagValue::Bool(v) = v {
                o.development = v;
            }
        },
        validate: None,
    },
    OptionField {
        field: "name",
        flag: FLAG_NAME,
        key: "name",
        env: "LOG_NAME",
        kind: FlagKind::String,
        usage: "The name of the logger.",
        default: || FlagValue::String(String::new()),
        get: |o| FlagValue::String(o.name.clone()),
        set: |o, v| {
            if let FlagValue::String(v) = v {
                o.name = v;
            }
        },
        validate: None,
    },
    OptionField {
        field: "disable_stacktrace",
        flag: FLAG_DISABLE_STACKTRACE,
        key: "disable-stacktrace",
        env: "LOG_DISABLE_STACKTRACE",
        kind: FlagKind::Bool,
        usage: "Disable recording a stack trace for all messages at or above panic level.",
        default: || FlagValue::Bool(false),
        get: |o| FlagValue::Bool(o.disable_stacktrace),
        set: |o, v| {
            if let FlagValue::Bool(v) = v {
                o.disable_stacktrace = v;
            }
        },
        validate: None,
    },
    OptionField {
        field: "max_size_in_mb",
        flag: FLAG_MAX_SIZE_IN_MB,
        key: "max-size-in-mb",
        env: "LOG_MAX_SIZE_MB",
        kind: FlagKind::Int,
        usage: "The max size in MB before a log file is rotated.",
        default: || FlagValue::Int(0),
        get: |o| FlagValue::Int(o.max_size_in_mb),
        set: |o, v| {
            if let FlagValue::Int(v) = v {
                o.max_size_in_mb = v;
            }
        },
        validate: None,
    },
    OptionField {
        field: "max_age_in_days",
        flag: FLAG_MAX_AGE_IN_DAYS,
        key: "max-age-in-days",
        env: "LOG_MAX_AGE_DAYS",
        kind: FlagKind::Int,
        usage: "The max age in days before a log file is rotated.",
        default: || FlagValue::Int(0),
        get: |o| FlagValue::Int(o.max_age_in_days),
        set: |o, v| {
            if let FlagValue::Int(v) = v {
                o.max_age_in_days = v;
            }
        },
        validate: None,
    },
];
