//! Validated, defaultable options for the logging facility.
//!
//! [`LogOptions`] is the record handed to a logger builder. It can be layered
//! from a TOML file, `LOG_*` environment variables and command-line flags
//! (through any [`FlagRegistrar`]), and validated in one pass with
//! [`LogOptions::validate`].

mod error;
mod flag;
mod format;
mod level;
mod log_options;
mod option_field;

#[cfg(test)]
mod tests;

pub use error::{ConfigError, ConfigErrorResult};
pub use flag::{FlagKind, FlagRegistrar, FlagValue};
pub use format::Format;
pub use level::Level;
pub use log_options::LogOptions;
pub use option_field::{OPTION_FIELDS, OptionField};

pub const DEFAULT_LEVEL: &str = "info";
pub const DEFAULT_FORMAT: &str = "console";
pub const DEFAULT_OUTPUT_PATH: &str = "stdout";
pub const DEFAULT_ERROR_OUTPUT_PATH: &str = "stderr";

pub const CONSOLE_FORMAT: &str = "console";
pub const JSON_FORMAT: &str = "json";

pub const FLAG_LEVEL: &str = "log.level";
pub const FLAG_FORMAT: &str = "log.format";
pub const FLAG_ENABLE_COLOR: &str = "log.enable-color";
pub const FLAG_ENABLE_CALLER: &str = "log.enable-caller";
pub const FLAG_OUTPUT_PATHS: &str = "log.output-paths";
pub const FLAG_ERROR_OUTPUT_PATHS: &str = "log.error-output-paths";
pub const FLAG_DEVELOPMENT: &str = "log.development";
pub const FLAG_NAME: &str = "log.name";
pub const FLAG_DISABLE_STACKTRACE: &str = "log.disable-stacktrace";
pub const FLAG_MAX_SIZE_IN_MB: &str = "log.max-size-mb";
pub const FLAG_MAX_AGE_IN_DAYS: &str = "log.max-age-days";
