use crate::{CliError, CliResult};

use clap::builder::BoolishValueParser;
use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use logopt_config::{FlagKind, FlagRegistrar, FlagValue, LogOptions, OPTION_FIELDS};

/// [`FlagRegistrar`] that attaches each flag to a clap [`Command`].
///
/// Bool flags take an optional `=VALUE` (`--log.enable-color`,
/// `--log.enable-color=false`); list flags split on commas and may repeat,
/// with empty items dropped so `--log.output-paths=` clears the list.
#[derive(Debug, Default)]
pub struct ClapRegistrar {
    command: Command,
}

impl ClapRegistrar {
    pub fn new(command: Command) -> Self {
        Self { command }
    }

    pub fn into_command(self) -> Command {
        self.command
    }

    fn push(&mut self, arg: Arg) {
        let command = std::mem::take(&mut self.command);
        self.command = command.arg(arg);
    }

    /// Write every `log.*` value given on the command line into `options`.
    ///
    /// Values that only come from the registered defaults are skipped, so
    /// options layered after binding (a config file, say) are not clobbered.
    pub fn apply_matches(matches: &ArgMatches, options: &mut LogOptions) -> CliResult<()> {
        for field in &OPTION_FIELDS {
            if matches.value_source(field.flag) != Some(ValueSource::CommandLine) {
                continue;
            }

            let value = Self::read_value(matches, field.flag, field.kind)
                .map_err(|source| CliError::Matches {
                    flag: field.flag,
                    source,
                })?;

            if let Some(value) = value {
                options.set_flag(field.flag, value)?;
            }
        }

        Ok(())
    }

    fn read_value(
        matches: &ArgMatches,
        flag: &str,
        kind: FlagKind,
    ) -> Result<Option<FlagValue>, clap::parser::MatchesError> {
        let value = match kind {
            FlagKind::String => matches
                .try_get_one::<String>(flag)?
                .map(|v| FlagValue::String(v.clone())),
            FlagKind::Bool => matches.try_get_one::<bool>(flag)?.map(|v| FlagValue::Bool(*v)),
            FlagKind::Int => matches.try_get_one::<i64>(flag)?.map(|v| FlagValue::Int(*v)),
            FlagKind::StringList => matches
                .try_get_many::<String>(flag)?
                .map(|values| {
                    FlagValue::StringList(
                        values.filter(|v| !v.is_empty()).cloned().collect(),
                    )
                }),
        };

        Ok(value)
    }
}

impl FlagRegistrar for ClapRegistrar {
    fn register_string(&mut self, name: &'static str, default: &str, usage: &'static str) {
        let mut arg = Arg::new(name)
            .long(name)
            .value_name("STRING")
            .action(ArgAction::Set)
            .help(usage);
        if !default.is_empty() {
            arg = arg.default_value(default.to_string());
        }
        self.push(arg);
    }

    fn register_bool(&mut self, name: &'static str, default: bool, usage: &'static str) {
        let arg = Arg::new(name)
            .long(name)
            .value_name("BOOL")
            .action(ArgAction::Set)
            .value_parser(BoolishValueParser::new())
            .num_args(0..=1)
            .require_equals(true)
            .default_missing_value("true")
            .default_value(if default { "true" } else { "false" })
            .help(usage);
        self.push(arg);
    }

    fn register_int(&mut self, name: &'static str, default: i64, usage: &'static str) {
        let arg = Arg::new(name)
            .long(name)
            .value_name("INT")
            .action(ArgAction::Set)
            .value_parser(value_parser!(i64))
            .allow_negative_numbers(true)
            .default_value(default.to_string())
            .help(usage);
        self.push(arg);
    }

    fn register_string_list(&mut self, name: &'static str, default: &[String], usage: &'static str) {
        let mut arg = Arg::new(name)
            .long(name)
            .value_name("STRINGS")
            .action(ArgAction::Append)
            .value_delimiter(',')
            .help(usage);
        if !default.is_empty() {
            arg = arg.default_values(default.to_vec());
        }
        self.push(arg);
    }
}
