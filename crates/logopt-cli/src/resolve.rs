use crate::{ClapRegistrar, Cli, CliResult};

use std::ffi::OsString;

use clap::{CommandFactory, FromArgMatches};
use logopt_config::{ConfigError, LogOptions};

/// Options after every source has been layered, not yet validated.
#[derive(Debug)]
pub struct Resolved {
    pub cli: Cli,
    pub options: LogOptions,
    /// `LOG_*` variables that were present but could not be applied
    pub env_rejected: Vec<ConfigError>,
}

/// Layer defaults, the `--config` file, `LOG_*` variables and `--log.*`
/// flags, in that order of increasing precedence.
///
/// Flags are bound before the config path is known, so their defaults come
/// from defaults plus environment; only values given on the command line are
/// applied on top of the file.
pub fn resolve<I, T>(args: I) -> CliResult<Resolved>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut options = LogOptions::new();
    let mut env_rejected = options.apply_env_overrides();

    let mut registrar = ClapRegistrar::new(Cli::command());
    options.add_flags(&mut registrar);
    let matches = registrar.into_command().try_get_matches_from(args)?;
    let cli = Cli::from_arg_matches(&matches)?;

    if let Some(ref path) = cli.config {
        options = LogOptions::load(path)?;
        env_rejected = options.apply_env_overrides();
    }

    ClapRegistrar::apply_matches(&matches, &mut options)?;

    Ok(Resolved {
        cli,
        options,
        env_rejected,
    })
}
