
use crate::ClapRegistrar;

use std::env;

use clap::{ArgMatches, Command};
use logopt_config::LogOptions;

/// Bind `options` to a fresh command and parse `args` against it.
pub(crate) fn parse(options: &LogOptions, args: &[&str]) -> Result<ArgMatches, clap::Error> {
    let mut registrar = ClapRegistrar::new(Command::new("logopt"));
    options.add_flags(&mut registrar);
    registrar
        .into_command()
        .try_get_matches_from(std::iter::once("logopt").chain(args.iter().copied()))
}

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}
