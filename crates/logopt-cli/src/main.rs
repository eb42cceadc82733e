//! logopt - resolve and validate logging options
//!
//! Layers the options from defaults, an optional TOML file, `LOG_*`
//! environment variables and `--log.*` flags, validates them, starts the
//! logger and prints the resolved options as JSON.
//!
//! # Examples
//!
//! ```bash
//! logopt --log.level debug --log.format json --pretty
//! LOG_ENABLE_COLOR=1 logopt --config log.toml --log.output-paths stdout,/tmp/app.log
//! ```

use logopt_cli::{CliError, CliResult, logger, resolve};

use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        // --help, --version and usage errors print themselves
        Err(CliError::Clap(e)) => e.exit(),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<ExitCode> {
    let resolved = resolve(std::env::args_os())?;
    let options = resolved.options;

    for rejected in &resolved.env_rejected {
        eprintln!("Warning: {}", rejected);
    }

    let errors = options.validate();
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("Error: {}", error);
        }
        return Ok(ExitCode::FAILURE);
    }

    logger::initialize(&options)?;
    options.log_summary();

    let output = if resolved.cli.pretty {
        options.to_json_pretty()?
    } else {
        options.to_string()
    };
    println!("{}", output);

    Ok(ExitCode::SUCCESS)
}
