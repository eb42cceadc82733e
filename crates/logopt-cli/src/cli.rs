use std::path::PathBuf;

use clap::Parser;

/// Fixed arguments. The `log.*` flags are attached at runtime by
/// [`crate::ClapRegistrar`] so their defaults track the layered options.
#[derive(Parser, Debug)]
#[command(name = "logopt")]
#[command(about = "Resolve, validate and print logging options")]
#[command(version)]
pub struct Cli {
    /// TOML file with log options (keys as in the JSON form)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}
