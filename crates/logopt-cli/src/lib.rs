//! logopt-cli library
//!
//! Exports the clap flag registrar and the logger builder for use in tests
//! and by other binaries that want the `log.*` flag surface.

pub mod clap_registrar;
pub mod cli;
pub mod error;
pub mod logger;
pub mod resolve;

#[cfg(test)]
mod tests;

pub use clap_registrar::ClapRegistrar;
pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use resolve::{Resolved, resolve};
