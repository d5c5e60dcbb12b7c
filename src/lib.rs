//! Validation and wire contract for Electro product specification records.
//!
//! The core ([`validate`], [`wire`], [`specification`]) is pure and
//! synchronous. The [`client`] drives the exchange with the remote service
//! through the [`ports::Transport`] boundary.

pub mod adapters;
pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod ports;
pub mod specification;
pub mod validate;
pub mod wire;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli)
}
