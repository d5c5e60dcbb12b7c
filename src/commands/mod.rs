//! Command dispatch and handlers.

pub mod decode;
pub mod exchange;
pub mod serialize;
pub mod validate;

use std::env;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::cli::{Cli, Command};
use crate::config::{ContractConfig, CONFIG_ENV};
use crate::context::ServiceContext;
use crate::ports::FileSystem;

/// Dispatch a parsed command line to its handler.
///
/// The contract config comes from `--config`, then `ELECTRO_SPEC_CONFIG`,
/// then the built-in defaults.
///
/// # Errors
///
/// Returns an error string if the config cannot be loaded or the selected
/// command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let config = resolve_config(&LiveFileSystem, cli.config.as_deref())?;
    let ctx = ServiceContext::live(config);
    dispatch_with_context(&cli.command, &ctx)
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns an error string if the command handler fails.
pub fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    tracing::debug!(?command, "dispatching");
    match command {
        Command::Validate { input } => validate::run(ctx, input),
        Command::Serialize { input, out } => serialize::run(ctx, input, out.as_deref()),
        Command::Decode { input } => decode::run(ctx, input),
        Command::Exchange { input } => exchange::run(ctx, input),
    }
}

fn resolve_config(fs: &dyn FileSystem, flag: Option<&Path>) -> Result<ContractConfig, String> {
    let path = flag.map(Path::to_path_buf).or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading contract config");
            ContractConfig::load(fs, &path).map_err(|e| e.to_string())
        }
        None => Ok(ContractConfig::default()),
    }
}

/// Reads a file through the context's filesystem.
fn read_input(ctx: &ServiceContext, path: &Path) -> Result<String, String> {
    ctx.fs.read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))
}

/// Reads a file and parses it as JSON.
fn read_json(ctx: &ServiceContext, path: &Path) -> Result<Value, String> {
    let text = read_input(ctx, path)?;
    serde_json::from_str(&text).map_err(|e| format!("{} is not valid JSON: {e}", path.display()))
}
