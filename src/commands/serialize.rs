//! `electro-spec serialize` command.

use std::path::Path;

use super::read_json;
use crate::context::ServiceContext;
use crate::validate::validate_request;
use crate::wire::serialize_request;

/// Execute the `serialize` command.
///
/// Validates the request payload at `input` and prints its wire form, or
/// writes it to `out` when given.
///
/// # Errors
///
/// Returns an error string if the payload cannot be read, is invalid, or
/// the output cannot be written.
pub fn run(ctx: &ServiceContext, input: &Path, out: Option<&Path>) -> Result<(), String> {
    let wire = wire_text(ctx, input)?;
    match out {
        Some(path) => {
            ctx.fs
                .write(path, &wire)
                .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
            println!("Written to {}", path.display());
        }
        None => println!("{wire}"),
    }
    Ok(())
}

fn wire_text(ctx: &ServiceContext, input: &Path) -> Result<String, String> {
    let value = read_json(ctx, input)?;
    let request = validate_request(&value, &ctx.config).map_err(|e| e.to_string())?;
    Ok(serialize_request(&request, &ctx.config.wire))
}
