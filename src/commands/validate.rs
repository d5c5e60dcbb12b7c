//! `electro-spec validate` command.

use std::path::Path;

use super::read_json;
use crate::context::ServiceContext;
use crate::validate::{format_report, validate_request};

/// Execute the `validate` command.
///
/// Prints a per-field report of the request payload at `input`.
///
/// # Errors
///
/// Returns an error string if the payload cannot be read or any field is invalid.
pub fn run(ctx: &ServiceContext, input: &Path) -> Result<(), String> {
    let (report, invalid) = report(ctx, input)?;
    println!("{report}");
    match invalid {
        0 => Ok(()),
        n => Err(format!("{n} invalid field(s) in {}", input.display())),
    }
}

/// Builds the report text and counts invalid fields.
fn report(ctx: &ServiceContext, input: &Path) -> Result<(String, usize), String> {
    let value = read_json(ctx, input)?;
    let result = validate_request(&value, &ctx.config);
    let invalid = result.as_ref().err().map_or(0, |err| err.violations().len());
    tracing::info!(input = %input.display(), invalid, "validated request");
    Ok((format_report(&result), invalid))
}
