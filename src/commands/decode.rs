//! `electro-spec decode` command.

use std::path::Path;

use super::read_input;
use crate::context::ServiceContext;
use crate::specification::SpecificationResponse;
use crate::wire::parse_response;

/// Execute the `decode` command.
///
/// Decodes the response payload at `input` and prints the record.
///
/// # Errors
///
/// Returns an error string if the payload cannot be read or decoded.
pub fn run(ctx: &ServiceContext, input: &Path) -> Result<(), String> {
    let raw = read_input(ctx, input)?;
    let record = parse_response(&raw, &ctx.config.wire)
        .map_err(|e| format!("Failed to decode {}: {e}", input.display()))?;
    println!("{}", describe(&record));
    Ok(())
}

/// Renders a record as labelled lines.
pub(crate) fn describe(record: &SpecificationResponse) -> String {
    let envelope = record.envelope();
    [
        format!("Specification: {}", envelope.id()),
        format!("Name: {}", record.name()),
        format!("Code: {}", record.code()),
        format!("Description: {}", record.description()),
        format!("Status: {}", record.status()),
        format!("Created: {}", envelope.created_at().to_rfc3339()),
        format!("Updated: {}", envelope.updated_at().to_rfc3339()),
    ]
    .join("\n")
}
