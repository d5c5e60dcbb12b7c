//! `electro-spec exchange` command.

use std::path::Path;

use super::decode::describe;
use super::read_json;
use crate::client::SpecificationClient;
use crate::context::ServiceContext;
use crate::validate::validate_request;

/// Execute the `exchange` command.
///
/// Validates the request payload at `input`, creates it through the
/// context's transport, and prints the decoded reply.
///
/// # Errors
///
/// Returns an error string if the payload is unreadable or invalid, or the
/// exchange with the service fails.
pub fn run(ctx: &ServiceContext, input: &Path) -> Result<(), String> {
    let value = read_json(ctx, input)?;
    let request = validate_request(&value, &ctx.config).map_err(|e| e.to_string())?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start runtime: {e}"))?;
    let client = SpecificationClient::new(ctx.transport.as_ref(), &ctx.config);
    let created = runtime.block_on(client.create(&request)).map_err(|e| e.to_string())?;

    tracing::info!(id = created.envelope().id(), code = created.code(), "created specification");
    if created.to_request() != request {
        tracing::warn!("service returned different field values than were sent");
    }
    println!("{}", describe(&created));
    Ok(())
}
