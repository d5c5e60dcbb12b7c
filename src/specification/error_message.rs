//! Error body returned by the service when it rejects a request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rejection details sent back by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorMessage {
    /// HTTP-style status code.
    pub status_code: u16,
    /// When the error was produced.
    pub timestamp: DateTime<Utc>,
    /// Short message.
    pub message: String,
    /// Request description, e.g. `uri=/api/specifications`.
    pub description: String,
}
