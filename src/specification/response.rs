//! The read shape of a specification.

use super::{BaseEnvelope, SpecificationRequest};

/// A specification as returned by the service.
///
/// The envelope is held by composition; the four domain fields mirror
/// [`SpecificationRequest`] exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpecificationResponse {
    envelope: BaseEnvelope,
    name: String,
    code: String,
    description: String,
    status: i32,
}

impl SpecificationResponse {
    /// Creates a response record.
    #[must_use]
    pub fn new(
        envelope: BaseEnvelope,
        name: impl Into<String>,
        code: impl Into<String>,
        description: impl Into<String>,
        status: i32,
    ) -> Self {
        Self {
            envelope,
            name: name.into(),
            code: code.into(),
            description: description.into(),
            status,
        }
    }

    /// Wraps the fields of `request` in `envelope`.
    #[must_use]
    pub fn from_request(envelope: BaseEnvelope, request: &SpecificationRequest) -> Self {
        Self::new(envelope, request.name(), request.code(), request.description(), request.status())
    }

    /// Envelope metadata.
    #[must_use]
    pub fn envelope(&self) -> &BaseEnvelope {
        &self.envelope
    }

    /// Human-readable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Machine-usable code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Free-text description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Numeric status code.
    #[must_use]
    pub fn status(&self) -> i32 {
        self.status
    }

    /// The request that would reproduce this record's domain fields.
    #[must_use]
    pub fn to_request(&self) -> SpecificationRequest {
        SpecificationRequest::from(self)
    }
}
