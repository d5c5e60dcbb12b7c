//! The write shape of a specification.

use super::SpecificationResponse;

/// The fields a caller supplies to create or update a specification.
///
/// Fields are private so a value cannot change after construction. Build
/// one from untrusted input with [`crate::validate::validate_request`]; use
/// [`SpecificationRequest::new`] when the values are already trusted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpecificationRequest {
    name: String,
    code: String,
    description: String,
    status: i32,
}

impl SpecificationRequest {
    /// Creates a request from already-trusted values without validating them.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        description: impl Into<String>,
        status: i32,
    ) -> Self {
        Self { name: name.into(), code: code.into(), description: description.into(), status }
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
}

impl From<&SpecificationResponse> for SpecificationRequest {
    fn from(response: &SpecificationResponse) -> Self {
        Self::new(response.name(), response.code(), response.description(), response.status())
    }
}
