//! Errors returned by validation and decoding.
//!
//! Both kinds are local and recoverable: the caller decides whether to
//! re-prompt, report, or give up.

use std::fmt;

use crate::specification::Field;

/// Why a single field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViolationReason {
    /// Absent or `null`.
    #[error("is missing")]
    Missing,
    /// Present but not a string.
    #[error("must be a string")]
    NotAString,
    /// Present but not an integer.
    #[error("must be an integer")]
    NotAnInteger,
    /// Empty or whitespace-only where the policy forbids it.
    #[error("must not be empty")]
    Empty,
    /// An integer the status rule does not accept.
    #[error("{0}")]
    StatusRejected(String),
}

/// A `(field, reason)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// The offending field.
    pub field: Field,
    /// What is wrong with it.
    pub reason: ViolationReason,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.reason)
    }
}

/// Every violation found while building a request from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid specification: {}", summarize(.violations))]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Wraps a non-empty list of violations.
    #[must_use]
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    /// All violations, in field declaration order.
    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// The fields that failed.
    #[must_use]
    pub fn fields(&self) -> Vec<Field> {
        self.violations.iter().map(|v| v.field).collect()
    }

    /// The reason `field` failed, if it did.
    #[must_use]
    pub fn reason(&self, field: Field) -> Option<&ViolationReason> {
        self.violations.iter().find(|v| v.field == field).map(|v| &v.reason)
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// Failure to turn a service payload into a well-typed record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The payload is not JSON at all.
    #[error("payload is not valid JSON: {0}")]
    Malformed(String),
    /// The payload is JSON but not an object.
    #[error("payload must be a JSON object")]
    NotAnObject,
    /// A required field is absent or `null`.
    #[error("payload is missing required field `{0}`")]
    MissingField(Field),
    /// A required field has the wrong JSON type or format.
    #[error("payload field `{field}` must be {expected}")]
    WrongType {
        /// The offending field.
        field: Field,
        /// Description of the expected shape.
        expected: &'static str,
    },
    /// A paging key of a listing is absent or mistyped.
    #[error("listing key `{0}` is missing or malformed")]
    ListKey(String),
    /// One record inside a listing failed to decode.
    #[error("listing item {index}: {source}")]
    Item {
        /// Position of the item in `content`.
        index: usize,
        /// The item's own decode error.
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    /// The record field this error names, if any.
    #[must_use]
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::MissingField(field) | Self::WrongType { field, .. } => Some(*field),
            Self::Item { source, .. } => source.field(),
            Self::Malformed(_) | Self::NotAnObject | Self::ListKey(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_lists_every_violation() {
        let err = ValidationError::new(vec![
            FieldViolation { field: Field::Name, reason: ViolationReason::Empty },
            FieldViolation { field: Field::Status, reason: ViolationReason::Missing },
        ]);

        assert_eq!(err.fields(), vec![Field::Name, Field::Status]);
        assert_eq!(
            err.to_string(),
            "invalid specification: name must not be empty; status is missing"
        );
        assert_eq!(err.reason(Field::Code), None);
    }

    #[test]
    fn decode_error_names_nested_field() {
        let err = DecodeError::Item {
            index: 2,
            source: Box::new(DecodeError::MissingField(Field::Status)),
        };
        assert_eq!(err.field(), Some(Field::Status));
        assert_eq!(err.to_string(), "listing item 2: payload is missing required field `status`");
    }
}
