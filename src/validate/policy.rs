//! Configurable acceptance rules for request fields.

use serde::{Deserialize, Serialize};

use crate::specification::Field;

/// Whether an empty or whitespace-only string is an acceptable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyStrings {
    /// Empty strings are valid domain values.
    Allow,
    /// Empty strings are treated like a missing value.
    Reject,
}

/// The set of status codes the service accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatusRule {
    /// Any 32-bit integer.
    Any,
    /// An inclusive range.
    Range {
        /// Smallest accepted code.
        min: i32,
        /// Largest accepted code.
        max: i32,
    },
    /// An explicit enumeration.
    OneOf {
        /// Accepted codes.
        values: Vec<i32>,
    },
}

impl Default for StatusRule {
    fn default() -> Self {
        Self::Range { min: 0, max: 2 }
    }
}

/// Decides whether a status code is acceptable.
///
/// Implemented by [`StatusRule`] and by any `Fn(i32) -> Result<(), String>`,
/// so a caller can inject the service's own check.
pub trait StatusValidator: Send + Sync {
    /// Returns `Ok(())` when `status` is accepted.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason when `status` is rejected.
    fn check(&self, status: i32) -> Result<(), String>;
}

impl StatusValidator for StatusRule {
    fn check(&self, status: i32) -> Result<(), String> {
        match self {
            Self::Any => Ok(()),
            Self::Range { min, max } if (*min..=*max).contains(&status) => Ok(()),
            Self::Range { min, max } => Err(format!("must be between {min} and {max}")),
            Self::OneOf { values } if values.contains(&status) => Ok(()),
            Self::OneOf { values } => {
                let listed = values.iter().map(ToString::to_string).collect::<Vec<_>>();
                Err(format!("must be one of {}", listed.join(", ")))
            }
        }
    }
}

impl<F> StatusValidator for F
where
    F: Fn(i32) -> Result<(), String> + Send + Sync,
{
    fn check(&self, status: i32) -> Result<(), String> {
        self(status)
    }
}

/// Field acceptance rules for [`crate::validate::validate_request`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    /// Empty-string handling for `name`.
    pub name: EmptyStrings,
    /// Empty-string handling for `code`.
    pub code: EmptyStrings,
    /// Empty-string handling for `description`.
    pub description: EmptyStrings,
    /// Accepted status codes.
    pub status: StatusRule,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            name: EmptyStrings::Reject,
            code: EmptyStrings::Reject,
            description: EmptyStrings::Allow,
            status: StatusRule::default(),
        }
    }
}

impl ValidationPolicy {
    /// Empty-string handling for a text field. Non-text fields allow.
    #[must_use]
    pub fn empty_strings(&self, field: Field) -> EmptyStrings {
        match field {
            Field::Name => self.name,
            Field::Code => self.code,
            Field::Description => self.description,
            _ => EmptyStrings::Allow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_inclusive() {
        let rule = StatusRule::Range { min: -1, max: 3 };
        assert!(rule.check(-1).is_ok());
        assert!(rule.check(3).is_ok());
        assert_eq!(rule.check(-2), Err("must be between -1 and 3".to_string()));
        assert_eq!(rule.check(4), Err("must be between -1 and 3".to_string()));
    }

    #[test]
    fn one_of_lists_accepted_values() {
        let rule = StatusRule::OneOf { values: vec![1, 2] };
        assert!(rule.check(2).is_ok());
        assert_eq!(rule.check(0), Err("must be one of 1, 2".to_string()));
    }

    #[test]
    fn any_accepts_extremes() {
        assert!(StatusRule::Any.check(i32::MIN).is_ok());
        assert!(StatusRule::Any.check(i32::MAX).is_ok());
    }

    #[test]
    fn closures_are_validators() {
        let even = |status: i32| {
            if status % 2 == 0 {
                Ok(())
            } else {
                Err("must be even".to_string())
            }
        };
        assert!(even.check(4).is_ok());
        assert!(StatusValidator::check(&even, 3).is_err());
    }

    #[test]
    fn default_policy_rejects_empty_identifiers_only() {
        let policy = ValidationPolicy::default();
        assert_eq!(policy.empty_strings(Field::Name), EmptyStrings::Reject);
        assert_eq!(policy.empty_strings(Field::Code), EmptyStrings::Reject);
        assert_eq!(policy.empty_strings(Field::Description), EmptyStrings::Allow);
        assert!(policy.status.check(0).is_ok());
    }
}
