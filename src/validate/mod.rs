//! Request validation.
//!
//! Turns untrusted input (a parsed form or JSON body) into a
//! [`SpecificationRequest`], collecting every problem instead of stopping
//! at the first one so a caller can show them all at once.

mod policy;

pub use policy::{EmptyStrings, StatusRule, StatusValidator, ValidationPolicy};

use serde_json::{Map, Value};

use crate::config::ContractConfig;
use crate::error::{FieldViolation, ValidationError, ViolationReason};
use crate::specification::{Field, SpecificationRequest};
use crate::wire::WireConfig;

/// Validates untrusted input using the configured status rule.
///
/// Input keys are looked up by their configured wire names. Accepted values
/// are kept verbatim.
///
/// # Errors
///
/// Returns a [`ValidationError`] listing every invalid field.
pub fn validate_request(
    input: &Value,
    config: &ContractConfig,
) -> Result<SpecificationRequest, ValidationError> {
    validate_request_with(input, config, &config.validation.status)
}

/// Validates untrusted input with an injected status validator.
///
/// The configured status rule is ignored in favour of `status_check`.
///
/// # Errors
///
/// Returns a [`ValidationError`] listing every invalid field.
pub fn validate_request_with(
    input: &Value,
    config: &ContractConfig,
    status_check: &dyn StatusValidator,
) -> Result<SpecificationRequest, ValidationError> {
    let object = input.as_object();
    let policy = &config.validation;
    let wire = &config.wire;
    let mut violations = Vec::new();

    let mut text = |field: Field| {
        check_text(lookup(object, wire, field), policy.empty_strings(field))
            .map_err(|reason| violations.push(FieldViolation { field, reason }))
            .ok()
    };
    let name = text(Field::Name);
    let code = text(Field::Code);
    let description = text(Field::Description);

    let status = check_status(lookup(object, wire, Field::Status), status_check)
        .map_err(|reason| violations.push(FieldViolation { field: Field::Status, reason }))
        .ok();

    match (name, code, description, status) {
        (Some(name), Some(code), Some(description), Some(status)) => {
            Ok(SpecificationRequest::new(name, code, description, status))
        }
        _ => Err(ValidationError::new(violations)),
    }
}

/// Formats a validation outcome as a per-field report.
#[must_use]
pub fn format_report(result: &Result<SpecificationRequest, ValidationError>) -> String {
    let mut lines = Vec::new();
    for field in Field::DOMAIN {
        match result.as_ref().err().and_then(|err| err.reason(field)) {
            Some(reason) => lines.push(format!("  [FAIL] {field}: {reason}")),
            None => lines.push(format!("  [PASS] {field}")),
        }
    }
    lines.push(String::new());
    let overall = if result.is_ok() { "VALID" } else { "INVALID" };
    lines.push(format!("Result: {overall}"));
    lines.join("\n")
}

fn lookup<'v>(object: Option<&'v Map<String, Value>>, wire: &WireConfig, field: Field) -> Option<&'v Value> {
    object?.get(&*wire.key(field)).filter(|value| !value.is_null())
}

fn check_text(value: Option<&Value>, empty: EmptyStrings) -> Result<String, ViolationReason> {
    match value {
        None => Err(ViolationReason::Missing),
        Some(Value::String(s)) if empty == EmptyStrings::Reject && s.trim().is_empty() => {
            Err(ViolationReason::Empty)
        }
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ViolationReason::NotAString),
    }
}

fn check_status(
    value: Option<&Value>,
    status_check: &dyn StatusValidator,
) -> Result<i32, ViolationReason> {
    let Some(value) = value else {
        return Err(ViolationReason::Missing);
    };
    let wide = match (value.as_i64(), value.as_u64()) {
        (Some(n), _) => i128::from(n),
        (None, Some(n)) => i128::from(n),
        (None, None) => return Err(ViolationReason::NotAnInteger),
    };
    let status = i32::try_from(wide).map_err(|_| {
        ViolationReason::StatusRejected(format!("{wide} does not fit a 32-bit status code"))
    })?;
    status_check.check(status).map_err(ViolationReason::StatusRejected)?;
    Ok(status)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn config() -> ContractConfig {
        ContractConfig::default()
    }

    #[test]
    fn valid_input_is_kept_verbatim() {
        let input = json!({"name": "  Spec A ", "code": "SPEC_A", "description": "desc", "status": 1});

        let request = validate_request(&input, &config()).unwrap();

        assert_eq!(request, SpecificationRequest::new("  Spec A ", "SPEC_A", "desc", 1));
    }

    #[test]
    fn empty_name_is_reported_alone() {
        let input = json!({"name": "", "code": "SPEC_B", "description": "", "status": 1});

        let err = validate_request(&input, &config()).unwrap_err();

        assert_eq!(err.fields(), vec![Field::Name]);
        assert_eq!(err.reason(Field::Name), Some(&ViolationReason::Empty));
    }

    #[test]
    fn whitespace_only_code_counts_as_empty() {
        let input = json!({"name": "n", "code": "   ", "description": "d", "status": 1});

        let err = validate_request(&input, &config()).unwrap_err();

        assert_eq!(err.reason(Field::Code), Some(&ViolationReason::Empty));
    }

    #[test]
    fn every_missing_field_is_listed() {
        let err = validate_request(&json!({}), &config()).unwrap_err();

        assert_eq!(err.fields(), Field::DOMAIN.to_vec());
        assert!(err.violations().iter().all(|v| v.reason == ViolationReason::Missing));
    }

    #[test]
    fn non_object_input_reports_all_fields_missing() {
        let err = validate_request(&json!("Spec A"), &config()).unwrap_err();
        assert_eq!(err.fields().len(), 4);
    }

    #[test]
    fn null_is_missing() {
        let input = json!({"name": null, "code": "C", "description": "d", "status": 0});

        let err = validate_request(&input, &config()).unwrap_err();

        assert_eq!(err.reason(Field::Name), Some(&ViolationReason::Missing));
    }

    #[test]
    fn wrong_types_are_reported() {
        let input = json!({"name": 5, "code": ["C"], "description": true, "status": "1"});

        let err = validate_request(&input, &config()).unwrap_err();

        assert_eq!(err.reason(Field::Name), Some(&ViolationReason::NotAString));
        assert_eq!(err.reason(Field::Code), Some(&ViolationReason::NotAString));
        assert_eq!(err.reason(Field::Description), Some(&ViolationReason::NotAString));
        assert_eq!(err.reason(Field::Status), Some(&ViolationReason::NotAnInteger));
    }

    #[test]
    fn fractional_status_is_not_an_integer() {
        let input = json!({"name": "n", "code": "c", "description": "d", "status": 1.5});

        let err = validate_request(&input, &config()).unwrap_err();

        assert_eq!(err.reason(Field::Status), Some(&ViolationReason::NotAnInteger));
    }

    #[test]
    fn status_range_boundaries() {
        let mut config = config();
        config.validation.status = StatusRule::Range { min: 0, max: 5 };
        let with_status = |status: i64| json!({"name": "n", "code": "c", "description": "", "status": status});

        assert!(validate_request(&with_status(0), &config).is_ok());
        assert!(validate_request(&with_status(5), &config).is_ok());
        assert!(validate_request(&with_status(-1), &config).is_err());
        assert!(validate_request(&with_status(6), &config).is_err());
    }

    #[test]
    fn oversized_status_is_rejected() {
        let mut config = config();
        config.validation.status = StatusRule::Any;
        let input = json!({"name": "n", "code": "c", "description": "", "status": u64::MAX});

        let err = validate_request(&input, &config).unwrap_err();

        assert!(matches!(err.reason(Field::Status), Some(ViolationReason::StatusRejected(_))));
    }

    #[test]
    fn injected_validator_overrides_rule() {
        let input = json!({"name": "n", "code": "c", "description": "", "status": 7});
        let odd_only = |status: i32| {
            if status % 2 == 1 {
                Ok(())
            } else {
                Err("must be odd".to_string())
            }
        };

        assert!(validate_request(&input, &config()).is_err());
        assert!(validate_request_with(&input, &config(), &odd_only).is_ok());
    }

    #[test]
    fn allow_policy_accepts_empty_identifiers() {
        let mut config = config();
        config.validation.name = EmptyStrings::Allow;
        config.validation.code = EmptyStrings::Allow;
        let input = json!({"name": "", "code": "", "description": "", "status": 1});

        assert!(validate_request(&input, &config).is_ok());
    }

    #[test]
    fn keys_follow_wire_renames() {
        let mut config = config();
        config.wire.renames.insert(Field::Name, "title".to_string());
        let input = json!({"title": "Spec", "code": "c", "description": "", "status": 1});

        assert_eq!(validate_request(&input, &config).unwrap().name(), "Spec");
    }

    #[test]
    fn report_marks_failures() {
        let input = json!({"name": "", "code": "C", "description": "", "status": 9});
        let report = format_report(&validate_request(&input, &config()));

        assert!(report.contains("[FAIL] name: must not be empty"));
        assert!(report.contains("[PASS] code"));
        assert!(report.contains("[FAIL] status: must be between 0 and 2"));
        assert!(report.ends_with("Result: INVALID"));
    }
}
