//! Rule evaluators — pure logic, no database access.

use super::rules::{FieldViolation, RULE_REQUIRED};

/// Message reported when a required field is absent or empty.
pub fn required_message(field: &str) -> String {
    format!("A `{field}` is required.")
}

/// Check that `value` is present and non-empty.
///
/// Whitespace is not trimmed: `" "` counts as present.
pub fn evaluate_required(field: &str, value: Option<&str>) -> Option<FieldViolation> {
    match value {
        None => Some(required_violation(field)),
        Some(s) if s.is_empty() => Some(required_violation(field)),
        Some(_) => None,
    }
}

fn required_violation(field: &str) -> FieldViolation {
    FieldViolation {
        field: field.to_string(),
        rule_type: RULE_REQUIRED.to_string(),
        message: required_message(field),
    }
}
