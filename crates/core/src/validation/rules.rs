//! Validation result types.

/// Rule type recorded on violations produced by [`super::evaluate_required`].
pub const RULE_REQUIRED: &str = "required";

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub rule_type: String,
    pub message: String,
}

/// Aggregated result of evaluating all rules against one record.
///
/// Violations keep the order in which rules were evaluated. At most one
/// violation is recorded per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<FieldViolation>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Message of the violation recorded for `field`, if any.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|v| v.field == field)
            .map(|v| v.message.as_str())
    }

    /// Names of all fields that failed, in evaluation order.
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|v| v.field.as_str()).collect()
    }

    pub(crate) fn push(&mut self, violation: Option<FieldViolation>) {
        if let Some(v) = violation {
            self.errors.push(v);
        }
    }
}
