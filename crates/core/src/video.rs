//! Video entity construction, coercion and validation.
//!
//! [`VideoFields`] holds the attempted values of a submission exactly as
//! they will be echoed back on a failed form. [`ValidVideo`] can only be
//! obtained through [`VideoFields::validated`], so every write built from it
//! carries a non-empty title and url.

use serde::Deserialize;
use serde_json::{Map, Number, Value};

use crate::validation::{evaluate_required, ValidationResult};

pub const TITLE: &str = "title";
pub const URL: &str = "url";
pub const DESCRIPTION: &str = "description";

/// Coerce an arbitrary JSON value to its text form.
///
/// `null` is treated as absent. Strings pass through, booleans use their
/// display form, arrays and objects their compact JSON text. Whole-valued
/// floats below 1e21 are written without a fractional part (`1.0` -> `"1"`).
pub fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f == 0.0 => "0".to_string(),
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}

/// Unvalidated video field values.
///
/// Deserializes directly from a submitted form; fields not present in the
/// submission are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VideoFields {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}

/// Field values that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidVideo {
    title: String,
    url: String,
    description: Option<String>,
}

impl ValidVideo {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl VideoFields {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            url: Some(url.into()),
            description: Some(description.into()),
        }
    }

    /// Build from a mapping of field values, coercing each to text.
    ///
    /// Keys other than `title`, `url` and `description` are ignored.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let field = |name: &str| map.get(name).and_then(coerce_text);
        Self {
            title: field(TITLE),
            url: field(URL),
            description: field(DESCRIPTION),
        }
    }

    /// Check required fields. Title and url are evaluated independently.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();
        result.push(evaluate_required(TITLE, self.title.as_deref()));
        result.push(evaluate_required(URL, self.url.as_deref()));
        result
    }

    /// Validate and, on success, convert into a [`ValidVideo`].
    ///
    /// The attempted values stay with `self` so a failed submission can be
    /// re-rendered as entered.
    pub fn validated(&self) -> Result<ValidVideo, ValidationResult> {
        let result = self.validate();
        if !result.is_valid() {
            return Err(result);
        }
        match (&self.title, &self.url) {
            (Some(title), Some(url)) => Ok(ValidVideo {
                title: title.clone(),
                url: url.clone(),
                description: self.description.clone(),
            }),
            _ => Err(result),
        }
    }
}
