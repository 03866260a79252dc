//! Field-level validation.
//!
//! Provides the violation/result types and the pure rule evaluators used by
//! entity validation. Nothing here touches persistence.

pub mod evaluator;
pub mod rules;

pub use evaluator::evaluate_required;
pub use rules::{FieldViolation, ValidationResult};
