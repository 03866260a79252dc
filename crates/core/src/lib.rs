//! Domain logic for vidbits.
//!
//! Pure types and rules with no database or HTTP dependencies: entity
//! construction, field coercion and required-field validation.

pub mod error;
pub mod types;
pub mod validation;
pub mod video;
