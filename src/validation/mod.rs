//! Field validation shared by every CAMARA data type
//!
//! Construction either yields a fully valid value or a `ValidationError`
//! naming the offending field and the violated rule. There is no partial
//! success and no coercion.
//!
//! # Rules
//!
//! - Numeric ranges are inclusive on both ends
//! - Patterns are anchored and matched against the whole value
//! - Cross-field rules run after every member field has validated

mod errors;
mod rules;

pub use errors::{ValidationError, ValidationResult, ValidationRule};
pub(crate) use rules::{check_count, check_min, check_pattern, check_range, CachedPattern};
