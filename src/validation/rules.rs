//! Reusable rule checks
//!
//! Each check is a pure function of its inputs and returns the value's
//! `ValidationError` on failure.

use std::fmt::Display;
use std::sync::OnceLock;

use regex::Regex;

use super::errors::{ValidationError, ValidationResult};

/// An anchored pattern compiled on first use and shared for the process
/// lifetime.
pub(crate) struct CachedPattern {
    source: &'static str,
    compiled: OnceLock<Result<Regex, regex::Error>>,
}

impl CachedPattern {
    pub(crate) const fn new(source: &'static str) -> Self {
        Self {
            source,
            compiled: OnceLock::new(),
        }
    }

    pub(crate) fn source(&self) -> &'static str {
        self.source
    }

    fn regex(&self) -> Result<&Regex, &regex::Error> {
        self.compiled
            .get_or_init(|| Regex::new(self.source))
            .as_ref()
    }
}

/// Checks `min <= value <= max`. NaN never satisfies a range.
pub(crate) fn check_range<T>(field: &str, value: T, min: T, max: T) -> ValidationResult<()>
where
    T: PartialOrd + Display + Copy,
{
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(field, min, max, value))
    }
}

/// Checks `value >= min`.
pub(crate) fn check_min<T>(field: &str, value: T, min: T) -> ValidationResult<()>
where
    T: PartialOrd + Display + Copy,
{
    if value >= min {
        Ok(())
    } else {
        Err(ValidationError::below_minimum(field, min, value))
    }
}

pub(crate) fn check_pattern(
    field: &str,
    pattern: &CachedPattern,
    value: &str,
) -> ValidationResult<()> {
    let regex = pattern.regex().map_err(|e| {
        ValidationError::pattern_mismatch(
            field,
            pattern.source(),
            &format!("{} (pattern error: {})", value, e),
        )
    })?;

    if regex.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::pattern_mismatch(field, pattern.source(), value))
    }
}

/// Checks `min <= len <= max` for a sequence of `noun`s.
pub(crate) fn check_count(
    field: &str,
    noun: &str,
    len: usize,
    min: usize,
    max: usize,
) -> ValidationResult<()> {
    if len < min {
        return Err(ValidationError::invalid_count(
            field,
            format!("must have at least {} {}, got {}", min, noun, len),
        ));
    }
    if len > max {
        return Err(ValidationError::invalid_count(
            field,
            format!("must have at most {} {}, got {}", max, noun, len),
        ));
    }
    Ok(())
}
