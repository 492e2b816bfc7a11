//! Validation error types
//!
//! Rule codes:
//! - OUT_OF_RANGE
//! - PATTERN_MISMATCH
//! - INVALID_ADDRESS
//! - INVALID_TIMESTAMP
//! - INVALID_COUNT
//! - MISSING_FIELD
//! - CARDINALITY
//! - UNKNOWN_VALUE

use std::fmt;

use thiserror::Error;

/// The rule a value violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    /// Numeric value outside its inclusive bounds
    OutOfRange,
    /// String value does not match its pattern
    PatternMismatch,
    /// String does not parse as an address of the expected family
    InvalidAddress,
    /// Timestamp is not RFC 3339 with an explicit offset
    InvalidTimestamp,
    /// Sequence length outside its bounds
    InvalidCount,
    /// A conditionally required field is absent
    MissingField,
    /// Wrong number of optional fields populated
    Cardinality,
    /// Value is not a member of a closed enumeration
    UnknownValue,
}

impl ValidationRule {
    /// Returns the stable rule code
    pub fn code(&self) -> &'static str {
        match self {
            ValidationRule::OutOfRange => "OUT_OF_RANGE",
            ValidationRule::PatternMismatch => "PATTERN_MISMATCH",
            ValidationRule::InvalidAddress => "INVALID_ADDRESS",
            ValidationRule::InvalidTimestamp => "INVALID_TIMESTAMP",
            ValidationRule::InvalidCount => "INVALID_COUNT",
            ValidationRule::MissingField => "MISSING_FIELD",
            ValidationRule::Cardinality => "CARDINALITY",
            ValidationRule::UnknownValue => "UNKNOWN_VALUE",
        }
    }
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A construction-time validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{rule}: field '{field}': {reason}")]
pub struct ValidationError {
    field: String,
    rule: ValidationRule,
    reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, rule: ValidationRule, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rule,
            reason: reason.into(),
        }
    }

    /// Numeric value outside `[min, max]`
    pub fn out_of_range(
        field: impl Into<String>,
        min: impl fmt::Display,
        max: impl fmt::Display,
        actual: impl fmt::Display,
    ) -> Self {
        Self::new(
            field,
            ValidationRule::OutOfRange,
            format!("expected value in [{}, {}], got {}", min, max, actual),
        )
    }

    /// Numeric value below an open-ended lower bound
    pub fn below_minimum(
        field: impl Into<String>,
        min: impl fmt::Display,
        actual: impl fmt::Display,
    ) -> Self {
        Self::new(
            field,
            ValidationRule::OutOfRange,
            format!("expected value >= {}, got {}", min, actual),
        )
    }

    pub fn pattern_mismatch(field: impl Into<String>, pattern: &str, actual: &str) -> Self {
        Self::new(
            field,
            ValidationRule::PatternMismatch,
            format!("'{}' does not match pattern {}", actual, pattern),
        )
    }

    pub fn invalid_address(field: impl Into<String>, family: &str, actual: &str) -> Self {
        Self::new(
            field,
            ValidationRule::InvalidAddress,
            format!("Invalid {} address: {}", family, actual),
        )
    }

    pub fn invalid_timestamp(
        field: impl Into<String>,
        actual: &str,
        cause: impl fmt::Display,
    ) -> Self {
        Self::new(
            field,
            ValidationRule::InvalidTimestamp,
            format!("'{}' is not an RFC 3339 timestamp with time zone ({})", actual, cause),
        )
    }

    pub fn invalid_count(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(field, ValidationRule::InvalidCount, reason)
    }

    pub fn missing_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(field, ValidationRule::MissingField, reason)
    }

    pub fn cardinality(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(field, ValidationRule::Cardinality, reason)
    }

    pub fn unknown_value(field: impl Into<String>, actual: impl fmt::Display) -> Self {
        Self::new(
            field,
            ValidationRule::UnknownValue,
            format!("unknown value '{}'", actual),
        )
    }

    /// Replaces the field name, for leaf values validated under a
    /// composite's field.
    pub fn at(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// Prefixes the field path with the enclosing field, e.g. `latitude`
    /// nested under `center` becomes `center.latitude`.
    pub fn within(mut self, parent: impl fmt::Display) -> Self {
        self.field = if self.field.is_empty() {
            parent.to_string()
        } else if self.field.starts_with('[') {
            format!("{}{}", parent, self.field)
        } else {
            format!("{}.{}", parent, self.field)
        };
        self
    }

    /// Returns the dotted path of the offending field
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the violated rule
    pub fn rule(&self) -> ValidationRule {
        self.rule
    }

    /// Returns the human-readable reason
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Result type for validated construction
pub type ValidationResult<T> = Result<T, ValidationError>;
