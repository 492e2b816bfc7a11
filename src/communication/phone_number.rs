//! E.164 phone number

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::docs::Documented;
use crate::validation::{check_pattern, CachedPattern, ValidationError, ValidationResult};

/// `+`, a non-zero leading digit, then 4 to 14 further digits.
static E164: CachedPattern = CachedPattern::new(r"^\+[1-9][0-9]{4,14}$");

/// A public identifier addressing a telephone subscription.
///
/// In mobile networks this is the MSISDN, formatted in international E.164
/// form and prefixed with `+`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(value: impl Into<String>) -> ValidationResult<Self> {
        let value = value.into();
        check_pattern("phoneNumber", &E164, &value)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> ValidationResult<Self> {
        Self::new(value)
    }
}

impl From<PhoneNumber> for String {
    fn from(number: PhoneNumber) -> Self {
        number.0
    }
}

impl FromStr for PhoneNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        Self::new(s)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Documented for PhoneNumber {
    const NAME: &'static str = "PhoneNumber";

    fn description() -> &'static str {
        "Phone number in international E.164 format, prefixed with '+'"
    }

    fn example() -> Value {
        json!("+123456789")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationRule;

    #[test]
    fn test_valid_numbers() {
        assert!(PhoneNumber::new("+1234567890").is_ok());
        assert!(PhoneNumber::new("+12345").is_ok());
        assert!(PhoneNumber::new("+123456789012345").is_ok());
    }

    #[test]
    fn test_missing_plus() {
        let err = PhoneNumber::new("1234567890").unwrap_err();
        assert_eq!(err.rule(), ValidationRule::PatternMismatch);
        assert_eq!(err.field(), "phoneNumber");
    }

    #[test]
    fn test_leading_zero() {
        assert!(PhoneNumber::new("+0123456789").is_err());
    }

    #[test]
    fn test_digit_count_bounds() {
        assert!(PhoneNumber::new("+1234").is_err());
        assert!(PhoneNumber::new("+1234567890123456").is_err());
    }

    #[test]
    fn test_rejects_separators_and_trailing_newline() {
        assert!(PhoneNumber::new("+1 234 567 890").is_err());
        assert!(PhoneNumber::new("+1234567890\n").is_err());
        assert!(PhoneNumber::new("+123456789a").is_err());
    }

    #[test]
    fn test_display_is_raw_value() {
        let number: PhoneNumber = "+123456789".parse().unwrap();
        assert_eq!(number.to_string(), "+123456789");
        assert_eq!(number.as_str(), "+123456789");
    }
}
