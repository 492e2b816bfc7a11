//! Correlation identifier

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::docs::Documented;
use crate::validation::{check_pattern, CachedPattern, ValidationError, ValidationResult};

/// Up to 256 characters from `[a-zA-Z0-9-_:;./<>{}]`. Empty is allowed.
static CORRELATOR: CachedPattern = CachedPattern::new(r"^[a-zA-Z0-9_:;./<>{}\-]{0,256}$");

/// Correlation id for the different services, carried in the
/// `x-correlator` header.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct XCorrelator(String);

impl XCorrelator {
    pub fn new(value: impl Into<String>) -> ValidationResult<Self> {
        let value = value.into();
        check_pattern("xCorrelator", &CORRELATOR, &value)?;
        Ok(Self(value))
    }

    /// A fresh random (UUIDv4) correlator.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().hyphenated().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for XCorrelator {
    type Error = ValidationError;

    fn try_from(value: String) -> ValidationResult<Self> {
        Self::new(value)
    }
}

impl From<XCorrelator> for String {
    fn from(correlator: XCorrelator) -> Self {
        correlator.0
    }
}

impl FromStr for XCorrelator {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        Self::new(s)
    }
}

impl AsRef<str> for XCorrelator {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for XCorrelator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Documented for XCorrelator {
    const NAME: &'static str = "XCorrelator";

    fn description() -> &'static str {
        "Correlation id for the different services"
    }

    fn example() -> Value {
        json!("b4333c46-49c0-4f62-80d7-f0ef930f1c46")
    }
}
