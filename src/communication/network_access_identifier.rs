//! Network access identifier

use std::fmt;
use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::docs::Documented;

/// A public identifier addressing a subscription in a mobile network.
///
/// This is the 3GPP GPSI in External Identifier form
/// (`{Local Identifier}@{Domain Identifier}`). No format is enforced: any
/// string, including the empty string, is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkAccessIdentifier(String);

impl NetworkAccessIdentifier {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for NetworkAccessIdentifier {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for NetworkAccessIdentifier {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl FromStr for NetworkAccessIdentifier {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Infallible> {
        Ok(Self::new(s))
    }
}

impl AsRef<str> for NetworkAccessIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NetworkAccessIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Documented for NetworkAccessIdentifier {
    const NAME: &'static str = "NetworkAccessIdentifier";

    fn description() -> &'static str {
        "A public identifier addressing a subscription in a mobile network, \
         in External Identifier format {Local Identifier}@{Domain Identifier}"
    }

    fn example() -> Value {
        json!("123456789@example.com")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_string_accepted() {
        for raw in ["123456789@example.com", "", "not-an-address", "@@@"] {
            let nai = NetworkAccessIdentifier::new(raw);
            assert_eq!(nai.as_str(), raw);
        }
    }

    #[test]
    fn test_serializes_as_bare_string() {
        let nai = NetworkAccessIdentifier::from("user@example.com");
        assert_eq!(serde_json::to_value(&nai).unwrap(), json!("user@example.com"));
    }
}
