//! TCP/UDP port number

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::docs::Documented;
use crate::validation::{check_range, ValidationError, ValidationResult};

/// TCP or UDP port number in `0..=65535`.
///
/// Port 0 is a valid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u16")]
pub struct Port(u16);

impl Port {
    pub const MIN: i64 = 0;
    pub const MAX: i64 = 65535;

    pub fn new(value: i64) -> ValidationResult<Self> {
        check_range("port", value, Self::MIN, Self::MAX)?;
        // Bounds checked above.
        Ok(Self(value as u16))
    }

    pub fn value(&self) -> u16 {
        self.0
    }
}

impl From<u16> for Port {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl TryFrom<i64> for Port {
    type Error = ValidationError;

    fn try_from(value: i64) -> ValidationResult<Self> {
        Self::new(value)
    }
}

impl From<Port> for u16 {
    fn from(port: Port) -> Self {
        port.0
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Documented for Port {
    const NAME: &'static str = "Port";

    fn description() -> &'static str {
        "TCP or UDP port number"
    }

    fn example() -> Value {
        json!(59765)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(Port::new(0).unwrap().value(), 0);
        assert_eq!(Port::new(65535).unwrap().value(), 65535);
        assert!(Port::new(-1).is_err());
        assert!(Port::new(65536).is_err());
        assert!(Port::new(i64::MAX).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let port: Port = serde_json::from_value(json!(8080)).unwrap();
        assert_eq!(port.value(), 8080);
        assert!(serde_json::from_value::<Port>(json!(70000)).is_err());
        assert!(serde_json::from_value::<Port>(json!(-5)).is_err());
    }
}
