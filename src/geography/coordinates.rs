//! Latitude and longitude in decimal degrees

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::docs::Documented;
use crate::validation::{check_range, ValidationError, ValidationResult};

/// Latitude component of a location, in `[-90, 90]` degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Latitude(f64);

impl Latitude {
    pub const MIN: f64 = -90.0;
    pub const MAX: f64 = 90.0;

    pub fn new(value: f64) -> ValidationResult<Self> {
        check_range("latitude", value, Self::MIN, Self::MAX)?;
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Longitude component of a location, in `[-180, 180]` degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Longitude(f64);

impl Longitude {
    pub const MIN: f64 = -180.0;
    pub const MAX: f64 = 180.0;

    pub fn new(value: f64) -> ValidationResult<Self> {
        check_range("longitude", value, Self::MIN, Self::MAX)?;
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

macro_rules! degree_conversions {
    ($ty:ident) => {
        impl TryFrom<f64> for $ty {
            type Error = ValidationError;

            fn try_from(value: f64) -> ValidationResult<Self> {
                Self::new(value)
            }
        }

        impl From<$ty> for f64 {
            fn from(value: $ty) -> Self {
                value.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

degree_conversions!(Latitude);
degree_conversions!(Longitude);

impl Documented for Latitude {
    const NAME: &'static str = "Latitude";

    fn description() -> &'static str {
        "Latitude component of a location"
    }

    fn example() -> Value {
        json!(50.735851)
    }
}

impl Documented for Longitude {
    const NAME: &'static str = "Longitude";

    fn description() -> &'static str {
        "Longitude component of location"
    }

    fn example() -> Value {
        json!(7.10066)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_bounds() {
        assert!(Latitude::new(-90.0).is_ok());
        assert!(Latitude::new(90.0).is_ok());
        assert!(Latitude::new(0.0).is_ok());
        assert!(Latitude::new(90.000001).is_err());
        assert!(Latitude::new(-90.5).is_err());
    }

    #[test]
    fn test_longitude_bounds() {
        assert!(Longitude::new(-180.0).is_ok());
        assert!(Longitude::new(180.0).is_ok());
        assert!(Longitude::new(180.1).is_err());
        assert!(Longitude::new(-181.0).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(Latitude::new(f64::NAN).is_err());
        assert!(Longitude::new(f64::INFINITY).is_err());
        assert!(Longitude::new(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_error_names_component() {
        assert_eq!(Latitude::new(100.0).unwrap_err().field(), "latitude");
        assert_eq!(Longitude::new(200.0).unwrap_err().field(), "longitude");
    }
}
