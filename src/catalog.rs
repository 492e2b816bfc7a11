//! Name-addressable catalog of every published data type
//!
//! Lets tooling validate or describe a type chosen at runtime, e.g. from a
//! command-line argument.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::basic::{TimePeriod, XCorrelator};
use crate::communication::{NetworkAccessIdentifier, PhoneNumber};
use crate::device::{Device, DeviceResponse};
use crate::docs::{Documented, TypeDoc};
use crate::error::ErrorInfo;
use crate::geography::{Area, Circle, Latitude, Longitude, Point, PointList, Polygon};
use crate::network::{DeviceIpv4Addr, DeviceIpv6Address, Port, SingleIpv4Addr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    XCorrelator,
    TimePeriod,
    PhoneNumber,
    NetworkAccessIdentifier,
    Port,
    SingleIpv4Addr,
    DeviceIpv4Addr,
    DeviceIpv6Address,
    Latitude,
    Longitude,
    Point,
    PointList,
    Area,
    Circle,
    Polygon,
    Device,
    DeviceResponse,
    ErrorInfo,
}

impl TypeKind {
    pub const ALL: [TypeKind; 18] = [
        TypeKind::XCorrelator,
        TypeKind::TimePeriod,
        TypeKind::PhoneNumber,
        TypeKind::NetworkAccessIdentifier,
        TypeKind::Port,
        TypeKind::SingleIpv4Addr,
        TypeKind::DeviceIpv4Addr,
        TypeKind::DeviceIpv6Address,
        TypeKind::Latitude,
        TypeKind::Longitude,
        TypeKind::Point,
        TypeKind::PointList,
        TypeKind::Area,
        TypeKind::Circle,
        TypeKind::Polygon,
        TypeKind::Device,
        TypeKind::DeviceResponse,
        TypeKind::ErrorInfo,
    ];

    /// Kebab-case name used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::XCorrelator => "x-correlator",
            TypeKind::TimePeriod => "time-period",
            TypeKind::PhoneNumber => "phone-number",
            TypeKind::NetworkAccessIdentifier => "network-access-identifier",
            TypeKind::Port => "port",
            TypeKind::SingleIpv4Addr => "single-ipv4-addr",
            TypeKind::DeviceIpv4Addr => "device-ipv4-addr",
            TypeKind::DeviceIpv6Address => "device-ipv6-address",
            TypeKind::Latitude => "latitude",
            TypeKind::Longitude => "longitude",
            TypeKind::Point => "point",
            TypeKind::PointList => "point-list",
            TypeKind::Area => "area",
            TypeKind::Circle => "circle",
            TypeKind::Polygon => "polygon",
            TypeKind::Device => "device",
            TypeKind::DeviceResponse => "device-response",
            TypeKind::ErrorInfo => "error-info",
        }
    }

    /// Parses `document` as this type and returns its canonical JSON form.
    pub fn validate(&self, document: Value) -> serde_json::Result<Value> {
        match self {
            TypeKind::XCorrelator => canonical::<XCorrelator>(document),
            TypeKind::TimePeriod => canonical::<TimePeriod>(document),
            TypeKind::PhoneNumber => canonical::<PhoneNumber>(document),
            TypeKind::NetworkAccessIdentifier => canonical::<NetworkAccessIdentifier>(document),
            TypeKind::Port => canonical::<Port>(document),
            TypeKind::SingleIpv4Addr => canonical::<SingleIpv4Addr>(document),
            TypeKind::DeviceIpv4Addr => canonical::<DeviceIpv4Addr>(document),
            TypeKind::DeviceIpv6Address => canonical::<DeviceIpv6Address>(document),
            TypeKind::Latitude => canonical::<Latitude>(document),
            TypeKind::Longitude => canonical::<Longitude>(document),
            TypeKind::Point => canonical::<Point>(document),
            TypeKind::PointList => canonical::<PointList>(document),
            TypeKind::Area => canonical::<Area>(document),
            TypeKind::Circle => canonical::<Circle>(document),
            TypeKind::Polygon => canonical::<Polygon>(document),
            TypeKind::Device => canonical::<Device>(document),
            TypeKind::DeviceResponse => canonical::<DeviceResponse>(document),
            TypeKind::ErrorInfo => canonical::<ErrorInfo>(document),
        }
    }

    pub fn doc(&self) -> TypeDoc {
        match self {
            TypeKind::XCorrelator => TypeDoc::of::<XCorrelator>(),
            TypeKind::TimePeriod => TypeDoc::of::<TimePeriod>(),
            TypeKind::PhoneNumber => TypeDoc::of::<PhoneNumber>(),
            TypeKind::NetworkAccessIdentifier => TypeDoc::of::<NetworkAccessIdentifier>(),
            TypeKind::Port => TypeDoc::of::<Port>(),
            TypeKind::SingleIpv4Addr => TypeDoc::of::<SingleIpv4Addr>(),
            TypeKind::DeviceIpv4Addr => TypeDoc::of::<DeviceIpv4Addr>(),
            TypeKind::DeviceIpv6Address => TypeDoc::of::<DeviceIpv6Address>(),
            TypeKind::Latitude => TypeDoc::of::<Latitude>(),
            TypeKind::Longitude => TypeDoc::of::<Longitude>(),
            TypeKind::Point => TypeDoc::of::<Point>(),
            TypeKind::PointList => TypeDoc::of::<PointList>(),
            TypeKind::Area => TypeDoc::of::<Area>(),
            TypeKind::Circle => TypeDoc::of::<Circle>(),
            TypeKind::Polygon => TypeDoc::of::<Polygon>(),
            TypeKind::Device => TypeDoc::of::<Device>(),
            TypeKind::DeviceResponse => TypeDoc::of::<DeviceResponse>(),
            TypeKind::ErrorInfo => TypeDoc::of::<ErrorInfo>(),
        }
    }
}

fn canonical<T: Serialize + DeserializeOwned>(document: Value) -> serde_json::Result<Value> {
    let parsed: T = serde_json::from_value(document)?;
    serde_json::to_value(parsed)
}

impl FromStr for TypeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s).ok_or_else(|| {
            let known: Vec<_> = Self::ALL.iter().map(|k| k.as_str()).collect();
            format!("unknown type '{}', expected one of: {}", s, known.join(", "))
        })
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_example_validates() {
        for kind in TypeKind::ALL {
            let doc = kind.doc();
            assert!(
                kind.validate(doc.example.clone()).is_ok(),
                "example for {} does not validate",
                kind
            );
        }
    }

    #[test]
    fn test_names_parse_back() {
        for kind in TypeKind::ALL {
            assert_eq!(kind.as_str().parse::<TypeKind>().unwrap(), kind);
        }
        assert!("gps".parse::<TypeKind>().unwrap_err().contains("expected one of"));
    }

    #[test]
    fn test_validate_reports_rule() {
        let err = TypeKind::Latitude.validate(serde_json::json!(123.0)).unwrap_err();
        assert!(err.to_string().contains("OUT_OF_RANGE"));
    }
}
