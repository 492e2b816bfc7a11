//! IPv6 device address

use std::fmt;
use std::net::Ipv6Addr;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::docs::Documented;
use crate::validation::{ValidationError, ValidationResult};

/// The observed IPv6 address of a device, or any single address from the
/// subnet allocated to it (e.g. `::0` added to the /64 prefix).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeviceIpv6Address(Ipv6Addr);

impl DeviceIpv6Address {
    pub fn parse(value: &str) -> ValidationResult<Self> {
        value
            .parse::<Ipv6Addr>()
            .map(Self)
            .map_err(|_| ValidationError::invalid_address("ipv6Address", "IPv6", value))
    }

    pub fn addr(&self) -> Ipv6Addr {
        self.0
    }
}

impl From<Ipv6Addr> for DeviceIpv6Address {
    fn from(addr: Ipv6Addr) -> Self {
        Self(addr)
    }
}

impl TryFrom<String> for DeviceIpv6Address {
    type Error = ValidationError;

    fn try_from(value: String) -> ValidationResult<Self> {
        Self::parse(&value)
    }
}

impl From<DeviceIpv6Address> for String {
    fn from(addr: DeviceIpv6Address) -> Self {
        addr.0.to_string()
    }
}

impl FromStr for DeviceIpv6Address {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for DeviceIpv6Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Documented for DeviceIpv6Address {
    const NAME: &'static str = "DeviceIpv6Address";

    fn description() -> &'static str {
        "The device should be identified by the observed IPv6 address, or by any single \
         IPv6 address from within the subnet allocated to the device"
    }

    fn example() -> Value {
        json!("2001:db8:85a3:8d3:1319:8a2e:370:7344")
    }
}
