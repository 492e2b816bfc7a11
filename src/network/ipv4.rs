//! IPv4 device addressing
//!
//! A device behind NAT is identified by its public (observed) address plus
//! either its private (allocated) address or its public port.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::port::Port;
use crate::docs::{Documented, FieldDoc};
use crate::validation::{ValidationError, ValidationResult};

/// A single IPv4 address in dotted-quad form, with no subnet mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SingleIpv4Addr(Ipv4Addr);

impl SingleIpv4Addr {
    /// Parses a dotted quad. Octets with leading zeros and CIDR suffixes are
    /// rejected.
    pub fn parse(value: &str) -> ValidationResult<Self> {
        value
            .parse::<Ipv4Addr>()
            .map(Self)
            .map_err(|_| ValidationError::invalid_address("ipv4Address", "IPv4", value))
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.0
    }
}

impl From<Ipv4Addr> for SingleIpv4Addr {
    fn from(addr: Ipv4Addr) -> Self {
        Self(addr)
    }
}

impl TryFrom<String> for SingleIpv4Addr {
    type Error = ValidationError;

    fn try_from(value: String) -> ValidationResult<Self> {
        Self::parse(&value)
    }
}

impl From<SingleIpv4Addr> for String {
    fn from(addr: SingleIpv4Addr) -> Self {
        addr.0.to_string()
    }
}

impl FromStr for SingleIpv4Addr {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for SingleIpv4Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Documented for SingleIpv4Addr {
    const NAME: &'static str = "SingleIpv4Addr";

    fn description() -> &'static str {
        "A single IPv4 address with no subnet mask"
    }

    fn example() -> Value {
        json!("84.125.93.10")
    }
}

/// IPv4 identification of a device.
///
/// `public_address` is always required, together with at least one of
/// `private_address` or `public_port`. When NAT is not in use the same
/// address is given as both public and private.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "DeviceIpv4AddrFields")]
pub struct DeviceIpv4Addr {
    public_address: SingleIpv4Addr,
    #[serde(skip_serializing_if = "Option::is_none")]
    private_address: Option<SingleIpv4Addr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    public_port: Option<Port>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeviceIpv4AddrFields {
    public_address: SingleIpv4Addr,
    #[serde(default)]
    private_address: Option<SingleIpv4Addr>,
    #[serde(default)]
    public_port: Option<Port>,
}

impl TryFrom<DeviceIpv4AddrFields> for DeviceIpv4Addr {
    type Error = ValidationError;

    fn try_from(fields: DeviceIpv4AddrFields) -> ValidationResult<Self> {
        Self::new(fields.public_address, fields.private_address, fields.public_port)
    }
}

impl DeviceIpv4Addr {
    pub fn new(
        public_address: SingleIpv4Addr,
        private_address: Option<SingleIpv4Addr>,
        public_port: Option<Port>,
    ) -> ValidationResult<Self> {
        if private_address.is_none() && public_port.is_none() {
            return Err(ValidationError::missing_field(
                "ipv4Address",
                "Either privateAddress or publicPort must be specified along with publicAddress",
            ));
        }

        Ok(Self {
            public_address,
            private_address,
            public_port,
        })
    }

    /// Public address and port, as observed by the application server.
    pub fn with_public_port(public_address: SingleIpv4Addr, public_port: Port) -> Self {
        Self {
            public_address,
            private_address: None,
            public_port: Some(public_port),
        }
    }

    /// Public and private addresses in use by the device.
    pub fn with_private_address(
        public_address: SingleIpv4Addr,
        private_address: SingleIpv4Addr,
    ) -> Self {
        Self {
            public_address,
            private_address: Some(private_address),
            public_port: None,
        }
    }

    /// Builds from raw values, validating each field before the
    /// cross-field rule.
    pub fn parse(
        public_address: &str,
        private_address: Option<&str>,
        public_port: Option<i64>,
    ) -> ValidationResult<Self> {
        let public = SingleIpv4Addr::parse(public_address).map_err(|e| e.at("publicAddress"))?;
        let private = private_address
            .map(|raw| SingleIpv4Addr::parse(raw).map_err(|e| e.at("privateAddress")))
            .transpose()?;
        let port = public_port
            .map(|raw| Port::new(raw).map_err(|e| e.at("publicPort")))
            .transpose()?;

        Self::new(public, private, port)
    }

    pub fn public_address(&self) -> SingleIpv4Addr {
        self.public_address
    }

    pub fn private_address(&self) -> Option<SingleIpv4Addr> {
        self.private_address
    }

    pub fn public_port(&self) -> Option<Port> {
        self.public_port
    }
}

impl Documented for DeviceIpv4Addr {
    const NAME: &'static str = "DeviceIpv4Addr";

    fn description() -> &'static str {
        "The device should be identified by either the public (observed) IP address and port \
         as seen by the application server, or the private (local) and any public (observed) \
         IP addresses in use by the device"
    }

    fn fields() -> &'static [FieldDoc] {
        const FIELDS: &[FieldDoc] = &[
            FieldDoc::required("publicAddress", "A single IPv4 address with no subnet mask"),
            FieldDoc::optional("privateAddress", "A single IPv4 address with no subnet mask"),
            FieldDoc::optional("publicPort", "TCP or UDP port number"),
        ];
        FIELDS
    }

    fn example() -> Value {
        json!({
            "publicAddress": "84.125.93.10",
            "publicPort": 59765
        })
    }
}
