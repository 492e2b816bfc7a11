//! Device as named in API requests

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::identifiers::{Cardinality, DeviceIdentifiers, IdentifierKind};
use super::response::DeviceResponse;
use crate::communication::{NetworkAccessIdentifier, PhoneNumber};
use crate::docs::{Documented, FieldDoc};
use crate::network::{DeviceIpv4Addr, DeviceIpv6Address};
use crate::validation::{ValidationError, ValidationResult};

/// End-user equipment able to connect to a mobile network, such as a
/// smartphone or an IoT sensor.
///
/// At least one identifier must be present. When several are given they
/// must belong to the same device; that is not verified here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DeviceIdentifiers", into = "DeviceIdentifiers")]
pub struct Device {
    identifiers: DeviceIdentifiers,
}

impl Device {
    pub fn new(identifiers: DeviceIdentifiers) -> ValidationResult<Self> {
        identifiers.check(Cardinality::AtLeastOne)?;
        Ok(Self { identifiers })
    }

    pub fn from_phone_number(phone_number: PhoneNumber) -> Self {
        Self {
            identifiers: DeviceIdentifiers::new().with_phone_number(phone_number),
        }
    }

    pub fn phone_number(&self) -> Option<&PhoneNumber> {
        self.identifiers.phone_number.as_ref()
    }

    pub fn network_access_identifier(&self) -> Option<&NetworkAccessIdentifier> {
        self.identifiers.network_access_identifier.as_ref()
    }

    pub fn ipv4_address(&self) -> Option<&DeviceIpv4Addr> {
        self.identifiers.ipv4_address.as_ref()
    }

    pub fn ipv6_address(&self) -> Option<&DeviceIpv6Address> {
        self.identifiers.ipv6_address.as_ref()
    }

    pub fn identifiers(&self) -> &DeviceIdentifiers {
        &self.identifiers
    }

    /// Builds the single-identifier response for the identifier the
    /// provider used to serve the request.
    pub fn respond_with(&self, kind: IdentifierKind) -> ValidationResult<DeviceResponse> {
        if !self.identifiers.has(kind) {
            return Err(ValidationError::missing_field(
                kind.as_str(),
                format!("device has no {} identifier to respond with", kind),
            ));
        }
        DeviceResponse::new(self.identifiers.only(kind))
    }
}

impl TryFrom<DeviceIdentifiers> for Device {
    type Error = ValidationError;

    fn try_from(identifiers: DeviceIdentifiers) -> ValidationResult<Self> {
        Self::new(identifiers)
    }
}

impl From<Device> for DeviceIdentifiers {
    fn from(device: Device) -> Self {
        device.identifiers
    }
}

pub(super) const DEVICE_FIELDS: &[FieldDoc] = &[
    FieldDoc::optional(
        "phoneNumber",
        "Phone number in international E.164 format, prefixed with '+'",
    ),
    FieldDoc::optional(
        "networkAccessIdentifier",
        "Network access identifier in {Local Identifier}@{Domain Identifier} format",
    ),
    FieldDoc::optional("ipv4Address", "Public IPv4 address with private address or public port"),
    FieldDoc::optional(
        "ipv6Address",
        "Observed IPv6 address or an address from the allocated subnet",
    ),
];

impl Documented for Device {
    const NAME: &'static str = "Device";

    fn description() -> &'static str {
        "End-user equipment able to connect to a mobile network; \
         at least one identifier must be provided"
    }

    fn fields() -> &'static [FieldDoc] {
        DEVICE_FIELDS
    }

    fn example() -> Value {
        json!({
            "phoneNumber": "+123456789",
            "ipv4Address": { "publicAddress": "84.125.93.10", "publicPort": 59765 }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{Port, SingleIpv4Addr};

    fn phone() -> PhoneNumber {
        PhoneNumber::new("+1234567890").unwrap()
    }

    fn ipv4() -> DeviceIpv4Addr {
        DeviceIpv4Addr::with_public_port(
            SingleIpv4Addr::parse("192.168.1.1").unwrap(),
            Port::new(8080).unwrap(),
        )
    }

    #[test]
    fn test_requires_an_identifier() {
        assert!(Device::new(DeviceIdentifiers::new()).is_err());
        let device = Device::new(DeviceIdentifiers::new().with_phone_number(phone())).unwrap();
        assert_eq!(device.phone_number(), Some(&phone()));
        assert!(device.ipv4_address().is_none());
    }

    #[test]
    fn test_allows_several_identifiers() {
        let device = Device::new(
            DeviceIdentifiers::new()
                .with_phone_number(phone())
                .with_ipv4_address(ipv4())
                .with_network_access_identifier(NetworkAccessIdentifier::new(
                    "123456789@example.com",
                )),
        )
        .unwrap();
        assert_eq!(device.identifiers().count(), 3);
    }

    #[test]
    fn test_respond_with() {
        let device = Device::new(
            DeviceIdentifiers::new()
                .with_phone_number(phone())
                .with_ipv4_address(ipv4()),
        )
        .unwrap();

        let response = device.respond_with(IdentifierKind::Ipv4Address).unwrap();
        assert_eq!(response.ipv4_address(), Some(&ipv4()));
        assert!(response.phone_number().is_none());

        let err = device.respond_with(IdentifierKind::Ipv6Address).unwrap_err();
        assert_eq!(err.field(), "ipv6Address");
    }

    #[test]
    fn test_empty_object_rejected_on_deserialize() {
        assert!(serde_json::from_value::<Device>(json!({})).is_err());
        let device: Device =
            serde_json::from_value(json!({ "phoneNumber": "+1234567890" })).unwrap();
        assert_eq!(device, Device::from_phone_number(phone()));
    }

    #[test]
    fn test_example_is_valid() {
        assert!(serde_json::from_value::<Device>(Device::example()).is_ok());
    }
}
