//! Device as echoed back in API responses

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::identifiers::{Cardinality, DeviceIdentifiers, IdentifierKind};
use super::request::DEVICE_FIELDS;
use crate::communication::{NetworkAccessIdentifier, PhoneNumber};
use crate::docs::{Documented, FieldDoc};
use crate::network::{DeviceIpv4Addr, DeviceIpv6Address};
use crate::validation::{ValidationError, ValidationResult};

/// The device identifier a response refers to.
///
/// Returned only when the consumer named the device in the request. If the
/// request carried several identifiers, the provider returns the single
/// one it used, even if the identifiers do not match the same device.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DeviceIdentifiers", into = "DeviceIdentifiers")]
pub struct DeviceResponse {
    identifiers: DeviceIdentifiers,
}

impl DeviceResponse {
    /// Fails with the at-least-one error for an empty set and the
    /// exactly-one error for two or more identifiers.
    pub fn new(identifiers: DeviceIdentifiers) -> ValidationResult<Self> {
        identifiers.check(Cardinality::ExactlyOne)?;
        Ok(Self { identifiers })
    }

    /// Which identifier this response carries
    pub fn kind(&self) -> Option<IdentifierKind> {
        self.identifiers.kinds().into_iter().next()
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
}

impl TryFrom<DeviceIdentifiers> for DeviceResponse {
    type Error = ValidationError;

    fn try_from(identifiers: DeviceIdentifiers) -> ValidationResult<Self> {
        Self::new(identifiers)
    }
}

impl From<DeviceResponse> for DeviceIdentifiers {
    fn from(response: DeviceResponse) -> Self {
        response.identifiers
    }
}

impl Documented for DeviceResponse {
    const NAME: &'static str = "DeviceResponse";

    fn description() -> &'static str {
        "An identifier for the end-user equipment that the response refers to; \
         exactly one identifier is present"
    }

    fn fields() -> &'static [FieldDoc] {
        DEVICE_FIELDS
    }

    fn example() -> Value {
        json!({ "phoneNumber": "+123456789" })
    }
}
