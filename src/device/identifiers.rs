//! The device identifier set and its cardinality rules

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::communication::{NetworkAccessIdentifier, PhoneNumber};
use crate::network::{DeviceIpv4Addr, DeviceIpv6Address};
use crate::validation::{ValidationError, ValidationResult};

/// One of the four device identifier fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    PhoneNumber,
    NetworkAccessIdentifier,
    Ipv4Address,
    Ipv6Address,
}

impl IdentifierKind {
    pub const ALL: [IdentifierKind; 4] = [
        IdentifierKind::PhoneNumber,
        IdentifierKind::NetworkAccessIdentifier,
        IdentifierKind::Ipv4Address,
        IdentifierKind::Ipv6Address,
    ];

    /// Returns the wire field name
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierKind::PhoneNumber => "phoneNumber",
            IdentifierKind::NetworkAccessIdentifier => "networkAccessIdentifier",
            IdentifierKind::Ipv4Address => "ipv4Address",
            IdentifierKind::Ipv6Address => "ipv6Address",
        }
    }
}

impl FromStr for IdentifierKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ValidationError::unknown_value("identifier", s))
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How many identifiers a device value must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Requests: one or more
    AtLeastOne,
    /// Responses: exactly one
    ExactlyOne,
}

/// The optional identifiers of a device, before any cardinality rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceIdentifiers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<PhoneNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_access_identifier: Option<NetworkAccessIdentifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv4_address: Option<DeviceIpv4Addr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv6_address: Option<DeviceIpv6Address>,
}

impl DeviceIdentifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_phone_number(mut self, phone_number: PhoneNumber) -> Self {
        self.phone_number = Some(phone_number);
        self
    }

    pub fn with_network_access_identifier(mut self, nai: NetworkAccessIdentifier) -> Self {
        self.network_access_identifier = Some(nai);
        self
    }

    pub fn with_ipv4_address(mut self, ipv4_address: DeviceIpv4Addr) -> Self {
        self.ipv4_address = Some(ipv4_address);
        self
    }

    pub fn with_ipv6_address(mut self, ipv6_address: DeviceIpv6Address) -> Self {
        self.ipv6_address = Some(ipv6_address);
        self
    }

    pub fn has(&self, kind: IdentifierKind) -> bool {
        match kind {
            IdentifierKind::PhoneNumber => self.phone_number.is_some(),
            IdentifierKind::NetworkAccessIdentifier => self.network_access_identifier.is_some(),
            IdentifierKind::Ipv4Address => self.ipv4_address.is_some(),
            IdentifierKind::Ipv6Address => self.ipv6_address.is_some(),
        }
    }

    /// Populated identifiers, in wire field order
    pub fn kinds(&self) -> Vec<IdentifierKind> {
        IdentifierKind::ALL
            .into_iter()
            .filter(|kind| self.has(*kind))
            .collect()
    }

    pub fn count(&self) -> usize {
        IdentifierKind::ALL.iter().filter(|kind| self.has(**kind)).count()
    }

    /// Keeps only the identifier of the given kind.
    pub fn only(&self, kind: IdentifierKind) -> Self {
        let mut selected = Self::default();
        match kind {
            IdentifierKind::PhoneNumber => selected.phone_number = self.phone_number.clone(),
            IdentifierKind::NetworkAccessIdentifier => {
                selected.network_access_identifier = self.network_access_identifier.clone()
            }
            IdentifierKind::Ipv4Address => selected.ipv4_address = self.ipv4_address.clone(),
            IdentifierKind::Ipv6Address => selected.ipv6_address = self.ipv6_address,
        }
        selected
    }

    /// Enforces a cardinality rule.
    ///
    /// The at-least-one rule always runs first, so an empty set fails with
    /// the same error under either cardinality. Only then is the
    /// exactly-one rule checked.
    pub fn check(&self, cardinality: Cardinality) -> ValidationResult<()> {
        let count = self.count();

        if count == 0 {
            return Err(ValidationError::cardinality(
                "device",
                "At least one device identifier must be provided",
            ));
        }

        if cardinality == Cardinality::ExactlyOne && count > 1 {
            let provided: Vec<_> = self.kinds().iter().map(|k| k.as_str()).collect();
            return Err(ValidationError::cardinality(
                "device",
                format!(
                    "Exactly one device identifier must be provided in response, got {} ({})",
                    count,
                    provided.join(", ")
                ),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationRule;

    fn phone() -> PhoneNumber {
        PhoneNumber::new("+123456789").unwrap()
    }

    fn ipv6() -> DeviceIpv6Address {
        DeviceIpv6Address::parse("2001:db8::1").unwrap()
    }

    #[test]
    fn test_empty_fails_both_rules_the_same_way() {
        let empty = DeviceIdentifiers::new();
        let at_least = empty.check(Cardinality::AtLeastOne).unwrap_err();
        let exactly = empty.check(Cardinality::ExactlyOne).unwrap_err();
        assert_eq!(at_least, exactly);
        assert_eq!(at_least.rule(), ValidationRule::Cardinality);
        assert!(at_least.reason().starts_with("At least one"));
    }

    #[test]
    fn test_exactly_one_rejects_two() {
        let ids = DeviceIdentifiers::new().with_phone_number(phone()).with_ipv6_address(ipv6());
        assert!(ids.check(Cardinality::AtLeastOne).is_ok());

        let err = ids.check(Cardinality::ExactlyOne).unwrap_err();
        assert!(err.reason().starts_with("Exactly one"));
        assert!(err.reason().contains("phoneNumber, ipv6Address"));
    }

    #[test]
    fn test_kinds_in_field_order() {
        let ids = DeviceIdentifiers::new()
            .with_ipv6_address(ipv6())
            .with_network_access_identifier(NetworkAccessIdentifier::new("a@b"));
        assert_eq!(
            ids.kinds(),
            vec![IdentifierKind::NetworkAccessIdentifier, IdentifierKind::Ipv6Address]
        );
        assert_eq!(ids.count(), 2);
    }

    #[test]
    fn test_only_keeps_one() {
        let ids = DeviceIdentifiers::new().with_phone_number(phone()).with_ipv6_address(ipv6());
        let only = ids.only(IdentifierKind::Ipv6Address);
        assert_eq!(only.kinds(), vec![IdentifierKind::Ipv6Address]);
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("ipv4Address".parse::<IdentifierKind>().unwrap(), IdentifierKind::Ipv4Address);
        assert!("imei".parse::<IdentifierKind>().is_err());
    }
}
