//! Device Invariant Tests
//!
//! - A device request carries at least one identifier
//! - A device response carries exactly one identifier
//! - Each identifier is validated on its own before the set is checked
//! - Deserialization enforces the same rules as construction

use camara_common::device::{Cardinality, DeviceIdentifiers};
use camara_common::{
    Device, DeviceIpv4Addr, DeviceIpv6Address, DeviceResponse, IdentifierKind,
    NetworkAccessIdentifier,
    PhoneNumber, ValidationRule,
};
use serde_json::json;

// =============================================================================
// Helper Functions
// =============================================================================

fn phone() -> PhoneNumber {
    PhoneNumber::new("+123456789").unwrap()
}

fn full_identifiers() -> DeviceIdentifiers {
    DeviceIdentifiers::new()
        .with_phone_number(phone())
        .with_network_access_identifier(NetworkAccessIdentifier::new("123456789@example.com"))
        .with_ipv4_address(DeviceIpv4Addr::parse("84.125.93.10", None, Some(59765)).unwrap())
        .with_ipv6_address(
            DeviceIpv6Address::parse("2001:db8:85a3:8d3:1319:8a2e:370:7344").unwrap(),
        )
}

// =============================================================================
// Request Cardinality
// =============================================================================

#[test]
fn test_device_with_no_identifier_rejected() {
    let err = Device::new(DeviceIdentifiers::new()).unwrap_err();
    assert_eq!(err.rule(), ValidationRule::Cardinality);
    assert!(err.reason().contains("At least one device identifier must be provided"));
}

#[test]
fn test_device_accepts_any_non_empty_subset() {
    let all = full_identifiers();
    for kind in IdentifierKind::ALL {
        let device = Device::new(all.only(kind)).unwrap();
        assert_eq!(device.identifiers().count(), 1);
        assert!(device.identifiers().has(kind));
    }

    let device = Device::new(all).unwrap();
    assert_eq!(device.identifiers().count(), 4);
}

#[test]
fn test_empty_json_object_is_not_a_device() {
    let result: Result<Device, _> = serde_json::from_value(json!({}));
    let err = result.unwrap_err().to_string();
    assert!(err.contains("At least one device identifier must be provided"));
}

#[test]
fn test_invalid_member_rejected_before_cardinality() {
    let result: Result<Device, _> = serde_json::from_value(json!({ "phoneNumber": "123" }));
    let err = result.unwrap_err().to_string();
    assert!(err.contains("PATTERN_MISMATCH"));
}

// =============================================================================
// Response Cardinality
// =============================================================================

#[test]
fn test_response_requires_exactly_one() {
    let two = DeviceIdentifiers::new()
        .with_phone_number(phone())
        .with_network_access_identifier(NetworkAccessIdentifier::new("a@b"));

    let err = DeviceResponse::new(two).unwrap_err();
    assert_eq!(err.rule(), ValidationRule::Cardinality);
    assert!(err.reason().contains("Exactly one device identifier must be provided in response"));

    let err = DeviceResponse::new(DeviceIdentifiers::new()).unwrap_err();
    assert!(err.reason().contains("At least one"));
}

#[test]
fn test_response_with_single_identifier() {
    let response =
        DeviceResponse::new(DeviceIdentifiers::new().with_phone_number(phone())).unwrap();
    assert_eq!(response.kind(), Some(IdentifierKind::PhoneNumber));
    assert_eq!(response.phone_number().map(|p| p.as_str()), Some("+123456789"));
}

#[test]
fn test_respond_with_selects_one_identifier() {
    let device = Device::new(full_identifiers()).unwrap();

    for kind in IdentifierKind::ALL {
        let response = device.respond_with(kind).unwrap();
        assert_eq!(response.kind(), Some(kind));
    }

    let phone_only = Device::from_phone_number(phone());
    let err = phone_only.respond_with(IdentifierKind::Ipv6Address).unwrap_err();
    assert_eq!(err.rule(), ValidationRule::MissingField);
}

#[test]
fn test_cardinality_check_is_deterministic() {
    let ids = full_identifiers();
    for _ in 0..50 {
        assert!(ids.check(Cardinality::AtLeastOne).is_ok());
        assert!(ids.check(Cardinality::ExactlyOne).is_err());
    }
}

// =============================================================================
// Nested Address Rules
// =============================================================================

#[test]
fn test_ipv4_needs_private_address_or_port() {
    let err = DeviceIpv4Addr::parse("84.125.93.10", None, None).unwrap_err();
    assert_eq!(err.rule(), ValidationRule::MissingField);
    assert_eq!(err.field(), "ipv4Address");

    assert!(DeviceIpv4Addr::parse("84.125.93.10", Some("192.168.1.10"), None).is_ok());
    assert!(DeviceIpv4Addr::parse("84.125.93.10", None, Some(0)).is_ok());
}

#[test]
fn test_device_json_with_nested_ipv4() {
    let device: Device = serde_json::from_value(json!({
        "ipv4Address": { "publicAddress": "84.125.93.10", "publicPort": 59765 }
    }))
    .unwrap();
    let ipv4 = device.ipv4_address().unwrap();
    assert_eq!(ipv4.public_port().map(|p| p.value()), Some(59765));
    assert!(ipv4.private_address().is_none());

    let result: Result<Device, _> = serde_json::from_value(json!({
        "ipv4Address": { "publicAddress": "84.125.93.10" }
    }));
    assert!(result.is_err());
}
