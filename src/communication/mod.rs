//! Subscription identifiers: E.164 phone numbers and network access
//! identifiers.

mod network_access_identifier;
mod phone_number;

pub use network_access_identifier::NetworkAccessIdentifier;
pub use phone_number::PhoneNumber;
