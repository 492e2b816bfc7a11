//! End-user device identification
//!
//! A device is named by up to four optional identifiers. Requests must
//! carry at least one; responses echo back exactly one. Both rules are
//! checked by the shared `DeviceIdentifiers::check`.

mod identifiers;
mod request;
mod response;

pub use identifiers::{Cardinality, DeviceIdentifiers, IdentifierKind};
pub use request::Device;
pub use response::DeviceResponse;
