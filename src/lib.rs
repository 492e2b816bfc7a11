//! camara-common - validated CAMARA common data types
//!
//! Shared building blocks for CAMARA network APIs: device identifiers,
//! network addresses, geographic areas, correlators and time periods,
//! plus the standard error envelope and its factory.
//!
//! Every type validates on construction and on deserialization, so a
//! value that exists is a value that conforms.

pub mod basic;
pub mod catalog;
pub mod cli;
pub mod communication;
pub mod device;
pub mod docs;
pub mod error;
pub mod geography;
pub mod network;
pub mod observability;
pub mod validation;

pub use basic::{TimePeriod, XCorrelator};
pub use communication::{NetworkAccessIdentifier, PhoneNumber};
pub use device::{Device, DeviceResponse, IdentifierKind};
pub use error::{ErrorCode, ErrorFactory, ErrorInfo, ErrorStatus};
pub use geography::{Area, AreaType, Circle, Latitude, Longitude, Point, PointList, Polygon};
pub use network::{DeviceIpv4Addr, DeviceIpv6Address, Port, SingleIpv4Addr};
pub use validation::{ValidationError, ValidationResult, ValidationRule};
