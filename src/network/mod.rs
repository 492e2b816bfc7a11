//! Network-level device identifiers: ports and IP addresses.

mod ipv4;
mod ipv6;
mod port;

pub use ipv4::{DeviceIpv4Addr, SingleIpv4Addr};
pub use ipv6::DeviceIpv6Address;
pub use port::Port;
