//! Domain models for city range lookup.
//!
//! This module contains the core data structures used throughout the application:
//! - [`parse_ip_value`] - IPv4 number parsing from CSV fields
//! - [`IpRange`] - closed range of IPv4 addresses
//! - [`CityKey`] - normalized city name

mod city;
mod ipv4;
mod range;

// Re-export public types
pub use city::{normalize_city, CityKey};
pub use ipv4::{ip_to_dotted, parse_ip_value};
pub use range::IpRange;
