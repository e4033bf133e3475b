//! Closed IPv4 address range.

use super::ip_to_dotted;
use serde::Serialize;
use std::error::Error;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Closed interval `[start, end]` of IPv4 numbers, `start <= end`.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct IpRange {
    /// First address in the range.
    pub start: u32,
    /// Last address in the range (inclusive).
    pub end: u32,
}

impl IpRange {
    /// Create a range, rejecting `start > end`.
    pub fn new(start: u32, end: u32) -> Result<IpRange, Box<dyn Error>> {
        if start > end {
            return Err(format!("Range start {start} is above end {end}").into());
        }
        Ok(IpRange { start, end })
    }

    /// Create a range from two bounds in either order.
    pub fn ordered(a: u32, b: u32) -> IpRange {
        IpRange {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Number of addresses covered.
    pub fn address_count(&self) -> u64 {
        u64::from(self.end) - u64::from(self.start) + 1
    }

    /// True when `next` (starting at or after `self.start`) overlaps or is
    /// directly adjacent to `self`.
    pub fn touches(&self, next: &IpRange) -> bool {
        u64::from(next.start) <= u64::from(self.end) + 1
    }
}

/// `startIP-endIP`, the line format of the ranges file.
impl std::fmt::Display for IpRange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}-{}", ip_to_dotted(self.start), ip_to_dotted(self.end))
    }
}

impl FromStr for IpRange {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (lo, hi) = s
            .split_once('-')
            .ok_or_else(|| format!("Invalid range, missing '-': {s}"))?;
        let lo: Ipv4Addr = lo
            .trim()
            .parse()
            .map_err(|_| format!("Invalid address {lo}"))?;
        let hi: Ipv4Addr = hi
            .trim()
            .parse()
            .map_err(|_| format!("Invalid address {hi}"))?;
        IpRange::new(u32::from(lo), u32::from(hi))
    }
}

impl Serialize for IpRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
