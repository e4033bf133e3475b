//! Range merging.
//!
//! Collapses overlapping and adjacent ranges into the smallest sorted set of
//! ranges covering the same addresses.

use crate::models::IpRange;
use itertools::Itertools;
use std::ops::Deref;

/// Sorted ranges where no two ranges overlap or touch.
///
/// Only built by [`merge_ranges`], so `ranges[i].end + 1 < ranges[i + 1].start`
/// always holds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RangeSet {
    ranges: Vec<IpRange>,
}

impl RangeSet {
    /// Total addresses covered by all ranges.
    pub fn address_count(&self) -> u64 {
        self.ranges.iter().map(IpRange::address_count).sum()
    }
}

impl Deref for RangeSet {
    type Target = [IpRange];

    fn deref(&self) -> &[IpRange] {
        &self.ranges
    }
}

/// Merge ranges by sweeping them in start order.
///
/// # Examples
/// ```
/// use city_ip_ranges::models::IpRange;
/// use city_ip_ranges::processing::merge_ranges;
/// let merged = merge_ranges(vec![IpRange::ordered(21, 30), IpRange::ordered(10, 20)]);
/// assert_eq!(&merged[..], &[IpRange::ordered(10, 30)]);
/// ```
pub fn merge_ranges<I>(ranges: I) -> RangeSet
where
    I: IntoIterator<Item = IpRange>,
{
    let mut sorted = ranges.into_iter().sorted_unstable_by_key(|r| r.start);

    let mut merged = Vec::new();
    let Some(mut current) = sorted.next() else {
        return RangeSet { ranges: merged };
    };

    for r in sorted {
        if current.touches(&r) {
            current.end = current.end.max(r.end);
        } else {
            merged.push(current);
            current = r;
        }
    }
    merged.push(current);

    RangeSet { ranges: merged }
}

/// Check that `ranges` is sorted with no overlapping or adjacent neighbours.
pub fn is_merged(ranges: &[IpRange]) -> bool {
    ranges
        .iter()
        .tuple_windows()
        .all(|(a, b)| u64::from(a.end) + 1 < u64::from(b.start))
}
