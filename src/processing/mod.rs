//! Range lookup processing logic.
//!
//! This module contains the business logic applied to the CSV data:
//! - [`lookup`] - Matching rows to a city and collecting their ranges
//! - [`merge`] - Merging overlapping and adjacent ranges

mod lookup;
mod merge;

// Re-export public functions
pub use lookup::{collect_city_ranges, match_record, CityRanges, LookupSummary, RowMatch};
pub use merge::{is_merged, merge_ranges, RangeSet};
