//! Matching CSV rows to a city and collecting their ranges.

use crate::config::{CITY_COLUMN, END_COLUMN, MIN_COLUMNS, START_COLUMN};
use crate::input::for_each_record;
use crate::models::{parse_ip_value, CityKey, IpRange};
use serde::Serialize;
use std::error::Error;
use std::io::BufRead;

/// What a single CSV row contributed to the lookup.
#[derive(Debug, PartialEq, Eq)]
pub enum RowMatch {
    /// Fewer than [`MIN_COLUMNS`] fields.
    Short,
    /// Row belongs to a different city.
    OtherCity,
    /// City matched but start or end was not an IPv4 number.
    Unparseable,
    /// City matched, `swapped` is set when the bounds were reversed in the file.
    Range { range: IpRange, swapped: bool },
}

/// Counters gathered during the scan, logged at the end of a lookup.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct LookupSummary {
    pub rows_read: usize,
    pub short_rows: usize,
    pub matched_rows: usize,
    pub unparseable_rows: usize,
    pub swapped_rows: usize,
}

/// Ranges for one city, unmerged, in file order.
#[derive(Debug, Default)]
pub struct CityRanges {
    pub ranges: Vec<IpRange>,
    pub summary: LookupSummary,
}

/// Classify one CSV record against `city`.
pub fn match_record(record: &[String], city: &CityKey) -> RowMatch {
    if record.len() < MIN_COLUMNS {
        return RowMatch::Short;
    }
    if !city.matches(&record[CITY_COLUMN]) {
        return RowMatch::OtherCity;
    }

    let start = parse_ip_value(Some(&record[START_COLUMN]));
    let end = parse_ip_value(Some(&record[END_COLUMN]));
    match (start, end) {
        (Some(start), Some(end)) => RowMatch::Range {
            range: IpRange::ordered(start, end),
            swapped: start > end,
        },
        _ => RowMatch::Unparseable,
    }
}

/// Scan every CSV record from `reader` once and keep the ranges for `city`.
pub fn collect_city_ranges<R: BufRead>(
    reader: R,
    city: &CityKey,
) -> Result<CityRanges, Box<dyn Error>> {
    let mut found = CityRanges::default();

    let rows_read = for_each_record(reader, |line_no, record| {
        match match_record(record, city) {
            RowMatch::Short => {
                log::trace!("line {line_no}: skipped, {} columns", record.len());
                found.summary.short_rows += 1;
            }
            RowMatch::OtherCity => {}
            RowMatch::Unparseable => {
                log::trace!("line {line_no}: skipped, unparseable range {:?}", &record[..2]);
                found.summary.matched_rows += 1;
                found.summary.unparseable_rows += 1;
            }
            RowMatch::Range { range, swapped } => {
                if swapped {
                    log::debug!("line {line_no}: reversed range swapped to {range}");
                    found.summary.swapped_rows += 1;
                }
                found.summary.matched_rows += 1;
                found.ranges.push(range);
            }
        }
    })?;
    found.summary.rows_read = rows_read;

    log::info!(
        "Scanned {} rows for '{}': {} matched, {} ranges kept",
        found.summary.rows_read,
        city,
        found.summary.matched_rows,
        found.ranges.len()
    );
    Ok(found)
}
