//! Lookup configuration.
//!
//! The binary always uses the fixed file names in the working directory.
//! Other paths are only set by callers of the library, such as tests.

use std::path::PathBuf;

/// Default geolocation database file.
pub const DEFAULT_CSV_PATH: &str = "IP2LOCATION-LITE-DB3.CSV";
/// Default file the merged ranges are written to.
pub const DEFAULT_OUTPUT_PATH: &str = "angry_ranges.txt";
pub const DEFAULT_PROMPT: &str = "Enter city (as written in the 6th column):";

// CSV column layout, 0-based.
pub const START_COLUMN: usize = 0;
pub const END_COLUMN: usize = 1;
pub const CITY_COLUMN: usize = 5;
pub const MIN_COLUMNS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub csv_path: PathBuf,
    pub output_path: PathBuf,
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}
