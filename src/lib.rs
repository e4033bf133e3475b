//! Look up all IPv4 ranges of a city in an IP2Location style CSV database,
//! merge them, and write them as `startIP-endIP` lines.

pub mod config;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

use config::Config;
use models::CityKey;
use processing::{collect_city_ranges, merge_ranges, LookupSummary};
use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

/// How a lookup ended. Only I/O failures are errors.
#[derive(Debug, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The CSV database does not exist (absolute path).
    CsvNotFound(PathBuf),
    /// No row matched the city, no output was written.
    NoRanges { city: String },
    /// `count` merged ranges were written to `path`.
    Saved {
        count: usize,
        path: PathBuf,
        summary: LookupSummary,
    },
}

/// Check the CSV exists, ask for a city on `input`, then run [`lookup_city`].
pub fn run_lookup<R, W>(config: &Config, input: R, out: W) -> Result<LookupOutcome, Box<dyn Error>>
where
    R: BufRead,
    W: Write,
{
    log::info!("#Start run_lookup() csv={}", config.csv_path.display());
    if !config.csv_path.exists() {
        return Ok(csv_not_found(config));
    }

    let city = input::prompt_city(input, out, &config.prompt)?;
    lookup_city(config, &city)
}

/// Collect, merge and write the ranges of `city`.
pub fn lookup_city(config: &Config, city: &str) -> Result<LookupOutcome, Box<dyn Error>> {
    let key = CityKey::new(city);

    let file = match File::open(&config.csv_path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(csv_not_found(config)),
        Err(e) => {
            return Err(format!("Error opening CSV {}: {e}", config.csv_path.display()).into())
        }
    };
    let found = collect_city_ranges(BufReader::new(file), &key)?;

    if found.ranges.is_empty() {
        log::warn!("No ranges found for city '{key}'");
        return Ok(LookupOutcome::NoRanges {
            city: city.to_string(),
        });
    }

    let found_count = found.ranges.len();
    let merged = merge_ranges(found.ranges);
    log::info!(
        "Merged {} ranges -> {} ranges covering {} addresses",
        found_count,
        merged.len(),
        merged.address_count()
    );
    log::debug!("Lookup summary {}", serde_json::to_string(&found.summary)?);
    log::debug!("Merged ranges {}", serde_json::to_string(&merged[..])?);

    let path = output::write_ranges(&config.output_path, &merged)?;
    Ok(LookupOutcome::Saved {
        count: merged.len(),
        path,
        summary: found.summary,
    })
}

fn csv_not_found(config: &Config) -> LookupOutcome {
    let path = output::absolute_path(&config.csv_path);
    log::warn!("CSV file not found: {}", path.display());
    LookupOutcome::CsvNotFound(path)
}
