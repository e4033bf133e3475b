//! Input handling.
//!
//! - [`csv`] - Streaming the geolocation CSV record by record
//! - [`prompt`] - Reading the city name from the user

mod csv;
mod prompt;

pub use csv::{for_each_record, split_csv_record};
pub use prompt::prompt_city;
