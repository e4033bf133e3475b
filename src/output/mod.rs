//! Output of lookup results.
//!
//! - [`ranges_file`] - Writing merged ranges to the output file
//! - [`terminal`] - Status lines with colors

mod ranges_file;
mod terminal;

pub use ranges_file::{absolute_path, format_ranges, write_ranges};
pub use terminal::status_line;
