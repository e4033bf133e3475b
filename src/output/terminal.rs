//! Terminal status messages.

use crate::LookupOutcome;
use colored::Colorize;

/// One human readable line describing how the lookup ended.
pub fn status_line(outcome: &LookupOutcome) -> String {
    match outcome {
        LookupOutcome::CsvNotFound(path) => format!(
            "{} CSV file not found: {}",
            "ERROR".on_red(),
            path.display()
        ),
        LookupOutcome::NoRanges { city } => format!(
            "{} No ranges found for city '{}'.",
            "NOTE".on_yellow(),
            city
        ),
        LookupOutcome::Saved { count, path, .. } => format!(
            "{} Saved {} ranges to file: {}",
            "OK".on_green(),
            count,
            path.display().to_string().bold()
        ),
    }
}
