//! Ranges file writer.

use crate::processing::RangeSet;
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Render ranges as `startIP-endIP` lines, each ending in `\n`.
pub fn format_ranges(ranges: &RangeSet) -> String {
    ranges.iter().map(|r| format!("{r}\n")).collect()
}

/// Write ranges to `path`, replacing any existing file.
///
/// Returns the absolute path of the written file.
pub fn write_ranges(path: &Path, ranges: &RangeSet) -> Result<PathBuf, Box<dyn Error>> {
    let file = File::create(path)
        .map_err(|e| format!("Error creating output file {}: {e}", path.display()))?;
    let mut out = BufWriter::new(file);
    out.write_all(format_ranges(ranges).as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| format!("Error writing output file {}: {e}", path.display()))?;

    let written = absolute_path(path);
    log::info!("Wrote {} ranges to {}", ranges.len(), written.display());
    Ok(written)
}

/// Best effort absolute form of `path` for status messages.
pub fn absolute_path(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IpRange;
    use crate::processing::merge_ranges;

    fn sample() -> RangeSet {
        merge_ranges(vec![
            IpRange::ordered(16777216, 16777471),
            IpRange::ordered(16778240, 16779263),
        ])
    }

    #[test]
    fn test_format_ranges() {
        assert_eq!(
            format_ranges(&sample()),
            "1.0.0.0-1.0.0.255\n1.0.4.0-1.0.7.255\n"
        );
        assert_eq!(format_ranges(&RangeSet::default()), "");
    }

    #[test]
    fn test_write_ranges_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranges.txt");
        std::fs::write(&path, "stale content that is longer than the new one\n".repeat(5)).unwrap();

        let written = write_ranges(&path, &sample()).unwrap();
        assert!(written.is_absolute());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            format_ranges(&sample()),
            "File content should be exactly the formatted ranges"
        );
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "1.0.0.0-1.0.0.255\n1.0.4.0-1.0.7.255\n"
        );
    }

    #[test]
    fn test_write_ranges_bad_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("ranges.txt");
        let err = write_ranges(&path, &sample()).unwrap_err();
        assert!(err.to_string().starts_with("Error creating output file"));
    }

    #[test]
    fn test_absolute_path_missing_file() {
        let p = absolute_path(Path::new("no_such_file.csv"));
        assert!(p.is_absolute());
        assert!(p.ends_with("no_such_file.csv"));
    }
}
