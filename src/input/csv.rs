//! Line oriented CSV reading.
//!
//! Every physical line is one record. Fields may be wrapped in double quotes,
//! in which case commas inside them do not split and `""` is a literal quote.

use regex::Regex;
use std::error::Error;
use std::io::BufRead;
use std::sync::OnceLock;

/// Regex matching the field at the start of the remaining line.
static FIELD_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_field_regex() -> &'static Regex {
    FIELD_REGEX.get_or_init(|| {
        Regex::new(r#"^(?:"((?:[^"]|"")*)"|([^,]*))"#).expect("Invalid Regex")
    })
}

/// Split one CSV line into its fields, unquoting quoted fields.
///
/// Text between a closing quote and the next comma is kept after the
/// unquoted content, so `"a"b` reads as `ab`.
pub fn split_csv_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut rest = line;

    loop {
        let (mut field, consumed) = match get_field_regex().captures(rest) {
            Some(c) => {
                let field = match (c.get(1), c.get(2)) {
                    (Some(quoted), _) => quoted.as_str().replace("\"\"", "\""),
                    (None, Some(plain)) => plain.as_str().to_string(),
                    (None, None) => String::new(),
                };
                (field, c.get(0).map_or(0, |m| m.end()))
            }
            None => (String::new(), 0),
        };

        rest = &rest[consumed..];
        let (tail, next) = match rest.find(',') {
            Some(i) => (&rest[..i], Some(&rest[i + 1..])),
            None => (rest, None),
        };
        field.push_str(tail);
        fields.push(field);

        match next {
            Some(n) => rest = n,
            None => break,
        }
    }
    fields
}

/// Read `reader` line by line and hand every non-blank record to `f`.
///
/// `f` gets the 1-based line number and the split fields. Invalid UTF-8 is
/// replaced rather than aborting the scan. Returns the number of records seen.
pub fn for_each_record<R, F>(mut reader: R, mut f: F) -> Result<usize, Box<dyn Error>>
where
    R: BufRead,
    F: FnMut(usize, &[String]),
{
    let mut buf = Vec::new();
    let mut line_no = 0;
    let mut records = 0;

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| format!("Error reading CSV line {}: {e}", line_no + 1))?;
        if n == 0 {
            break;
        }
        line_no += 1;

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        let line = if line_no == 1 {
            line.trim_start_matches('\u{feff}')
        } else {
            line
        };
        if line.trim().is_empty() {
            continue;
        }

        records += 1;
        f(line_no, &split_csv_record(line));
    }

    log::debug!("Read {records} CSV records from {line_no} lines");
    Ok(records)
}
