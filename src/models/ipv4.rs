//! IPv4 number parsing and rendering.
//!
//! Geolocation databases store range bounds either as plain integers
//! (`"16777216"`) or as dotted-quad literals (`"1.0.0.0"`), sometimes wrapped
//! in an extra layer of quotes. [`parse_ip_value`] folds all of these into a
//! single `u32`.

use std::net::Ipv4Addr;
use std::str::FromStr;

/// Strip surrounding whitespace, then double quotes, then single quotes.
fn unquote(value: &str) -> &str {
    value.trim().trim_matches('"').trim_matches('\'')
}

/// Parse a CSV field holding an IPv4 number.
///
/// Returns `None` when the field is missing, empty once unquoted, or neither a
/// base-10 integer (optionally signed) in `u32` range nor a valid dotted-quad
/// address. A `None` is not an error, the caller skips the row.
///
/// # Examples
/// ```
/// use city_ip_ranges::models::parse_ip_value;
/// assert_eq!(parse_ip_value(Some("\"16777216\"")), Some(16777216));
/// assert_eq!(parse_ip_value(Some("1.0.0.0")), Some(16777216));
/// assert_eq!(parse_ip_value(Some("n/a")), None);
/// ```
pub fn parse_ip_value(value: Option<&str>) -> Option<u32> {
    let v = unquote(value?);
    if v.is_empty() {
        return None;
    }

    // Signed parse so "-0" is 0, negatives then fail the u32 conversion.
    match i64::from_str(v.trim()) {
        Ok(n) => u32::try_from(n).ok(),
        Err(_) => Ipv4Addr::from_str(v).ok().map(u32::from),
    }
}

/// Render an IPv4 number in dotted-quad notation.
pub fn ip_to_dotted(n: u32) -> String {
    Ipv4Addr::from(n).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_parse_plain_integer() {
        assert_eq!(parse_ip_value(Some("0")), Some(0));
        assert_eq!(parse_ip_value(Some("16777216")), Some(16777216));
        assert_eq!(parse_ip_value(Some("4294967295")), Some(u32::MAX));
    }

    #[test]
    fn test_parse_signed_forms() {
        assert_eq!(parse_ip_value(Some("-0")), Some(0));
        assert_eq!(parse_ip_value(Some("\"-0\"")), Some(0));
        assert_eq!(parse_ip_value(Some("+5")), Some(5));
        assert_eq!(parse_ip_value(Some("-5")), None);
        assert_eq!(parse_ip_value(Some("1_000")), None, "Digit separators are not accepted");
        assert_eq!(parse_ip_value(Some("99999999999999999999")), None);
    }

    #[test]
    fn test_parse_quoted() {
        assert_eq!(parse_ip_value(Some("\"16777471\"")), Some(16777471));
        assert_eq!(parse_ip_value(Some("'16777471'")), Some(16777471));
        assert_eq!(parse_ip_value(Some("  \"1.0.0.255\" ")), Some(16777471));
        assert_eq!(parse_ip_value(Some("\"' 42 '\"")), Some(42));
    }

    #[test]
    fn test_parse_dotted_quad() {
        assert_eq!(parse_ip_value(Some("1.0.0.0")), Some(16777216));
        assert_eq!(parse_ip_value(Some("255.255.255.255")), Some(u32::MAX));
        assert_eq!(parse_ip_value(Some("10.0.1.2")), Some(0x0A00_0102));
    }

    #[test]
    fn test_parse_absent() {
        assert_eq!(parse_ip_value(None), None);
        assert_eq!(parse_ip_value(Some("")), None);
        assert_eq!(parse_ip_value(Some("   ")), None);
        assert_eq!(parse_ip_value(Some("\"\"")), None);
        assert_eq!(parse_ip_value(Some("''")), None);
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_ip_value(Some("ip_from")), None);
        assert_eq!(parse_ip_value(Some("-1")), None);
        assert_eq!(parse_ip_value(Some("4294967296")), None, "Above u32 range");
        assert_eq!(parse_ip_value(Some("1.2.3")), None);
        assert_eq!(parse_ip_value(Some("1.2.3.256")), None);
        assert_eq!(parse_ip_value(Some("::1")), None, "IPv6 is not supported");
        assert_eq!(parse_ip_value(Some("12ab")), None);
    }

    #[test]
    fn test_ip_to_dotted() {
        assert_eq!(ip_to_dotted(0), "0.0.0.0");
        assert_eq!(ip_to_dotted(16777216), "1.0.0.0");
        assert_eq!(ip_to_dotted(u32::MAX), "255.255.255.255");
    }

    #[quickcheck]
    fn integer_text_parses_to_itself(n: u32) -> bool {
        parse_ip_value(Some(&n.to_string())) == Some(n)
    }

    #[quickcheck]
    fn dotted_text_parses_to_address_value(n: u32) -> bool {
        let dotted = Ipv4Addr::from(n).to_string();
        parse_ip_value(Some(&dotted)) == Some(n)
    }

    #[quickcheck]
    fn letters_never_parse(s: String) -> bool {
        let s: String = s.chars().filter(|c| c.is_ascii_alphabetic()).collect();
        parse_ip_value(Some(&s)).is_none()
    }
}
