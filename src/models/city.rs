//! City name normalization.

use std::fmt;

/// Normalize a city name for comparison.
///
/// Trims, lower-cases, and folds `’` (U+2019) and `` ` `` to `'`. No other
/// Unicode normalization is done. A missing name normalizes to `""`.
pub fn normalize_city(s: Option<&str>) -> String {
    match s {
        None => String::new(),
        Some(s) => s
            .trim()
            .to_lowercase()
            .replace(['\u{2019}', '`'], "'"),
    }
}

/// Normalized city name used as the equality key between the query and CSV rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CityKey(String);

impl CityKey {
    pub fn new(name: &str) -> CityKey {
        CityKey(normalize_city(Some(name)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Does the raw CSV `field` name this city.
    pub fn matches(&self, field: &str) -> bool {
        normalize_city(Some(field)) == self.0
    }
}

impl fmt::Display for CityKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
