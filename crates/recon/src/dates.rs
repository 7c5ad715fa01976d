//! Date sanitation and lenient parsing shared by every date-bearing field.
//!
//! Scraped roster cells carry non-breaking spaces and "Never"; agenda CSVs
//! use US `MM/DD/YYYY`. Anything unparseable is treated as absent.

use chrono::{DateTime, NaiveDate};

// Two-digit years first: "%Y" would accept "26" as year 26.
const FORMATS: &[&str] = &[
    "%m/%d/%y",
    "%m/%d/%Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%d %B %Y",
];

/// Replace Unicode space separators (NBSP, narrow NBSP, ...) with ASCII
/// spaces, collapse whitespace runs and trim. `split_whitespace` covers the
/// Unicode White_Space set, NBSP included.
pub fn sanitize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse a date-bearing string. Empty, `Never` and unrecognized shapes give `None`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let clean = sanitize(raw);
    if clean.is_empty() || clean.eq_ignore_ascii_case("never") {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(&clean) {
        return Some(dt.date_naive());
    }

    // "01/15/2026 12:00 PM" and similar: the date is the first token
    let first = clean.split(' ').next().unwrap_or("");
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&clean, fmt).ok())
        .or_else(|| {
            FORMATS[..4]
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(first, fmt).ok())
        })
}

/// Serde adapter for optional date fields: lenient on the way in, ISO on the way out.
pub mod lenient {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(super::parse_date))
    }
}
