use chrono::{Datelike, NaiveDateTime, Timelike};

/// Layouts seen in the `Start Time` / `End Time` columns.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a naive dataset timestamp such as `2017-06-23 15:09:32`.
///
/// Returns `None` for empty strings or unrecognised layouts.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Calendar fields derived once from a trip's start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedTime {
    /// 1-based month.
    pub month: u32,
    /// 0 = Monday .. 6 = Sunday.
    pub day_of_week: u32,
    /// 0..=23.
    pub start_hour: u32,
}

impl DerivedTime {
    pub fn from_timestamp(ts: &NaiveDateTime) -> Self {
        Self {
            month: ts.month(),
            day_of_week: ts.weekday().num_days_from_monday(),
            start_hour: ts.hour(),
        }
    }
}
