use std::fmt;
use std::str::FromStr;

use chrono::{Month, NaiveDateTime, Weekday};

use crate::error::BikeshareError;

// ── City ──────────────────────────────────────────────────────────────────────

/// One of the three cities a dataset ships for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// Every supported city, in prompt order.
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lowercase name accepted at the prompt.
    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// CSV file backing this city, relative to the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        };
        f.write_str(label)
    }
}

impl FromStr for City {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        City::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| BikeshareError::InvalidCity(s.trim().to_string()))
    }
}

// ── Month / day vocabularies ──────────────────────────────────────────────────

/// Months covered by the datasets, January through June.
pub const SUPPORTED_MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

/// Weekdays in Monday-first order; the position is the derived day index.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English name of a weekday, e.g. `"Monday"`.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Name for a derived 1-based month number; `None` outside 1..=12.
pub fn month_label(month: u32) -> Option<&'static str> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
}

/// Name for a derived Monday-first day index; `None` outside 0..=6.
pub fn day_label(day_of_week: u32) -> Option<&'static str> {
    WEEKDAYS
        .get(day_of_week as usize)
        .map(|d| weekday_name(*d))
}

// ── MonthFilter ───────────────────────────────────────────────────────────────

/// Month restriction chosen at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl MonthFilter {
    /// 1-based month number to match against, or `None` for `All`.
    pub fn month_number(self) -> Option<u32> {
        match self {
            MonthFilter::All => None,
            MonthFilter::Only(m) => Some(m.number_from_month()),
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Only(m) => f.write_str(m.name()),
        }
    }
}

impl FromStr for MonthFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        if wanted == "all" {
            return Ok(MonthFilter::All);
        }
        SUPPORTED_MONTHS
            .into_iter()
            .find(|m| m.name().to_lowercase() == wanted)
            .map(MonthFilter::Only)
            .ok_or_else(|| BikeshareError::InvalidMonth(s.trim().to_string()))
    }
}

// ── DayFilter ─────────────────────────────────────────────────────────────────

/// Day-of-week restriction chosen at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    /// Monday-first day index to match against, or `None` for `All`.
    pub fn day_index(self) -> Option<u32> {
        match self {
            DayFilter::All => None,
            DayFilter::Only(d) => Some(d.num_days_from_monday()),
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("all"),
            DayFilter::Only(d) => f.write_str(weekday_name(*d)),
        }
    }
}

impl FromStr for DayFilter {
    type Err = BikeshareError;

    // chrono's own Weekday parser accepts "mon"; only full names are valid here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        if wanted == "all" {
            return Ok(DayFilter::All);
        }
        WEEKDAYS
            .into_iter()
            .find(|d| weekday_name(*d).to_lowercase() == wanted)
            .map(DayFilter::Only)
            .ok_or_else(|| BikeshareError::InvalidDay(s.trim().to_string()))
    }
}

// ── FilterSelection ───────────────────────────────────────────────────────────

/// The complete answer set gathered by the input collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSelection {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }
}

// ── TripRecord ────────────────────────────────────────────────────────────────

/// A single trip read from a city dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// 0-based position of the row in the source file.
    pub row_index: usize,
    /// When the trip started.
    pub start_time: NaiveDateTime,
    /// When the trip ended, if the dataset carries it.
    pub end_time: Option<NaiveDateTime>,
    /// Trip length in seconds.
    pub trip_duration: f64,
    pub start_station: String,
    pub end_station: String,
    /// `Subscriber`, `Customer`, ... Missing in a handful of rows.
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,
    /// Derived 1-based month of `start_time`.
    pub month: u32,
    /// Derived day of week of `start_time`, 0 = Monday.
    pub day_of_week: u32,
    /// Derived hour of `start_time`, 0..=23.
    pub start_hour: u32,
}

/// Optional columns whose presence varies between datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DatasetCapabilities {
    pub has_gender: bool,
    pub has_birth_year: bool,
}

/// The source columns understood by the reader, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripColumn {
    StartTime,
    EndTime,
    TripDuration,
    StartStation,
    EndStation,
    UserType,
    Gender,
    BirthYear,
}

impl TripColumn {
    pub const ALL: [TripColumn; 8] = [
        TripColumn::StartTime,
        TripColumn::EndTime,
        TripColumn::TripDuration,
        TripColumn::StartStation,
        TripColumn::EndStation,
        TripColumn::UserType,
        TripColumn::Gender,
        TripColumn::BirthYear,
    ];

    /// Header name as it appears in the CSV files.
    pub fn header(self) -> &'static str {
        match self {
            TripColumn::StartTime => "Start Time",
            TripColumn::EndTime => "End Time",
            TripColumn::TripDuration => "Trip Duration",
            TripColumn::StartStation => "Start Station",
            TripColumn::EndStation => "End Station",
            TripColumn::UserType => "User Type",
            TripColumn::Gender => "Gender",
            TripColumn::BirthYear => "Birth Year",
        }
    }

    pub fn from_header(header: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.header() == header.trim())
    }
}
