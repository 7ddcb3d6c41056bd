//! The four descriptive reports computed over a filtered trip table.
//!
//! Each function is independent and only borrows the trips. An empty slice
//! never panics: the time, station and duration reports return `None`, and
//! the user report returns empty counts.

use bikeshare_core::models::{DatasetCapabilities, TripRecord};

use crate::aggregator::{mode, value_counts, ValueCount};

/// Label used for trips whose user type cell is empty.
pub const UNKNOWN_USER_TYPE: &str = "Unknown";

/// Joins start and end station into a route key.
pub const ROUTE_SEPARATOR: &str = " - ";

// ── Time of travel ────────────────────────────────────────────────────────────

/// Most frequent month, weekday and start hour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    /// 1-based month number.
    pub popular_month: ValueCount<u32>,
    /// Monday-first day index.
    pub popular_day: ValueCount<u32>,
    pub popular_hour: ValueCount<u32>,
}

pub fn time_stats(trips: &[TripRecord]) -> Option<TimeStats> {
    Some(TimeStats {
        popular_month: mode(trips.iter().map(|t| t.month))?,
        popular_day: mode(trips.iter().map(|t| t.day_of_week))?,
        popular_hour: mode(trips.iter().map(|t| t.start_hour))?,
    })
}

// ── Stations ──────────────────────────────────────────────────────────────────

/// Most frequent start station, end station and start-to-end route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub popular_start: ValueCount<String>,
    pub popular_end: ValueCount<String>,
    /// Route formatted as `"<start> - <end>"`.
    pub popular_route: ValueCount<String>,
}

pub fn station_stats(trips: &[TripRecord]) -> Option<StationStats> {
    let popular_start = mode(trips.iter().map(|t| t.start_station.as_str()))?;
    let popular_end = mode(trips.iter().map(|t| t.end_station.as_str()))?;
    let popular_route = mode(trips.iter().map(route_key))?;

    Some(StationStats {
        popular_start: popular_start.map(str::to_string),
        popular_end: popular_end.map(str::to_string),
        popular_route,
    })
}

fn route_key(trip: &TripRecord) -> String {
    format!("{}{}{}", trip.start_station, ROUTE_SEPARATOR, trip.end_station)
}

// ── Trip duration ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub total_seconds: f64,
    pub mean_seconds: f64,
}

/// Total and mean trip duration; `None` when there are no trips.
pub fn duration_stats(trips: &[TripRecord]) -> Option<DurationStats> {
    if trips.is_empty() {
        return None;
    }
    let total_seconds: f64 = trips.iter().map(|t| t.trip_duration).sum();
    Some(DurationStats {
        total_seconds,
        mean_seconds: total_seconds / trips.len() as f64,
    })
}

// ── Users ─────────────────────────────────────────────────────────────────────

/// Outcome for a demographic column that only some datasets carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Demographic<T> {
    /// The dataset has no such column.
    NotAvailable,
    /// The column exists but no selected trip has a value.
    NoData,
    Present(T),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i64,
    pub most_recent: i64,
    pub most_common: ValueCount<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// Every trip is counted exactly once; empty cells fall under
    /// [`UNKNOWN_USER_TYPE`].
    pub user_types: Vec<ValueCount<String>>,
    pub gender: Demographic<Vec<ValueCount<String>>>,
    pub birth_year: Demographic<BirthYearStats>,
    pub trip_count: usize,
}

pub fn user_stats(trips: &[TripRecord], capabilities: DatasetCapabilities) -> UserStats {
    let user_types = value_counts(
        trips
            .iter()
            .map(|t| t.user_type.as_deref().unwrap_or(UNKNOWN_USER_TYPE)),
    )
    .into_iter()
    .map(|vc| vc.map(str::to_string))
    .collect();

    let gender = if capabilities.has_gender {
        let counts: Vec<ValueCount<String>> =
            value_counts(trips.iter().filter_map(|t| t.gender.as_deref()))
                .into_iter()
                .map(|vc| vc.map(str::to_string))
                .collect();
        if counts.is_empty() {
            Demographic::NoData
        } else {
            Demographic::Present(counts)
        }
    } else {
        Demographic::NotAvailable
    };

    let birth_year = if capabilities.has_birth_year {
        birth_year_stats(trips).map_or(Demographic::NoData, Demographic::Present)
    } else {
        Demographic::NotAvailable
    };

    UserStats {
        user_types,
        gender,
        birth_year,
        trip_count: trips.len(),
    }
}

fn birth_year_stats(trips: &[TripRecord]) -> Option<BirthYearStats> {
    // Birth years are stored as floats in the source files but are whole years.
    let years: Vec<i64> = trips
        .iter()
        .filter_map(|t| t.birth_year)
        .map(|y| y as i64)
        .collect();

    Some(BirthYearStats {
        earliest: *years.iter().min()?,
        most_recent: *years.iter().max()?,
        most_common: mode(years.iter().copied())?,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
