//! CSV dataset loading for Bikeshare Explorer.
//!
//! Each supported city ships as one CSV file. Rows are deserialised into
//! [`TripRecord`]s with their month, weekday and hour derived up front.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use bikeshare_core::error::{BikeshareError, Result};
use bikeshare_core::models::{City, DatasetCapabilities, FilterSelection, TripColumn, TripRecord};
use bikeshare_core::time_utils::{parse_timestamp, DerivedTime};
use serde::Deserialize;
use tracing::{debug, info};

use crate::table::TripTable;

/// Columns every dataset must provide.
const REQUIRED_COLUMNS: [TripColumn; 4] = [
    TripColumn::StartTime,
    TripColumn::StartStation,
    TripColumn::EndStation,
    TripColumn::TripDuration,
];

/// One CSV row as it appears on disk. Empty cells become `None`.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

impl RawTrip {
    fn into_record(self, row_index: usize) -> Result<TripRecord> {
        let start_time =
            parse_timestamp(&self.start_time).ok_or_else(|| BikeshareError::TimestampParse {
                row: row_index,
                value: self.start_time.clone(),
            })?;
        let derived = DerivedTime::from_timestamp(&start_time);

        Ok(TripRecord {
            row_index,
            start_time,
            end_time: self.end_time.as_deref().and_then(parse_timestamp),
            trip_duration: self.trip_duration,
            start_station: self.start_station,
            end_station: self.end_station,
            user_type: non_blank(self.user_type),
            gender: non_blank(self.gender),
            birth_year: self.birth_year.filter(|y| y.is_finite()),
            month: derived.month,
            day_of_week: derived.day_of_week,
            start_hour: derived.start_hour,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Resolves cities to files under a data directory and loads them.
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    data_dir: PathBuf,
}

impl DatasetLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Full path of the CSV file backing `city`.
    pub fn path_for(&self, city: City) -> PathBuf {
        self.data_dir.join(city.file_name())
    }

    /// Load every trip for `city` without filtering.
    pub fn load_unfiltered(&self, city: City) -> Result<TripTable> {
        read_trip_table(&self.path_for(city), city)
    }

    /// Load the city named in `selection` and apply its month/day filter.
    pub fn load(&self, selection: &FilterSelection) -> Result<TripTable> {
        let table = self.load_unfiltered(selection.city)?;
        let before = table.len();
        let filtered = table.into_filtered(selection.month, selection.day);
        debug!(
            "Filter month={} day={} kept {} of {} trips",
            selection.month,
            selection.day,
            filtered.len(),
            before
        );
        Ok(filtered)
    }
}

/// Read the CSV file at `path` as the dataset for `city`.
pub fn read_trip_table(path: &Path, city: City) -> Result<TripTable> {
    let file = File::open(path).map_err(|source| BikeshareError::DatasetRead {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_trip_table(file, path, city)?;
    info!("Loaded {} trips from {}", table.len(), path.display());
    Ok(table)
}

/// Parse CSV content from any reader. `path` is only used in error messages.
pub fn parse_trip_table<R: Read>(input: R, path: &Path, city: City) -> Result<TripTable> {
    let csv_err = |source: csv::Error| BikeshareError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers().map_err(csv_err)?.clone();
    let columns: Vec<TripColumn> = headers.iter().filter_map(TripColumn::from_header).collect();

    if let Some(missing) = REQUIRED_COLUMNS.iter().find(|c| !columns.contains(c)) {
        return Err(BikeshareError::MissingColumn {
            path: path.to_path_buf(),
            column: missing.header().to_string(),
        });
    }

    let capabilities = DatasetCapabilities {
        has_gender: columns.contains(&TripColumn::Gender),
        has_birth_year: columns.contains(&TripColumn::BirthYear),
    };

    let mut trips = Vec::new();
    for (row_index, row) in reader.deserialize::<RawTrip>().enumerate() {
        let raw = row.map_err(csv_err)?;
        trips.push(raw.into_record(row_index)?);
    }

    Ok(TripTable::new(city, capabilities, columns, trips))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
