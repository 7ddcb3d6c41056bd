//! The in-memory trip table shared by the reporters and the raw-data browser.

use bikeshare_core::models::{
    City, DatasetCapabilities, DayFilter, MonthFilter, TripColumn, TripRecord,
};

use crate::filter;

/// Trips loaded for one city, optionally narrowed by month and day.
///
/// Row order always follows the source file.
#[derive(Debug, Clone)]
pub struct TripTable {
    pub city: City,
    /// Optional columns present in the source file.
    pub capabilities: DatasetCapabilities,
    /// Recognised source columns in file order.
    pub columns: Vec<TripColumn>,
    pub trips: Vec<TripRecord>,
}

impl TripTable {
    pub fn new(
        city: City,
        capabilities: DatasetCapabilities,
        columns: Vec<TripColumn>,
        trips: Vec<TripRecord>,
    ) -> Self {
        Self {
            city,
            capabilities,
            columns,
            trips,
        }
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// A copy of this table holding only trips that match `month` and `day`.
    pub fn filtered(&self, month: MonthFilter, day: DayFilter) -> TripTable {
        TripTable {
            city: self.city,
            capabilities: self.capabilities,
            columns: self.columns.clone(),
            trips: filter::filter_trips(&self.trips, month, day),
        }
    }

    /// Consume the table, dropping trips that do not match `month` and `day`.
    pub fn into_filtered(mut self, month: MonthFilter, day: DayFilter) -> TripTable {
        self.trips.retain(|t| filter::matches(t, month, day));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::parse_trip_table;
    use bikeshare_core::models::{SUPPORTED_MONTHS, WEEKDAYS};
    use chrono::{Month, Weekday};
    use std::path::Path;

    const CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1,2017-01-02 08:10:00,2017-01-02 08:15:00,300,Clark St & Lake St,Wells St & Elm St,Subscriber,Male,1990.0
2,2017-06-05 08:30:00,2017-06-05 08:32:00,120,Clark St & Lake St,State St & Pearson St,Subscriber,Female,1985.0
3,2017-06-23 15:09:32,2017-06-23 15:14:53,321,State St & Pearson St,Wells St & Elm St,Customer,,
";

    fn table() -> TripTable {
        parse_trip_table(CSV.as_bytes(), Path::new("chicago.csv"), City::Chicago).unwrap()
    }

    #[test]
    fn test_filtered_keeps_schema_and_leaves_source_intact() {
        let t = table();
        let june = t.filtered(MonthFilter::Only(Month::June), DayFilter::All);

        assert_eq!(june.len(), 2);
        assert_eq!(june.city, t.city);
        assert_eq!(june.capabilities, t.capabilities);
        assert_eq!(june.columns, t.columns);
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_filtered_is_idempotent() {
        let t = table();
        let months = std::iter::once(MonthFilter::All)
            .chain(SUPPORTED_MONTHS.into_iter().map(MonthFilter::Only));
        for month in months {
            let days = std::iter::once(DayFilter::All)
                .chain(WEEKDAYS.into_iter().map(DayFilter::Only));
            for day in days {
                let once = t.filtered(month, day);
                let twice = once.filtered(month, day);
                assert_eq!(twice.trips, once.trips, "month={month} day={day}");
                assert_eq!(twice.capabilities, once.capabilities);
                assert_eq!(twice.columns, once.columns);
            }
        }
    }

    #[test]
    fn test_into_filtered_matches_filtered() {
        let t = table();
        let borrowed = t.filtered(MonthFilter::All, DayFilter::Only(Weekday::Mon));
        let owned = t.clone().into_filtered(MonthFilter::All, DayFilter::Only(Weekday::Mon));
        assert_eq!(borrowed.trips, owned.trips);
        assert!(owned.trips.iter().all(|r| r.day_of_week == 0));
    }
}
