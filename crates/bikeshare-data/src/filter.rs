//! Month and day-of-week filtering over derived trip fields.

use bikeshare_core::models::{DayFilter, MonthFilter, TripRecord};

/// Whether `trip` satisfies both the month and the day restriction.
pub fn matches(trip: &TripRecord, month: MonthFilter, day: DayFilter) -> bool {
    let month_ok = month.month_number().map_or(true, |m| trip.month == m);
    let day_ok = day.day_index().map_or(true, |d| trip.day_of_week == d);
    month_ok && day_ok
}

/// Trips matching `month` and `day`, in their original order.
pub fn filter_trips(trips: &[TripRecord], month: MonthFilter, day: DayFilter) -> Vec<TripRecord> {
    trips
        .iter()
        .filter(|t| matches(t, month, day))
        .cloned()
        .collect()
}
