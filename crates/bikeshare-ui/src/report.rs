//! Plain-text rendering of the four statistics reports.

use std::io::{self, Write};
use std::time::Duration;

use bikeshare_core::formatting::{divider, format_duration, format_elapsed, format_number};
use bikeshare_core::models::{day_label, month_label};
use bikeshare_data::aggregator::ValueCount;
use bikeshare_data::analysis::{
    BirthYearStats, Demographic, DurationStats, StationStats, TimeStats, UserStats,
};
use unicode_width::UnicodeWidthStr;

/// Printed by every report when the filtered table has no rows.
pub const NO_DATA: &str = "No data available for the selected filters.";

/// The report blocks printed after each load, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSection {
    TimeOfTravel,
    Stations,
    TripDuration,
    Users,
}

impl ReportSection {
    pub const ALL: [ReportSection; 4] = [
        ReportSection::TimeOfTravel,
        ReportSection::Stations,
        ReportSection::TripDuration,
        ReportSection::Users,
    ];

    pub fn heading(self) -> &'static str {
        match self {
            ReportSection::TimeOfTravel => "Calculating The Most Frequent Times of Travel...",
            ReportSection::Stations => "Calculating The Most Popular Stations and Trip...",
            ReportSection::TripDuration => "Calculating Trip Duration...",
            ReportSection::Users => "Calculating User Stats...",
        }
    }
}

pub fn write_section_header<W: Write>(out: &mut W, section: ReportSection) -> io::Result<()> {
    writeln!(out, "\n{}\n", section.heading())
}

/// Elapsed time and the closing divider.
pub fn write_section_footer<W: Write>(out: &mut W, elapsed: Duration) -> io::Result<()> {
    writeln!(out, "\nThis took {} seconds.", format_elapsed(elapsed))?;
    writeln!(out, "{}", divider())
}

fn write_popular<W: Write>(out: &mut W, what: &str, value: &str, count: usize) -> io::Result<()> {
    writeln!(
        out,
        "The most common {what} is {value}, The count of occurrences is {count} times"
    )
}

pub fn write_time_stats<W: Write>(out: &mut W, stats: Option<&TimeStats>) -> io::Result<()> {
    let Some(stats) = stats else {
        return writeln!(out, "{NO_DATA}");
    };

    let month = month_label(stats.popular_month.value)
        .map(str::to_string)
        .unwrap_or_else(|| stats.popular_month.value.to_string());
    let day = day_label(stats.popular_day.value)
        .map(str::to_string)
        .unwrap_or_else(|| stats.popular_day.value.to_string());

    write_popular(out, "month", &month, stats.popular_month.count)?;
    write_popular(out, "day", &day, stats.popular_day.count)?;
    write_popular(
        out,
        "start hour",
        &stats.popular_hour.value.to_string(),
        stats.popular_hour.count,
    )
}

pub fn write_station_stats<W: Write>(out: &mut W, stats: Option<&StationStats>) -> io::Result<()> {
    let Some(stats) = stats else {
        return writeln!(out, "{NO_DATA}");
    };

    write_popular(
        out,
        "used start station",
        &stats.popular_start.value,
        stats.popular_start.count,
    )?;
    write_popular(
        out,
        "used end station",
        &stats.popular_end.value,
        stats.popular_end.count,
    )?;
    writeln!(
        out,
        "The most frequent combination is {}, The count of occurrences is {} times",
        stats.popular_route.value, stats.popular_route.count
    )
}

/// Total and mean seconds, shown rounded to two decimals with a d/h/m/s gloss.
pub fn write_duration_stats<W: Write>(
    out: &mut W,
    stats: Option<&DurationStats>,
) -> io::Result<()> {
    let Some(stats) = stats else {
        return writeln!(out, "{NO_DATA}");
    };

    writeln!(
        out,
        "The total travel time is: {} Sec. ({})",
        format_number(stats.total_seconds, 2),
        format_duration(stats.total_seconds)
    )?;
    writeln!(
        out,
        "The mean travel time is: {} Sec. ({})",
        format_number(stats.mean_seconds, 2),
        format_duration(stats.mean_seconds)
    )
}

pub fn write_user_stats<W: Write>(out: &mut W, stats: &UserStats) -> io::Result<()> {
    if stats.trip_count == 0 {
        return writeln!(out, "{NO_DATA}");
    }

    writeln!(out, "The counts of user types:")?;
    write_counts(out, &stats.user_types)?;

    match &stats.gender {
        Demographic::Present(counts) => {
            writeln!(out, "\nThe counts of gender:")?;
            write_counts(out, counts)?;
        }
        Demographic::NoData => writeln!(out, "\nNo gender data for the selected filters.")?,
        Demographic::NotAvailable => {
            writeln!(out, "\nNo gender information available for this city!")?
        }
    }

    match &stats.birth_year {
        Demographic::Present(years) => write_birth_years(out, years),
        Demographic::NoData => writeln!(out, "\nNo year of birth data for the selected filters."),
        Demographic::NotAvailable => {
            writeln!(out, "\nNo year of birth information available for this city!")
        }
    }
}

fn write_birth_years<W: Write>(out: &mut W, years: &BirthYearStats) -> io::Result<()> {
    writeln!(out, "\nThe year of birth:")?;
    writeln!(out, "Earliest: {}", years.earliest)?;
    writeln!(out, "Most recent: {}", years.most_recent)?;
    writeln!(out, "Most common: {}", years.most_common.value)
}

/// One `name  count` line per entry, names padded to a common display width.
fn write_counts<W: Write>(out: &mut W, counts: &[ValueCount<String>]) -> io::Result<()> {
    let width = counts
        .iter()
        .map(|c| UnicodeWidthStr::width(c.value.as_str()))
        .max()
        .unwrap_or(0);
    for c in counts {
        let pad = width - UnicodeWidthStr::width(c.value.as_str());
        writeln!(out, "{}{}    {}", c.value, " ".repeat(pad), c.count)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn vc(value: &str, count: usize) -> ValueCount<String> {
        ValueCount {
            value: value.to_string(),
            count,
        }
    }

    #[test]
    fn test_time_stats_rendering_uses_names() {
        let stats = TimeStats {
            popular_month: ValueCount { value: 6, count: 12 },
            popular_day: ValueCount { value: 4, count: 7 },
            popular_hour: ValueCount { value: 17, count: 5 },
        };
        let out = render(|w| write_time_stats(w, Some(&stats)));
        assert!(out.contains("The most common month is June, The count of occurrences is 12 times"));
        assert!(out.contains("The most common day is Friday, The count of occurrences is 7 times"));
        assert!(out.contains("The most common start hour is 17, The count of occurrences is 5 times"));
    }

    #[test]
    fn test_station_stats_rendering() {
        let stats = StationStats {
            popular_start: vc("Streeter Dr & Grand Ave", 6),
            popular_end: vc("Lake Shore Dr & Monroe St", 5),
            popular_route: vc("Lake Shore Dr & Monroe St - Streeter Dr & Grand Ave", 3),
        };
        let out = render(|w| write_station_stats(w, Some(&stats)));
        assert!(out.contains("start station is Streeter Dr & Grand Ave"));
        assert!(out.contains("end station is Lake Shore Dr & Monroe St"));
        assert!(out.contains(
            "The most frequent combination is Lake Shore Dr & Monroe St - Streeter Dr & Grand Ave, The count of occurrences is 3 times"
        ));
    }

    #[test]
    fn test_duration_rendering() {
        let stats = DurationStats {
            total_seconds: 3741.0,
            mean_seconds: 623.5,
        };
        let out = render(|w| write_duration_stats(w, Some(&stats)));
        assert!(out.contains("The total travel time is: 3,741.00 Sec. (1h 2m 21s)"));
        assert!(out.contains("The mean travel time is: 623.50 Sec. (10m 24s)"));
    }

    #[test]
    fn test_duration_rendering_rounds_fractional_seconds() {
        let stats = DurationStats {
            total_seconds: 489.066,
            mean_seconds: 489.066,
        };
        let out = render(|w| write_duration_stats(w, Some(&stats)));
        assert!(out.contains("The total travel time is: 489.07 Sec. (8m 9s)"));
    }

    #[test]
    fn test_every_report_handles_no_data() {
        let empty_users = UserStats {
            user_types: Vec::new(),
            gender: Demographic::NoData,
            birth_year: Demographic::NoData,
            trip_count: 0,
        };
        assert_eq!(render(|w| write_time_stats(w, None)).trim(), NO_DATA);
        assert_eq!(render(|w| write_station_stats(w, None)).trim(), NO_DATA);
        assert_eq!(render(|w| write_duration_stats(w, None)).trim(), NO_DATA);
        assert_eq!(render(|w| write_user_stats(w, &empty_users)).trim(), NO_DATA);
    }

    #[test]
    fn test_user_stats_not_available() {
        let stats = UserStats {
            user_types: vec![vc("Subscriber", 3), vc("Customer", 1)],
            gender: Demographic::NotAvailable,
            birth_year: Demographic::NotAvailable,
            trip_count: 4,
        };
        let out = render(|w| write_user_stats(w, &stats));
        assert!(out.contains("Subscriber    3"));
        assert!(out.contains("Customer      1"));
        assert!(out.contains("No gender information available for this city!"));
        assert!(out.contains("No year of birth information available for this city!"));
    }

    #[test]
    fn test_user_stats_with_demographics() {
        let stats = UserStats {
            user_types: vec![vc("Subscriber", 2)],
            gender: Demographic::Present(vec![vc("Female", 1), vc("Male", 1)]),
            birth_year: Demographic::Present(BirthYearStats {
                earliest: 1939,
                most_recent: 2001,
                most_common: ValueCount { value: 1989, count: 2 },
            }),
            trip_count: 2,
        };
        let out = render(|w| write_user_stats(w, &stats));
        assert!(out.contains("The counts of gender:"));
        assert!(out.contains("Female    1"));
        assert!(out.contains("Earliest: 1939"));
        assert!(out.contains("Most recent: 2001"));
        assert!(out.contains("Most common: 1989"));
    }

    #[test]
    fn test_section_header_and_footer() {
        let out = render(|w| {
            write_section_header(w, ReportSection::TripDuration)?;
            write_section_footer(w, Duration::from_millis(250))
        });
        assert!(out.contains("Calculating Trip Duration..."));
        assert!(out.contains("This took 0.250000 seconds."));
        assert!(out.trim_end().ends_with(&divider()));
    }
}
