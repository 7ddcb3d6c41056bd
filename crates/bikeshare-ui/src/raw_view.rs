//! Paginated raw-data browser.
//!
//! [`Pager`] walks a borrowed slice of trips five rows at a time, and
//! [`render_page`] prints a window as an aligned text table whose headers are
//! the dataset's own column names plus the derived time fields.

use std::io::{self, BufRead, Write};

use bikeshare_core::error::Result;
use bikeshare_core::models::{TripColumn, TripRecord};
use bikeshare_data::table::TripTable;
use tracing::debug;
use unicode_width::UnicodeWidthStr;

use crate::prompt::Prompter;

/// Rows shown per page.
pub const PAGE_SIZE: usize = 5;

pub const BROWSE_PROMPT: &str = "\nWould you view individual trip data? Enter yes or no.";
pub const END_OF_DATA: &str = "\nYou have reached the end of the Dataset!";

/// Derived columns appended after the source columns.
const DERIVED_HEADERS: [&str; 3] = ["month", "day_of_week", "start_hour"];

// ── Pager ─────────────────────────────────────────────────────────────────────

/// Fixed-size window over a trip slice.
#[derive(Debug, Clone)]
pub struct Pager<'a> {
    trips: &'a [TripRecord],
    start: usize,
    page_size: usize,
}

impl<'a> Pager<'a> {
    pub fn new(trips: &'a [TripRecord]) -> Self {
        Self::with_page_size(trips, PAGE_SIZE)
    }

    /// A page size of zero is treated as one.
    pub fn with_page_size(trips: &'a [TripRecord], page_size: usize) -> Self {
        Self {
            trips,
            start: 0,
            page_size: page_size.max(1),
        }
    }

    /// The next window, or `None` once every row has been shown.
    pub fn next_page(&mut self) -> Option<&'a [TripRecord]> {
        if self.is_exhausted() {
            return None;
        }
        let end = (self.start + self.page_size).min(self.trips.len());
        let page = &self.trips[self.start..end];
        self.start = end;
        Some(page)
    }

    pub fn is_exhausted(&self) -> bool {
        self.start >= self.trips.len()
    }

    /// Total rows in the underlying slice.
    pub fn total(&self) -> usize {
        self.trips.len()
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn cell(trip: &TripRecord, column: TripColumn) -> String {
    match column {
        TripColumn::StartTime => trip.start_time.to_string(),
        TripColumn::EndTime => trip.end_time.map(|t| t.to_string()).unwrap_or_default(),
        TripColumn::TripDuration => trip.trip_duration.to_string(),
        TripColumn::StartStation => trip.start_station.clone(),
        TripColumn::EndStation => trip.end_station.clone(),
        TripColumn::UserType => trip.user_type.clone().unwrap_or_default(),
        TripColumn::Gender => trip.gender.clone().unwrap_or_default(),
        TripColumn::BirthYear => trip
            .birth_year
            .map(|y| format!("{y:.1}"))
            .unwrap_or_default(),
    }
}

/// Print `page` as a table. The first column is the source row index.
pub fn render_page<W: Write>(
    out: &mut W,
    columns: &[TripColumn],
    page: &[TripRecord],
) -> io::Result<()> {
    let headers: Vec<&str> = std::iter::once("")
        .chain(columns.iter().map(|c| c.header()))
        .chain(DERIVED_HEADERS)
        .collect();

    let rows: Vec<Vec<String>> = page
        .iter()
        .map(|trip| {
            std::iter::once(trip.row_index.to_string())
                .chain(columns.iter().map(|c| cell(trip, *c)))
                .chain([
                    trip.month.to_string(),
                    trip.day_of_week.to_string(),
                    trip.start_hour.to_string(),
                ])
                .collect()
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .map(|r| UnicodeWidthStr::width(r[i].as_str()))
                .chain(std::iter::once(UnicodeWidthStr::width(*h)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    write_row(out, headers.iter().copied(), &widths)?;
    for row in &rows {
        write_row(out, row.iter().map(String::as_str), &widths)?;
    }
    Ok(())
}

fn write_row<'s, W: Write>(
    out: &mut W,
    cells: impl Iterator<Item = &'s str>,
    widths: &[usize],
) -> io::Result<()> {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(text, width)| {
            let pad = width.saturating_sub(UnicodeWidthStr::width(text));
            format!("{}{}", " ".repeat(pad), text)
        })
        .collect();
    writeln!(out, "{}", line.join("  ").trim_end())
}

// ── Browse loop ───────────────────────────────────────────────────────────────

/// Offer the raw rows of `table` page by page until the user declines or the
/// rows run out.
pub fn browse<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    table: &TripTable,
) -> Result<()> {
    let mut pager = Pager::new(&table.trips);

    if !prompter.confirm(BROWSE_PROMPT)? {
        return Ok(());
    }

    loop {
        let Some(page) = pager.next_page() else {
            writeln!(prompter.output(), "{END_OF_DATA}")?;
            break;
        };
        debug!("Showing {} raw rows", page.len());
        render_page(prompter.output(), &table.columns, page)?;
        writeln!(
            prompter.output(),
            "\nAvailable data records are: {} rows",
            pager.total()
        )?;

        if pager.is_exhausted() {
            writeln!(prompter.output(), "{END_OF_DATA}")?;
            break;
        }
        if !prompter.confirm(BROWSE_PROMPT)? {
            break;
        }
    }
    Ok(())
}
