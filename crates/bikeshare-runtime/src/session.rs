//! The interactive analysis loop.
//!
//! One pass collects filters, loads the matching trips, prints the four
//! reports, offers the raw-data browser and finally asks whether to restart.
//! Nothing carries over between passes.

use std::io::{BufRead, Write};
use std::time::Instant;

use bikeshare_core::error::{BikeshareError, Result};
use bikeshare_data::analysis;
use bikeshare_data::reader::DatasetLoader;
use bikeshare_data::table::TripTable;
use bikeshare_ui::prompt::{collect_filters, Prompter};
use bikeshare_ui::raw_view::browse;
use bikeshare_ui::report::{self, ReportSection};
use tracing::{debug, info};

pub const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.";

/// Owns the terminal endpoints and the loader for the lifetime of the program.
pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    loader: DatasetLoader,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(loader: DatasetLoader, input: R, output: W) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            loader,
        }
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Run passes until the user declines to restart or input ends.
    ///
    /// Dataset errors are returned to the caller.
    pub fn run(&mut self) -> Result<()> {
        let mut passes = 0usize;
        loop {
            passes += 1;
            match self.run_pass() {
                Ok(true) => continue,
                Ok(false) => break,
                Err(BikeshareError::InputClosed) => {
                    info!("Input closed; ending session");
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        debug!("Session finished after {} pass(es)", passes);
        Ok(())
    }

    /// One full pass. Returns `true` when the user asked to restart.
    pub fn run_pass(&mut self) -> Result<bool> {
        let selection = collect_filters(&mut self.prompter)?;
        info!(
            "Selected city={} month={} day={}",
            selection.city, selection.month, selection.day
        );

        let table = self.loader.load(&selection)?;
        self.report(&table)?;
        browse(&mut self.prompter, &table)?;

        self.prompter.confirm(RESTART_PROMPT)
    }

    /// Print the four report sections for `table`, each with its timing.
    pub fn report(&mut self, table: &TripTable) -> Result<()> {
        for section in ReportSection::ALL {
            let out = self.prompter.output();
            report::write_section_header(out, section)?;
            let started = Instant::now();

            match section {
                ReportSection::TimeOfTravel => {
                    let stats = analysis::time_stats(&table.trips);
                    report::write_time_stats(out, stats.as_ref())?;
                }
                ReportSection::Stations => {
                    let stats = analysis::station_stats(&table.trips);
                    report::write_station_stats(out, stats.as_ref())?;
                }
                ReportSection::TripDuration => {
                    let stats = analysis::duration_stats(&table.trips);
                    report::write_duration_stats(out, stats.as_ref())?;
                }
                ReportSection::Users => {
                    let stats = analysis::user_stats(&table.trips, table.capabilities);
                    report::write_user_stats(out, &stats)?;
                }
            }

            report::write_section_footer(out, started.elapsed())?;
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
