//! Interactive prompting over any line-oriented input.
//!
//! [`Prompter`] wraps a `BufRead` and a `Write` so the same code drives the
//! real terminal and scripted test input.

use std::io::{BufRead, Write};
use std::str::FromStr;

use bikeshare_core::error::{BikeshareError, Result};
use bikeshare_core::formatting::divider;
use bikeshare_core::models::{City, DayFilter, FilterSelection, MonthFilter};
use tracing::debug;

const GREETING: &str = "Hello! Let's explore some US bikeshare data!";

const CITY_PROMPT: &str = "Would you like to see data for Chicago, New York City, or Washington?";
const CITY_RETRY: &str = "Please select one of the following Chicago, New York City, or Washington?";

const MONTH_PROMPT: &str = "Would you like to view 'all' months or select from 'january', \
'february', 'march', 'april', 'may', or 'june'";
const MONTH_RETRY: &str = "Please select one of the following ('all', 'january', 'february', \
'march', 'april', 'may', or 'june')";

const DAY_PROMPT: &str = "Would you like to view 'all' days or select from 'monday', 'tuesday', \
'wednesday', 'thursday', 'friday', 'saturday', or 'sunday'";
const DAY_RETRY: &str = "Please select one of the following ('all', 'monday', 'tuesday', \
'wednesday', 'thursday', 'friday', 'saturday', or 'sunday')";

/// Line-based question/answer helper.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Where reports and tables are written.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `question` and return the next input line without its line ending.
    ///
    /// Fails with [`BikeshareError::InputClosed`] at end of input.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        writeln!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BikeshareError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask until the answer parses as `T`, using `retry` after the first miss.
    pub fn ask_until<T>(&mut self, question: &str, retry: &str) -> Result<T>
    where
        T: FromStr<Err = BikeshareError>,
    {
        let mut answer = self.ask(question)?;
        loop {
            match answer.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!("Rejected answer: {err}");
                    answer = self.ask(retry)?;
                }
            }
        }
    }

    /// Yes/no question; only `yes` (any case) counts as agreement.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(question)?;
        Ok(is_yes(&answer))
    }
}

/// Whether an answer means "yes".
pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

/// Greet the user and collect a valid city, month and day.
pub fn collect_filters<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<FilterSelection> {
    writeln!(prompter.output(), "{GREETING}")?;

    let city: City = prompter.ask_until(CITY_PROMPT, CITY_RETRY)?;
    let month: MonthFilter = prompter.ask_until(MONTH_PROMPT, MONTH_RETRY)?;
    let day: DayFilter = prompter.ask_until(DAY_PROMPT, DAY_RETRY)?;

    writeln!(prompter.output(), "{}", divider())?;
    Ok(FilterSelection::new(city, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Month, Weekday};
    use std::io::Cursor;

    fn prompter(script: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn test_collect_filters_first_try() {
        let mut p = prompter("Chicago\nJune\nMonday\n");
        let sel = collect_filters(&mut p).unwrap();
        assert_eq!(
            sel,
            FilterSelection::new(
                City::Chicago,
                MonthFilter::Only(Month::June),
                DayFilter::Only(Weekday::Mon)
            )
        );
        let out = output_of(p);
        assert!(out.starts_with(GREETING));
        assert!(out.contains(CITY_PROMPT));
        assert!(!out.contains(CITY_RETRY));
        assert!(out.trim_end().ends_with(&divider()));
    }

    #[test]
    fn test_collect_filters_reprompts_until_valid() {
        let mut p = prompter("boston\n\nnew york city\njuly\nALL\nmon\nfunday\nsunday\n");
        let sel = collect_filters(&mut p).unwrap();
        assert_eq!(sel.city, City::NewYorkCity);
        assert_eq!(sel.month, MonthFilter::All);
        assert_eq!(sel.day, DayFilter::Only(Weekday::Sun));

        let out = output_of(p);
        assert_eq!(out.matches(CITY_RETRY).count(), 2);
        assert_eq!(out.matches(MONTH_RETRY).count(), 1);
        assert_eq!(out.matches(DAY_RETRY).count(), 2);
    }

    #[test]
    fn test_collect_filters_input_closed() {
        let mut p = prompter("washington\n");
        let err = collect_filters(&mut p).unwrap_err();
        assert!(matches!(err, BikeshareError::InputClosed));
    }

    #[test]
    fn test_ask_strips_line_endings() {
        let mut p = prompter("Washington\r\n");
        assert_eq!(p.ask("city?").unwrap(), "Washington");
    }

    #[test]
    fn test_confirm() {
        let mut p = prompter("YES\nno\ny\n  yes \n");
        assert!(p.confirm("again?").unwrap());
        assert!(!p.confirm("again?").unwrap());
        assert!(!p.confirm("again?").unwrap());
        assert!(p.confirm("again?").unwrap());
        assert!(matches!(p.confirm("again?"), Err(BikeshareError::InputClosed)));
    }
}
