//! Calendar teaching windows.
//!
//! Catalog records describe each teaching period as a `"MM.DD~MM.DD"` token.
//! The year is not part of the token: the whole catalog shares one reference
//! year, supplied by the caller through [`CatalogOptions`].
//!
//! Windows are inclusive on both ends and carry no time-of-day component, so
//! two windows that touch on a single day are considered to overlap.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

use crate::error::{Result, RosterError};

/// The planning year used when the caller does not supply one.
pub const DEFAULT_REFERENCE_YEAR: i32 = 2026;

/// Options applied while turning raw catalog data into typed records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Calendar year every `MM.DD` token is resolved against.
    pub reference_year: i32,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            reference_year: DEFAULT_REFERENCE_YEAR,
        }
    }
}

/// One contiguous teaching period, `start..=end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Build a window from two dates.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::InvalidDateRange`] if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(RosterError::InvalidDateRange(format!(
                "window starts after it ends: {start} > {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Parse a `"MM.DD~MM.DD"` token in `reference_year`.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::InvalidDateRange`] when the separator is missing,
    /// a side is not `MM.DD`, month or day is out of range, the date does not
    /// exist in the reference year, or the window is inverted.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_engine::date_window::DateWindow;
    ///
    /// let w = DateWindow::parse("03.02~07.18", 2026).unwrap();
    /// assert_eq!(w.to_string(), "03.02~07.18");
    /// ```
    pub fn parse(token: &str, reference_year: i32) -> Result<Self> {
        let token = token.trim();
        let (start, end) = token.split_once('~').ok_or_else(|| {
            RosterError::InvalidDateRange(format!("missing '~' in '{token}'"))
        })?;
        if end.contains('~') {
            return Err(RosterError::InvalidDateRange(format!(
                "more than one '~' in '{token}'"
            )));
        }

        let start = parse_month_day(start, reference_year, token)?;
        let end = parse_month_day(end, reference_year, token)?;
        Self::new(start, end)
    }

    /// Closed-interval overlap: `s1 <= e2 && s2 <= e1`.
    pub fn overlaps(&self, other: &DateWindow) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Whether `date` falls inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered, counting both ends.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}.{:02}~{:02}.{:02}",
            self.start.month(),
            self.start.day(),
            self.end.month(),
            self.end.day()
        )
    }
}

/// Serialized back to its catalog token, e.g. `"03.02~07.18"`.
impl Serialize for DateWindow {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse one `MM.DD` side of a window token.
fn parse_month_day(side: &str, year: i32, token: &str) -> Result<NaiveDate> {
    let side = side.trim();
    let (month, day) = side.split_once('.').ok_or_else(|| {
        RosterError::InvalidDateRange(format!("expected MM.DD, got '{side}' in '{token}'"))
    })?;

    let month: u32 = parse_component(month, "month", token)?;
    let day: u32 = parse_component(day, "day", token)?;

    if !(1..=12).contains(&month) {
        return Err(RosterError::InvalidDateRange(format!(
            "month {month} out of range in '{token}'"
        )));
    }
    if !(1..=31).contains(&day) {
        return Err(RosterError::InvalidDateRange(format!(
            "day {day} out of range in '{token}'"
        )));
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        RosterError::InvalidDateRange(format!(
            "{month:02}.{day:02} does not exist in {year} ('{token}')"
        ))
    })
}

fn parse_component(raw: &str, what: &str, token: &str) -> Result<u32> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RosterError::InvalidDateRange(format!(
            "non-numeric {what} '{raw}' in '{token}'"
        )));
    }
    raw.parse()
        .map_err(|_| RosterError::InvalidDateRange(format!("invalid {what} '{raw}' in '{token}'")))
}
