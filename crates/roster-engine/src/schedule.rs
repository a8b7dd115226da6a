//! Weekday teaching schedules.
//!
//! A school teaches on a subset of the five weekdays. Each active day carries
//! a period descriptor (e.g. `"3,4교시"`) that is shown to users but plays no
//! part in conflict detection: only active vs. inactive matters.

use std::fmt;

use chrono::Weekday;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// The five weekdays a school can hold classes on, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeachingDay {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl TeachingDay {
    /// Canonical iteration order used everywhere a "first" day matters.
    pub const ALL: [TeachingDay; 5] = [
        TeachingDay::Mon,
        TeachingDay::Tue,
        TeachingDay::Wed,
        TeachingDay::Thu,
        TeachingDay::Fri,
    ];

    /// Catalog key for this day (`"mon"` .. `"fri"`).
    pub fn key(self) -> &'static str {
        match self {
            TeachingDay::Mon => "mon",
            TeachingDay::Tue => "tue",
            TeachingDay::Wed => "wed",
            TeachingDay::Thu => "thu",
            TeachingDay::Fri => "fri",
        }
    }

    /// Short Korean label (`월`, `화`, ...).
    pub fn korean_label(self) -> &'static str {
        match self {
            TeachingDay::Mon => "월",
            TeachingDay::Tue => "화",
            TeachingDay::Wed => "수",
            TeachingDay::Thu => "목",
            TeachingDay::Fri => "금",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TeachingDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl From<TeachingDay> for Weekday {
    fn from(day: TeachingDay) -> Self {
        match day {
            TeachingDay::Mon => Weekday::Mon,
            TeachingDay::Tue => Weekday::Tue,
            TeachingDay::Wed => Weekday::Wed,
            TeachingDay::Thu => Weekday::Thu,
            TeachingDay::Fri => Weekday::Fri,
        }
    }
}

impl TryFrom<Weekday> for TeachingDay {
    type Error = Weekday;

    fn try_from(day: Weekday) -> Result<Self, Self::Error> {
        match day {
            Weekday::Mon => Ok(TeachingDay::Mon),
            Weekday::Tue => Ok(TeachingDay::Tue),
            Weekday::Wed => Ok(TeachingDay::Wed),
            Weekday::Thu => Ok(TeachingDay::Thu),
            Weekday::Fri => Ok(TeachingDay::Fri),
            other => Err(other),
        }
    }
}

/// Which weekdays a school is active on, with the display descriptor per day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklySchedule {
    periods: [Option<String>; 5],
}

impl WeeklySchedule {
    /// A schedule with no active day.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `day` active with `periods`. An empty or `"-"` descriptor marks
    /// the day inactive instead.
    pub fn with_day(mut self, day: TeachingDay, periods: impl Into<String>) -> Self {
        self.set(day, Some(periods.into()));
        self
    }

    /// Set or clear the descriptor for `day`.
    pub fn set(&mut self, day: TeachingDay, periods: Option<String>) {
        self.periods[day.index()] = periods
            .map(|p| p.trim().to_string())
            .filter(|p| !is_inactive_marker(p));
    }

    pub fn is_active(&self, day: TeachingDay) -> bool {
        self.periods[day.index()].is_some()
    }

    /// The period descriptor for `day`, if active.
    pub fn periods(&self, day: TeachingDay) -> Option<&str> {
        self.periods[day.index()].as_deref()
    }

    /// Active days in canonical order.
    pub fn active_days(&self) -> impl Iterator<Item = TeachingDay> + '_ {
        TeachingDay::ALL
            .into_iter()
            .filter(move |day| self.is_active(*day))
    }

    pub fn is_empty(&self) -> bool {
        self.periods.iter().all(Option::is_none)
    }
}

/// Serialized in catalog shape: `{"mon": "1,2교시", "tue": "-", ...}`.
impl Serialize for WeeklySchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(TeachingDay::ALL.len()))?;
        for day in TeachingDay::ALL {
            map.serialize_entry(day.key(), self.periods(day).unwrap_or("-"))?;
        }
        map.end()
    }
}

/// Catalog data uses `"-"` (or an empty cell) for "no class that day".
pub(crate) fn is_inactive_marker(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value == "-"
}
