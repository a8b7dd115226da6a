//! Typed school records.
//!
//! A [`School`] is immutable once it leaves the catalog loader. Its identity
//! is the [`SchoolName`], which the loader guarantees to be unique across the
//! whole catalog.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

use crate::date_window::DateWindow;
use crate::schedule::WeeklySchedule;

/// Identity of a school in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SchoolName(String);

impl SchoolName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SchoolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for SchoolName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SchoolName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for SchoolName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Catalog regions, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    JungGu,
    NamGu,
    DongGu,
    BukGu,
    UljuGun,
    Support,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::JungGu,
        Region::NamGu,
        Region::DongGu,
        Region::BukGu,
        Region::UljuGun,
        Region::Support,
    ];

    /// Top-level key in the catalog document.
    pub fn key(self) -> &'static str {
        match self {
            Region::JungGu => "jung-gu",
            Region::NamGu => "nam-gu",
            Region::DongGu => "dong-gu",
            Region::BukGu => "buk-gu",
            Region::UljuGun => "ulju-gun",
            Region::Support => "support",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Region::JungGu => "중구",
            Region::NamGu => "남구",
            Region::DongGu => "동구",
            Region::BukGu => "북구",
            Region::UljuGun => "울주군",
            Region::Support => "보조강사 전용",
        }
    }

    pub fn from_key(key: &str) -> Option<Region> {
        Region::ALL.into_iter().find(|r| r.key() == key)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One school in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct School {
    pub name: SchoolName,
    /// Region the record was listed under; `None` for records built by hand.
    pub region: Option<Region>,
    /// Teaching periods, never empty for catalog records.
    pub date_windows: Vec<DateWindow>,
    pub schedule: WeeklySchedule,
    pub total_sessions: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub caution: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub students: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_sessions: Option<String>,
    /// Whether support instructors are assigned to this school.
    pub support: bool,
}

impl School {
    pub fn new(
        name: impl Into<SchoolName>,
        date_windows: Vec<DateWindow>,
        schedule: WeeklySchedule,
    ) -> Self {
        Self {
            name: name.into(),
            region: None,
            date_windows,
            schedule,
            total_sessions: 0,
            note: None,
            caution: false,
            grade: None,
            classes: None,
            students: None,
            class_sessions: None,
            support: false,
        }
    }

    pub fn with_sessions(mut self, total_sessions: u32) -> Self {
        self.total_sessions = total_sessions;
        self
    }

    pub fn in_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Date windows joined for display, e.g. `"03.02~05.01, 06.01~06.30"`.
    pub fn date_windows_label(&self) -> String {
        self.date_windows
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
