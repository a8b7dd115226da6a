//! School catalog loading.
//!
//! The catalog is a JSON document keyed by region (`"jung-gu"`, `"nam-gu"`,
//! ...), each holding a list of school records. Hand-maintained catalog data
//! is loosely shaped: `dateRange` may be a single token or a list, and
//! `totalSessions` may be a number or a numeric string. Everything is
//! normalized here into [`School`] so the rest of the crate never branches on
//! input shape.
//!
//! Any problem with the document is a [`RosterError::CatalogLoad`]. A failed
//! load is terminal: no registry is built over a partial catalog.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::date_window::{CatalogOptions, DateWindow};
use crate::error::{Result, RosterError};
use crate::schedule::{TeachingDay, WeeklySchedule};
use crate::school::{Region, School, SchoolName};

/// All schools of one planning season.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Region display order, then document order within a region.
    schools: Vec<School>,
    index: HashMap<SchoolName, usize>,
}

impl Catalog {
    /// Build a catalog from already-typed records.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::CatalogLoad`] if two records share a name.
    pub fn from_schools(schools: Vec<School>) -> Result<Self> {
        let mut index = HashMap::with_capacity(schools.len());
        for (i, school) in schools.iter().enumerate() {
            if index.insert(school.name.clone(), i).is_some() {
                return Err(RosterError::CatalogLoad(format!(
                    "duplicate school name '{}'",
                    school.name
                )));
            }
        }
        Ok(Self { schools, index })
    }

    /// Parse and normalize a catalog document.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::CatalogLoad`] if the JSON is malformed, a record
    /// cannot be normalized, or a school name repeats anywhere in the document.
    pub fn from_json_str(json: &str, options: &CatalogOptions) -> Result<Self> {
        let document: serde_json::Map<String, Value> = serde_json::from_str(json)
            .map_err(|e| RosterError::CatalogLoad(format!("invalid catalog JSON: {e}")))?;

        for key in document.keys() {
            if Region::from_key(key).is_none() {
                warn!(key = %key, "ignoring unknown catalog region");
            }
        }

        let mut schools = Vec::new();
        for region in Region::ALL {
            let Some(value) = document.get(region.key()) else {
                continue;
            };
            let records: Vec<RawSchool> = serde_json::from_value(value.clone()).map_err(|e| {
                RosterError::CatalogLoad(format!("region '{}': {e}", region.key()))
            })?;
            for record in records {
                schools.push(record.normalize(region, options)?);
            }
        }

        let catalog = Self::from_schools(schools)?;
        info!(
            schools = catalog.len(),
            reference_year = options.reference_year,
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Read and parse a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::CatalogLoad`] if the file cannot be read or
    /// [`Catalog::from_json_str`] fails.
    pub fn load(path: impl AsRef<Path>, options: &CatalogOptions) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            RosterError::CatalogLoad(format!("cannot read '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&json, options)
    }

    pub fn len(&self) -> usize {
        self.schools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schools.is_empty()
    }

    pub fn schools(&self) -> &[School] {
        &self.schools
    }

    pub fn region(&self, region: Region) -> impl Iterator<Item = &School> + '_ {
        self.schools
            .iter()
            .filter(move |s| s.region == Some(region))
    }

    pub fn get(&self, name: &str) -> Option<&School> {
        self.index.get(name).map(|&i| &self.schools[i])
    }

    /// Schools carrying a note, for the caution section of the listing.
    pub fn noted_schools(&self) -> impl Iterator<Item = &School> + '_ {
        self.schools.iter().filter(|s| s.note.is_some())
    }
}

// ── Raw document shapes ─────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSchool {
    name: String,
    #[serde(default)]
    date_range: Option<OneOrMany>,
    #[serde(default)]
    schedule: HashMap<String, Value>,
    #[serde(default)]
    total_sessions: Option<Value>,
    #[serde(default)]
    note: Option<String>,
    #[serde(default)]
    caution: Value,
    #[serde(default)]
    grade: Value,
    #[serde(default)]
    classes: Value,
    #[serde(default)]
    students: Value,
    #[serde(default)]
    class_sessions: Value,
    #[serde(default)]
    support: Value,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl RawSchool {
    fn normalize(self, region: Region, options: &CatalogOptions) -> Result<School> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(RosterError::CatalogLoad(format!(
                "school with empty name in region '{}'",
                region.key()
            )));
        }
        let fail = |msg: String| RosterError::CatalogLoad(format!("school '{name}': {msg}"));

        let tokens = match self.date_range {
            Some(OneOrMany::One(token)) => vec![token],
            Some(OneOrMany::Many(tokens)) => tokens,
            None => Vec::new(),
        };
        if tokens.is_empty() {
            return Err(fail("empty dateRange".to_string()));
        }
        let date_windows = tokens
            .iter()
            .map(|t| DateWindow::parse(t, options.reference_year))
            .collect::<Result<Vec<_>>>()
            .map_err(|e| fail(e.to_string()))?;

        let mut schedule = WeeklySchedule::new();
        for day in TeachingDay::ALL {
            schedule.set(day, self.schedule.get(day.key()).and_then(display_text));
        }

        let total_sessions = match &self.total_sessions {
            None | Some(Value::Null) => 0,
            Some(value) => coerce_sessions(value).map_err(fail)?,
        };

        Ok(School {
            name: SchoolName::new(name.clone()),
            region: Some(region),
            date_windows,
            schedule,
            total_sessions,
            note: self.note.filter(|n| !n.trim().is_empty()),
            caution: truthy(&self.caution),
            grade: display_text(&self.grade),
            classes: display_text(&self.classes),
            students: display_text(&self.students),
            class_sessions: display_text(&self.class_sessions),
            support: truthy(&self.support),
        })
    }
}

/// Session counts arrive as integers or numeric strings.
fn coerce_sessions(value: &Value) -> std::result::Result<u32, String> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| format!("totalSessions {n} is not a non-negative integer")),
        Value::String(s) => s
            .trim()
            .parse::<u32>()
            .map_err(|_| format!("totalSessions '{s}' is not a non-negative integer")),
        other => Err(format!("unsupported totalSessions value {other}")),
    }
}

/// Render a scalar cell as display text; nulls and empty strings become `None`.
fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
