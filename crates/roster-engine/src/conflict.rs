//! Pairwise scheduling conflicts within one teacher's assignments.

use std::fmt;

use serde::Serialize;

use crate::overlap::{date_windows_overlap, find_overlapping_weekday};
use crate::schedule::TeachingDay;
use crate::school::{School, SchoolName};

/// Two schools held by the same teacher that teach on the same weekday during
/// overlapping date windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict {
    /// Earlier of the two in assignment order.
    pub first: SchoolName,
    pub second: SchoolName,
    /// First shared active weekday, Mon..Fri.
    pub weekday: TeachingDay,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[중복] {}초 & {}초 : {}요일에 수업이 겹칩니다.",
            self.first,
            self.second,
            self.weekday.korean_label()
        )
    }
}

/// Check two schools against each other.
pub fn check_pair(a: &School, b: &School) -> Option<Conflict> {
    if !date_windows_overlap(&a.date_windows, &b.date_windows) {
        return None;
    }
    find_overlapping_weekday(&a.schedule, &b.schedule).map(|weekday| Conflict {
        first: a.name.clone(),
        second: b.name.clone(),
        weekday,
    })
}

/// Every conflicting pair among `schools`, compared once each (`i < j`).
///
/// Output order follows the input: pairs are visited by `i` then `j`, and each
/// descriptor names its schools in input order.
pub fn find_conflicts(schools: &[School]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();
    for (i, a) in schools.iter().enumerate() {
        for b in &schools[i + 1..] {
            if let Some(conflict) = check_pair(a, b) {
                conflicts.push(conflict);
            }
        }
    }
    conflicts
}
