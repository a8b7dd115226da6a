//! Per-teacher workload summary.

use serde::Serialize;

use crate::schedule::TeachingDay;
use crate::school::School;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherStats {
    /// Sum of `total_sessions` over all assigned schools.
    pub total_sessions: u32,
    /// Days with at least one active school (union), Mon..Fri order.
    pub busy_days: Vec<TeachingDay>,
}

impl TeacherStats {
    /// Busy days as Korean labels, e.g. `"월, 화"`, or `"-"` when idle.
    pub fn busy_days_label(&self) -> String {
        if self.busy_days.is_empty() {
            return "-".to_string();
        }
        self.busy_days
            .iter()
            .map(|d| d.korean_label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub fn compute_stats(schools: &[School]) -> TeacherStats {
    let total_sessions = schools
        .iter()
        .fold(0u32, |acc, s| acc.saturating_add(s.total_sessions));
    let busy_days = TeachingDay::ALL
        .into_iter()
        .filter(|day| schools.iter().any(|s| s.schedule.is_active(*day)))
        .collect();
    TeacherStats {
        total_sessions,
        busy_days,
    }
}
