//! Overlap predicates between two schools' calendars.
//!
//! Both checks are symmetric in their arguments. A pair of schools collides
//! only when *both* predicates hold: some date window of one overlaps some
//! window of the other, and the two share an active weekday.

use crate::date_window::DateWindow;
use crate::schedule::{TeachingDay, WeeklySchedule};

/// True iff any window in `a` overlaps any window in `b`.
///
/// Windows are closed intervals, so sharing a single boundary day counts.
/// Empty inputs never overlap.
pub fn date_windows_overlap(a: &[DateWindow], b: &[DateWindow]) -> bool {
    a.iter().any(|wa| b.iter().any(|wb| wa.overlaps(wb)))
}

/// The first weekday, in Mon..Fri order, on which both schedules are active.
pub fn find_overlapping_weekday(a: &WeeklySchedule, b: &WeeklySchedule) -> Option<TeachingDay> {
    TeachingDay::ALL
        .into_iter()
        .find(|day| a.is_active(*day) && b.is_active(*day))
}

/// Every weekday on which both schedules are active, in Mon..Fri order.
pub fn shared_weekdays(a: &WeeklySchedule, b: &WeeklySchedule) -> Vec<TeachingDay> {
    TeachingDay::ALL
        .into_iter()
        .filter(|day| a.is_active(*day) && b.is_active(*day))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn windows(tokens: &[&str]) -> Vec<DateWindow> {
        tokens
            .iter()
            .map(|t| DateWindow::parse(t, 2026).unwrap())
            .collect()
    }

    fn days(active: &[TeachingDay]) -> WeeklySchedule {
        active
            .iter()
            .fold(WeeklySchedule::new(), |s, d| s.with_day(*d, "1,2교시"))
    }

    // ── date_windows_overlap ────────────────────────────────────────────

    #[test]
    fn test_identical_windows_overlap() {
        let a = windows(&["03.02~07.18"]);
        assert!(date_windows_overlap(&a, &a));
    }

    #[test]
    fn test_disjoint_windows() {
        let a = windows(&["03.02~05.01"]);
        let b = windows(&["05.02~07.01"]);
        assert!(!date_windows_overlap(&a, &b));
        assert!(!date_windows_overlap(&b, &a));
    }

    #[test]
    fn test_second_window_overlaps() {
        let a = windows(&["03.02~05.01", "06.01~06.30"]);
        let b = windows(&["06.15~06.20"]);
        assert!(date_windows_overlap(&a, &b));
        assert!(date_windows_overlap(&b, &a));
    }

    #[test]
    fn test_gap_between_blocks_is_free() {
        let a = windows(&["03.02~04.30", "09.01~10.31"]);
        let b = windows(&["05.04~08.31"]);
        assert!(!date_windows_overlap(&a, &b));
    }

    #[test]
    fn test_empty_never_overlaps() {
        let a = windows(&["03.02~07.18"]);
        assert!(!date_windows_overlap(&a, &[]));
        assert!(!date_windows_overlap(&[], &a));
    }

    // ── find_overlapping_weekday ────────────────────────────────────────

    #[test]
    fn test_first_shared_weekday_is_reported() {
        let a = days(&[TeachingDay::Wed, TeachingDay::Tue, TeachingDay::Fri]);
        let b = days(&[TeachingDay::Fri, TeachingDay::Wed]);
        assert_eq!(find_overlapping_weekday(&a, &b), Some(TeachingDay::Wed));
        assert_eq!(find_overlapping_weekday(&b, &a), Some(TeachingDay::Wed));
    }

    #[test]
    fn test_no_shared_weekday() {
        let a = days(&[TeachingDay::Mon]);
        let b = days(&[TeachingDay::Tue]);
        assert_eq!(find_overlapping_weekday(&a, &b), None);
    }

    #[test]
    fn test_inactive_schedule_shares_nothing() {
        let a = days(&[TeachingDay::Mon, TeachingDay::Tue]);
        assert_eq!(find_overlapping_weekday(&a, &WeeklySchedule::new()), None);
    }

    // ── shared_weekdays ─────────────────────────────────────────────────

    #[test]
    fn test_shared_weekdays_lists_all() {
        let a = days(&[TeachingDay::Mon, TeachingDay::Thu, TeachingDay::Fri]);
        let b = days(&[TeachingDay::Fri, TeachingDay::Mon]);
        assert_eq!(
            shared_weekdays(&a, &b),
            vec![TeachingDay::Mon, TeachingDay::Fri]
        );
    }
}
