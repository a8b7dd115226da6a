//! # roster-engine
//!
//! Assignment validation for placing teachers at schools.
//!
//! A coordinator assigns schools to teachers by hand; the engine keeps the
//! assignment state consistent (each school belongs to at most one teacher)
//! and recomputes, per teacher, the scheduling conflicts and workload after
//! every change. It validates assignments; it never proposes them.
//!
//! ## Modules
//!
//! - [`date_window`] — `"MM.DD~MM.DD"` tokens → inclusive date windows
//! - [`schedule`] — teaching weekdays and per-school weekly schedules
//! - [`overlap`] — date-window and weekday overlap predicates
//! - [`school`] — typed school records, names, regions
//! - [`catalog`] — JSON catalog loading and normalization
//! - [`conflict`] — pairwise conflict detection for one teacher
//! - [`stats`] — session totals and busy weekdays
//! - [`registry`] — teachers and school ownership
//! - [`session`] — catalog + registry, name-based assignment
//! - [`error`] — Error types

pub mod catalog;
pub mod conflict;
pub mod date_window;
pub mod error;
pub mod overlap;
pub mod registry;
pub mod schedule;
pub mod school;
pub mod session;
pub mod stats;

pub use catalog::Catalog;
pub use conflict::{check_pair, find_conflicts, Conflict};
pub use date_window::{CatalogOptions, DateWindow, DEFAULT_REFERENCE_YEAR};
pub use error::RosterError;
pub use overlap::{date_windows_overlap, find_overlapping_weekday, shared_weekdays};
pub use registry::{Registry, Teacher, TeacherId, TeacherReport};
pub use schedule::{TeachingDay, WeeklySchedule};
pub use school::{Region, School, SchoolName};
pub use session::{Availability, Session};
pub use stats::{compute_stats, TeacherStats};
