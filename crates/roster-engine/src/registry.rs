//! Mutable assignment state for one planning session.
//!
//! The [`Registry`] owns the teachers and the set of school names currently
//! held by any of them. Every mutation keeps two invariants:
//!
//! - a name is in the assigned set iff exactly one teacher lists that school;
//! - no teacher lists the same school twice.
//!
//! Operations on unknown teacher ids or unheld schools are silent no-ops
//! (reported through the return value), since they only ever arise from stale
//! UI state and cannot break either invariant. The one recoverable error is
//! assigning a school that is already taken.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::conflict::{find_conflicts, Conflict};
use crate::error::{Result, RosterError};
use crate::school::{School, SchoolName};
use crate::stats::{compute_stats, TeacherStats};

/// Registry-assigned teacher identifier. Never reused within a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TeacherId(u32);

impl TeacherId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for TeacherId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for TeacherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    id: TeacherId,
    name: String,
    schools: Vec<School>,
}

impl Teacher {
    pub fn id(&self) -> TeacherId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Assigned schools in assignment order.
    pub fn schools(&self) -> &[School] {
        &self.schools
    }

    pub fn holds(&self, name: &str) -> bool {
        self.schools.iter().any(|s| s.name.as_str() == name)
    }

    pub fn conflicts(&self) -> Vec<Conflict> {
        find_conflicts(&self.schools)
    }

    pub fn stats(&self) -> TeacherStats {
        compute_stats(&self.schools)
    }

    pub fn report(&self) -> TeacherReport {
        TeacherReport {
            id: self.id,
            name: self.name.clone(),
            schools: self.schools.iter().map(|s| s.name.clone()).collect(),
            stats: self.stats(),
            conflicts: self.conflicts(),
        }
    }
}

/// Everything a view needs to render one teacher card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherReport {
    pub id: TeacherId,
    pub name: String,
    pub schools: Vec<SchoolName>,
    pub stats: TeacherStats,
    pub conflicts: Vec<Conflict>,
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    teachers: Vec<Teacher>,
    assigned: HashSet<SchoolName>,
    next_id: u32,
}

impl Registry {
    /// An empty registry with no teachers.
    pub fn new() -> Self {
        Self::default()
    }

    /// The startup state: one teacher with the default name.
    pub fn with_default_teacher() -> Self {
        let mut registry = Self::new();
        registry.add_teacher();
        registry
    }

    // ── Mutations ───────────────────────────────────────────────────────────

    /// Append a teacher named `"강사 {n}"`, where `n` is the teacher count
    /// after the addition.
    pub fn add_teacher(&mut self) -> TeacherId {
        self.next_id += 1;
        let id = TeacherId(self.next_id);
        let name = format!("강사 {}", self.teachers.len() + 1);
        debug!(teacher = %id, name = %name, "teacher added");
        self.teachers.push(Teacher {
            id,
            name,
            schools: Vec::new(),
        });
        id
    }

    /// Release every school the teacher holds, then remove the teacher.
    ///
    /// Returns the removed teacher, or `None` if `id` is unknown.
    pub fn remove_teacher(&mut self, id: TeacherId) -> Option<Teacher> {
        let pos = self.teachers.iter().position(|t| t.id == id)?;
        let teacher = self.teachers.remove(pos);
        for school in &teacher.schools {
            self.assigned.remove(&school.name);
        }
        debug!(
            teacher = %id,
            released = teacher.schools.len(),
            "teacher removed"
        );
        Some(teacher)
    }

    /// Replace a teacher's display name. Returns `false` if `id` is unknown.
    pub fn rename_teacher(&mut self, id: TeacherId, name: impl Into<String>) -> bool {
        match self.teacher_mut(id) {
            Some(teacher) => {
                teacher.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Append `school` to the teacher's list.
    ///
    /// Returns `Ok(true)` when the school was assigned and `Ok(false)` when the
    /// call was a no-op (unknown teacher, or the teacher already lists it).
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::AlreadyAssigned`] if any teacher, including this
    /// one, already holds a school with the same name. State is unchanged.
    pub fn assign_school(&mut self, id: TeacherId, school: School) -> Result<bool> {
        if let Some(holder) = self.holder_of(school.name.as_str()) {
            warn!(
                school = %school.name,
                holder = %holder,
                teacher = %id,
                "school already assigned"
            );
            return Err(RosterError::AlreadyAssigned {
                school: school.name,
                holder,
            });
        }

        let Some(teacher) = self.teacher_mut(id) else {
            return Ok(false);
        };
        if teacher.holds(school.name.as_str()) {
            return Ok(false);
        }

        let name = school.name.clone();
        teacher.schools.push(school);
        debug!(school = %name, teacher = %id, "school assigned");
        self.assigned.insert(name);
        Ok(true)
    }

    /// Remove a school from the teacher's list and release its name.
    ///
    /// Returns `false` if the teacher is unknown or does not hold the school;
    /// in that case nothing changes, so another teacher's claim is never
    /// released.
    pub fn unassign_school(&mut self, id: TeacherId, name: &str) -> bool {
        let Some(teacher) = self.teacher_mut(id) else {
            return false;
        };
        let before = teacher.schools.len();
        teacher.schools.retain(|s| s.name.as_str() != name);
        if teacher.schools.len() == before {
            return false;
        }
        self.assigned.remove(name);
        debug!(school = %name, teacher = %id, "school unassigned");
        true
    }

    // ── Queries ─────────────────────────────────────────────────────────────

    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    pub fn teacher(&self, id: TeacherId) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.id == id)
    }

    fn teacher_mut(&mut self, id: TeacherId) -> Option<&mut Teacher> {
        self.teachers.iter_mut().find(|t| t.id == id)
    }

    pub fn is_assigned(&self, name: &str) -> bool {
        self.assigned.contains(name)
    }

    /// The teacher currently holding `name`.
    pub fn holder_of(&self, name: &str) -> Option<TeacherId> {
        if !self.is_assigned(name) {
            return None;
        }
        self.teachers.iter().find(|t| t.holds(name)).map(|t| t.id)
    }

    pub fn assigned_names(&self) -> &HashSet<SchoolName> {
        &self.assigned
    }

    pub fn assigned_count(&self) -> usize {
        self.assigned.len()
    }

    /// Schools left over from a catalog of `catalog_size` schools.
    pub fn unassigned_count(&self, catalog_size: usize) -> usize {
        catalog_size.saturating_sub(self.assigned.len())
    }

    pub fn report(&self, id: TeacherId) -> Option<TeacherReport> {
        self.teacher(id).map(Teacher::report)
    }

    pub fn reports(&self) -> Vec<TeacherReport> {
        self.teachers.iter().map(Teacher::report).collect()
    }
}
