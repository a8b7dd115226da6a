//! A loaded catalog paired with its assignment registry.
//!
//! UIs deal in school names (a drag payload, a CLI argument); the session
//! resolves them against the catalog before handing typed records to the
//! [`Registry`].

use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::{Result, RosterError};
use crate::registry::{Registry, TeacherId, TeacherReport};
use crate::school::{Region, School};

/// One selectable entry in a region list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Availability<'a> {
    pub school: &'a School,
    /// Already held by some teacher; shown grayed out.
    pub assigned: bool,
}

#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    registry: Registry,
}

impl Session {
    /// Start a session with one default teacher.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            registry: Registry::with_default_teacher(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Assign the catalog school called `name` to a teacher.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::UnknownSchool`] if the catalog has no such school,
    /// or [`RosterError::AlreadyAssigned`] if it is already taken.
    pub fn assign(&mut self, teacher: TeacherId, name: &str) -> Result<bool> {
        let school = self
            .catalog
            .get(name)
            .cloned()
            .ok_or_else(|| RosterError::UnknownSchool(name.to_string()))?;
        self.registry.assign_school(teacher, school)
    }

    pub fn unassign(&mut self, teacher: TeacherId, name: &str) -> bool {
        self.registry.unassign_school(teacher, name)
    }

    /// Catalog schools not held by any teacher.
    pub fn unassigned_count(&self) -> usize {
        self.registry.unassigned_count(self.catalog.len())
    }

    pub fn available(&self, region: Region) -> Vec<Availability<'_>> {
        self.catalog
            .region(region)
            .map(|school| Availability {
                school,
                assigned: self.registry.is_assigned(school.name.as_str()),
            })
            .collect()
    }

    pub fn reports(&self) -> Vec<TeacherReport> {
        self.registry.reports()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_window::CatalogOptions;

    const CATALOG: &str = r#"{
        "jung-gu": [
            {"name": "A", "totalSessions": 24, "dateRange": "03.02~07.18",
             "schedule": {"mon": "1,2교시", "tue": "-", "wed": "-", "thu": "-", "fri": "-"}},
            {"name": "B", "totalSessions": "12", "dateRange": "03.02~07.18",
             "schedule": {"mon": "3교시", "tue": "-", "wed": "-", "thu": "-", "fri": "-"}}
        ],
        "ulju-gun": [
            {"name": "C", "totalSessions": 6, "dateRange": ["09.01~10.30"],
             "schedule": {"mon": "-", "tue": "-", "wed": "-", "thu": "-", "fri": "5교시"}}
        ]
    }"#;

    fn session() -> Session {
        Session::new(Catalog::from_json_str(CATALOG, &CatalogOptions::default()).unwrap())
    }

    #[test]
    fn test_starts_with_one_teacher_and_full_pool() {
        let session = session();
        assert_eq!(session.registry().teachers().len(), 1);
        assert_eq!(session.unassigned_count(), 3);
    }

    #[test]
    fn test_assign_by_name() {
        let mut session = session();
        let id = session.registry().teachers()[0].id();
        assert!(session.assign(id, "A").unwrap());
        assert!(session.assign(id, "B").unwrap());
        assert_eq!(session.unassigned_count(), 1);

        let reports = session.reports();
        assert_eq!(reports[0].conflicts.len(), 1);
        assert_eq!(reports[0].stats.total_sessions, 36);
    }

    #[test]
    fn test_assign_unknown_school() {
        let mut session = session();
        let id = session.registry().teachers()[0].id();
        let err = session.assign(id, "Z").unwrap_err();
        assert_eq!(err, RosterError::UnknownSchool("Z".to_string()));
        assert_eq!(session.unassigned_count(), 3);
    }

    #[test]
    fn test_available_marks_assigned() {
        let mut session = session();
        let id = session.registry().teachers()[0].id();
        session.assign(id, "B").unwrap();

        let flags: Vec<_> = session
            .available(Region::JungGu)
            .iter()
            .map(|a| (a.school.name.as_str(), a.assigned))
            .collect();
        assert_eq!(flags, vec![("A", false), ("B", true)]);
        assert!(session.available(Region::NamGu).is_empty());
    }

    #[test]
    fn test_removing_teacher_returns_schools_to_pool() {
        let mut session = session();
        let id = session.registry().teachers()[0].id();
        session.assign(id, "A").unwrap();
        session.assign(id, "C").unwrap();
        let other = session.registry_mut().add_teacher();

        session.registry_mut().remove_teacher(id);
        assert_eq!(session.unassigned_count(), 3);
        assert!(session.assign(other, "A").unwrap());
    }
}
