//! Error types for roster-engine operations.

use thiserror::Error;

use crate::registry::TeacherId;
use crate::school::SchoolName;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    #[error("Catalog load failed: {0}")]
    CatalogLoad(String),

    #[error("School '{school}' is already assigned to teacher {holder}")]
    AlreadyAssigned {
        school: SchoolName,
        holder: TeacherId,
    },

    #[error("Unknown school: {0}")]
    UnknownSchool(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
