//! Storage-assigned identifier types for projects and tasks.

use super::ProjectDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a persisted project, assigned by storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(i32);

impl ProjectId {
    /// Creates a validated project identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidProjectId`] when the value is zero
    /// or negative.
    pub const fn new(value: i32) -> Result<Self, ProjectDomainError> {
        if value <= 0 {
            return Err(ProjectDomainError::InvalidProjectId(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for ProjectId {
    type Error = ProjectDomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a persisted task, assigned by storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskItemId(i32);

impl TaskItemId {
    /// Creates a validated task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidTaskId`] when the value is zero or
    /// negative.
    pub const fn new(value: i32) -> Result<Self, ProjectDomainError> {
        if value <= 0 {
            return Err(ProjectDomainError::InvalidTaskId(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for TaskItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
