//! Project aggregate root.

use super::{ProjectId, ProjectName, TaskItem};
use serde::{Deserialize, Serialize};

/// Project aggregate root owning an ordered task collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: ProjectName,
    description: String,
    tasks: Vec<TaskItem>,
}

/// Parameter object for reconstructing a persisted project aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Persisted project name.
    pub name: ProjectName,
    /// Persisted description.
    pub description: String,
    /// Tasks owned by the project, ordered by identifier.
    pub tasks: Vec<TaskItem>,
}

/// Project values awaiting an identifier from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    name: ProjectName,
    description: String,
}

impl NewProject {
    /// Creates an unsaved project.
    #[must_use]
    pub fn new(name: ProjectName, description: impl Into<String>) -> Self {
        Self {
            name,
            description: description.into(),
        }
    }

    /// Returns the project name.
    #[must_use]
    pub const fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Returns the project description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Attaches the storage-assigned identifier, producing a project with
    /// no tasks.
    #[must_use]
    pub fn into_project(self, id: ProjectId) -> Project {
        Project {
            id,
            name: self.name,
            description: self.description,
            tasks: Vec::new(),
        }
    }
}

impl Project {
    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            tasks: data.tasks,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub const fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Returns the project description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the tasks owned by this project.
    #[must_use]
    pub fn tasks(&self) -> &[TaskItem] {
        &self.tasks
    }

    /// Replaces the name and description, leaving identity and tasks intact.
    pub fn apply_details(&mut self, name: ProjectName, description: impl Into<String>) {
        self.name = name;
        self.description = description.into();
    }
}
