//! Service layer for project creation, retrieval, update, and removal.

use crate::project::{
    domain::{NewProject, Project, ProjectDomainError, ProjectId, ProjectName},
    ports::{ProjectRepository, ProjectRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload carrying the client-editable project fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    name: String,
    description: String,
}

impl ProjectRequest {
    /// Creates a request with the given name and an empty description.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }

    /// Sets the project description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns the requested name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the requested description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Service-level errors for project operations.
#[derive(Debug, Error)]
pub enum ProjectServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),
    /// The project to update does not exist.
    #[error("project not found: {0}")]
    NotFound(ProjectId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(ProjectRepositoryError),
}

impl From<ProjectRepositoryError> for ProjectServiceError {
    fn from(err: ProjectRepositoryError) -> Self {
        match err {
            ProjectRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for project service operations.
pub type ProjectServiceResult<T> = Result<T, ProjectServiceError>;

/// Project orchestration service.
///
/// Each public operation issues a single repository call, except
/// [`ProjectService::update_project`] which loads before writing.
#[derive(Clone)]
pub struct ProjectService<R>
where
    R: ProjectRepository,
{
    repository: Arc<R>,
}

impl<R> ProjectService<R>
where
    R: ProjectRepository,
{
    /// Creates a new project service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns all projects in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn get_all_projects(&self) -> ProjectServiceResult<Vec<Project>> {
        let projects = self.repository.get_all().await?;
        debug!(count = projects.len(), "listed projects");
        Ok(projects)
    }

    /// Retrieves a project by identifier.
    ///
    /// Returns `Ok(None)` when no project has the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn get_project_by_id(&self, id: ProjectId) -> ProjectServiceResult<Option<Project>> {
        let project = self.repository.get_by_id(id).await?;
        debug!(project_id = %id, found = project.is_some(), "looked up project");
        Ok(project)
    }

    /// Creates and stores a new project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Domain`] when the name is invalid or
    /// [`ProjectServiceError::Repository`] when persistence fails.
    pub async fn add_project(&self, request: ProjectRequest) -> ProjectServiceResult<Project> {
        let ProjectRequest { name, description } = request;
        let new_project = NewProject::new(ProjectName::new(name)?, description);
        let project = self.repository.add(&new_project).await?;
        info!(project_id = %project.id(), name = %project.name(), "created project");
        Ok(project)
    }

    /// Replaces the name and description of an existing project.
    ///
    /// The project identifier and task collection are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::NotFound`] when the project does not
    /// exist, [`ProjectServiceError::Domain`] when the name is invalid, or
    /// [`ProjectServiceError::Repository`] when persistence fails.
    pub async fn update_project(
        &self,
        id: ProjectId,
        request: ProjectRequest,
    ) -> ProjectServiceResult<Project> {
        let ProjectRequest { name, description } = request;
        let project_name = ProjectName::new(name)?;

        let mut project = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(ProjectServiceError::NotFound(id))?;
        project.apply_details(project_name, description);
        self.repository.update(&project).await?;
        info!(project_id = %id, "updated project");
        Ok(project)
    }

    /// Removes a project and its tasks.
    ///
    /// Returns `false` when the project did not exist; deleting a missing
    /// project is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Repository`] when persistence fails.
    pub async fn delete_project(&self, id: ProjectId) -> ProjectServiceResult<bool> {
        let removed = self.repository.delete(id).await?;
        if removed {
            info!(project_id = %id, "deleted project");
        } else {
            debug!(project_id = %id, "delete skipped, project absent");
        }
        Ok(removed)
    }
}
