//! Repository port for project persistence.

use crate::project::domain::{NewProject, Project, ProjectId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for project repository operations.
pub type ProjectRepositoryResult<T> = Result<T, ProjectRepositoryError>;

/// Project persistence contract.
///
/// Every write commits immediately; there is no batching across calls.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Returns every stored project with its tasks, in ascending identifier
    /// order.
    async fn get_all(&self) -> ProjectRepositoryResult<Vec<Project>>;

    /// Finds a project and its tasks by identifier.
    ///
    /// Returns `None` when the project does not exist.
    async fn get_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>>;

    /// Stores a new project and returns it with its storage-assigned
    /// identifier.
    async fn add(&self, project: &NewProject) -> ProjectRepositoryResult<Project>;

    /// Persists the name and description of an existing project.
    ///
    /// The task collection is never written by this operation.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] when the project does not
    /// exist.
    async fn update(&self, project: &Project) -> ProjectRepositoryResult<()>;

    /// Removes a project and its tasks.
    ///
    /// Returns `false` when no project had the identifier; a missing row is
    /// not an error.
    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<bool>;
}

/// Errors returned by project repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectRepositoryError {
    /// The project was not found.
    #[error("project not found: {0}")]
    NotFound(ProjectId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectRepositoryError {
    /// Wraps a data-quality error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
