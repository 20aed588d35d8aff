//! In-memory repository for project tests and local wiring.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::project::{
    domain::{NewProject, Project, ProjectId},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};

/// Thread-safe in-memory project repository.
///
/// Identifiers are assigned from a monotonically increasing sequence and are
/// never reused after deletion.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    state: Arc<RwLock<InMemoryProjectState>>,
}

#[derive(Debug, Default)]
struct InMemoryProjectState {
    projects: BTreeMap<ProjectId, Project>,
    last_id: i32,
}

impl InMemoryProjectRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with projects that already carry
    /// identifiers.
    ///
    /// New identifiers continue after the largest seeded identifier.
    #[must_use]
    pub fn with_projects(projects: impl IntoIterator<Item = Project>) -> Self {
        let projects: BTreeMap<ProjectId, Project> = projects
            .into_iter()
            .map(|project| (project.id(), project))
            .collect();
        let last_id = projects.keys().next_back().map_or(0, |id| id.value());
        Self {
            state: Arc::new(RwLock::new(InMemoryProjectState { projects, last_id })),
        }
    }
}

fn lock_error(err: impl ToString) -> ProjectRepositoryError {
    ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

impl InMemoryProjectState {
    fn next_id(&mut self) -> ProjectRepositoryResult<ProjectId> {
        let next = self.last_id.checked_add(1).ok_or_else(|| {
            ProjectRepositoryError::persistence(std::io::Error::other(
                "project identifier sequence exhausted",
            ))
        })?;
        let id = ProjectId::new(next).map_err(ProjectRepositoryError::persistence)?;
        self.last_id = next;
        Ok(id)
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn get_all(&self) -> ProjectRepositoryResult<Vec<Project>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.projects.values().cloned().collect())
    }

    async fn get_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.projects.get(&id).cloned())
    }

    async fn add(&self, project: &NewProject) -> ProjectRepositoryResult<Project> {
        let mut state = self.state.write().map_err(lock_error)?;
        let id = state.next_id()?;
        let stored = project.clone().into_project(id);
        state.projects.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let existing = state
            .projects
            .get_mut(&project.id())
            .ok_or(ProjectRepositoryError::NotFound(project.id()))?;
        existing.apply_details(project.name().clone(), project.description());
        Ok(())
    }

    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<bool> {
        let mut state = self.state.write().map_err(lock_error)?;
        Ok(state.projects.remove(&id).is_some())
    }
}
