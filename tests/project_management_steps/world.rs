//! Shared world state for project management BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use taskboard::project::{
    adapters::memory::InMemoryProjectRepository,
    domain::{PersistedProjectData, Project, ProjectId, ProjectName},
    services::{ProjectService, ProjectServiceError},
};

/// Service type used by the BDD world.
pub type TestProjectService = ProjectService<InMemoryProjectRepository>;

/// Scenario world for project behaviour tests.
pub struct ProjectWorld {
    /// The project service under test.
    pub service: TestProjectService,
    /// Projects placed in storage before the scenario acts.
    pub seeded: Vec<Project>,
    /// Last successfully created project.
    pub last_created: Option<Project>,
    /// Result of the last addition attempt.
    pub last_add_result: Option<Result<Project, ProjectServiceError>>,
    /// Result of the last update attempt.
    pub last_update_result: Option<Result<Project, ProjectServiceError>>,
    /// Outcomes of delete calls in order.
    pub delete_outcomes: Vec<bool>,
}

impl ProjectWorld {
    /// Creates a world over empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: ProjectService::new(Arc::new(InMemoryProjectRepository::new())),
            seeded: Vec::new(),
            last_created: None,
            last_add_result: None,
            last_update_result: None,
            delete_outcomes: Vec::new(),
        }
    }

    /// Adds a stored project and rebuilds the service over the seed set.
    pub fn seed(&mut self, id: i32, name: String, description: String) -> Result<(), eyre::Report> {
        let project = Project::from_persisted(PersistedProjectData {
            id: ProjectId::new(id)?,
            name: ProjectName::new(name)?,
            description,
            tasks: Vec::new(),
        });
        self.seeded.push(project);
        let repository = InMemoryProjectRepository::with_projects(self.seeded.clone());
        self.service = ProjectService::new(Arc::new(repository));
        Ok(())
    }

    /// Returns the identifier of the last created project.
    pub fn created_id(&self) -> Result<ProjectId, eyre::Report> {
        self.last_created
            .as_ref()
            .map(Project::id)
            .ok_or_else(|| eyre::eyre!("missing created project in scenario world"))
    }
}

impl Default for ProjectWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ProjectWorld {
    ProjectWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
