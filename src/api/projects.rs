//! Handlers for `/api/projects`.

use tracing::error;

use super::dto::{ProjectBody, ProjectResponse};
use super::response::{ApiError, ApiResponse, ApiResult};
use crate::project::domain::ProjectId;
use crate::project::ports::ProjectRepository;
use crate::project::services::{ProjectService, ProjectServiceError};

/// Base path of the project resource.
pub const PROJECTS_PATH: &str = "/api/projects";

/// Project endpoints bound to a project service.
pub struct ProjectsApi<'a, R>
where
    R: ProjectRepository,
{
    service: &'a ProjectService<R>,
}

impl<'a, R> ProjectsApi<'a, R>
where
    R: ProjectRepository,
{
    /// Binds the endpoints to a service.
    #[must_use]
    pub const fn new(service: &'a ProjectService<R>) -> Self {
        Self { service }
    }

    /// `GET /api/projects`
    ///
    /// # Errors
    ///
    /// Returns 500 when storage fails.
    pub async fn list(&self) -> ApiResult<Vec<ProjectResponse>> {
        let projects = self
            .service
            .get_all_projects()
            .await
            .map_err(service_error)?;
        Ok(ApiResponse::ok(
            projects.iter().map(ProjectResponse::from).collect(),
        ))
    }

    /// `GET /api/projects/{id}`
    ///
    /// # Errors
    ///
    /// Returns 404 when no project has the identifier and 500 when storage
    /// fails.
    pub async fn get(&self, id: i32) -> ApiResult<ProjectResponse> {
        let project_id = path_id(id)?;
        let project = self
            .service
            .get_project_by_id(project_id)
            .await
            .map_err(service_error)?
            .ok_or_else(|| project_not_found(id))?;
        Ok(ApiResponse::ok(ProjectResponse::from(&project)))
    }

    /// `POST /api/projects`
    ///
    /// # Errors
    ///
    /// Returns 400 for an invalid name and 500 when storage fails.
    pub async fn create(&self, body: ProjectBody) -> ApiResult<ProjectResponse> {
        let project = self
            .service
            .add_project(body.into())
            .await
            .map_err(service_error)?;
        Ok(ApiResponse::created(
            format!("{PROJECTS_PATH}/{}", project.id()),
            ProjectResponse::from(&project),
        ))
    }

    /// `PUT /api/projects/{id}`
    ///
    /// # Errors
    ///
    /// Returns 404 when the project is absent, 400 for an invalid name, and
    /// 500 when storage fails.
    pub async fn update(&self, id: i32, body: ProjectBody) -> ApiResult<()> {
        let project_id = path_id(id)?;
        self.service
            .update_project(project_id, body.into())
            .await
            .map_err(service_error)?;
        Ok(ApiResponse::no_content())
    }

    /// `DELETE /api/projects/{id}`
    ///
    /// # Errors
    ///
    /// Returns 404 when the project is absent and 500 when storage fails.
    pub async fn delete(&self, id: i32) -> ApiResult<()> {
        let project_id = path_id(id)?;
        let removed = self
            .service
            .delete_project(project_id)
            .await
            .map_err(service_error)?;
        if !removed {
            return Err(project_not_found(id));
        }
        Ok(ApiResponse::no_content())
    }
}

/// Identifiers that can never be assigned are reported as absent.
fn path_id(id: i32) -> Result<ProjectId, ApiError> {
    ProjectId::new(id).map_err(|_| project_not_found(id))
}

fn project_not_found(id: i32) -> ApiError {
    ApiError::not_found(format!("project {id} not found"))
}

fn service_error(err: ProjectServiceError) -> ApiError {
    match err {
        ProjectServiceError::Domain(domain) => {
            ApiError::bad_request("VALIDATION_FAILED", domain.to_string())
        }
        ProjectServiceError::NotFound(id) => project_not_found(id.value()),
        ProjectServiceError::Repository(repository) => {
            error!(error = %repository, "project storage failed");
            ApiError::internal()
        }
    }
}
