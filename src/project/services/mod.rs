//! Application services for project management.

mod project;

pub use project::{ProjectRequest, ProjectService, ProjectServiceError, ProjectServiceResult};
