//! Transport mapping for the HTTP contract.
//!
//! Handlers translate wire DTOs into service requests and service outcomes
//! into status-coded responses. Socket handling and routing belong to the
//! embedding server; this module only decides what each route returns.
//!
//! | Route                          | Success | Failures           |
//! |--------------------------------|---------|--------------------|
//! | `POST /api/auth/register`      | 200     | 400, 500           |
//! | `POST /api/auth/login`         | 200     | 400, 401, 500      |
//! | `GET /api/projects`            | 200     | 500                |
//! | `GET /api/projects/{id}`       | 200     | 404, 500           |
//! | `POST /api/projects`           | 201     | 400, 500           |
//! | `PUT /api/projects/{id}`       | 204     | 400, 404, 500      |
//! | `DELETE /api/projects/{id}`    | 204     | 404, 500           |

mod auth;
pub mod dto;
mod projects;
mod response;

pub use auth::AuthApi;
pub use projects::{PROJECTS_PATH, ProjectsApi};
pub use response::{ApiError, ApiResponse, ApiResult, parse_body, status};

#[cfg(test)]
mod tests;
