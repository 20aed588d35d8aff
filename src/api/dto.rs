//! Wire representations exchanged with HTTP clients.
//!
//! Field names are PascalCase on the wire (`Name`, `ProjectId`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::auth::domain::{AuthTokens, UserSub};
use crate::auth::services::{LoginRequest, RegisterRequest};
use crate::project::domain::{Project, TaskItem, TaskStatus};
use crate::project::services::ProjectRequest;

/// Body of project create and update requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectBody {
    /// Requested project name.
    pub name: String,
    /// Requested description; absent means empty.
    #[serde(default)]
    pub description: String,
}

impl From<ProjectBody> for ProjectRequest {
    fn from(body: ProjectBody) -> Self {
        Self::new(body.name).with_description(body.description)
    }
}

/// Task status as exposed to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatusBody {
    /// Work has not started.
    Todo,
    /// Work is underway.
    InProgress,
    /// Work is finished.
    Done,
}

impl From<TaskStatus> for TaskStatusBody {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Todo => Self::Todo,
            TaskStatus::InProgress => Self::InProgress,
            TaskStatus::Done => Self::Done,
        }
    }
}

/// Task as returned inside a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaskResponse {
    /// Task identifier.
    pub id: i32,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Task status.
    pub status: TaskStatusBody,
    /// Identifier of the owning project.
    pub project_id: i32,
}

impl From<&TaskItem> for TaskResponse {
    fn from(task: &TaskItem) -> Self {
        Self {
            id: task.id().value(),
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            status: task.status().into(),
            project_id: task.project_id().value(),
        }
    }
}

/// Project with its tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectResponse {
    /// Project identifier.
    pub id: i32,
    /// Project name.
    pub name: String,
    /// Project description.
    pub description: String,
    /// Owned tasks in identifier order.
    pub tasks: Vec<TaskResponse>,
}

impl From<&Project> for ProjectResponse {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id().value(),
            name: project.name().as_str().to_owned(),
            description: project.description().to_owned(),
            tasks: project.tasks().iter().map(TaskResponse::from).collect(),
        }
    }
}

/// Body of register and login requests.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CredentialsBody {
    /// Email address used as the username.
    pub email: String,
    /// Plain-text password, forwarded to the identity provider only.
    pub password: String,
}

impl fmt::Debug for CredentialsBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsBody")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl From<CredentialsBody> for RegisterRequest {
    fn from(body: CredentialsBody) -> Self {
        Self::new(body.email, body.password)
    }
}

impl From<CredentialsBody> for LoginRequest {
    fn from(body: CredentialsBody) -> Self {
        Self::new(body.email, body.password)
    }
}

/// Successful registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegisterResponse {
    /// Subject identifier issued by the identity provider.
    pub user_id: String,
}

impl From<UserSub> for RegisterResponse {
    fn from(sub: UserSub) -> Self {
        Self {
            user_id: sub.as_str().to_owned(),
        }
    }
}

/// Successful login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginResponse {
    /// Bearer access token.
    pub token: String,
}

impl From<AuthTokens> for LoginResponse {
    fn from(tokens: AuthTokens) -> Self {
        Self {
            token: tokens.access_token().to_owned(),
        }
    }
}

impl fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginResponse").finish_non_exhaustive()
    }
}

/// Error payload returned with every non-success status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorBody {
    /// Stable machine-readable code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}
