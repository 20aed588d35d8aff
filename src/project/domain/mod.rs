//! Domain model for project and task records.
//!
//! Projects are aggregates owning their tasks. Tasks reference their parent
//! through an explicit [`ProjectId`] foreign key rather than a back-pointer,
//! so the aggregate stays a plain tree of owned values.

mod error;
mod ids;
mod name;
mod project;
mod task_item;

pub use error::{ParseTaskStatusError, ProjectDomainError};
pub use ids::{ProjectId, TaskItemId};
pub use name::ProjectName;
pub use project::{NewProject, PersistedProjectData, Project};
pub use task_item::{PersistedTaskItemData, TaskItem, TaskStatus};
