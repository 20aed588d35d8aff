//! `PostgreSQL` repository implementation for project storage.

use super::{
    models::{NewProjectRow, ProjectDetailsChangeset, ProjectRow, TaskRow},
    schema::{projects, tasks},
};
use crate::project::{
    domain::{
        NewProject, PersistedProjectData, PersistedTaskItemData, Project, ProjectId, ProjectName,
        TaskItem, TaskItemId, TaskStatus,
    },
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use std::collections::HashMap;

/// `PostgreSQL` connection pool type used by project adapters.
pub type ProjectPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed project repository.
#[derive(Debug, Clone)]
pub struct PostgresProjectRepository {
    pool: ProjectPgPool,
}

impl PostgresProjectRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ProjectPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ProjectRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ProjectRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ProjectRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ProjectRepositoryError::persistence)?
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn get_all(&self) -> ProjectRepositoryResult<Vec<Project>> {
        self.run_blocking(|connection| {
            let rows = projects::table
                .order(projects::id.asc())
                .select(ProjectRow::as_select())
                .load::<ProjectRow>(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            assemble_projects(connection, rows)
        })
        .await
    }

    async fn get_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        self.run_blocking(move |connection| {
            let row = projects::table
                .find(id.value())
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(connection)
                .optional()
                .map_err(ProjectRepositoryError::persistence)?;
            let Some(found) = row else {
                return Ok(None);
            };
            let mut assembled = assemble_projects(connection, vec![found])?;
            Ok(assembled.pop())
        })
        .await
    }

    async fn add(&self, project: &NewProject) -> ProjectRepositoryResult<Project> {
        let name = project.name().as_str().to_owned();
        let description = project.description().to_owned();

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(projects::table)
                .values(&NewProjectRow {
                    name: &name,
                    description: &description,
                })
                .returning(ProjectRow::as_returning())
                .get_result::<ProjectRow>(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            row_to_project(row, Vec::new())
        })
        .await
    }

    async fn update(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let project_id = project.id();
        let name = project.name().as_str().to_owned();
        let description = project.description().to_owned();

        self.run_blocking(move |connection| {
            let affected = diesel::update(projects::table.find(project_id.value()))
                .set(&ProjectDetailsChangeset {
                    name: &name,
                    description: &description,
                })
                .execute(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            if affected == 0 {
                return Err(ProjectRepositoryError::NotFound(project_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            // Owned tasks go with the row through the ON DELETE CASCADE key.
            let affected = diesel::delete(projects::table.find(id.value()))
                .execute(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            Ok(affected > 0)
        })
        .await
    }
}

/// Loads the tasks of every given project in one query and builds the
/// aggregates, preserving the order of `rows`.
fn assemble_projects(
    connection: &mut PgConnection,
    rows: Vec<ProjectRow>,
) -> ProjectRepositoryResult<Vec<Project>> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let project_ids: Vec<i32> = rows.iter().map(|row| row.id).collect();
    let task_rows = tasks::table
        .filter(tasks::project_id.eq_any(project_ids))
        .order(tasks::id.asc())
        .select(TaskRow::as_select())
        .load::<TaskRow>(connection)
        .map_err(ProjectRepositoryError::persistence)?;

    let mut tasks_by_project: HashMap<i32, Vec<TaskItem>> = HashMap::new();
    for task_row in task_rows {
        let project_key = task_row.project_id;
        let task = row_to_task(task_row)?;
        tasks_by_project.entry(project_key).or_default().push(task);
    }

    rows.into_iter()
        .map(|row| {
            let owned_tasks = tasks_by_project.remove(&row.id).unwrap_or_default();
            row_to_project(row, owned_tasks)
        })
        .collect()
}

fn row_to_project(row: ProjectRow, tasks: Vec<TaskItem>) -> ProjectRepositoryResult<Project> {
    let ProjectRow {
        id,
        name,
        description,
    } = row;

    let data = PersistedProjectData {
        id: ProjectId::new(id).map_err(ProjectRepositoryError::invalid_persisted_data)?,
        name: ProjectName::new(name).map_err(ProjectRepositoryError::invalid_persisted_data)?,
        description,
        tasks,
    };
    Ok(Project::from_persisted(data))
}

fn row_to_task(row: TaskRow) -> ProjectRepositoryResult<TaskItem> {
    let TaskRow {
        id,
        title,
        description,
        status,
        project_id,
    } = row;

    let data = PersistedTaskItemData {
        id: TaskItemId::new(id).map_err(ProjectRepositoryError::invalid_persisted_data)?,
        project_id: ProjectId::new(project_id)
            .map_err(ProjectRepositoryError::invalid_persisted_data)?,
        title,
        description,
        status: TaskStatus::try_from(status.as_str())
            .map_err(ProjectRepositoryError::invalid_persisted_data)?,
    };
    Ok(TaskItem::from_persisted(data))
}
