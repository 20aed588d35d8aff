//! Integration tests for [`PostgresProjectRepository`] using embedded `PostgreSQL`.
//!
//! Run with `--features postgres-tests`. Each test clones a pre-migrated
//! template database so cases stay isolated.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::print_stderr,
    reason = "Test cleanup warnings are informational"
)]

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use pg_embedded_setup_unpriv::{TestCluster, test_support::shared_test_cluster};
use rstest::rstest;
use taskboard::project::{
    adapters::postgres::PostgresProjectRepository,
    domain::{NewProject, ProjectId, ProjectName, TaskStatus},
    ports::{ProjectRepository, ProjectRepositoryError},
    services::{ProjectRequest, ProjectService, ProjectServiceError},
};
use tokio::runtime::Runtime;

/// SQL creating the project and task tables.
const CREATE_SCHEMA_SQL: &str =
    include_str!("../migrations/2026-10-01-000000_create_projects_and_tasks/up.sql");

/// Template database name for pre-migrated schema.
const TEMPLATE_DB: &str = "taskboard_test_template";

type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

fn ensure_template(cluster: &TestCluster) -> Result<(), BoxError> {
    cluster
        .ensure_template_exists(TEMPLATE_DB, |db_name| {
            let url = cluster.connection().database_url(db_name);
            let mut conn = PgConnection::establish(&url).map_err(|e| eyre::eyre!("{e}"))?;
            execute_sql_statements(&mut conn, CREATE_SCHEMA_SQL)?;
            Ok(())
        })
        .map_err(|e| Box::new(e) as BoxError)?;
    Ok(())
}

/// Runs each `;`-separated statement on its own.
fn execute_sql_statements(conn: &mut PgConnection, sql: &str) -> eyre::Result<()> {
    for statement in sql.split(';') {
        let trimmed = statement.trim();
        if trimmed.is_empty() || trimmed.lines().all(|line| line.trim().starts_with("--")) {
            continue;
        }
        diesel::sql_query(trimmed)
            .execute(conn)
            .map_err(|e| eyre::eyre!("SQL error: {e}\nStatement: {trimmed}"))?;
    }
    Ok(())
}

fn setup_repository(
    cluster: &TestCluster,
    db_name: &str,
) -> Result<PostgresProjectRepository, BoxError> {
    cluster
        .create_database_from_template(db_name, TEMPLATE_DB)
        .map_err(|e| Box::new(e) as BoxError)?;
    let url = cluster.connection().database_url(db_name);
    let manager = ConnectionManager::<PgConnection>::new(url);
    let pool = Pool::builder()
        .max_size(1)
        .build(manager)
        .map_err(|e| Box::new(e) as BoxError)?;
    Ok(PostgresProjectRepository::new(pool))
}

fn raw_connection(cluster: &TestCluster, db_name: &str) -> PgConnection {
    let url = cluster.connection().database_url(db_name);
    PgConnection::establish(&url).expect("connection")
}

fn insert_task(cluster: &TestCluster, db_name: &str, project_id: i32, title: &str, status: &str) {
    let mut conn = raw_connection(cluster, db_name);
    diesel::sql_query("INSERT INTO tasks (title, status, project_id) VALUES ($1, $2, $3)")
        .bind::<diesel::sql_types::Text, _>(title)
        .bind::<diesel::sql_types::Text, _>(status)
        .bind::<diesel::sql_types::Integer, _>(project_id)
        .execute(&mut conn)
        .expect("insert task");
}

#[derive(QueryableByName)]
struct CountRow {
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    count: i64,
}

fn count_tasks(cluster: &TestCluster, db_name: &str) -> i64 {
    let mut conn = raw_connection(cluster, db_name);
    diesel::sql_query("SELECT COUNT(*) AS count FROM tasks")
        .get_result::<CountRow>(&mut conn)
        .expect("count tasks")
        .count
}

struct CleanupGuard<'a> {
    cluster: &'a TestCluster,
    db_name: String,
}

impl<'a> CleanupGuard<'a> {
    const fn new(cluster: &'a TestCluster, db_name: String) -> Self {
        Self { cluster, db_name }
    }
}

impl Drop for CleanupGuard<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.cluster.drop_database(&self.db_name) {
            eprintln!(
                "Warning: failed to drop test database {}: {e}",
                self.db_name
            );
        }
    }
}

fn new_project(name: &str, description: &str) -> NewProject {
    NewProject::new(ProjectName::new(name).expect("valid name"), description)
}

#[rstest]
fn add_assigns_sequential_ids_and_lists_in_order(shared_test_cluster: &'static TestCluster) {
    ensure_template(shared_test_cluster).expect("template setup");
    let db_name = format!("test_add_list_{}", uuid::Uuid::new_v4().simple());
    let _guard = CleanupGuard::new(shared_test_cluster, db_name.clone());
    let repo = setup_repository(shared_test_cluster, &db_name).expect("repository setup");
    let rt = test_runtime();

    let first = rt
        .block_on(repo.add(&new_project("Alpha", "first")))
        .expect("add should succeed");
    let second = rt
        .block_on(repo.add(&new_project("Beta", "")))
        .expect("add should succeed");
    let all = rt.block_on(repo.get_all()).expect("get_all should succeed");

    assert!(first.id() < second.id());
    assert!(first.tasks().is_empty());
    let names: Vec<&str> = all.iter().map(|p| p.name().as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Beta"]);
}

#[rstest]
fn get_by_id_loads_owned_tasks(shared_test_cluster: &'static TestCluster) {
    ensure_template(shared_test_cluster).expect("template setup");
    let db_name = format!("test_get_tasks_{}", uuid::Uuid::new_v4().simple());
    let _guard = CleanupGuard::new(shared_test_cluster, db_name.clone());
    let repo = setup_repository(shared_test_cluster, &db_name).expect("repository setup");
    let rt = test_runtime();

    let project = rt
        .block_on(repo.add(&new_project("Alpha", "")))
        .expect("add should succeed");
    let other = rt
        .block_on(repo.add(&new_project("Beta", "")))
        .expect("add should succeed");
    insert_task(shared_test_cluster, &db_name, project.id().value(), "Design", "done");
    insert_task(shared_test_cluster, &db_name, project.id().value(), "Build", "in_progress");
    insert_task(shared_test_cluster, &db_name, other.id().value(), "Elsewhere", "todo");

    let loaded = rt
        .block_on(repo.get_by_id(project.id()))
        .expect("get_by_id should succeed")
        .expect("project should exist");

    let tasks: Vec<(&str, TaskStatus)> = loaded
        .tasks()
        .iter()
        .map(|task| (task.title(), task.status()))
        .collect();
    assert_eq!(
        tasks,
        vec![("Design", TaskStatus::Done), ("Build", TaskStatus::InProgress)]
    );
    assert!(loaded.tasks().iter().all(|task| task.project_id() == project.id()));
}

#[rstest]
fn get_by_id_returns_none_for_missing(shared_test_cluster: &'static TestCluster) {
    ensure_template(shared_test_cluster).expect("template setup");
    let db_name = format!("test_get_none_{}", uuid::Uuid::new_v4().simple());
    let _guard = CleanupGuard::new(shared_test_cluster, db_name.clone());
    let repo = setup_repository(shared_test_cluster, &db_name).expect("repository setup");
    let rt = test_runtime();

    let missing = ProjectId::new(404).expect("valid id");
    let result = rt.block_on(repo.get_by_id(missing)).expect("query ok");

    assert!(result.is_none());
}

#[rstest]
fn update_changes_details_and_keeps_tasks(shared_test_cluster: &'static TestCluster) {
    ensure_template(shared_test_cluster).expect("template setup");
    let db_name = format!("test_update_{}", uuid::Uuid::new_v4().simple());
    let _guard = CleanupGuard::new(shared_test_cluster, db_name.clone());
    let repo = setup_repository(shared_test_cluster, &db_name).expect("repository setup");
    let rt = test_runtime();

    let mut project = rt
        .block_on(repo.add(&new_project("Alpha", "old")))
        .expect("add should succeed");
    insert_task(shared_test_cluster, &db_name, project.id().value(), "Keep me", "todo");
    project.apply_details(ProjectName::new("Alpha v2").expect("valid name"), "new");

    rt.block_on(repo.update(&project))
        .expect("update should succeed");
    let reloaded = rt
        .block_on(repo.get_by_id(project.id()))
        .expect("get_by_id should succeed")
        .expect("project should exist");

    assert_eq!(reloaded.name().as_str(), "Alpha v2");
    assert_eq!(reloaded.description(), "new");
    assert_eq!(reloaded.tasks().len(), 1);
}

#[rstest]
fn update_missing_project_is_not_found(shared_test_cluster: &'static TestCluster) {
    ensure_template(shared_test_cluster).expect("template setup");
    let db_name = format!("test_update_missing_{}", uuid::Uuid::new_v4().simple());
    let _guard = CleanupGuard::new(shared_test_cluster, db_name.clone());
    let repo = setup_repository(shared_test_cluster, &db_name).expect("repository setup");
    let rt = test_runtime();

    let ghost = new_project("Ghost", "").into_project(ProjectId::new(77).expect("valid id"));
    let result = rt.block_on(repo.update(&ghost));

    assert!(matches!(result, Err(ProjectRepositoryError::NotFound(id)) if id.value() == 77));
}

#[rstest]
fn delete_cascades_tasks_and_is_idempotent(shared_test_cluster: &'static TestCluster) {
    ensure_template(shared_test_cluster).expect("template setup");
    let db_name = format!("test_delete_{}", uuid::Uuid::new_v4().simple());
    let _guard = CleanupGuard::new(shared_test_cluster, db_name.clone());
    let repo = setup_repository(shared_test_cluster, &db_name).expect("repository setup");
    let rt = test_runtime();

    let project = rt
        .block_on(repo.add(&new_project("Alpha", "")))
        .expect("add should succeed");
    insert_task(shared_test_cluster, &db_name, project.id().value(), "Doomed", "todo");

    let first = rt
        .block_on(repo.delete(project.id()))
        .expect("delete should succeed");
    let second = rt
        .block_on(repo.delete(project.id()))
        .expect("repeat delete should succeed");

    assert!(first);
    assert!(!second);
    assert_eq!(count_tasks(shared_test_cluster, &db_name), 0);
}

#[rstest]
fn service_round_trip_over_postgres(shared_test_cluster: &'static TestCluster) {
    ensure_template(shared_test_cluster).expect("template setup");
    let db_name = format!("test_service_{}", uuid::Uuid::new_v4().simple());
    let _guard = CleanupGuard::new(shared_test_cluster, db_name.clone());
    let repo = setup_repository(shared_test_cluster, &db_name).expect("repository setup");
    let service = ProjectService::new(std::sync::Arc::new(repo));
    let rt = test_runtime();

    let created = rt
        .block_on(service.add_project(ProjectRequest::new("Roadmap").with_description("Q3")))
        .expect("add should succeed");
    let updated = rt
        .block_on(service.update_project(created.id(), ProjectRequest::new("Roadmap v2")))
        .expect("update should succeed");
    let missing = rt.block_on(
        service.update_project(ProjectId::new(9999).expect("valid id"), ProjectRequest::new("x")),
    );

    assert_eq!(updated.id(), created.id());
    assert_eq!(updated.name().as_str(), "Roadmap v2");
    assert!(matches!(missing, Err(ProjectServiceError::NotFound(_))));
}
