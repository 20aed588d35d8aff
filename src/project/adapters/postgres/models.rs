//! Diesel row models for project persistence.

use super::schema::{projects, tasks};
use diesel::prelude::*;

/// Query result row for project records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    /// Project identifier.
    pub id: i32,
    /// Project name.
    pub name: String,
    /// Project description.
    pub description: String,
}

/// Insert model for project records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = projects)]
pub struct NewProjectRow<'a> {
    /// Project name.
    pub name: &'a str,
    /// Project description.
    pub description: &'a str,
}

/// Changeset for the mutable project columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = projects)]
pub struct ProjectDetailsChangeset<'a> {
    /// Replacement name.
    pub name: &'a str,
    /// Replacement description.
    pub description: &'a str,
}

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: i32,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Task status.
    pub status: String,
    /// Owning project identifier.
    pub project_id: i32,
}
