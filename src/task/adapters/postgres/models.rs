//! Diesel row models for task and reference data persistence.

use super::schema::{priorities, statuses, tasks};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query and insert row for priority records.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = priorities)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PriorityRow {
    /// Priority identifier.
    pub id: uuid::Uuid,
    /// Numeric level.
    pub level: i32,
    /// Display name.
    pub name: String,
}

/// Query and insert row for status records.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = statuses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StatusRow {
    /// Status identifier.
    pub id: uuid::Uuid,
    /// Status name.
    pub name: String,
}

/// Query and insert row for task records.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning user identifier.
    pub owner_id: uuid::Uuid,
    /// Task name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Objectives.
    pub objectives: String,
    /// Creation timestamp.
    pub created_date: DateTime<Utc>,
    /// Planned start.
    pub start_date: Option<DateTime<Utc>>,
    /// Due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Completion timestamp.
    pub completion_date: Option<DateTime<Utc>>,
    /// Referenced priority.
    pub priority_id: uuid::Uuid,
    /// Referenced status.
    pub status_id: uuid::Uuid,
    /// Completion percentage.
    pub progress: i32,
}

/// Mutable task columns; owner and creation date are never rewritten.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Task name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Objectives.
    pub objectives: String,
    /// Planned start.
    pub start_date: Option<DateTime<Utc>>,
    /// Due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Completion timestamp.
    pub completion_date: Option<DateTime<Utc>>,
    /// Referenced priority.
    pub priority_id: uuid::Uuid,
    /// Referenced status.
    pub status_id: uuid::Uuid,
    /// Completion percentage.
    pub progress: i32,
}
