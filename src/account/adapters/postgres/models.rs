//! Diesel row model for users.

use super::schema::users;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query and insert row for user records.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// User identifier.
    pub id: uuid::Uuid,
    /// Unique username.
    pub username: String,
    /// Encoded credential hash.
    pub password_hash: String,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}
