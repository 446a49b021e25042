//! `PostgreSQL` user store.

use super::{models::UserRow, schema::users};
use crate::account::{
    domain::{NewUser, PasswordHash, User, UserId, Username},
    ports::{UserStore, UserStoreError, UserStoreResult},
};
use crate::database::{BlockingError, PgPool, run_blocking};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

impl From<BlockingError> for UserStoreError {
    fn from(err: BlockingError) -> Self {
        Self::persistence(err)
    }
}

/// `PostgreSQL`-backed user store.
#[derive(Debug, Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn exists(&self, username: &Username) -> UserStoreResult<bool> {
        let name = username.as_str().to_owned();
        run_blocking(&self.pool, move |connection| {
            diesel::select(diesel::dsl::exists(
                users::table.filter(users::username.eq(name)),
            ))
            .get_result::<bool>(connection)
            .map_err(UserStoreError::persistence)
        })
        .await
    }

    async fn find_by_username(&self, username: &Username) -> UserStoreResult<Option<User>> {
        let name = username.as_str().to_owned();
        let row = run_blocking(&self.pool, move |connection| {
            users::table
                .filter(users::username.eq(name))
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(UserStoreError::persistence)
        })
        .await?;
        row.map(row_to_user).transpose()
    }

    async fn create(&self, user: NewUser) -> UserStoreResult<User> {
        let created = User::register(UserId::new(), user);
        let row = UserRow {
            id: created.id().into_inner(),
            username: created.username().as_str().to_owned(),
            password_hash: created.password_hash().as_str().to_owned(),
            created_at: created.created_at(),
        };
        let username = created.username().clone();
        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(users::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        UserStoreError::DuplicateUsername(username)
                    }
                    _ => UserStoreError::persistence(err),
                })?;
            Ok::<(), UserStoreError>(())
        })
        .await?;
        Ok(created)
    }
}

fn row_to_user(row: UserRow) -> UserStoreResult<User> {
    let UserRow {
        id,
        username,
        password_hash,
        created_at,
    } = row;
    let name = Username::new(username).map_err(UserStoreError::invalid_persisted_data)?;
    Ok(User::new(
        UserId::from_uuid(id),
        name,
        PasswordHash::new(password_hash),
        created_at,
    ))
}
