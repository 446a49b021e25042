//! `PostgreSQL` connection pooling, schema bootstrap, and blocking helpers.
//!
//! Diesel connections are synchronous, so adapters hand their work to
//! [`run_blocking`], which checks out a pooled connection on a blocking
//! thread.

use crate::config::DatabaseConfig;
use diesel::PgConnection;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use thiserror::Error;

/// `PostgreSQL` connection pool type shared by all adapters.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Ordered schema migrations as `(name, up.sql)` pairs.
pub const MIGRATIONS: [(&str, &str); 3] = [
    (
        "2026-10-01-000000_create_reference_tables",
        include_str!("../migrations/2026-10-01-000000_create_reference_tables/up.sql"),
    ),
    (
        "2026-10-01-000001_create_users",
        include_str!("../migrations/2026-10-01-000001_create_users/up.sql"),
    ),
    (
        "2026-10-01-000002_create_tasks",
        include_str!("../migrations/2026-10-01-000002_create_tasks/up.sql"),
    ),
];

const MIGRATION_LEDGER_SQL: &str = concat!(
    "CREATE TABLE IF NOT EXISTS schema_migrations (",
    "name VARCHAR(255) PRIMARY KEY, ",
    "applied_at TIMESTAMPTZ NOT NULL DEFAULT now())",
);

/// Failures raised while running blocking database work.
#[derive(Debug, Error)]
pub enum BlockingError {
    /// No connection could be checked out of the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),
    /// The blocking task panicked or was cancelled.
    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Errors raised while bootstrapping the database.
#[derive(Debug, Error)]
pub enum DatabaseSetupError {
    /// The pool could not be built.
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] PoolError),
    /// A migration statement failed.
    #[error("migration {name} failed: {source}")]
    Migration {
        /// Migration that failed.
        name: &'static str,
        /// Underlying database error.
        source: diesel::result::Error,
    },
    /// Reading the migration ledger failed.
    #[error("failed to read migration ledger: {0}")]
    Ledger(diesel::result::Error),
}

/// Builds a connection pool from configuration.
///
/// # Errors
///
/// Returns [`DatabaseSetupError::Pool`] when the pool cannot establish its
/// initial connections.
pub fn build_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseSetupError> {
    let manager = ConnectionManager::<PgConnection>::new(config.url.as_str());
    let pool = Pool::builder()
        .max_size(config.max_connections)
        .build(manager)?;
    Ok(pool)
}

/// Applies every migration not yet recorded in `schema_migrations`.
///
/// Returns the names of the migrations applied by this call.
///
/// # Errors
///
/// Returns [`DatabaseSetupError`] when the ledger cannot be read or a
/// migration fails. Each migration runs in its own transaction.
pub fn apply_migrations(
    connection: &mut PgConnection,
) -> Result<Vec<&'static str>, DatabaseSetupError> {
    use diesel::prelude::*;

    #[derive(QueryableByName)]
    struct AppliedRow {
        #[diesel(sql_type = diesel::sql_types::Bool)]
        applied: bool,
    }

    connection
        .batch_execute(MIGRATION_LEDGER_SQL)
        .map_err(DatabaseSetupError::Ledger)?;

    let mut applied = Vec::new();
    for (name, sql) in MIGRATIONS {
        let row = diesel::sql_query(
            "SELECT EXISTS (SELECT 1 FROM schema_migrations WHERE name = $1) AS applied",
        )
        .bind::<diesel::sql_types::Text, _>(name)
        .get_result::<AppliedRow>(connection)
        .map_err(DatabaseSetupError::Ledger)?;
        if row.applied {
            continue;
        }

        connection
            .transaction::<_, diesel::result::Error, _>(|tx| {
                tx.batch_execute(sql)?;
                diesel::sql_query("INSERT INTO schema_migrations (name) VALUES ($1)")
                    .bind::<diesel::sql_types::Text, _>(name)
                    .execute(tx)?;
                Ok(())
            })
            .map_err(|source| DatabaseSetupError::Migration { name, source })?;
        tracing::info!(migration = name, "applied migration");
        applied.push(name);
    }
    Ok(applied)
}

/// Runs `operation` with a pooled connection on the blocking thread pool.
///
/// Pool and join failures are converted into the caller's error type.
///
/// # Errors
///
/// Returns the operation's own error, or a converted [`BlockingError`].
pub async fn run_blocking<F, T, E>(pool: &PgPool, operation: F) -> Result<T, E>
where
    F: FnOnce(&mut PgConnection) -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: From<BlockingError> + Send + 'static,
{
    let shared_pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = shared_pool.get().map_err(BlockingError::from)?;
        operation(&mut connection)
    })
    .await
    .map_err(BlockingError::from)?
}
