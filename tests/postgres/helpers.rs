//! Schema-per-test isolation for `PostgreSQL` integration tests.

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::{Connection, PgConnection};
use taskboard::database::{PgPool, apply_migrations};
use uuid::Uuid;

/// Environment variable naming the test database.
pub const DATABASE_URL_ENV: &str = "TASKBOARD_TEST_DATABASE_URL";

/// Boxed error type used by helpers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug)]
struct SearchPath(String);

impl CustomizeConnection<PgConnection, diesel::r2d2::Error> for SearchPath {
    fn on_acquire(&self, connection: &mut PgConnection) -> Result<(), diesel::r2d2::Error> {
        connection
            .batch_execute(&format!("SET search_path TO {}", self.0))
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Migrated private schema plus a pool bound to it.
pub struct IsolatedSchema {
    url: String,
    schema: String,
    pool: PgPool,
}

impl IsolatedSchema {
    /// Creates and migrates a fresh schema, or returns `None` when no test
    /// database is configured.
    pub fn create() -> Result<Option<Self>, BoxError> {
        let Ok(url) = std::env::var(DATABASE_URL_ENV) else {
            return Ok(None);
        };
        let schema = format!("taskboard_test_{}", Uuid::new_v4().simple());
        let mut admin = PgConnection::establish(&url)?;
        admin.batch_execute(&format!("CREATE SCHEMA {schema}"))?;

        let pool = Pool::builder()
            .max_size(2)
            .connection_customizer(Box::new(SearchPath(schema.clone())))
            .build(ConnectionManager::<PgConnection>::new(url.as_str()))?;
        let mut connection = pool.get()?;
        apply_migrations(&mut connection)?;

        Ok(Some(Self { url, schema, pool }))
    }

    /// Returns a pool whose connections use the private schema.
    pub fn pool(&self) -> PgPool {
        self.pool.clone()
    }
}

impl Drop for IsolatedSchema {
    fn drop(&mut self) {
        if let Ok(mut admin) = PgConnection::establish(&self.url) {
            let _ = admin.batch_execute(&format!("DROP SCHEMA IF EXISTS {} CASCADE", self.schema));
        }
    }
}
