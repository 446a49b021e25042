//! `PostgreSQL` adapters for task and reference data persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresReferenceData, PostgresTaskRepository};
