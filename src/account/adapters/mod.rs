//! Adapter implementations for account ports.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryUserStore;
pub use postgres::PostgresUserStore;
