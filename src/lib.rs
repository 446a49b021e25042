//! Taskboard: a personal task-management backend.
//!
//! Users sign up with a validated username and password, then create, edit,
//! complete, and delete tasks that only they can see.
//!
//! # Architecture
//!
//! Each feature module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//! - **Services**: Orchestration over ports
//!
//! # Modules
//!
//! - [`account`]: Credential rules and signup
//! - [`task`]: Owner-scoped task lifecycle, listings, and reference data
//! - [`config`]: File and environment configuration
//! - [`database`]: Connection pooling and schema migrations

pub mod account;
pub mod config;
pub mod database;
pub mod task;
