//! Port contracts for task lifecycle management.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod default_status;
pub mod reference;
pub mod repository;

pub use default_status::{DefaultStatusError, DefaultStatusProvider};
pub use reference::{ReferenceDataError, ReferenceDataRepository, ReferenceDataResult};
pub use repository::{
    TaskOrder, TaskQuery, TaskRepository, TaskRepositoryError, TaskRepositoryResult,
};
