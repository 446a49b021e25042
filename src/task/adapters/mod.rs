//! Adapter implementations for task ports.

pub mod default_status;
pub mod memory;
pub mod postgres;

pub use default_status::ReferenceDefaultStatus;
