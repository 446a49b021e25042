//! In-memory adapters for task persistence and reference data.

mod reference;
mod task;

pub use reference::InMemoryReferenceData;
pub use task::InMemoryTaskRepository;
