//! Domain model for personal task management.
//!
//! Tasks belong to a single owner, reference immutable priority and status
//! records, and track progress towards completion. Infrastructure concerns
//! stay outside this boundary.

mod error;
mod ids;
mod reference;
mod task;

pub use error::TaskDomainError;
pub use ids::{OwnerId, PriorityId, StatusId, TaskId};
pub use reference::{Priority, PriorityName, Status, StatusKind, StatusName};
pub use task::{NewTaskDetails, PersistedTaskData, Progress, Task, TaskName, TaskSchedule};
