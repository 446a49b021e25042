//! Repository port for owner-scoped task persistence and listing.

use crate::task::domain::{OwnerId, StatusKind, Task, TaskId};
use async_trait::async_trait;
use std::cmp::Reverse;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Every write touches a single task record and is atomic at that level.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Persists changes to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Permanently removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier regardless of owner.
    ///
    /// Returns `None` when the task does not exist. Callers are responsible
    /// for the ownership check.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns the tasks matching `query`, in the order it requests.
    async fn list(&self, query: &TaskQuery) -> TaskRepositoryResult<Vec<Task>>;
}

/// Ordering applied to task listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOrder {
    /// Oldest task first.
    CreatedAscending,
    /// Highest priority level first, then most recently completed first.
    PriorityThenCompletionDescending,
}

/// Owner-scoped task listing filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskQuery {
    owner: OwnerId,
    status_kinds: Vec<StatusKind>,
    fully_completed: bool,
    order: TaskOrder,
}

impl TaskQuery {
    /// Tasks owned by `owner` whose status is To Do, In Progress, or Past Due.
    #[must_use]
    pub fn active(owner: OwnerId) -> Self {
        Self {
            owner,
            status_kinds: StatusKind::ACTIVE.to_vec(),
            fully_completed: false,
            order: TaskOrder::CreatedAscending,
        }
    }

    /// Tasks owned by `owner` that are completed with progress 100 and a
    /// completion date.
    #[must_use]
    pub fn completed(owner: OwnerId) -> Self {
        Self {
            owner,
            status_kinds: vec![StatusKind::Completed],
            fully_completed: true,
            order: TaskOrder::PriorityThenCompletionDescending,
        }
    }

    /// Returns the owner the listing is scoped to.
    #[must_use]
    pub const fn owner(&self) -> OwnerId {
        self.owner
    }

    /// Returns the accepted status kinds.
    #[must_use]
    pub fn status_kinds(&self) -> &[StatusKind] {
        &self.status_kinds
    }

    /// Returns `true` when progress 100 and a completion date are required.
    #[must_use]
    pub const fn requires_full_completion(&self) -> bool {
        self.fully_completed
    }

    /// Returns the requested ordering.
    #[must_use]
    pub const fn order(&self) -> TaskOrder {
        self.order
    }

    /// Returns `true` when `task` belongs in this listing.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        if !task.is_owned_by(self.owner) {
            return false;
        }
        if !self.status_kinds.contains(&task.status().kind()) {
            return false;
        }
        !self.fully_completed
            || (task.progress().is_complete() && task.completion_date().is_some())
    }

    /// Sorts `tasks` into the requested order.
    pub fn sort(&self, tasks: &mut [Task]) {
        match self.order {
            TaskOrder::CreatedAscending => tasks.sort_by_key(Task::created_at),
            TaskOrder::PriorityThenCompletionDescending => tasks.sort_by_key(|task| {
                (
                    Reverse(task.priority().level()),
                    Reverse(task.completion_date()),
                )
            }),
        }
    }
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The store rejected the write because a constraint was violated.
    #[error("integrity constraint violated: {0}")]
    Integrity(Arc<dyn std::error::Error + Send + Sync>),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a constraint violation reported by the store.
    pub fn integrity(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Integrity(Arc::new(err))
    }

    /// Wraps a data-quality error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
