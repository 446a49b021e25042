//! Service layer for owner-scoped task creation, editing, completion, and
//! deletion.

use crate::task::{
    domain::{
        NewTaskDetails, OwnerId, Priority, PriorityId, Progress, Status, StatusId, StatusName,
        Task, TaskDomainError, TaskId, TaskName, TaskSchedule,
    },
    ports::{
        DefaultStatusError, DefaultStatusProvider, ReferenceDataError, ReferenceDataRepository,
        TaskQuery, TaskRepository, TaskRepositoryError,
    },
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Typed input for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskInput {
    name: String,
    priority: Option<PriorityId>,
    description: String,
    objectives: String,
    schedule: TaskSchedule,
    status: Option<StatusId>,
}

impl CreateTaskInput {
    /// Creates an input carrying only the task name.
    ///
    /// A priority must be added with [`CreateTaskInput::with_priority`]
    /// before the input is accepted.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            priority: None,
            description: String::new(),
            objectives: String::new(),
            schedule: TaskSchedule::default(),
            status: None,
        }
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: PriorityId) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the objectives.
    #[must_use]
    pub fn with_objectives(mut self, objectives: impl Into<String>) -> Self {
        self.objectives = objectives.into();
        self
    }

    /// Sets the planned start date.
    #[must_use]
    pub const fn with_start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.schedule.start_date = Some(start_date);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.schedule.due_date = Some(due_date);
        self
    }

    /// Starts the task in an explicit open status instead of the default.
    #[must_use]
    pub const fn with_status(mut self, status: StatusId) -> Self {
        self.status = Some(status);
        self
    }
}

/// Typed input for editing a task.
///
/// Only fields that were set are applied. Status, progress, and completion
/// date are copied verbatim; nothing keeps them consistent with each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditTaskInput {
    name: Option<String>,
    description: Option<String>,
    objectives: Option<String>,
    start_date: Option<Option<DateTime<Utc>>>,
    due_date: Option<Option<DateTime<Utc>>>,
    priority: Option<PriorityId>,
    status: Option<StatusId>,
    progress: Option<i64>,
    completion_date: Option<Option<DateTime<Utc>>>,
}

impl EditTaskInput {
    /// Creates an input that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the objectives.
    #[must_use]
    pub fn with_objectives(mut self, objectives: impl Into<String>) -> Self {
        self.objectives = Some(objectives.into());
        self
    }

    /// Replaces or clears the planned start date.
    #[must_use]
    pub const fn with_start_date(mut self, start_date: Option<DateTime<Utc>>) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Replaces or clears the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<DateTime<Utc>>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: PriorityId) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replaces the status.
    #[must_use]
    pub const fn with_status(mut self, status: StatusId) -> Self {
        self.status = Some(status);
        self
    }

    /// Replaces the progress percentage.
    #[must_use]
    pub const fn with_progress(mut self, progress: i64) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Replaces or clears the completion date.
    #[must_use]
    pub const fn with_completion_date(mut self, completion_date: Option<DateTime<Utc>>) -> Self {
        self.completion_date = Some(completion_date);
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The task exists but belongs to someone else.
    #[error("task {task_id} is not owned by {owner}")]
    PermissionDenied {
        /// Task the caller asked for.
        task_id: TaskId,
        /// Caller identity.
        owner: OwnerId,
    },

    /// The selected priority does not exist.
    #[error("priority not found: {0}")]
    PriorityNotFound(PriorityId),

    /// The selected status does not exist.
    #[error("status not found: {0}")]
    StatusNotFound(StatusId),

    /// The default status could not be resolved.
    #[error(transparent)]
    DefaultStatus(#[from] DefaultStatusError),

    /// A status the service relies on is not seeded.
    #[error("required status '{0}' is not present in the status table")]
    MissingStatus(StatusName),

    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),

    /// Reference data lookup failed.
    #[error(transparent)]
    ReferenceData(#[from] ReferenceDataError),
}

impl TaskLifecycleError {
    /// Returns `true` for errors that mean the deployment is missing seed
    /// data. These are not user-correctable.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::DefaultStatus(DefaultStatusError::Missing(_)) | Self::MissingStatus(_)
        )
    }

    /// Returns `true` when the caller may not see the task, either because
    /// it does not exist or because it belongs to another owner.
    #[must_use]
    pub const fn is_access_denied(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::PermissionDenied { .. })
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Owner-scoped task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, P, D, C>
where
    R: TaskRepository,
    P: ReferenceDataRepository,
    D: DefaultStatusProvider,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    reference_data: Arc<P>,
    default_status: Arc<D>,
    clock: Arc<C>,
}

impl<R, P, D, C> TaskLifecycleService<R, P, D, C>
where
    R: TaskRepository,
    P: ReferenceDataRepository,
    D: DefaultStatusProvider,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(
        repository: Arc<R>,
        reference_data: Arc<P>,
        default_status: Arc<D>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            repository,
            reference_data,
            default_status,
            clock,
        }
    }

    /// Creates a task owned by `owner`.
    ///
    /// The task starts with zero progress, no completion date, and either
    /// the requested open status or the default status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the name is invalid, the
    /// priority is missing, or a completed status is requested;
    /// [`TaskLifecycleError::PriorityNotFound`] or
    /// [`TaskLifecycleError::StatusNotFound`] for unknown references;
    /// [`TaskLifecycleError::DefaultStatus`] when the default status is not
    /// seeded; and [`TaskLifecycleError::Repository`] when persistence fails.
    #[tracing::instrument(skip(self, input), fields(%owner))]
    pub async fn create(
        &self,
        owner: OwnerId,
        input: CreateTaskInput,
    ) -> TaskLifecycleResult<Task> {
        let CreateTaskInput {
            name,
            priority,
            description,
            objectives,
            schedule,
            status,
        } = input;

        let task_name = TaskName::new(name)?;
        let priority_id = priority.ok_or(TaskDomainError::MissingPriority)?;
        let priority_record = self.load_priority(priority_id).await?;
        let status_record = match status {
            Some(status_id) => self.load_status(status_id).await?,
            None => self.resolve_default_status().await?,
        };

        let details = NewTaskDetails {
            name: task_name,
            description,
            objectives,
            schedule,
            priority: priority_record,
            status: status_record,
        };
        let task = Task::new(owner, details, &*self.clock)?;
        self.repository.store(&task).await?;
        tracing::info!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Returns the task when it is owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] or
    /// [`TaskLifecycleError::PermissionDenied`] when the caller may not see
    /// the task, or [`TaskLifecycleError::Repository`] when lookup fails.
    #[tracing::instrument(skip(self), fields(%task_id, %owner))]
    pub async fn find(&self, task_id: TaskId, owner: OwnerId) -> TaskLifecycleResult<Task> {
        self.owned_task(task_id, owner).await
    }

    /// Applies the fields set in `input` to an owned task.
    ///
    /// All input is validated before the task is touched, so a failed edit
    /// leaves the stored task unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] or
    /// [`TaskLifecycleError::PermissionDenied`] when the caller may not edit
    /// the task, [`TaskLifecycleError::Domain`] for invalid field values,
    /// [`TaskLifecycleError::PriorityNotFound`] or
    /// [`TaskLifecycleError::StatusNotFound`] for unknown references, and
    /// [`TaskLifecycleError::Repository`] when persistence fails.
    #[tracing::instrument(skip(self, input), fields(%task_id, %owner))]
    pub async fn edit(
        &self,
        task_id: TaskId,
        owner: OwnerId,
        input: EditTaskInput,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.owned_task(task_id, owner).await?;

        let EditTaskInput {
            name,
            description,
            objectives,
            start_date,
            due_date,
            priority,
            status,
            progress,
            completion_date,
        } = input;

        let task_name = name.map(TaskName::new).transpose()?;
        let new_progress = progress.map(Progress::new).transpose()?;
        let priority_record = match priority {
            Some(priority_id) => Some(self.load_priority(priority_id).await?),
            None => None,
        };
        let status_record = match status {
            Some(status_id) => Some(self.load_status(status_id).await?),
            None => None,
        };

        if let Some(value) = task_name {
            task.rename(value);
        }
        if let Some(value) = description {
            task.set_description(value);
        }
        if let Some(value) = objectives {
            task.set_objectives(value);
        }
        if let Some(value) = start_date {
            task.set_start_date(value);
        }
        if let Some(value) = due_date {
            task.set_due_date(value);
        }
        if let Some(value) = priority_record {
            task.set_priority(value);
        }
        if let Some(value) = status_record {
            task.set_status(value);
        }
        if let Some(value) = new_progress {
            task.set_progress(value);
        }
        if let Some(value) = completion_date {
            task.set_completion_date(value);
        }

        self.repository.update(&task).await?;
        tracing::info!("task updated");
        Ok(task)
    }

    /// Marks an owned task completed.
    ///
    /// Status becomes "Completed", progress 100, and the completion date is
    /// stamped from the clock, whatever the prior state. Repeating the call
    /// re-stamps the completion date.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] or
    /// [`TaskLifecycleError::PermissionDenied`] when the caller may not
    /// complete the task, [`TaskLifecycleError::MissingStatus`] when the
    /// completed status is not seeded, and
    /// [`TaskLifecycleError::Repository`] when persistence fails.
    #[tracing::instrument(skip(self), fields(%task_id, %owner))]
    pub async fn complete(&self, task_id: TaskId, owner: OwnerId) -> TaskLifecycleResult<Task> {
        let mut task = self.owned_task(task_id, owner).await?;
        let completed_name = StatusName::completed();
        let completed = self
            .reference_data
            .find_status_by_name(&completed_name)
            .await?
            .ok_or_else(|| {
                tracing::error!(status = %completed_name, "completed status is not seeded");
                TaskLifecycleError::MissingStatus(completed_name.clone())
            })?;

        task.complete(completed, &*self.clock);
        self.repository.update(&task).await?;
        tracing::info!("task completed");
        Ok(task)
    }

    /// Permanently deletes an owned task and returns its last state.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] or
    /// [`TaskLifecycleError::PermissionDenied`] when the caller may not
    /// delete the task, and [`TaskLifecycleError::Repository`] when
    /// persistence fails.
    #[tracing::instrument(skip(self), fields(%task_id, %owner))]
    pub async fn delete(&self, task_id: TaskId, owner: OwnerId) -> TaskLifecycleResult<Task> {
        let task = self.owned_task(task_id, owner).await?;
        self.repository.delete(task.id()).await?;
        tracing::info!("task deleted");
        Ok(task)
    }

    /// Lists the owner's tasks that are To Do, In Progress, or Past Due.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the query fails.
    #[tracing::instrument(skip(self), fields(%owner))]
    pub async fn active_tasks(&self, owner: OwnerId) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list(&TaskQuery::active(owner)).await?)
    }

    /// Lists the owner's fully completed tasks, highest priority first and
    /// most recently completed first within a priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the query fails.
    #[tracing::instrument(skip(self), fields(%owner))]
    pub async fn completed_tasks(&self, owner: OwnerId) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list(&TaskQuery::completed(owner)).await?)
    }

    async fn owned_task(&self, task_id: TaskId, owner: OwnerId) -> TaskLifecycleResult<Task> {
        let task = self
            .repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(task_id))?;
        if !task.is_owned_by(owner) {
            tracing::warn!(%task_id, %owner, "task access denied");
            return Err(TaskLifecycleError::PermissionDenied { task_id, owner });
        }
        Ok(task)
    }

    async fn load_priority(&self, id: PriorityId) -> TaskLifecycleResult<Priority> {
        self.reference_data
            .find_priority(id)
            .await?
            .ok_or(TaskLifecycleError::PriorityNotFound(id))
    }

    async fn load_status(&self, id: StatusId) -> TaskLifecycleResult<Status> {
        self.reference_data
            .find_status(id)
            .await?
            .ok_or(TaskLifecycleError::StatusNotFound(id))
    }

    async fn resolve_default_status(&self) -> TaskLifecycleResult<Status> {
        self.default_status.default_status().await.map_err(|err| {
            tracing::error!(error = %err, "default status lookup failed");
            TaskLifecycleError::from(err)
        })
    }
}
