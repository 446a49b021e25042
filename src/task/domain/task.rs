//! Task aggregate root and the values it is built from.

use super::{OwnerId, Priority, Status, StatusKind, TaskDomainError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a task name, matching the `VARCHAR(50)` column.
const MAX_TASK_NAME_LENGTH: usize = 50;

/// Validated task name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskName(String);

impl TaskName {
    /// Creates a validated task name.
    ///
    /// The value is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskName`] when the value is empty
    /// after trimming or [`TaskDomainError::TaskNameTooLong`] when it exceeds
    /// 50 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyTaskName);
        }
        let length = normalized.chars().count();
        if length > MAX_TASK_NAME_LENGTH {
            return Err(TaskDomainError::TaskNameTooLong {
                length,
                max: MAX_TASK_NAME_LENGTH,
            });
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Completion percentage in `0..=100`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct Progress(u8);

impl Progress {
    /// Progress of a task that has not started.
    pub const NONE: Self = Self(0);
    /// Progress of a completed task.
    pub const COMPLETE: Self = Self(100);

    /// Creates a validated progress value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::ProgressOutOfRange`] when the value is
    /// negative or above 100.
    pub fn new(value: i64) -> Result<Self, TaskDomainError> {
        u8::try_from(value)
            .ok()
            .filter(|percent| *percent <= Self::COMPLETE.0)
            .map(Self)
            .ok_or(TaskDomainError::ProgressOutOfRange(value))
    }

    /// Returns the percentage.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns `true` when the progress is 100.
    #[must_use]
    pub const fn is_complete(self) -> bool {
        self.0 == Self::COMPLETE.0
    }
}

impl TryFrom<i64> for Progress {
    type Error = TaskDomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Progress> for i64 {
    fn from(progress: Progress) -> Self {
        Self::from(progress.0)
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Optional planning dates of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSchedule {
    /// When work is planned to start.
    pub start_date: Option<DateTime<Utc>>,
    /// When work is due.
    pub due_date: Option<DateTime<Utc>>,
}

/// Validated field values for a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskDetails {
    /// Task name.
    pub name: TaskName,
    /// Free-form description, possibly blank.
    pub description: String,
    /// Free-form objectives, possibly blank.
    pub objectives: String,
    /// Planned start and due dates.
    pub schedule: TaskSchedule,
    /// Selected priority record.
    pub priority: Priority,
    /// Initial status record; must not be the completed status.
    pub status: Status,
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    owner: OwnerId,
    name: TaskName,
    description: String,
    objectives: String,
    created_at: DateTime<Utc>,
    schedule: TaskSchedule,
    completion_date: Option<DateTime<Utc>>,
    priority: Priority,
    status: Status,
    progress: Progress,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owner.
    pub owner: OwnerId,
    /// Persisted name.
    pub name: TaskName,
    /// Persisted description.
    pub description: String,
    /// Persisted objectives.
    pub objectives: String,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted planning dates.
    pub schedule: TaskSchedule,
    /// Persisted completion timestamp, if any.
    pub completion_date: Option<DateTime<Utc>>,
    /// Persisted priority record.
    pub priority: Priority,
    /// Persisted status record.
    pub status: Status,
    /// Persisted progress.
    pub progress: Progress,
}

impl Task {
    /// Creates a new open task owned by `owner`.
    ///
    /// The task starts with zero progress and no completion date.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::CompletedStatusOnCreate`] when the initial
    /// status is the completed status.
    pub fn new(
        owner: OwnerId,
        details: NewTaskDetails,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        if !details.status.kind().is_open() {
            return Err(TaskDomainError::CompletedStatusOnCreate);
        }

        Ok(Self {
            id: TaskId::new(),
            owner,
            name: details.name,
            description: details.description,
            objectives: details.objectives,
            created_at: clock.utc(),
            schedule: details.schedule,
            completion_date: None,
            priority: details.priority,
            status: details.status,
            progress: Progress::NONE,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            owner: data.owner,
            name: data.name,
            description: data.description,
            objectives: data.objectives,
            created_at: data.created_at,
            schedule: data.schedule,
            completion_date: data.completion_date,
            priority: data.priority,
            status: data.status,
            progress: data.progress,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner(&self) -> OwnerId {
        self.owner
    }

    /// Returns `true` when `owner` owns this task.
    #[must_use]
    pub fn is_owned_by(&self, owner: OwnerId) -> bool {
        self.owner == owner
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the objectives.
    #[must_use]
    pub fn objectives(&self) -> &str {
        &self.objectives
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the planned start date, if any.
    #[must_use]
    pub const fn start_date(&self) -> Option<DateTime<Utc>> {
        self.schedule.start_date
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.schedule.due_date
    }

    /// Returns the completion timestamp, if any.
    #[must_use]
    pub const fn completion_date(&self) -> Option<DateTime<Utc>> {
        self.completion_date
    }

    /// Returns the priority record.
    #[must_use]
    pub const fn priority(&self) -> &Priority {
        &self.priority
    }

    /// Returns the status record.
    #[must_use]
    pub const fn status(&self) -> &Status {
        &self.status
    }

    /// Returns the progress.
    #[must_use]
    pub const fn progress(&self) -> Progress {
        self.progress
    }

    /// Returns `true` when the status is completed, progress is 100, and a
    /// completion date is recorded.
    #[must_use]
    pub fn is_fully_completed(&self) -> bool {
        self.status.kind() == StatusKind::Completed
            && self.progress.is_complete()
            && self.completion_date.is_some()
    }

    /// Marks the task completed.
    ///
    /// Sets the status, forces progress to 100, and stamps the completion
    /// date from `clock`, whatever the prior state was. Calling it again
    /// re-stamps the completion date.
    pub fn complete(&mut self, completed: Status, clock: &impl Clock) {
        self.status = completed;
        self.progress = Progress::COMPLETE;
        self.completion_date = Some(clock.utc());
    }

    /// Replaces the name.
    pub fn rename(&mut self, name: TaskName) {
        self.name = name;
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: String) {
        self.description = description;
    }

    /// Replaces the objectives.
    pub fn set_objectives(&mut self, objectives: String) {
        self.objectives = objectives;
    }

    /// Replaces the planned start date.
    pub const fn set_start_date(&mut self, start_date: Option<DateTime<Utc>>) {
        self.schedule.start_date = start_date;
    }

    /// Replaces the due date.
    pub const fn set_due_date(&mut self, due_date: Option<DateTime<Utc>>) {
        self.schedule.due_date = due_date;
    }

    /// Replaces the priority.
    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    /// Replaces the status verbatim.
    ///
    /// Progress and completion date are left untouched; use
    /// [`Task::complete`] to move all three together.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Replaces the progress verbatim.
    pub const fn set_progress(&mut self, progress: Progress) {
        self.progress = progress;
    }

    /// Replaces the completion date verbatim.
    pub const fn set_completion_date(&mut self, completion_date: Option<DateTime<Utc>>) {
        self.completion_date = completion_date;
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - owned by {}", self.name, self.owner)
    }
}
