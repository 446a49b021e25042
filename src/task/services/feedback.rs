//! User-facing outcome of a task action: where to go next and what to say.

use super::{TaskLifecycleError, TaskLifecycleResult};
use crate::task::{domain::Task, ports::TaskRepositoryError};
use serde::Serialize;

/// Message shown when a task is missing or owned by someone else.
pub const ACCESS_DENIED_MESSAGE: &str =
    "Task not found or you do not have permission to access it.";

/// Task action the feedback describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    /// A task was created.
    Create,
    /// A task was edited.
    Edit,
    /// A task was marked completed.
    Complete,
    /// A task was deleted.
    Delete,
}

/// Where the caller should go after the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Redirect {
    /// Back to the task list.
    TaskList,
    /// Stay on the form so the input can be corrected.
    Form,
}

/// Severity of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashLevel {
    /// The action succeeded.
    Success,
    /// The action failed.
    Error,
}

/// Redirect target plus flash message for a finished task action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionFeedback {
    redirect: Redirect,
    level: FlashLevel,
    message: String,
}

impl ActionFeedback {
    /// Translates the outcome of a task action into feedback.
    ///
    /// Missing or foreign tasks always produce the same message so that
    /// callers cannot probe for other owners' tasks.
    ///
    /// # Errors
    ///
    /// Configuration errors are returned unchanged since no user action can
    /// correct them.
    pub fn from_outcome(
        action: TaskAction,
        outcome: TaskLifecycleResult<Task>,
    ) -> TaskLifecycleResult<Self> {
        match outcome {
            Ok(task) => Ok(Self::success(action, &task)),
            Err(err) if err.is_configuration_error() => Err(err),
            Err(err) => Ok(Self::failure(action, &err)),
        }
    }

    /// Returns the redirect target.
    #[must_use]
    pub const fn redirect(&self) -> Redirect {
        self.redirect
    }

    /// Returns the message severity.
    #[must_use]
    pub const fn level(&self) -> FlashLevel {
        self.level
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    fn success(action: TaskAction, task: &Task) -> Self {
        let name = task.name();
        let message = match action {
            TaskAction::Create => format!("Task '{name}' created successfully!"),
            TaskAction::Edit => "Task updated successfully!".to_owned(),
            TaskAction::Complete => format!("Task '{name}' marked as completed successfully!"),
            TaskAction::Delete => format!("Task '{name}' deleted successfully!"),
        };
        Self {
            redirect: Redirect::TaskList,
            level: FlashLevel::Success,
            message,
        }
    }

    fn failure(action: TaskAction, err: &TaskLifecycleError) -> Self {
        if err.is_access_denied() {
            return Self::error(Redirect::TaskList, ACCESS_DENIED_MESSAGE.to_owned());
        }
        match action {
            TaskAction::Create | TaskAction::Edit => Self::form_failure(action, err),
            TaskAction::Complete => Self::error(
                Redirect::TaskList,
                format!("An error occurred while marking the task as completed: {err}"),
            ),
            TaskAction::Delete => Self::error(
                Redirect::TaskList,
                format!("An error occurred while deleting the task: {err}"),
            ),
        }
    }

    fn form_failure(action: TaskAction, err: &TaskLifecycleError) -> Self {
        let message = match err {
            TaskLifecycleError::Repository(
                TaskRepositoryError::DuplicateTask(_) | TaskRepositoryError::Integrity(_),
            ) => "An integrity error occurred while saving the task. Check the data and try again."
                .to_owned(),
            TaskLifecycleError::Repository(
                TaskRepositoryError::Persistence(_) | TaskRepositoryError::InvalidPersistedData(_),
            ) => format!("An unexpected error occurred: {err}"),
            _ if action == TaskAction::Edit => {
                format!("There were errors updating the task: {err}")
            }
            _ => format!("Please correct the errors before submitting: {err}"),
        };
        Self::error(Redirect::Form, message)
    }

    const fn error(redirect: Redirect, message: String) -> Self {
        Self {
            redirect,
            level: FlashLevel::Error,
            message,
        }
    }
}
