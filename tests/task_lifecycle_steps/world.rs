//! Shared world state for task lifecycle BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use crate::test_helpers::LifecycleService;
use rstest::fixture;
use taskboard::task::{
    adapters::memory::{InMemoryReferenceData, InMemoryTaskRepository},
    domain::{OwnerId, Priority, Task},
    services::ActionFeedback,
};

/// Service type used by the BDD world.
pub type TestTaskService = LifecycleService<InMemoryTaskRepository, InMemoryReferenceData>;

/// Scenario world for task lifecycle behaviour tests.
#[derive(Default)]
pub struct TaskBoardWorld {
    pub service: Option<TestTaskService>,
    pub reference: Arc<InMemoryReferenceData>,
    pub priorities: Vec<Priority>,
    pub users: HashMap<String, OwnerId>,
    pub last_task: Option<Task>,
    pub last_feedback: Option<ActionFeedback>,
}

impl TaskBoardWorld {
    /// Returns the wired service.
    pub fn service(&self) -> Result<&TestTaskService, eyre::Report> {
        self.service
            .as_ref()
            .ok_or_else(|| eyre::eyre!("task board has not been seeded"))
    }

    /// Returns the identity registered for `name`.
    pub fn user(&self, name: &str) -> Result<OwnerId, eyre::Report> {
        self.users
            .get(name)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown user {name}"))
    }

    /// Returns the seeded priority called `name`.
    pub fn priority(&self, name: &str) -> Result<&Priority, eyre::Report> {
        self.priorities
            .iter()
            .find(|priority| priority.name().as_str() == name)
            .ok_or_else(|| eyre::eyre!("priority {name} is not seeded"))
    }

    /// Returns the task most recently created or changed.
    pub fn last_task(&self) -> Result<&Task, eyre::Report> {
        self.last_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no task in scenario world"))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskBoardWorld {
    TaskBoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
