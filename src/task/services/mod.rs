//! Application services for task lifecycle orchestration.

mod feedback;
mod lifecycle;
mod reference;

pub use feedback::{ACCESS_DENIED_MESSAGE, ActionFeedback, FlashLevel, Redirect, TaskAction};
pub use lifecycle::{
    CreateTaskInput, EditTaskInput, TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService,
};
pub use reference::{
    PrioritySeed, ReferenceDataService, ReferenceSeed, ReferenceSeedError, SeedReport,
};
