//! Default status lookup backed by the reference data repository.

use crate::task::{
    domain::{Status, StatusName},
    ports::{DefaultStatusError, DefaultStatusProvider, ReferenceDataRepository},
};
use async_trait::async_trait;
use std::sync::Arc;

/// Resolves the default status by name on every call.
///
/// Nothing is cached, so a status seeded after start-up is picked up by the
/// next task creation.
#[derive(Debug)]
pub struct ReferenceDefaultStatus<R>
where
    R: ReferenceDataRepository,
{
    repository: Arc<R>,
    name: StatusName,
}

impl<R> ReferenceDefaultStatus<R>
where
    R: ReferenceDataRepository,
{
    /// Creates a provider that resolves `name` through `repository`.
    #[must_use]
    pub const fn new(repository: Arc<R>, name: StatusName) -> Self {
        Self { repository, name }
    }

    /// Creates a provider for the conventional "To Do" status.
    #[must_use]
    pub fn to_do(repository: Arc<R>) -> Self {
        Self::new(repository, StatusName::to_do())
    }
}

impl<R> Clone for ReferenceDefaultStatus<R>
where
    R: ReferenceDataRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            name: self.name.clone(),
        }
    }
}

#[async_trait]
impl<R> DefaultStatusProvider for ReferenceDefaultStatus<R>
where
    R: ReferenceDataRepository,
{
    async fn default_status(&self) -> Result<Status, DefaultStatusError> {
        self.repository
            .find_status_by_name(&self.name)
            .await?
            .ok_or_else(|| DefaultStatusError::Missing(self.name.clone()))
    }
}
