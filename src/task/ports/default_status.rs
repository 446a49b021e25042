//! Port supplying the status assigned to new tasks.

use super::ReferenceDataError;
use crate::task::domain::{Status, StatusName};
use async_trait::async_trait;
use thiserror::Error;

/// Supplies the status a task receives when the creator does not pick one.
#[async_trait]
pub trait DefaultStatusProvider: Send + Sync {
    /// Returns the default status record.
    ///
    /// # Errors
    ///
    /// Returns [`DefaultStatusError::Missing`] when the reference data has no
    /// such status. This is a deployment error, not a user error.
    async fn default_status(&self) -> Result<Status, DefaultStatusError>;
}

/// Errors raised while resolving the default status.
#[derive(Debug, Clone, Error)]
pub enum DefaultStatusError {
    /// The configured default status is not seeded.
    #[error("default status '{0}' is not present in the status table")]
    Missing(StatusName),

    /// The lookup itself failed.
    #[error(transparent)]
    Lookup(#[from] ReferenceDataError),
}
