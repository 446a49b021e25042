//! Repository port for priority and status reference data.

use crate::task::domain::{Priority, PriorityId, PriorityName, Status, StatusId, StatusName};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for reference data operations.
pub type ReferenceDataResult<T> = Result<T, ReferenceDataError>;

/// Priority and status lookup contract.
#[async_trait]
pub trait ReferenceDataRepository: Send + Sync {
    /// Stores a new priority record.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceDataError::DuplicatePriorityName`] when a priority
    /// with the same name exists.
    async fn store_priority(&self, priority: &Priority) -> ReferenceDataResult<()>;

    /// Stores a new status record.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceDataError::DuplicateStatusName`] when a status with
    /// the same name exists.
    async fn store_status(&self, status: &Status) -> ReferenceDataResult<()>;

    /// Finds a priority by identifier.
    async fn find_priority(&self, id: PriorityId) -> ReferenceDataResult<Option<Priority>>;

    /// Finds a status by identifier.
    async fn find_status(&self, id: StatusId) -> ReferenceDataResult<Option<Status>>;

    /// Finds a status by exact name.
    async fn find_status_by_name(&self, name: &StatusName)
    -> ReferenceDataResult<Option<Status>>;

    /// Returns all priorities, lowest level first.
    async fn list_priorities(&self) -> ReferenceDataResult<Vec<Priority>>;

    /// Returns all statuses, ordered by name.
    async fn list_statuses(&self) -> ReferenceDataResult<Vec<Status>>;
}

/// Errors returned by reference data repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ReferenceDataError {
    /// A priority with the same name already exists.
    #[error("duplicate priority name: {0}")]
    DuplicatePriorityName(PriorityName),

    /// A status with the same name already exists.
    #[error("duplicate status name: {0}")]
    DuplicateStatusName(StatusName),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ReferenceDataError {
    /// Wraps a data-quality error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
