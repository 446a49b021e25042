//! In-memory priority and status tables.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Priority, PriorityId, Status, StatusId, StatusName},
    ports::{ReferenceDataError, ReferenceDataRepository, ReferenceDataResult},
};

/// Thread-safe in-memory reference data repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReferenceData {
    state: Arc<RwLock<ReferenceState>>,
}

#[derive(Debug, Default)]
struct ReferenceState {
    priorities: HashMap<PriorityId, Priority>,
    statuses: HashMap<StatusId, Status>,
}

impl InMemoryReferenceData {
    /// Creates empty reference tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> ReferenceDataError {
    ReferenceDataError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ReferenceDataRepository for InMemoryReferenceData {
    async fn store_priority(&self, priority: &Priority) -> ReferenceDataResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state
            .priorities
            .values()
            .any(|existing| existing.name() == priority.name())
        {
            return Err(ReferenceDataError::DuplicatePriorityName(
                priority.name().clone(),
            ));
        }
        state.priorities.insert(priority.id(), priority.clone());
        Ok(())
    }

    async fn store_status(&self, status: &Status) -> ReferenceDataResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state
            .statuses
            .values()
            .any(|existing| existing.name() == status.name())
        {
            return Err(ReferenceDataError::DuplicateStatusName(
                status.name().clone(),
            ));
        }
        state.statuses.insert(status.id(), status.clone());
        Ok(())
    }

    async fn find_priority(&self, id: PriorityId) -> ReferenceDataResult<Option<Priority>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.priorities.get(&id).cloned())
    }

    async fn find_status(&self, id: StatusId) -> ReferenceDataResult<Option<Status>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.statuses.get(&id).cloned())
    }

    async fn find_status_by_name(
        &self,
        name: &StatusName,
    ) -> ReferenceDataResult<Option<Status>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .statuses
            .values()
            .find(|status| status.name() == name)
            .cloned())
    }

    async fn list_priorities(&self) -> ReferenceDataResult<Vec<Priority>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut priorities: Vec<Priority> = state.priorities.values().cloned().collect();
        priorities.sort_by_key(Priority::level);
        Ok(priorities)
    }

    async fn list_statuses(&self) -> ReferenceDataResult<Vec<Status>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut statuses: Vec<Status> = state.statuses.values().cloned().collect();
        statuses.sort_by(|left, right| left.name().as_str().cmp(right.name().as_str()));
        Ok(statuses)
    }
}
