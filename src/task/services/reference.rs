//! Seeding and listing of priorities and statuses.

use crate::task::{
    domain::{Priority, PriorityName, Status, StatusName, TaskDomainError},
    ports::{ReferenceDataError, ReferenceDataRepository},
};
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

/// One priority entry to seed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PrioritySeed {
    /// Numeric level; higher is more urgent.
    pub level: i32,
    /// Display name.
    pub name: String,
}

/// Reference data the deployment needs before tasks can be created.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReferenceSeed {
    /// Priorities to ensure exist.
    pub priorities: Vec<PrioritySeed>,
    /// Status names to ensure exist.
    pub statuses: Vec<String>,
}

impl Default for ReferenceSeed {
    fn default() -> Self {
        Self {
            priorities: vec![
                PrioritySeed {
                    level: 1,
                    name: "Low".to_owned(),
                },
                PrioritySeed {
                    level: 2,
                    name: "Medium".to_owned(),
                },
                PrioritySeed {
                    level: 3,
                    name: "High".to_owned(),
                },
            ],
            statuses: [
                StatusName::TO_DO,
                StatusName::IN_PROGRESS,
                StatusName::PAST_DUE,
                StatusName::COMPLETED,
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
        }
    }
}

/// Counts of rows inserted by a seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Priorities inserted.
    pub priorities_added: usize,
    /// Statuses inserted.
    pub statuses_added: usize,
}

/// Errors raised while seeding reference data.
#[derive(Debug, Error)]
pub enum ReferenceSeedError {
    /// A seed entry is not a valid name.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Storage failed.
    #[error(transparent)]
    ReferenceData(#[from] ReferenceDataError),
}

/// Service over the priority and status tables.
#[derive(Clone)]
pub struct ReferenceDataService<P>
where
    P: ReferenceDataRepository,
{
    repository: Arc<P>,
}

impl<P> ReferenceDataService<P>
where
    P: ReferenceDataRepository,
{
    /// Creates a new reference data service.
    #[must_use]
    pub const fn new(repository: Arc<P>) -> Self {
        Self { repository }
    }

    /// Inserts every seed entry whose name is not already stored.
    ///
    /// Running the same seed twice inserts nothing the second time.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceSeedError::Domain`] for invalid names and
    /// [`ReferenceSeedError::ReferenceData`] when storage fails.
    #[tracing::instrument(skip_all)]
    pub async fn seed(&self, seed: &ReferenceSeed) -> Result<SeedReport, ReferenceSeedError> {
        let mut report = SeedReport::default();

        let existing = self.repository.list_priorities().await?;
        for entry in &seed.priorities {
            let name = PriorityName::new(entry.name.as_str())?;
            if existing.iter().any(|priority| priority.name() == &name) {
                continue;
            }
            self.repository
                .store_priority(&Priority::new(entry.level, name))
                .await?;
            report.priorities_added += 1;
        }

        for entry in &seed.statuses {
            let name = StatusName::new(entry.as_str())?;
            if self.repository.find_status_by_name(&name).await?.is_some() {
                continue;
            }
            self.repository.store_status(&Status::new(name)).await?;
            report.statuses_added += 1;
        }

        tracing::info!(
            priorities_added = report.priorities_added,
            statuses_added = report.statuses_added,
            "reference data seeded"
        );
        Ok(report)
    }

    /// Lists priority choices by ascending level.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceDataError`] when the query fails.
    pub async fn priorities(&self) -> Result<Vec<Priority>, ReferenceDataError> {
        self.repository.list_priorities().await
    }

    /// Lists status choices by name.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceDataError`] when the query fails.
    pub async fn statuses(&self) -> Result<Vec<Status>, ReferenceDataError> {
        self.repository.list_statuses().await
    }
}
