//! Shared collaborators for integration tests.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use taskboard::{
    account::{
        domain::{Password, PasswordHash},
        ports::{PasswordHashError, PasswordHasher},
    },
    task::{
        adapters::ReferenceDefaultStatus,
        ports::{ReferenceDataRepository, TaskRepository},
        services::{ReferenceDataService, ReferenceSeed, TaskLifecycleService},
    },
};

/// Clock that advances one minute on every reading.
#[derive(Debug)]
pub struct StepClock {
    now: Mutex<DateTime<Utc>>,
}

impl Default for StepClock {
    fn default() -> Self {
        let start = Utc
            .with_ymd_and_hms(2026, 3, 1, 8, 0, 0)
            .single()
            .expect("valid start time");
        Self {
            now: Mutex::new(start),
        }
    }
}

impl Clock for StepClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut now = self
            .now
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let reading = *now;
        *now = reading + Duration::minutes(1);
        reading
    }
}

/// Hasher that tags the plain text; good enough to observe what was stored.
#[derive(Debug, Default)]
pub struct TaggingHasher;

impl PasswordHasher for TaggingHasher {
    fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHashError> {
        Ok(PasswordHash::new(format!("tagged${}", password.expose())))
    }
}

/// Lifecycle service over arbitrary repositories with the "To Do" default.
pub type LifecycleService<R, P> =
    TaskLifecycleService<R, P, ReferenceDefaultStatus<P>, StepClock>;

/// Seeds the default reference data and wires a lifecycle service.
pub async fn seeded_service<R, P>(repository: Arc<R>, reference: Arc<P>) -> LifecycleService<R, P>
where
    R: TaskRepository,
    P: ReferenceDataRepository,
{
    ReferenceDataService::new(Arc::clone(&reference))
        .seed(&ReferenceSeed::default())
        .await
        .expect("reference data should seed");
    TaskLifecycleService::new(
        repository,
        Arc::clone(&reference),
        Arc::new(ReferenceDefaultStatus::to_do(reference)),
        Arc::new(StepClock::default()),
    )
}
