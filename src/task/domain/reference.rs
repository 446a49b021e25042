//! Priority and status reference records.
//!
//! Both are immutable lookup data seeded at deployment time. Tasks carry a
//! copy of the record they point at so that listings can filter and order
//! without a second lookup.

use super::{PriorityId, StatusId, TaskDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a priority name, matching the `VARCHAR(10)` column.
const MAX_PRIORITY_NAME_LENGTH: usize = 10;

/// Maximum length for a status name, matching the `VARCHAR(15)` column.
const MAX_STATUS_NAME_LENGTH: usize = 15;

/// Validated priority display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityName(String);

impl PriorityName {
    /// Creates a validated priority name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyPriorityName`] when the value is empty
    /// after trimming or [`TaskDomainError::PriorityNameTooLong`] when it
    /// exceeds 10 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyPriorityName);
        }
        if normalized.chars().count() > MAX_PRIORITY_NAME_LENGTH {
            return Err(TaskDomainError::PriorityNameTooLong(raw));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PriorityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Priority reference record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Priority {
    id: PriorityId,
    level: i32,
    name: PriorityName,
}

impl Priority {
    /// Creates a priority record with a fresh identifier.
    #[must_use]
    pub fn new(level: i32, name: PriorityName) -> Self {
        Self::from_persisted(PriorityId::new(), level, name)
    }

    /// Reconstructs a priority record from storage.
    #[must_use]
    pub const fn from_persisted(id: PriorityId, level: i32, name: PriorityName) -> Self {
        Self { id, level, name }
    }

    /// Returns the priority identifier.
    #[must_use]
    pub const fn id(&self) -> PriorityId {
        self.id
    }

    /// Returns the numeric level; higher levels sort first in completed
    /// listings.
    #[must_use]
    pub const fn level(&self) -> i32 {
        self.level
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &PriorityName {
        &self.name
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.level)
    }
}

/// Validated status name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusName(String);

impl StatusName {
    /// Name of the status a task starts in.
    pub const TO_DO: &'static str = "To Do";
    /// Name of the status for tasks that are being worked on.
    pub const IN_PROGRESS: &'static str = "In Progress";
    /// Name of the status for tasks whose due date has passed.
    pub const PAST_DUE: &'static str = "Past Due";
    /// Name of the status set by the complete action.
    pub const COMPLETED: &'static str = "Completed";

    /// Creates a validated status name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyStatusName`] when the value is empty
    /// after trimming or [`TaskDomainError::StatusNameTooLong`] when it
    /// exceeds 15 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyStatusName);
        }
        if normalized.chars().count() > MAX_STATUS_NAME_LENGTH {
            return Err(TaskDomainError::StatusNameTooLong(raw));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the name of the status new tasks start in.
    #[must_use]
    pub fn to_do() -> Self {
        Self(Self::TO_DO.to_owned())
    }

    /// Returns the name of the status set by the complete action.
    #[must_use]
    pub fn completed() -> Self {
        Self(Self::COMPLETED.to_owned())
    }

    /// Classifies this name into a lifecycle kind.
    #[must_use]
    pub fn kind(&self) -> StatusKind {
        match self.0.as_str() {
            Self::TO_DO => StatusKind::ToDo,
            Self::IN_PROGRESS => StatusKind::InProgress,
            Self::PAST_DUE => StatusKind::PastDue,
            Self::COMPLETED => StatusKind::Completed,
            _ => StatusKind::Other,
        }
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StatusName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StatusName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle classification of a status record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// Work has not started.
    ToDo,
    /// Work is under way.
    InProgress,
    /// The due date has passed without completion.
    PastDue,
    /// The task was completed.
    Completed,
    /// A custom status added to the reference table.
    Other,
}

impl StatusKind {
    /// Kinds shown in the active task listing.
    pub const ACTIVE: [Self; 3] = [Self::ToDo, Self::InProgress, Self::PastDue];

    /// Returns the seeded status name for this kind.
    ///
    /// Returns `None` for [`StatusKind::Other`], which has no fixed name.
    #[must_use]
    pub const fn canonical_name(self) -> Option<&'static str> {
        match self {
            Self::ToDo => Some(StatusName::TO_DO),
            Self::InProgress => Some(StatusName::IN_PROGRESS),
            Self::PastDue => Some(StatusName::PAST_DUE),
            Self::Completed => Some(StatusName::COMPLETED),
            Self::Other => None,
        }
    }

    /// Returns `true` for every kind except [`StatusKind::Completed`].
    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Completed)
    }
}

/// Status reference record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    id: StatusId,
    name: StatusName,
}

impl Status {
    /// Creates a status record with a fresh identifier.
    #[must_use]
    pub fn new(name: StatusName) -> Self {
        Self::from_persisted(StatusId::new(), name)
    }

    /// Reconstructs a status record from storage.
    #[must_use]
    pub const fn from_persisted(id: StatusId, name: StatusName) -> Self {
        Self { id, name }
    }

    /// Returns the status identifier.
    #[must_use]
    pub const fn id(&self) -> StatusId {
        self.id
    }

    /// Returns the status name.
    #[must_use]
    pub const fn name(&self) -> &StatusName {
        &self.name
    }

    /// Returns the lifecycle classification of this status.
    #[must_use]
    pub fn kind(&self) -> StatusKind {
        self.name.kind()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name.fmt(f)
    }
}
