//! Community (event) domain model.
//!
//! Communities group attendees; the board always operates on exactly one
//! selected community. Records are created by seed/import and are
//! read-mostly afterwards.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a community/event.
pub type CommunityId = Uuid;

/// An event/organization grouping attendees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Community {
    /// Stable global ID used for attendee association and selection.
    pub uuid: CommunityId,
    /// Display name shown in the event selector.
    pub name: String,
}

/// Validation error for community records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommunityValidationError {
    NilUuid,
    EmptyName,
}

impl Display for CommunityValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilUuid => write!(f, "community uuid must not be nil"),
            Self::EmptyName => write!(f, "community name must not be empty"),
        }
    }
}

impl Error for CommunityValidationError {}

impl Community {
    /// Creates a community with a generated stable ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates a community with a caller-provided stable ID.
    ///
    /// Used by seed/import paths where identity already exists externally.
    pub fn with_id(uuid: CommunityId, name: impl Into<String>) -> Self {
        Self {
            uuid,
            name: name.into(),
        }
    }

    /// Checks record-level invariants before persistence.
    pub fn validate(&self) -> Result<(), CommunityValidationError> {
        if self.uuid.is_nil() {
            return Err(CommunityValidationError::NilUuid);
        }
        if self.name.trim().is_empty() {
            return Err(CommunityValidationError::EmptyName);
        }
        Ok(())
    }
}
