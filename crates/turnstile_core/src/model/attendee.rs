//! Attendee domain model.
//!
//! # Responsibility
//! - Define the canonical attendee record tracked per community.
//! - Derive arrival status from the check-in/check-out timestamp pair.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another attendee.
//! - `check_out` must not be earlier than `check_in` when both are set.
//! - Status is fully determined by the two optional timestamps.

use crate::model::community::CommunityId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for an attendee record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type AttendeeId = Uuid;

/// Arrival state derived from the check-in/check-out timestamp pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// No check-in recorded yet.
    NotArrived,
    /// Checked in and still present.
    CheckedIn,
    /// Checked in and later checked out.
    CheckedOut,
}

/// Derives arrival status from the two optional epoch-ms timestamps.
///
/// Total function: every timestamp combination maps to a status. An absent
/// check-in always means `NotArrived`, even for the invalid
/// check-out-without-check-in shape that `validate()` rejects before
/// persistence.
pub fn derive_check_status(check_in: Option<i64>, check_out: Option<i64>) -> CheckStatus {
    match (check_in, check_out) {
        (None, _) => CheckStatus::NotArrived,
        (Some(_), None) => CheckStatus::CheckedIn,
        (Some(_), Some(_)) => CheckStatus::CheckedOut,
    }
}

/// Validation error for attendee records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendeeValidationError {
    NilUuid,
    NilCommunityUuid,
    EmptyFirstName,
    EmptyLastName,
    CheckOutBeforeCheckIn { check_in: i64, check_out: i64 },
    CheckOutWithoutCheckIn { check_out: i64 },
}

impl Display for AttendeeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilUuid => write!(f, "attendee uuid must not be nil"),
            Self::NilCommunityUuid => write!(f, "attendee community uuid must not be nil"),
            Self::EmptyFirstName => write!(f, "attendee first name must not be empty"),
            Self::EmptyLastName => write!(f, "attendee last name must not be empty"),
            Self::CheckOutBeforeCheckIn {
                check_in,
                check_out,
            } => write!(
                f,
                "check-out {check_out} is earlier than check-in {check_in}"
            ),
            Self::CheckOutWithoutCheckIn { check_out } => {
                write!(f, "check-out {check_out} recorded without a check-in")
            }
        }
    }
}

impl Error for AttendeeValidationError {}

/// Canonical attendee record for one community.
///
/// Check-in/check-out markers are epoch milliseconds and stay optional, so
/// one storage shape covers the whole arrival lifecycle without copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    /// Stable global ID used for mutations and row identity.
    pub uuid: AttendeeId,
    /// Community this attendee belongs to.
    pub community_uuid: CommunityId,
    pub first_name: String,
    pub last_name: String,
    /// Optional employer name; feeds the company occupancy tally.
    pub company_name: Option<String>,
    /// Optional job title, display-only.
    pub title: Option<String>,
    /// Arrival marker in epoch milliseconds.
    pub check_in: Option<i64>,
    /// Departure marker in epoch milliseconds. Should be >= `check_in`.
    pub check_out: Option<i64>,
}

impl Attendee {
    /// Creates an attendee with a generated stable ID and no markers set.
    pub fn new(
        community_uuid: CommunityId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), community_uuid, first_name, last_name)
    }

    /// Creates an attendee with a caller-provided stable ID.
    ///
    /// Used by seed/import paths where identity already exists externally.
    /// This constructor does not validate; write paths call `validate()`.
    pub fn with_id(
        uuid: AttendeeId,
        community_uuid: CommunityId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            uuid,
            community_uuid,
            first_name: first_name.into(),
            last_name: last_name.into(),
            company_name: None,
            title: None,
            check_in: None,
            check_out: None,
        }
    }

    /// Checks record-level invariants before persistence.
    pub fn validate(&self) -> Result<(), AttendeeValidationError> {
        if self.uuid.is_nil() {
            return Err(AttendeeValidationError::NilUuid);
        }
        if self.community_uuid.is_nil() {
            return Err(AttendeeValidationError::NilCommunityUuid);
        }
        if self.first_name.trim().is_empty() {
            return Err(AttendeeValidationError::EmptyFirstName);
        }
        if self.last_name.trim().is_empty() {
            return Err(AttendeeValidationError::EmptyLastName);
        }
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) if check_out < check_in => {
                Err(AttendeeValidationError::CheckOutBeforeCheckIn {
                    check_in,
                    check_out,
                })
            }
            (None, Some(check_out)) => {
                Err(AttendeeValidationError::CheckOutWithoutCheckIn { check_out })
            }
            _ => Ok(()),
        }
    }

    /// Returns the derived arrival status for this record.
    pub fn status(&self) -> CheckStatus {
        derive_check_status(self.check_in, self.check_out)
    }

    /// Display name in "First Last" order.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the trimmed company name, or `None` when absent/blank.
    pub fn company(&self) -> Option<&str> {
        self.company_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
