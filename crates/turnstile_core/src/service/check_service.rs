//! Check-action use-case service.
//!
//! # Responsibility
//! - Dispatch check-in/check-out mutations with transition guards.
//! - Report when the caller should schedule a delayed board refresh.
//!
//! # Invariants
//! - Transition rules live here; the repository mutations stay permissive.
//! - A failed mutation is surfaced as an error, never a panic.

use crate::model::attendee::{Attendee, AttendeeId, CheckStatus};
use crate::repo::attendee_repo::{AttendeeRepository, RepoError};
use crate::rules::cooldown::CHECK_ACTION_COOLDOWN_MS;
use crate::service::clock::Clock;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for check-action use-cases.
#[derive(Debug)]
pub enum CheckServiceError {
    /// Target attendee does not exist in the store.
    AttendeeNotFound(AttendeeId),
    /// The requested mutation does not fit the attendee's current status.
    InvalidTransition {
        attendee: AttendeeId,
        detail: &'static str,
    },
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for CheckServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AttendeeNotFound(id) => write!(f, "attendee not found: {id}"),
            Self::InvalidTransition { attendee, detail } => {
                write!(f, "invalid check transition for {attendee}: {detail}")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CheckServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for CheckServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::AttendeeNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Result of a dispatched check action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckActionOutcome {
    /// Attendee was checked in; the board should re-evaluate visibility
    /// after the cooldown window has elapsed.
    CheckedIn { refresh_after_ms: i64 },
    /// Attendee was checked out; the next natural re-render hides the
    /// control, no forced refresh is needed.
    CheckedOut,
}

/// Use-case service for the two check mutations.
pub struct CheckService<R: AttendeeRepository, C: Clock> {
    repo: R,
    clock: C,
}

impl<R: AttendeeRepository, C: Clock> CheckService<R, C> {
    /// Creates a service using the provided repository and clock.
    pub fn new(repo: R, clock: C) -> Self {
        Self { repo, clock }
    }

    /// Records a check-in at the current clock time.
    ///
    /// # Contract
    /// - `AttendeeNotFound` when the id is absent from the store.
    /// - `InvalidTransition` when a check-in marker already exists.
    pub fn check_in(&self, id: AttendeeId) -> Result<(), CheckServiceError> {
        let attendee = self.load(id)?;
        if attendee.check_in.is_some() {
            return Err(CheckServiceError::InvalidTransition {
                attendee: id,
                detail: "already checked in",
            });
        }

        let now = self.clock.now_epoch_ms();
        self.repo.set_check_in(id, now)?;
        info!("event=check_in module=service status=ok attendee={id} at_epoch_ms={now}");
        Ok(())
    }

    /// Records a check-out at the current clock time.
    ///
    /// # Contract
    /// - `AttendeeNotFound` when the id is absent from the store.
    /// - `InvalidTransition` when no check-in exists yet, or a check-out
    ///   was already recorded.
    pub fn check_out(&self, id: AttendeeId) -> Result<(), CheckServiceError> {
        let attendee = self.load(id)?;
        match attendee.status() {
            CheckStatus::NotArrived => {
                return Err(CheckServiceError::InvalidTransition {
                    attendee: id,
                    detail: "check-out requires a prior check-in",
                });
            }
            CheckStatus::CheckedOut => {
                return Err(CheckServiceError::InvalidTransition {
                    attendee: id,
                    detail: "already checked out",
                });
            }
            CheckStatus::CheckedIn => {}
        }

        let now = self.clock.now_epoch_ms();
        self.repo.set_check_out(id, now)?;
        info!("event=check_out module=service status=ok attendee={id} at_epoch_ms={now}");
        Ok(())
    }

    /// Dispatches the single check-action control for one row.
    ///
    /// Not arrived yet: checks in and asks the caller to refresh the board
    /// after the cooldown window. Checked in: checks out, no refresh needed.
    /// Checked out: rejected, the control is hidden in that state.
    pub fn dispatch_check_action(
        &self,
        id: AttendeeId,
    ) -> Result<CheckActionOutcome, CheckServiceError> {
        let attendee = self.load(id)?;
        match attendee.status() {
            CheckStatus::NotArrived => {
                let now = self.clock.now_epoch_ms();
                self.repo.set_check_in(id, now)?;
                info!(
                    "event=check_in module=service status=ok attendee={id} at_epoch_ms={now}"
                );
                Ok(CheckActionOutcome::CheckedIn {
                    refresh_after_ms: CHECK_ACTION_COOLDOWN_MS,
                })
            }
            CheckStatus::CheckedIn => {
                let now = self.clock.now_epoch_ms();
                self.repo.set_check_out(id, now)?;
                info!(
                    "event=check_out module=service status=ok attendee={id} at_epoch_ms={now}"
                );
                Ok(CheckActionOutcome::CheckedOut)
            }
            CheckStatus::CheckedOut => Err(CheckServiceError::InvalidTransition {
                attendee: id,
                detail: "attendee is already fully processed",
            }),
        }
    }

    fn load(&self, id: AttendeeId) -> Result<Attendee, CheckServiceError> {
        self.repo
            .get_attendee(id)?
            .ok_or(CheckServiceError::AttendeeNotFound(id))
    }
}
