//! Per-viewing-session board state and presentation seam.
//!
//! # Responsibility
//! - Hold the transient UI state: the selected community and the pending
//!   delayed refresh.
//! - Pull attendee snapshots and evaluate the visibility rule per row.
//! - Notify the registered presentation callback when the delayed refresh
//!   fires.
//!
//! # Invariants
//! - All persistent state stays in the repository; the session only holds
//!   selection and the timer handle.
//! - The pending refresh timer is owned by the session and cancelled when
//!   the session is dropped or the action re-fires.

use crate::model::attendee::{Attendee, AttendeeId, CheckStatus};
use crate::model::community::CommunityId;
use crate::repo::attendee_repo::{AttendeeRepository, RepoError};
use crate::rules::cooldown::show_check_action;
use crate::rules::summary::{summarize, BoardSummary};
use crate::service::check_service::{CheckActionOutcome, CheckService, CheckServiceError};
use crate::service::clock::Clock;
use crate::service::refresh::RefreshTimer;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::time::Duration;

/// Session error for board use-cases.
#[derive(Debug)]
pub enum BoardSessionError {
    /// Snapshot or action requested before an event was selected.
    NoCommunitySelected,
    Check(CheckServiceError),
    Repo(RepoError),
}

impl Display for BoardSessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoCommunitySelected => write!(f, "no community selected"),
            Self::Check(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BoardSessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoCommunitySelected => None,
            Self::Check(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<CheckServiceError> for BoardSessionError {
    fn from(value: CheckServiceError) -> Self {
        Self::Check(value)
    }
}

impl From<RepoError> for BoardSessionError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// One attendee row with its derived presentation flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRow {
    pub attendee: Attendee,
    pub status: CheckStatus,
    /// Whether the check-action control should render for this row.
    pub show_action: bool,
}

/// Pulled board state for the selected community at one clock reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub community_uuid: CommunityId,
    pub rows: Vec<BoardRow>,
    pub summary: BoardSummary,
}

/// Transient board session for one viewer.
pub struct BoardSession<R: AttendeeRepository, C: Clock> {
    repo: R,
    clock: C,
    refresh_delay: Duration,
    selected_community: Option<CommunityId>,
    refresh_listener: Option<Arc<dyn Fn() + Send + Sync>>,
    pending_refresh: Option<RefreshTimer>,
}

impl<R: AttendeeRepository, C: Clock> BoardSession<R, C> {
    /// Creates a session with nothing selected and no pending refresh.
    ///
    /// The delayed refresh uses the cooldown window, so the forced
    /// re-render lands exactly when the gate re-opens.
    pub fn new(repo: R, clock: C) -> Self {
        Self::with_refresh_delay(
            repo,
            clock,
            Duration::from_millis(crate::rules::cooldown::CHECK_ACTION_COOLDOWN_MS as u64),
        )
    }

    /// Creates a session with an explicit refresh delay.
    pub fn with_refresh_delay(repo: R, clock: C, refresh_delay: Duration) -> Self {
        Self {
            repo,
            clock,
            refresh_delay,
            selected_community: None,
            refresh_listener: None,
            pending_refresh: None,
        }
    }

    /// Selects the community the board operates on.
    pub fn select_community(&mut self, community_uuid: CommunityId) {
        self.selected_community = Some(community_uuid);
    }

    /// Returns the currently selected community, if any.
    pub fn selected_community(&self) -> Option<CommunityId> {
        self.selected_community
    }

    /// Registers the presentation callback invoked when the delayed refresh
    /// fires. Replaces any previously registered callback.
    pub fn on_refresh(&mut self, listener: impl Fn() + Send + Sync + 'static) {
        self.refresh_listener = Some(Arc::new(listener));
    }

    /// Pulls the attendee list for the selected community and derives rows,
    /// visibility flags and the aggregate summary at the current clock.
    pub fn snapshot(&self) -> Result<BoardSnapshot, BoardSessionError> {
        let community_uuid = self
            .selected_community
            .ok_or(BoardSessionError::NoCommunitySelected)?;

        let attendees = self.repo.list_attendees(community_uuid)?;
        let now = self.clock.now_epoch_ms();
        let summary = summarize(&attendees);
        let rows = attendees
            .into_iter()
            .map(|attendee| {
                let status = attendee.status();
                let show_action = show_check_action(attendee.check_in, attendee.check_out, now);
                BoardRow {
                    attendee,
                    status,
                    show_action,
                }
            })
            .collect();

        Ok(BoardSnapshot {
            community_uuid,
            rows,
            summary,
        })
    }

    /// Dispatches the check-action control for one row.
    ///
    /// A check-in schedules the one-shot delayed refresh so the cooldown
    /// gate is re-evaluated; scheduling again replaces (and cancels) any
    /// previously pending timer.
    pub fn check_action(
        &mut self,
        attendee_uuid: AttendeeId,
    ) -> Result<CheckActionOutcome, BoardSessionError> {
        if self.selected_community.is_none() {
            return Err(BoardSessionError::NoCommunitySelected);
        }

        let service = CheckService::new(&self.repo, &self.clock);
        let outcome = service.dispatch_check_action(attendee_uuid)?;

        if matches!(outcome, CheckActionOutcome::CheckedIn { .. }) {
            self.schedule_refresh();
        }

        Ok(outcome)
    }

    fn schedule_refresh(&mut self) {
        let Some(listener) = self.refresh_listener.clone() else {
            return;
        };

        // Replacing the handle cancels a still-pending previous timer.
        self.pending_refresh = Some(RefreshTimer::schedule(self.refresh_delay, move || {
            listener()
        }));
    }
}
