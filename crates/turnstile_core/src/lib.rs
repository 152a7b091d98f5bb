//! Core domain logic for Turnstile, an event check-in/check-out tracker.
//! This crate is the single source of truth for board business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod rules;
pub mod seed;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::attendee::{
    derive_check_status, Attendee, AttendeeId, AttendeeValidationError, CheckStatus,
};
pub use model::community::{Community, CommunityId, CommunityValidationError};
pub use repo::attendee_repo::{
    AttendeeRepository, RepoError, RepoResult, SqliteAttendeeRepository,
};
pub use repo::community_repo::{CommunityRepository, SqliteCommunityRepository};
pub use rules::cooldown::{show_check_action, CHECK_ACTION_COOLDOWN_MS};
pub use rules::summary::{summarize, BoardSummary};
pub use seed::{seed_demo_data, SeedReport};
pub use service::board_session::{BoardRow, BoardSession, BoardSessionError, BoardSnapshot};
pub use service::check_service::{CheckActionOutcome, CheckService, CheckServiceError};
pub use service::clock::{Clock, SystemClock};
pub use service::refresh::RefreshTimer;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
