//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level board functions to Dart via FRB.
//! - Keep error semantics simple for the UI shell: every call returns an
//!   envelope, never an exception.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - A check mutation failure is reported in the envelope; the viewing
//!   session keeps running.

use turnstile_core::db::open_db;
use turnstile_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    seed_demo_data, BoardSession, CheckActionOutcome, CheckService, CheckStatus,
    CommunityRepository, SqliteAttendeeRepository, SqliteCommunityRepository, SystemClock,
};
use std::path::PathBuf;
use std::sync::OnceLock;
use uuid::Uuid;

const BOARD_DB_FILE_NAME: &str = "turnstile_board.sqlite3";
static BOARD_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope for board mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
    /// Set after a check-in: delay in milliseconds after which the UI
    /// should force a board re-render so the cooldown gate re-evaluates.
    pub refresh_after_ms: Option<i64>,
}

impl ActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
            refresh_after_ms: None,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            refresh_after_ms: None,
        }
    }
}

/// Community entry for the event selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityItem {
    pub community_uuid: String,
    pub name: String,
}

/// Community list response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityListResponse {
    pub ok: bool,
    pub message: String,
    pub items: Vec<CommunityItem>,
}

/// One attendee row as rendered by the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRowItem {
    pub attendee_uuid: String,
    pub full_name: String,
    pub company_name: Option<String>,
    pub title: Option<String>,
    /// `not_arrived|checked_in|checked_out`.
    pub status: String,
    /// Whether the check-action control should render for this row.
    pub show_action: bool,
}

/// Board snapshot response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardResponse {
    pub ok: bool,
    pub message: String,
    pub rows: Vec<BoardRowItem>,
    pub checked_in: u32,
    pub not_arrived: u32,
    /// Pre-joined company occupancy line, e.g. `"Acme (2) Globex (1)"`.
    pub company_line: String,
}

impl BoardResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            rows: Vec::new(),
            checked_in: 0,
            not_arrived: 0,
            company_line: String::new(),
        }
    }
}

/// Seeds the demo data set unless the store already has communities.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; idempotent across repeated calls.
#[flutter_rust_bridge::frb(sync)]
pub fn seed_demo() -> ActionResponse {
    let conn = match open_board_db() {
        Ok(conn) => conn,
        Err(message) => return ActionResponse::failure(message),
    };

    match seed_demo_data(&conn) {
        Ok(report) if report.already_seeded => {
            ActionResponse::success("Store already seeded.")
        }
        Ok(report) => ActionResponse::success(format!(
            "Seeded {} communities and {} attendees.",
            report.communities, report.attendees
        )),
        Err(err) => ActionResponse::failure(format!("seed_demo failed: {err}")),
    }
}

/// Lists communities for the event selector, name-ordered.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; returns an empty list with a message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn list_communities() -> CommunityListResponse {
    let conn = match open_board_db() {
        Ok(conn) => conn,
        Err(message) => {
            return CommunityListResponse {
                ok: false,
                message,
                items: Vec::new(),
            };
        }
    };

    let listed = SqliteCommunityRepository::try_new(&conn)
        .and_then(|repo| repo.list_communities());
    match listed {
        Ok(communities) => CommunityListResponse {
            ok: true,
            message: format!("Found {} communit(ies).", communities.len()),
            items: communities
                .into_iter()
                .map(|community| CommunityItem {
                    community_uuid: community.uuid.to_string(),
                    name: community.name,
                })
                .collect(),
        },
        Err(err) => CommunityListResponse {
            ok: false,
            message: format!("list_communities failed: {err}"),
            items: Vec::new(),
        },
    }
}

/// Pulls the board for one community: rows, counts and the company line.
///
/// # FFI contract
/// - Sync call, DB-backed execution; visibility evaluated at wall-clock now.
/// - Never panics; returns a failure envelope on bad input or store errors.
#[flutter_rust_bridge::frb(sync)]
pub fn board_snapshot(community_uuid: String) -> BoardResponse {
    let community_uuid = match parse_uuid(&community_uuid, "community_uuid") {
        Ok(uuid) => uuid,
        Err(message) => return BoardResponse::failure(message),
    };
    let conn = match open_board_db() {
        Ok(conn) => conn,
        Err(message) => return BoardResponse::failure(message),
    };
    let repo = match SqliteAttendeeRepository::try_new(&conn) {
        Ok(repo) => repo,
        Err(err) => return BoardResponse::failure(format!("board repo init failed: {err}")),
    };

    let mut session = BoardSession::new(&repo, SystemClock);
    session.select_community(community_uuid);

    match session.snapshot() {
        Ok(snapshot) => BoardResponse {
            ok: true,
            message: format!("Board with {} attendee(s).", snapshot.rows.len()),
            checked_in: snapshot.summary.checked_in as u32,
            not_arrived: snapshot.summary.not_arrived as u32,
            company_line: snapshot.summary.company_line(),
            rows: snapshot
                .rows
                .into_iter()
                .map(|row| BoardRowItem {
                    attendee_uuid: row.attendee.uuid.to_string(),
                    full_name: row.attendee.full_name(),
                    company_name: row.attendee.company_name.clone(),
                    title: row.attendee.title.clone(),
                    status: status_label(row.status).to_string(),
                    show_action: row.show_action,
                })
                .collect(),
        },
        Err(err) => BoardResponse::failure(format!("board_snapshot failed: {err}")),
    }
}

/// Records a check-in for one attendee at wall-clock now.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; invalid transitions are reported in the envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn check_in(attendee_uuid: String) -> ActionResponse {
    run_check_call(&attendee_uuid, CheckCall::In)
}

/// Records a check-out for one attendee at wall-clock now.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; invalid transitions are reported in the envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn check_out(attendee_uuid: String) -> ActionResponse {
    run_check_call(&attendee_uuid, CheckCall::Out)
}

/// Dispatches the single check-action control for one row.
///
/// After a check-in the envelope carries `refresh_after_ms`; the UI shell
/// schedules its own re-render, since this surface is stateless per call.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; invalid transitions are reported in the envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn check_action(attendee_uuid: String) -> ActionResponse {
    run_check_call(&attendee_uuid, CheckCall::Toggle)
}

fn status_label(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::NotArrived => "not_arrived",
        CheckStatus::CheckedIn => "checked_in",
        CheckStatus::CheckedOut => "checked_out",
    }
}

fn parse_uuid(value: &str, field: &str) -> Result<Uuid, String> {
    Uuid::parse_str(value.trim()).map_err(|_| format!("invalid {field}: `{value}`"))
}

fn resolve_board_db_path() -> PathBuf {
    BOARD_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("TURNSTILE_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(BOARD_DB_FILE_NAME)
        })
        .clone()
}

fn open_board_db() -> Result<rusqlite::Connection, String> {
    open_db(resolve_board_db_path()).map_err(|err| format!("board DB open failed: {err}"))
}

enum CheckCall {
    In,
    Out,
    Toggle,
}

fn run_check_call(attendee_uuid: &str, call: CheckCall) -> ActionResponse {
    let id = match parse_uuid(attendee_uuid, "attendee_uuid") {
        Ok(uuid) => uuid,
        Err(message) => return ActionResponse::failure(message),
    };
    let conn = match open_board_db() {
        Ok(conn) => conn,
        Err(message) => return ActionResponse::failure(message),
    };
    let repo = match SqliteAttendeeRepository::try_new(&conn) {
        Ok(repo) => repo,
        Err(err) => return ActionResponse::failure(format!("board repo init failed: {err}")),
    };

    let service = CheckService::new(&repo, SystemClock);
    let result = match call {
        CheckCall::In => service
            .check_in(id)
            .map(|()| ActionResponse::success("Checked in.")),
        CheckCall::Out => service
            .check_out(id)
            .map(|()| ActionResponse::success("Checked out.")),
        CheckCall::Toggle => service.dispatch_check_action(id).map(|outcome| match outcome {
            CheckActionOutcome::CheckedIn { refresh_after_ms } => ActionResponse {
                ok: true,
                message: "Checked in.".to_string(),
                refresh_after_ms: Some(refresh_after_ms),
            },
            CheckActionOutcome::CheckedOut => ActionResponse::success("Checked out."),
        }),
    };

    match result {
        Ok(response) => response,
        Err(err) => ActionResponse::failure(format!("check action failed: {err}")),
    }
}
