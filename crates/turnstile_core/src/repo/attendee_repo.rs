//! Attendee repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide the attendee store contract the board pulls from: point reads,
//!   per-community listing, and the two check mutations.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `Attendee::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - `set_check_in`/`set_check_out` are point updates; transition rules live
//!   in the service layer.

use crate::db::DbError;
use crate::model::attendee::{Attendee, AttendeeId, AttendeeValidationError};
use crate::model::community::{CommunityId, CommunityValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const ATTENDEE_SELECT_SQL: &str = "SELECT
    uuid,
    community_uuid,
    first_name,
    last_name,
    company_name,
    title,
    check_in,
    check_out
FROM attendees";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(AttendeeValidationError),
    CommunityValidation(CommunityValidationError),
    Db(DbError),
    NotFound(Uuid),
    InvalidData(String),
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::CommunityValidation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::CommunityValidation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AttendeeValidationError> for RepoError {
    fn from(value: AttendeeValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<CommunityValidationError> for RepoError {
    fn from(value: CommunityValidationError) -> Self {
        Self::CommunityValidation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for attendee reads and check mutations.
///
/// This is the store contract the board consumes: listing is always scoped
/// to one community, and the only writes after creation are the two check
/// markers.
pub trait AttendeeRepository {
    fn create_attendee(&self, attendee: &Attendee) -> RepoResult<AttendeeId>;
    fn get_attendee(&self, id: AttendeeId) -> RepoResult<Option<Attendee>>;
    fn list_attendees(&self, community_uuid: CommunityId) -> RepoResult<Vec<Attendee>>;
    /// Sets the check-in marker to the provided epoch-ms timestamp.
    fn set_check_in(&self, id: AttendeeId, epoch_ms: i64) -> RepoResult<()>;
    /// Sets the check-out marker to the provided epoch-ms timestamp.
    ///
    /// Intentionally permissive: no check-in precondition is enforced here.
    fn set_check_out(&self, id: AttendeeId, epoch_ms: i64) -> RepoResult<()>;
}

impl<T: AttendeeRepository + ?Sized> AttendeeRepository for &T {
    fn create_attendee(&self, attendee: &Attendee) -> RepoResult<AttendeeId> {
        (**self).create_attendee(attendee)
    }

    fn get_attendee(&self, id: AttendeeId) -> RepoResult<Option<Attendee>> {
        (**self).get_attendee(id)
    }

    fn list_attendees(&self, community_uuid: CommunityId) -> RepoResult<Vec<Attendee>> {
        (**self).list_attendees(community_uuid)
    }

    fn set_check_in(&self, id: AttendeeId, epoch_ms: i64) -> RepoResult<()> {
        (**self).set_check_in(id, epoch_ms)
    }

    fn set_check_out(&self, id: AttendeeId, epoch_ms: i64) -> RepoResult<()> {
        (**self).set_check_out(id, epoch_ms)
    }
}

/// SQLite-backed attendee repository.
pub struct SqliteAttendeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAttendeeRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_attendee_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl AttendeeRepository for SqliteAttendeeRepository<'_> {
    fn create_attendee(&self, attendee: &Attendee) -> RepoResult<AttendeeId> {
        attendee.validate()?;

        self.conn.execute(
            "INSERT INTO attendees (
                uuid,
                community_uuid,
                first_name,
                last_name,
                company_name,
                title,
                check_in,
                check_out
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                attendee.uuid.to_string(),
                attendee.community_uuid.to_string(),
                attendee.first_name.as_str(),
                attendee.last_name.as_str(),
                attendee.company_name.as_deref(),
                attendee.title.as_deref(),
                attendee.check_in,
                attendee.check_out,
            ],
        )?;

        Ok(attendee.uuid)
    }

    fn get_attendee(&self, id: AttendeeId) -> RepoResult<Option<Attendee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ATTENDEE_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_attendee_row(row)?));
        }

        Ok(None)
    }

    fn list_attendees(&self, community_uuid: CommunityId) -> RepoResult<Vec<Attendee>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ATTENDEE_SELECT_SQL}
             WHERE community_uuid = ?1
             ORDER BY last_name COLLATE NOCASE ASC, first_name COLLATE NOCASE ASC, uuid ASC;"
        ))?;

        let mut rows = stmt.query([community_uuid.to_string()])?;
        let mut attendees = Vec::new();
        while let Some(row) = rows.next()? {
            attendees.push(parse_attendee_row(row)?);
        }

        Ok(attendees)
    }

    fn set_check_in(&self, id: AttendeeId, epoch_ms: i64) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE attendees
             SET
                check_in = ?2,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE uuid = ?1;",
            params![id.to_string(), epoch_ms],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn set_check_out(&self, id: AttendeeId, epoch_ms: i64) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE attendees
             SET
                check_out = ?2,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE uuid = ?1;",
            params![id.to_string(), epoch_ms],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_attendee_row(row: &Row<'_>) -> RepoResult<Attendee> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = parse_uuid(&uuid_text, "attendees.uuid")?;

    let community_text: String = row.get("community_uuid")?;
    let community_uuid = parse_uuid(&community_text, "attendees.community_uuid")?;

    let attendee = Attendee {
        uuid,
        community_uuid,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        company_name: row.get("company_name")?,
        title: row.get("title")?,
        check_in: row.get("check_in")?,
        check_out: row.get("check_out")?,
    };
    attendee.validate()?;
    Ok(attendee)
}

pub(crate) fn parse_uuid(value: &str, column: &str) -> RepoResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid value `{value}` in {column}")))
}

fn ensure_attendee_connection_ready(conn: &Connection) -> RepoResult<()> {
    if !table_exists(conn, "attendees")? {
        return Err(RepoError::MissingRequiredTable("attendees"));
    }

    for column in [
        "uuid",
        "community_uuid",
        "first_name",
        "last_name",
        "company_name",
        "title",
        "check_in",
        "check_out",
    ] {
        if !table_has_column(conn, "attendees", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "attendees",
                column,
            });
        }
    }

    Ok(())
}

pub(crate) fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

pub(crate) fn table_has_column(
    conn: &Connection,
    table: &str,
    column: &str,
) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
