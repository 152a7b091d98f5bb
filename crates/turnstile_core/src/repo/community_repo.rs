//! Community repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide the community listing the event selector is populated from.
//! - Own community creation for seed/import paths.
//!
//! # Invariants
//! - `list_communities` ordering is deterministic by name, then uuid.
//! - Write paths must call `Community::validate()` before SQL mutations.

use crate::model::community::{Community, CommunityId};
use crate::repo::attendee_repo::{
    parse_uuid, table_exists, table_has_column, RepoError, RepoResult,
};
use rusqlite::{params, Connection, Row};

/// Repository interface for community reads and seed-time creation.
pub trait CommunityRepository {
    fn create_community(&self, community: &Community) -> RepoResult<CommunityId>;
    fn get_community(&self, id: CommunityId) -> RepoResult<Option<Community>>;
    fn list_communities(&self) -> RepoResult<Vec<Community>>;
}

impl<T: CommunityRepository + ?Sized> CommunityRepository for &T {
    fn create_community(&self, community: &Community) -> RepoResult<CommunityId> {
        (**self).create_community(community)
    }

    fn get_community(&self, id: CommunityId) -> RepoResult<Option<Community>> {
        (**self).get_community(id)
    }

    fn list_communities(&self) -> RepoResult<Vec<Community>> {
        (**self).list_communities()
    }
}

/// SQLite-backed community repository.
pub struct SqliteCommunityRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCommunityRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_community_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl CommunityRepository for SqliteCommunityRepository<'_> {
    fn create_community(&self, community: &Community) -> RepoResult<CommunityId> {
        community.validate()?;

        self.conn.execute(
            "INSERT INTO communities (uuid, name) VALUES (?1, ?2);",
            params![community.uuid.to_string(), community.name.as_str()],
        )?;

        Ok(community.uuid)
    }

    fn get_community(&self, id: CommunityId) -> RepoResult<Option<Community>> {
        let mut stmt = self
            .conn
            .prepare("SELECT uuid, name FROM communities WHERE uuid = ?1;")?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_community_row(row)?));
        }

        Ok(None)
    }

    fn list_communities(&self) -> RepoResult<Vec<Community>> {
        let mut stmt = self.conn.prepare(
            "SELECT uuid, name
             FROM communities
             ORDER BY name COLLATE NOCASE ASC, uuid ASC;",
        )?;

        let mut rows = stmt.query([])?;
        let mut communities = Vec::new();
        while let Some(row) = rows.next()? {
            communities.push(parse_community_row(row)?);
        }

        Ok(communities)
    }
}

fn parse_community_row(row: &Row<'_>) -> RepoResult<Community> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = parse_uuid(&uuid_text, "communities.uuid")?;

    let community = Community {
        uuid,
        name: row.get("name")?,
    };
    community.validate()?;
    Ok(community)
}

fn ensure_community_connection_ready(conn: &Connection) -> RepoResult<()> {
    if !table_exists(conn, "communities")? {
        return Err(RepoError::MissingRequiredTable("communities"));
    }

    for column in ["uuid", "name"] {
        if !table_has_column(conn, "communities", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "communities",
                column,
            });
        }
    }

    Ok(())
}
