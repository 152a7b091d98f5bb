//! Demo data loader for first-run and smoke flows.
//!
//! # Responsibility
//! - Seed a fresh database with a small set of communities and attendees.
//! - Stay idempotent: an already-populated store is left untouched.
//!
//! # Invariants
//! - All writes go through the repository layer, never raw SQL.
//! - Seeded records carry no check markers; arrival state starts clean.

use crate::model::attendee::Attendee;
use crate::model::community::Community;
use crate::repo::attendee_repo::{AttendeeRepository, RepoResult, SqliteAttendeeRepository};
use crate::repo::community_repo::{CommunityRepository, SqliteCommunityRepository};
use log::info;
use rusqlite::Connection;

/// Outcome of one seeding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub communities: usize,
    pub attendees: usize,
    /// True when the store already had communities and nothing was written.
    pub already_seeded: bool,
}

/// Seeds the demo data set unless the store already has communities.
pub fn seed_demo_data(conn: &Connection) -> RepoResult<SeedReport> {
    let community_repo = SqliteCommunityRepository::try_new(conn)?;
    let attendee_repo = SqliteAttendeeRepository::try_new(conn)?;

    if !community_repo.list_communities()?.is_empty() {
        info!("event=seed module=seed status=skipped reason=already_seeded");
        return Ok(SeedReport {
            communities: 0,
            attendees: 0,
            already_seeded: true,
        });
    }

    let mut communities = 0;
    let mut attendees = 0;

    for (community_name, people) in demo_data() {
        let community = Community::new(community_name);
        community_repo.create_community(&community)?;
        communities += 1;

        for (first_name, last_name, company, title) in people {
            let mut attendee = Attendee::new(community.uuid, first_name, last_name);
            attendee.company_name = company.map(str::to_string);
            attendee.title = title.map(str::to_string);
            attendee_repo.create_attendee(&attendee)?;
            attendees += 1;
        }
    }

    info!(
        "event=seed module=seed status=ok communities={communities} attendees={attendees}"
    );
    Ok(SeedReport {
        communities,
        attendees,
        already_seeded: false,
    })
}

type DemoPerson = (
    &'static str,
    &'static str,
    Option<&'static str>,
    Option<&'static str>,
);

fn demo_data() -> Vec<(&'static str, Vec<DemoPerson>)> {
    vec![
        (
            "Harbor Tech Conference",
            vec![
                ("Maya", "Okafor", Some("Acme"), Some("Engineer")),
                ("Jonas", "Petersen", Some("Acme"), Some("Designer")),
                ("Priya", "Raman", Some("Acme Corp"), Some("CTO")),
                ("Elias", "Fontaine", Some("Globex"), None),
                ("Sofia", "Marino", None, Some("Freelancer")),
            ],
        ),
        (
            "Downtown Developer Meetup",
            vec![
                ("Tomas", "Lindqvist", Some("Initech"), Some("Backend Lead")),
                ("Aisha", "Diallo", Some("Initech"), None),
                ("Ben", "Carver", None, None),
            ],
        ),
    ]
}
