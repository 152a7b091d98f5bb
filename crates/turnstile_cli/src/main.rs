//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `turnstile_core` linkage and the
//!   seed → check-in → board flow end to end.
//! - Keep output deterministic for quick local sanity checks.

use turnstile_core::db::open_db_in_memory;
use turnstile_core::{
    seed_demo_data, BoardSession, CheckService, CommunityRepository, SqliteAttendeeRepository,
    SqliteCommunityRepository, SystemClock,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("turnstile_core ping={}", turnstile_core::ping());
    println!("turnstile_core version={}", turnstile_core::core_version());

    // In-memory store: the probe exercises the full board flow without
    // touching any on-disk state.
    let conn = open_db_in_memory()?;
    let report = seed_demo_data(&conn)?;
    println!(
        "seeded communities={} attendees={}",
        report.communities, report.attendees
    );

    let community_repo = SqliteCommunityRepository::try_new(&conn)?;
    let attendee_repo = SqliteAttendeeRepository::try_new(&conn)?;
    let communities = community_repo.list_communities()?;

    if let Some(first) = communities.first() {
        let service = CheckService::new(&attendee_repo, SystemClock);
        let mut session = BoardSession::new(&attendee_repo, SystemClock);
        session.select_community(first.uuid);

        for row in session.snapshot()?.rows {
            service.check_in(row.attendee.uuid)?;
        }
    }

    for community in &communities {
        let mut session = BoardSession::new(&attendee_repo, SystemClock);
        session.select_community(community.uuid);
        let snapshot = session.snapshot()?;
        println!(
            "community name={} checked_in={} not_arrived={} companies={}",
            community.name,
            snapshot.summary.checked_in,
            snapshot.summary.not_arrived,
            snapshot.summary.company_line()
        );
    }

    Ok(())
}
