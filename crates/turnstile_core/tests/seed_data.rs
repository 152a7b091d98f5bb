use turnstile_core::db::open_db_in_memory;
use turnstile_core::{
    seed_demo_data, AttendeeRepository, CommunityRepository, SqliteAttendeeRepository,
    SqliteCommunityRepository,
};

#[test]
fn seeding_populates_communities_and_attendees() {
    let conn = open_db_in_memory().unwrap();

    let report = seed_demo_data(&conn).unwrap();
    assert!(!report.already_seeded);
    assert!(report.communities >= 2);
    assert!(report.attendees > report.communities);

    let communities = SqliteCommunityRepository::try_new(&conn)
        .unwrap()
        .list_communities()
        .unwrap();
    assert_eq!(communities.len(), report.communities);

    let attendee_repo = SqliteAttendeeRepository::try_new(&conn).unwrap();
    let mut total = 0;
    for community in &communities {
        let attendees = attendee_repo.list_attendees(community.uuid).unwrap();
        assert!(!attendees.is_empty());
        // Seeded records start with a clean arrival state.
        assert!(attendees
            .iter()
            .all(|attendee| attendee.check_in.is_none() && attendee.check_out.is_none()));
        total += attendees.len();
    }
    assert_eq!(total, report.attendees);
}

#[test]
fn seeding_twice_leaves_the_store_untouched() {
    let conn = open_db_in_memory().unwrap();

    let first = seed_demo_data(&conn).unwrap();
    let second = seed_demo_data(&conn).unwrap();

    assert!(second.already_seeded);
    assert_eq!(second.communities, 0);
    assert_eq!(second.attendees, 0);

    let communities = SqliteCommunityRepository::try_new(&conn)
        .unwrap()
        .list_communities()
        .unwrap();
    assert_eq!(communities.len(), first.communities);
}
