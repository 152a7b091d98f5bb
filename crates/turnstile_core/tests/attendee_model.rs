use turnstile_core::{
    derive_check_status, Attendee, AttendeeValidationError, CheckStatus, Community,
    CommunityValidationError,
};
use uuid::Uuid;

#[test]
fn attendee_new_sets_defaults() {
    let community_uuid = Uuid::new_v4();
    let attendee = Attendee::new(community_uuid, "Maya", "Okafor");

    assert!(!attendee.uuid.is_nil());
    assert_eq!(attendee.community_uuid, community_uuid);
    assert_eq!(attendee.first_name, "Maya");
    assert_eq!(attendee.last_name, "Okafor");
    assert_eq!(attendee.company_name, None);
    assert_eq!(attendee.title, None);
    assert_eq!(attendee.check_in, None);
    assert_eq!(attendee.check_out, None);
    assert_eq!(attendee.status(), CheckStatus::NotArrived);
    assert_eq!(attendee.full_name(), "Maya Okafor");
}

#[test]
fn status_derivation_truth_table() {
    const T: i64 = 1_700_000_000_000;

    assert_eq!(derive_check_status(None, None), CheckStatus::NotArrived);
    assert_eq!(derive_check_status(Some(T), None), CheckStatus::CheckedIn);
    assert_eq!(
        derive_check_status(Some(T), Some(T + 3_600_000)),
        CheckStatus::CheckedOut
    );
    // Same-millisecond departure still counts as checked out.
    assert_eq!(
        derive_check_status(Some(T), Some(T)),
        CheckStatus::CheckedOut
    );
    // An absent check-in dominates whatever the check-out column holds.
    assert_eq!(derive_check_status(None, Some(T)), CheckStatus::NotArrived);
}

#[test]
fn validate_accepts_well_formed_record() {
    let mut attendee = Attendee::new(Uuid::new_v4(), "Jonas", "Petersen");
    attendee.company_name = Some("Acme".to_string());
    attendee.check_in = Some(1_700_000_000_000);
    attendee.check_out = Some(1_700_000_000_000);

    assert!(attendee.validate().is_ok());
}

#[test]
fn validate_rejects_nil_ids() {
    let mut attendee = Attendee::with_id(Uuid::nil(), Uuid::new_v4(), "Maya", "Okafor");
    assert_eq!(
        attendee.validate().unwrap_err(),
        AttendeeValidationError::NilUuid
    );

    attendee.uuid = Uuid::new_v4();
    attendee.community_uuid = Uuid::nil();
    assert_eq!(
        attendee.validate().unwrap_err(),
        AttendeeValidationError::NilCommunityUuid
    );
}

#[test]
fn validate_rejects_blank_names() {
    let attendee = Attendee::new(Uuid::new_v4(), "   ", "Okafor");
    assert_eq!(
        attendee.validate().unwrap_err(),
        AttendeeValidationError::EmptyFirstName
    );

    let attendee = Attendee::new(Uuid::new_v4(), "Maya", "");
    assert_eq!(
        attendee.validate().unwrap_err(),
        AttendeeValidationError::EmptyLastName
    );
}

#[test]
fn validate_rejects_reversed_check_window() {
    let mut attendee = Attendee::new(Uuid::new_v4(), "Maya", "Okafor");
    attendee.check_in = Some(2_000);
    attendee.check_out = Some(1_000);

    assert_eq!(
        attendee.validate().unwrap_err(),
        AttendeeValidationError::CheckOutBeforeCheckIn {
            check_in: 2_000,
            check_out: 1_000,
        }
    );
}

#[test]
fn validate_rejects_check_out_without_check_in() {
    let mut attendee = Attendee::new(Uuid::new_v4(), "Maya", "Okafor");
    attendee.check_out = Some(1_000);

    assert_eq!(
        attendee.validate().unwrap_err(),
        AttendeeValidationError::CheckOutWithoutCheckIn { check_out: 1_000 }
    );
}

#[test]
fn company_accessor_trims_and_drops_blank_values() {
    let mut attendee = Attendee::new(Uuid::new_v4(), "Maya", "Okafor");
    assert_eq!(attendee.company(), None);

    attendee.company_name = Some("   ".to_string());
    assert_eq!(attendee.company(), None);

    attendee.company_name = Some("  Acme Corp  ".to_string());
    assert_eq!(attendee.company(), Some("Acme Corp"));
}

#[test]
fn attendee_serialization_uses_expected_wire_fields() {
    let attendee_uuid = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let community_uuid = Uuid::parse_str("99999999-8888-4777-8666-555555555555").unwrap();
    let mut attendee = Attendee::with_id(attendee_uuid, community_uuid, "Priya", "Raman");
    attendee.company_name = Some("Acme Corp".to_string());
    attendee.title = Some("CTO".to_string());
    attendee.check_in = Some(1_700_000_000_000);
    attendee.check_out = Some(1_700_000_360_000);

    let json = serde_json::to_value(&attendee).unwrap();
    assert_eq!(json["uuid"], attendee_uuid.to_string());
    assert_eq!(json["community_uuid"], community_uuid.to_string());
    assert_eq!(json["first_name"], "Priya");
    assert_eq!(json["last_name"], "Raman");
    assert_eq!(json["company_name"], "Acme Corp");
    assert_eq!(json["title"], "CTO");
    assert_eq!(json["check_in"], 1_700_000_000_000_i64);
    assert_eq!(json["check_out"], 1_700_000_360_000_i64);

    let decoded: Attendee = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, attendee);
}

#[test]
fn check_status_serializes_snake_case() {
    assert_eq!(
        serde_json::to_value(CheckStatus::NotArrived).unwrap(),
        "not_arrived"
    );
    assert_eq!(
        serde_json::to_value(CheckStatus::CheckedIn).unwrap(),
        "checked_in"
    );
    assert_eq!(
        serde_json::to_value(CheckStatus::CheckedOut).unwrap(),
        "checked_out"
    );
}

#[test]
fn community_validation_covers_nil_and_blank() {
    let community = Community::with_id(Uuid::nil(), "Harbor Tech Conference");
    assert_eq!(
        community.validate().unwrap_err(),
        CommunityValidationError::NilUuid
    );

    let community = Community::new("  ");
    assert_eq!(
        community.validate().unwrap_err(),
        CommunityValidationError::EmptyName
    );
}
