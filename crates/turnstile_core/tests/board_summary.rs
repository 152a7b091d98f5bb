use turnstile_core::{summarize, Attendee};
use uuid::Uuid;

const T0: i64 = 1_700_000_000_000;

fn attendee(company: Option<&str>, check_in: Option<i64>, check_out: Option<i64>) -> Attendee {
    let mut attendee = Attendee::new(Uuid::new_v4(), "Sample", "Person");
    attendee.company_name = company.map(str::to_string);
    attendee.check_in = check_in;
    attendee.check_out = check_out;
    attendee
}

#[test]
fn counts_and_tokens_for_mixed_snapshot() {
    let list = [
        attendee(Some("Acme"), Some(T0), None),
        attendee(Some("Acme"), Some(T0), None),
        attendee(None, None, None),
    ];

    let summary = summarize(&list);
    assert_eq!(summary.checked_in, 2);
    assert_eq!(summary.not_arrived, 1);
    assert_eq!(summary.company_tokens, vec!["Acme (2)".to_string()]);
    assert_eq!(summary.company_line(), "Acme (2)");
}

#[test]
fn similar_company_names_stay_separate_buckets() {
    let list = [
        attendee(Some("Acme"), Some(T0), None),
        attendee(Some("Acme Corp"), Some(T0), None),
        attendee(Some("Acme"), Some(T0), None),
    ];

    let summary = summarize(&list);
    assert_eq!(
        summary.company_tokens,
        vec!["Acme (2)".to_string(), "Acme Corp (1)".to_string()]
    );
}

#[test]
fn token_order_follows_first_appearance() {
    let list = [
        attendee(Some("Globex"), Some(T0), None),
        attendee(Some("Initech"), Some(T0), None),
        attendee(Some("Globex"), Some(T0), None),
        attendee(Some("Acme"), Some(T0), None),
    ];

    let summary = summarize(&list);
    assert_eq!(
        summary.company_tokens,
        vec![
            "Globex (2)".to_string(),
            "Initech (1)".to_string(),
            "Acme (1)".to_string(),
        ]
    );
    assert_eq!(summary.company_line(), "Globex (2) Initech (1) Acme (1)");
}

#[test]
fn checked_out_attendees_do_not_feed_the_tally() {
    let list = [
        attendee(Some("Acme"), Some(T0), Some(T0 + 60_000)),
        attendee(Some("Acme"), Some(T0), None),
    ];

    let summary = summarize(&list);
    assert_eq!(summary.checked_in, 1);
    assert_eq!(summary.not_arrived, 0);
    assert_eq!(summary.company_tokens, vec!["Acme (1)".to_string()]);
}

#[test]
fn summarize_is_idempotent_on_a_stable_snapshot() {
    let list = [
        attendee(Some("Globex"), Some(T0), None),
        attendee(Some("Acme"), Some(T0), None),
        attendee(None, None, None),
        attendee(Some("Globex"), Some(T0), Some(T0 + 1_000)),
    ];

    let first = summarize(&list);
    let second = summarize(&list);
    assert_eq!(first, second);
}
