//! Check-action visibility cooldown rule.
//!
//! After a check-in the action control stays hidden for a fixed window, so
//! an organizer cannot double-fire the mutation while the store settles.
//! The same constant drives the delayed board refresh; the two mechanisms
//! are independent consumers of it.

/// Cooldown window after check-in, and the delayed-refresh interval.
pub const CHECK_ACTION_COOLDOWN_MS: i64 = 5_000;

/// Decides whether the check-action control should render for one row.
///
/// Rules, in order:
/// - check-out present: fully processed, control stays hidden,
/// - check-in present and `now - check_in < CHECK_ACTION_COOLDOWN_MS`:
///   hidden; the comparison is strict, so at exactly the window boundary
///   the control becomes visible again,
/// - otherwise visible.
pub fn show_check_action(check_in: Option<i64>, check_out: Option<i64>, now_epoch_ms: i64) -> bool {
    if check_out.is_some() {
        return false;
    }
    if let Some(checked_in_at) = check_in {
        if now_epoch_ms - checked_in_at < CHECK_ACTION_COOLDOWN_MS {
            return false;
        }
    }
    true
}
