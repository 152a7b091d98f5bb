//! Domain model for communities and their attendees.
//!
//! # Responsibility
//! - Define the canonical records tracked by the check-in board.
//! - Derive arrival status from the check-in/check-out timestamp pair.
//!
//! # Invariants
//! - Every record is identified by a stable, non-nil UUID.
//! - `check_out`, when set, is never earlier than `check_in`.

pub mod attendee;
pub mod community;
