//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the pull-based data access contracts the board consumes.
//! - Isolate SQLite query details from rules/service orchestration.
//!
//! # Invariants
//! - Repository writes must enforce model `validate()` before persistence.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod attendee_repo;
pub mod community_repo;
