//! Board aggregation over one community's attendee list.
//!
//! # Responsibility
//! - Produce the live header counts and the company occupancy tally in a
//!   single pass over the current snapshot.
//!
//! # Invariants
//! - Company buckets are keyed by exact (trimmed) company name; "Acme" and
//!   "Acme Corp" never merge.
//! - Token order is first-appearance order among checked-in attendees.
//! - Output is recomputed from scratch per snapshot, never maintained
//!   incrementally.

use crate::model::attendee::{Attendee, CheckStatus};

/// Aggregated board figures for one community snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardSummary {
    /// Attendees currently in the event (`CheckedIn`).
    pub checked_in: usize,
    /// Attendees that never checked in (`NotArrived`).
    pub not_arrived: usize,
    /// `"<company> (<count>)"` tokens for checked-in attendees with a
    /// non-empty company name, in first-appearance order.
    pub company_tokens: Vec<String>,
}

impl BoardSummary {
    /// Renders the company tokens joined with single spaces.
    pub fn company_line(&self) -> String {
        self.company_tokens.join(" ")
    }
}

/// Scans the attendee list once and aggregates the board figures.
///
/// Attendees without a company name (or with a blank one) contribute to the
/// counts but never create a company bucket.
pub fn summarize(attendees: &[Attendee]) -> BoardSummary {
    let mut checked_in = 0;
    let mut not_arrived = 0;
    let mut tallies: Vec<(String, u32)> = Vec::new();

    for attendee in attendees {
        match attendee.status() {
            CheckStatus::CheckedIn => {
                checked_in += 1;
                if let Some(company) = attendee.company() {
                    match tallies.iter().position(|(name, _)| name.as_str() == company) {
                        Some(pos) => tallies[pos].1 += 1,
                        None => tallies.push((company.to_string(), 1)),
                    }
                }
            }
            CheckStatus::NotArrived => not_arrived += 1,
            CheckStatus::CheckedOut => {}
        }
    }

    BoardSummary {
        checked_in,
        not_arrived,
        company_tokens: tallies
            .into_iter()
            .map(|(name, count)| format!("{name} ({count})"))
            .collect(),
    }
}
