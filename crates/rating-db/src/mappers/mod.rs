//! Model → entity mappers

mod interaction;
mod organization;
mod rater;
mod rating;
mod target;
mod vote;

use rating_core::value_objects::Tier;

/// Parse a stored tier code, falling back to T1
///
/// The CHECK constraint keeps unknown codes out of the tables; the
/// fallback only matters for hand-edited rows.
pub(crate) fn parse_tier(code: &str) -> Tier {
    Tier::from_code(code).unwrap_or(Tier::T1)
}
