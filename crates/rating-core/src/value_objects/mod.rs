//! Value objects - identifiers, tiers, limits, and day handling

mod day;
mod record_id;
mod tier;

pub use day::DayClock;
pub use record_id::{RecordId, RecordIdParseError};
pub use tier::{DailyLimits, Tier};
