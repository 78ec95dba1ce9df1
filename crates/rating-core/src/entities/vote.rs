//! Vote ledger entry - proof that a daily tier slot was consumed

use chrono::NaiveDate;

use crate::value_objects::{RecordId, Tier};

/// Vote ledger entry
///
/// One row per (rater, local calendar day, target). Append-only: written
/// atomically with its Rating and never updated or deleted afterwards, so
/// the day's quota slot stays consumed even if the Rating is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteLedgerEntry {
    pub id: RecordId,
    pub rater_id: RecordId,
    pub vote_date: NaiveDate,
    pub target_id: RecordId,
    pub tier: Tier,
}
