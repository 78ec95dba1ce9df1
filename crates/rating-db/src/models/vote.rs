use chrono::NaiveDate;
use sqlx::FromRow;

/// Database model for the votes ledger table
#[derive(Debug, Clone, FromRow)]
pub struct VoteModel {
    pub vote_id: i64,
    pub rater_id: i64,
    pub vote_date: NaiveDate,
    pub target_id: i64,
    pub tier: String,
}

/// Aggregation row for per-tier ledger counts
#[derive(Debug, Clone, FromRow)]
pub struct TierCountRow {
    pub tier: String,
    pub count: i64,
}
