use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the interactions table
#[derive(Debug, Clone, FromRow)]
pub struct InteractionModel {
    pub rating_id: i64,
    pub rater_id: i64,
    pub kind: String,
    pub created_at: DateTime<Utc>,
}
