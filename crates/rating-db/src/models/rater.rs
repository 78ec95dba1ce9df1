use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the raters table
#[derive(Debug, Clone, FromRow)]
pub struct RaterModel {
    pub rater_id: i64,
    pub username: String,
    pub organization_code: Option<String>,
    pub approved: bool,
    pub can_rate: bool,
    pub admin: bool,
    pub created_at: DateTime<Utc>,
}
