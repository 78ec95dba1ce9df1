use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the targets table
#[derive(Debug, Clone, FromRow)]
pub struct TargetModel {
    pub target_id: i64,
    pub name: String,
    pub organization_code: Option<String>,
    pub created_at: DateTime<Utc>,
}
