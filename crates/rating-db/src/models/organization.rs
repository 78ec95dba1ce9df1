use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the organizations table
#[derive(Debug, Clone, FromRow)]
pub struct OrganizationModel {
    pub code: String,
    pub name: String,
    pub t1_limit: i32,
    pub t2_limit: i32,
    pub t3_limit: i32,
    pub created_at: DateTime<Utc>,
}
