use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the ratings table
#[derive(Debug, Clone, FromRow)]
pub struct RatingModel {
    pub rating_id: i64,
    pub target_id: i64,
    pub rater_id: i64,
    pub tier: String,
    pub reason: String,
    pub likes: i32,
    pub dislikes: i32,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
