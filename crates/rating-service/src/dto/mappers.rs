//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use rating_core::entities::Rating;

use super::responses::RatingResponse;

impl From<&Rating> for RatingResponse {
    fn from(rating: &Rating) -> Self {
        Self {
            id: rating.id.to_string(),
            target_id: rating.target_id.to_string(),
            rater_id: rating.rater_id.to_string(),
            tier: rating.tier,
            reason: rating.reason.clone(),
            likes: rating.likes,
            dislikes: rating.dislikes,
            featured: rating.featured,
            created_at: rating.created_at,
            updated_at: rating.updated_at,
        }
    }
}

impl From<Rating> for RatingResponse {
    fn from(rating: Rating) -> Self {
        Self::from(&rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rating_core::value_objects::{RecordId, Tier};

    #[test]
    fn test_rating_response_stringifies_ids() {
        let now = Utc::now();
        let rating = Rating {
            id: RecordId::new(7),
            target_id: RecordId::new(8),
            rater_id: RecordId::new(9),
            tier: Tier::T3,
            reason: "fair".to_string(),
            likes: 1,
            dislikes: 0,
            featured: false,
            created_at: now,
            updated_at: now,
        };

        let response = RatingResponse::from(&rating);
        assert_eq!(response.id, "7");
        assert_eq!(response.target_id, "8");
        assert_eq!(response.tier, Tier::T3);
    }
}
