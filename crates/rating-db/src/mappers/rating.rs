use rating_core::entities::Rating;
use rating_core::value_objects::RecordId;

use crate::models::RatingModel;

use super::parse_tier;

impl From<RatingModel> for Rating {
    fn from(model: RatingModel) -> Self {
        Self {
            id: RecordId::new(model.rating_id),
            target_id: RecordId::new(model.target_id),
            rater_id: RecordId::new(model.rater_id),
            tier: parse_tier(&model.tier),
            reason: model.reason,
            likes: model.likes,
            dislikes: model.dislikes,
            featured: model.is_featured,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
