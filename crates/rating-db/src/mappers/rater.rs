use rating_core::entities::Rater;
use rating_core::value_objects::RecordId;

use crate::models::RaterModel;

impl From<RaterModel> for Rater {
    fn from(model: RaterModel) -> Self {
        Self {
            id: RecordId::new(model.rater_id),
            username: model.username,
            organization: model.organization_code,
            approved: model.approved,
            can_rate: model.can_rate,
            admin: model.admin,
            created_at: model.created_at,
        }
    }
}
