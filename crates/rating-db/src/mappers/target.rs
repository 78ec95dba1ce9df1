use rating_core::entities::Target;
use rating_core::value_objects::RecordId;

use crate::models::TargetModel;

impl From<TargetModel> for Target {
    fn from(model: TargetModel) -> Self {
        Self {
            id: RecordId::new(model.target_id),
            name: model.name,
            organization: model.organization_code,
            created_at: model.created_at,
        }
    }
}
