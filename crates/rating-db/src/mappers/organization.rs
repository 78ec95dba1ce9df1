use rating_core::entities::Organization;
use rating_core::value_objects::DailyLimits;

use crate::models::OrganizationModel;

impl From<OrganizationModel> for Organization {
    fn from(model: OrganizationModel) -> Self {
        Self {
            code: model.code,
            name: model.name,
            limits: DailyLimits::new(
                model.t1_limit.max(0) as u32,
                model.t2_limit.max(0) as u32,
                model.t3_limit.max(0) as u32,
            ),
            created_at: model.created_at,
        }
    }
}
