use rating_core::entities::{Interaction, InteractionKind};
use rating_core::value_objects::RecordId;

use crate::models::InteractionModel;

impl From<InteractionModel> for Interaction {
    fn from(model: InteractionModel) -> Self {
        Self {
            rating_id: RecordId::new(model.rating_id),
            rater_id: RecordId::new(model.rater_id),
            kind: InteractionKind::from_code(&model.kind).unwrap_or(InteractionKind::Like),
            created_at: model.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_interaction_mapping() {
        let model = InteractionModel {
            rating_id: 1,
            rater_id: 2,
            kind: "dislike".to_string(),
            created_at: Utc::now(),
        };

        let interaction = Interaction::from(model);
        assert_eq!(interaction.kind, InteractionKind::Dislike);
        assert_eq!(interaction.rating_id, RecordId::new(1));
    }
}
