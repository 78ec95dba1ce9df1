use rating_core::entities::VoteLedgerEntry;
use rating_core::value_objects::RecordId;

use crate::models::VoteModel;

use super::parse_tier;

impl From<VoteModel> for VoteLedgerEntry {
    fn from(model: VoteModel) -> Self {
        Self {
            id: RecordId::new(model.vote_id),
            rater_id: RecordId::new(model.rater_id),
            vote_date: model.vote_date,
            target_id: RecordId::new(model.target_id),
            tier: parse_tier(&model.tier),
        }
    }
}
