//! Database models with SQLx FromRow derives

mod interaction;
mod organization;
mod rater;
mod rating;
mod target;
mod vote;

pub use interaction::InteractionModel;
pub use organization::OrganizationModel;
pub use rater::RaterModel;
pub use rating::RatingModel;
pub use target::TargetModel;
pub use vote::{TierCountRow, VoteModel};
