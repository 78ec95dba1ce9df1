//! Domain entities - core business objects

mod interaction;
mod organization;
mod rater;
mod rating;
mod target;
mod vote;

pub use interaction::{Interaction, InteractionKind};
pub use organization::Organization;
pub use rater::Rater;
pub use rating::{Rating, RatingDraft, MAX_REASON_LEN};
pub use target::Target;
pub use vote::VoteLedgerEntry;
