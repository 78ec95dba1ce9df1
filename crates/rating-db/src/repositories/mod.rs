//! PostgreSQL repository implementations

mod error;
mod interaction;
mod organization;
mod rater;
mod rating;
mod target;
mod vote;

pub use interaction::PgInteractionRepository;
pub use organization::PgOrganizationRepository;
pub use rater::PgRaterRepository;
pub use rating::PgRatingRepository;
pub use target::PgTargetRepository;
pub use vote::PgVoteLedgerRepository;
