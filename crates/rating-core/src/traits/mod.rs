//! Repository traits (ports)

mod repositories;

pub use repositories::{
    InteractionRepository, OrganizationRepository, RaterRepository, RatingRepository, RepoResult,
    TargetRepository, TierUsage, VoteLedgerRepository,
};
