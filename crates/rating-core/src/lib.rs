//! # rating-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Interaction, InteractionKind, Organization, Rater, Rating, RatingDraft, Target,
    VoteLedgerEntry,
};
pub use error::DomainError;
pub use traits::{
    InteractionRepository, OrganizationRepository, RaterRepository, RatingRepository, RepoResult,
    TargetRepository, TierUsage, VoteLedgerRepository,
};
pub use value_objects::{DailyLimits, DayClock, RecordId, RecordIdParseError, Tier};
