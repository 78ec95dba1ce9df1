//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. The two multi-row operations
//! (`create_with_vote`, `toggle`) are deliberately single trait methods so
//! implementations can wrap them in one storage transaction.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::entities::{Interaction, InteractionKind, Organization, Rater, Rating, RatingDraft, Target};
use crate::error::DomainError;
use crate::value_objects::{DailyLimits, RecordId, Tier};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Organization Repository
// ============================================================================

#[async_trait]
pub trait OrganizationRepository: Send + Sync {
    /// Find organization by its stable code
    async fn find_by_code(&self, code: &str) -> RepoResult<Option<Organization>>;

    /// Replace the per-tier daily limits (applies prospectively)
    async fn update_limits(&self, code: &str, limits: DailyLimits) -> RepoResult<()>;
}

// ============================================================================
// Rater Repository
// ============================================================================

#[async_trait]
pub trait RaterRepository: Send + Sync {
    /// Find rater by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Rater>>;
}

// ============================================================================
// Target Repository
// ============================================================================

#[async_trait]
pub trait TargetRepository: Send + Sync {
    /// Find target by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Target>>;
}

// ============================================================================
// Rating Repository
// ============================================================================

#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Find rating by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Rating>>;

    /// Create the rating and its vote ledger entry in one transaction
    ///
    /// Both rows land or neither does. A uniqueness conflict on the
    /// ledger's (rater, day, target) key must surface as
    /// `DomainError::AlreadyRatedToday`.
    async fn create_with_vote(&self, draft: &RatingDraft, vote_date: NaiveDate)
        -> RepoResult<Rating>;

    /// Whether the rater already rated this target inside the UTC window
    async fn exists_in_window(
        &self,
        rater_id: RecordId,
        target_id: RecordId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> RepoResult<bool>;

    /// Ratings for a target, featured first, then newest first
    async fn find_by_target(&self, target_id: RecordId) -> RepoResult<Vec<Rating>>;

    /// All ratings submitted by a rater, newest first
    async fn find_by_rater(&self, rater_id: RecordId) -> RepoResult<Vec<Rating>>;

    /// Set the admin-controlled featured flag
    async fn set_featured(&self, id: RecordId, featured: bool) -> RepoResult<()>;

    /// Delete a rating (its vote ledger entry stays)
    async fn delete(&self, id: RecordId) -> RepoResult<()>;
}

// ============================================================================
// Vote Ledger Repository
// ============================================================================

/// Per-tier ledger usage for one day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierUsage {
    pub t1: i64,
    pub t2: i64,
    pub t3: i64,
}

impl TierUsage {
    /// Usage for one tier
    pub const fn used_for(&self, tier: Tier) -> i64 {
        match tier {
            Tier::T1 => self.t1,
            Tier::T2 => self.t2,
            Tier::T3 => self.t3,
        }
    }

    /// Total slots used across tiers
    pub const fn total(&self) -> i64 {
        self.t1 + self.t2 + self.t3
    }
}

#[async_trait]
pub trait VoteLedgerRepository: Send + Sync {
    /// Ledger rows for (rater, date, tier) - the counted quota predicate
    async fn count_for_tier(&self, rater_id: RecordId, date: NaiveDate, tier: Tier)
        -> RepoResult<i64>;

    /// Per-tier usage for the whole day, for quota reporting
    async fn counts_for_day(&self, rater_id: RecordId, date: NaiveDate) -> RepoResult<TierUsage>;
}

// ============================================================================
// Interaction Repository
// ============================================================================

#[async_trait]
pub trait InteractionRepository: Send + Sync {
    /// Find the interaction a rater holds on a rating, if any
    async fn find(&self, rating_id: RecordId, rater_id: RecordId)
        -> RepoResult<Option<Interaction>>;

    /// Apply one like/dislike toggle as a single atomic unit
    ///
    /// Walks the absent/liked/disliked state machine for (rater, rating)
    /// and adjusts the rating counters in the same transaction. Returns
    /// the updated rating, or None when the rating does not exist.
    async fn toggle(
        &self,
        rating_id: RecordId,
        rater_id: RecordId,
        kind: InteractionKind,
    ) -> RepoResult<Option<Rating>>;
}
