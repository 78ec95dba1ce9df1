//! Service context - dependency container for services
//!
//! Holds the repositories and the local-day clock the services need.

use std::sync::Arc;

use rating_core::traits::{
    InteractionRepository, OrganizationRepository, RaterRepository, RatingRepository,
    TargetRepository, VoteLedgerRepository,
};
use rating_core::value_objects::DayClock;
use rating_db::{
    PgInteractionRepository, PgOrganizationRepository, PgPool, PgRaterRepository,
    PgRatingRepository, PgTargetRepository, PgVoteLedgerRepository,
};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to the repositories and the clock that defines the
/// organization-local calendar day.
#[derive(Clone)]
pub struct ServiceContext {
    clock: DayClock,

    // Repositories
    organization_repo: Arc<dyn OrganizationRepository>,
    rater_repo: Arc<dyn RaterRepository>,
    target_repo: Arc<dyn TargetRepository>,
    rating_repo: Arc<dyn RatingRepository>,
    vote_repo: Arc<dyn VoteLedgerRepository>,
    interaction_repo: Arc<dyn InteractionRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        clock: DayClock,
        organization_repo: Arc<dyn OrganizationRepository>,
        rater_repo: Arc<dyn RaterRepository>,
        target_repo: Arc<dyn TargetRepository>,
        rating_repo: Arc<dyn RatingRepository>,
        vote_repo: Arc<dyn VoteLedgerRepository>,
        interaction_repo: Arc<dyn InteractionRepository>,
    ) -> Self {
        Self {
            clock,
            organization_repo,
            rater_repo,
            target_repo,
            rating_repo,
            vote_repo,
            interaction_repo,
        }
    }

    /// Wire a context directly from a PostgreSQL pool
    pub fn from_pool(pool: PgPool, clock: DayClock) -> Self {
        Self::new(
            clock,
            Arc::new(PgOrganizationRepository::new(pool.clone())),
            Arc::new(PgRaterRepository::new(pool.clone())),
            Arc::new(PgTargetRepository::new(pool.clone())),
            Arc::new(PgRatingRepository::new(pool.clone())),
            Arc::new(PgVoteLedgerRepository::new(pool.clone())),
            Arc::new(PgInteractionRepository::new(pool)),
        )
    }

    /// Get the local-day clock
    pub fn clock(&self) -> &DayClock {
        &self.clock
    }

    // === Repositories ===

    /// Get the organization repository
    pub fn organization_repo(&self) -> &dyn OrganizationRepository {
        self.organization_repo.as_ref()
    }

    /// Get the rater repository
    pub fn rater_repo(&self) -> &dyn RaterRepository {
        self.rater_repo.as_ref()
    }

    /// Get the target repository
    pub fn target_repo(&self) -> &dyn TargetRepository {
        self.target_repo.as_ref()
    }

    /// Get the rating repository
    pub fn rating_repo(&self) -> &dyn RatingRepository {
        self.rating_repo.as_ref()
    }

    /// Get the vote ledger repository
    pub fn vote_repo(&self) -> &dyn VoteLedgerRepository {
        self.vote_repo.as_ref()
    }

    /// Get the interaction repository
    pub fn interaction_repo(&self) -> &dyn InteractionRepository {
        self.interaction_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("clock", &self.clock)
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    clock: Option<DayClock>,
    organization_repo: Option<Arc<dyn OrganizationRepository>>,
    rater_repo: Option<Arc<dyn RaterRepository>>,
    target_repo: Option<Arc<dyn TargetRepository>>,
    rating_repo: Option<Arc<dyn RatingRepository>>,
    vote_repo: Option<Arc<dyn VoteLedgerRepository>>,
    interaction_repo: Option<Arc<dyn InteractionRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            clock: None,
            organization_repo: None,
            rater_repo: None,
            target_repo: None,
            rating_repo: None,
            vote_repo: None,
            interaction_repo: None,
        }
    }

    pub fn clock(mut self, clock: DayClock) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn organization_repo(mut self, repo: Arc<dyn OrganizationRepository>) -> Self {
        self.organization_repo = Some(repo);
        self
    }

    pub fn rater_repo(mut self, repo: Arc<dyn RaterRepository>) -> Self {
        self.rater_repo = Some(repo);
        self
    }

    pub fn target_repo(mut self, repo: Arc<dyn TargetRepository>) -> Self {
        self.target_repo = Some(repo);
        self
    }

    pub fn rating_repo(mut self, repo: Arc<dyn RatingRepository>) -> Self {
        self.rating_repo = Some(repo);
        self
    }

    pub fn vote_repo(mut self, repo: Arc<dyn VoteLedgerRepository>) -> Self {
        self.vote_repo = Some(repo);
        self
    }

    pub fn interaction_repo(mut self, repo: Arc<dyn InteractionRepository>) -> Self {
        self.interaction_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// The clock defaults to UTC when not set; every repository is required.
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.clock.unwrap_or_else(DayClock::utc),
            self.organization_repo.ok_or_else(|| {
                super::error::ServiceError::validation("organization_repo is required")
            })?,
            self.rater_repo
                .ok_or_else(|| super::error::ServiceError::validation("rater_repo is required"))?,
            self.target_repo
                .ok_or_else(|| super::error::ServiceError::validation("target_repo is required"))?,
            self.rating_repo
                .ok_or_else(|| super::error::ServiceError::validation("rating_repo is required"))?,
            self.vote_repo
                .ok_or_else(|| super::error::ServiceError::validation("vote_repo is required"))?,
            self.interaction_repo.ok_or_else(|| {
                super::error::ServiceError::validation("interaction_repo is required")
            })?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
