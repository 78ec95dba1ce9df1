//! Rating service - submission under daily per-tier quotas
//!
//! Implements the quota enforcer: every submission passes the full check
//! chain (identity gates, organization boundary, reason validation, tier
//! quota, one-per-target-per-day) before the rating and its vote ledger
//! entry are written in one transaction.

use tracing::{info, instrument};
use validator::Validate;

use rating_core::entities::{Rater, RatingDraft};
use rating_core::error::DomainError;
use rating_core::value_objects::{DailyLimits, RecordId, Tier};

use crate::dto::{QuotaResponse, RatingResponse, SetDailyLimitsRequest, SubmitRatingRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Rating service
pub struct RatingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RatingService<'a> {
    /// Create a new RatingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Submit a rating
    ///
    /// Checks run in a fixed order so every rejection is distinct: rater
    /// gates, target and organization boundary, reason, tier quota, then
    /// the one-per-target-per-day rule. The final write is atomic; losing
    /// the ledger's uniqueness race surfaces as the same already-rated
    /// rejection as the explicit check.
    #[instrument(skip(self, request), fields(target_id = %request.target_id, tier = %request.tier))]
    pub async fn submit_rating(
        &self,
        rater_id: RecordId,
        request: SubmitRatingRequest,
    ) -> ServiceResult<RatingResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;
        let tier = Tier::from_code(&request.tier)
            .ok_or_else(|| ServiceError::validation(format!("Unknown tier code: {}", request.tier)))?;

        let rater = self
            .ctx
            .rater_repo()
            .find_by_id(rater_id)
            .await?
            .ok_or(DomainError::RaterNotFound(rater_id))?;

        if !rater.approved {
            return Err(DomainError::NotApproved.into());
        }
        if !rater.can_rate {
            return Err(DomainError::RatingDisabled.into());
        }

        let target = self
            .ctx
            .target_repo()
            .find_by_id(request.target_id)
            .await?
            .ok_or(DomainError::TargetNotFound(request.target_id))?;

        if rater.organization_conflicts_with(&target) {
            return Err(DomainError::CrossOrganization.into());
        }

        let draft = RatingDraft::new(rater_id, target.id, tier, request.reason);
        draft.validate()?;

        let limits = self.resolve_limits(rater.organization.as_deref()).await?;
        let limit = limits.limit_for(tier);
        let today = self.ctx.clock().today();

        let used = self
            .ctx
            .vote_repo()
            .count_for_tier(rater_id, today, tier)
            .await?;
        if used >= i64::from(limit) {
            return Err(DomainError::QuotaExceeded { tier, limit }.into());
        }

        let (start, end) = self.ctx.clock().day_bounds(today);
        if self
            .ctx
            .rating_repo()
            .exists_in_window(rater_id, target.id, start, end)
            .await?
        {
            return Err(DomainError::AlreadyRatedToday.into());
        }

        let rating = self
            .ctx
            .rating_repo()
            .create_with_vote(&draft, today)
            .await?;

        info!(
            rating_id = %rating.id,
            rater_id = %rater_id,
            target_id = %target.id,
            tier = %tier,
            "Rating submitted"
        );

        Ok(RatingResponse::from(&rating))
    }

    /// Report the rater's quota state for the current local day
    #[instrument(skip(self))]
    pub async fn get_quota(&self, rater_id: RecordId) -> ServiceResult<QuotaResponse> {
        let rater = self
            .ctx
            .rater_repo()
            .find_by_id(rater_id)
            .await?
            .ok_or(DomainError::RaterNotFound(rater_id))?;

        let limits = self.resolve_limits(rater.organization.as_deref()).await?;
        let today = self.ctx.clock().today();
        let usage = self.ctx.vote_repo().counts_for_day(rater_id, today).await?;

        Ok(QuotaResponse::build(today, limits, usage))
    }

    /// Delete a rating (author or admin only)
    ///
    /// The vote ledger entry stays behind so the day's quota slot remains
    /// consumed.
    #[instrument(skip(self))]
    pub async fn delete_rating(&self, actor_id: RecordId, rating_id: RecordId) -> ServiceResult<()> {
        let actor = self
            .ctx
            .rater_repo()
            .find_by_id(actor_id)
            .await?
            .ok_or(DomainError::RaterNotFound(actor_id))?;

        let rating = self
            .ctx
            .rating_repo()
            .find_by_id(rating_id)
            .await?
            .ok_or(DomainError::RatingNotFound(rating_id))?;

        if !rating.is_authored_by(actor_id) && !actor.is_admin() {
            return Err(ServiceError::permission_denied("delete this rating"));
        }

        self.ctx.rating_repo().delete(rating_id).await?;

        info!(rating_id = %rating_id, actor_id = %actor_id, "Rating deleted");
        Ok(())
    }

    /// Flip the featured flag on a rating (admin only)
    #[instrument(skip(self))]
    pub async fn set_featured(
        &self,
        actor_id: RecordId,
        rating_id: RecordId,
        featured: bool,
    ) -> ServiceResult<RatingResponse> {
        self.require_admin(actor_id).await?;

        self.ctx.rating_repo().set_featured(rating_id, featured).await?;

        let rating = self
            .ctx
            .rating_repo()
            .find_by_id(rating_id)
            .await?
            .ok_or(DomainError::RatingNotFound(rating_id))?;

        info!(rating_id = %rating_id, featured, "Featured flag updated");
        Ok(RatingResponse::from(&rating))
    }

    /// Replace an organization's per-tier daily limits (admin only)
    ///
    /// Applies prospectively: slots already consumed today stay consumed.
    #[instrument(skip(self, request))]
    pub async fn set_daily_limits(
        &self,
        actor_id: RecordId,
        organization_code: &str,
        request: SetDailyLimitsRequest,
    ) -> ServiceResult<()> {
        self.require_admin(actor_id).await?;

        let limits = request.into_limits();
        self.ctx
            .organization_repo()
            .update_limits(organization_code, limits)
            .await?;

        info!(
            organization = organization_code,
            t1 = limits.t1,
            t2 = limits.t2,
            t3 = limits.t3,
            "Daily limits updated"
        );
        Ok(())
    }

    /// Ratings for a target, featured first, then newest first
    #[instrument(skip(self))]
    pub async fn ratings_for_target(&self, target_id: RecordId) -> ServiceResult<Vec<RatingResponse>> {
        self.ctx
            .target_repo()
            .find_by_id(target_id)
            .await?
            .ok_or(DomainError::TargetNotFound(target_id))?;

        let ratings = self.ctx.rating_repo().find_by_target(target_id).await?;
        Ok(ratings.iter().map(RatingResponse::from).collect())
    }

    /// All ratings submitted by a rater, newest first
    #[instrument(skip(self))]
    pub async fn ratings_by_rater(&self, rater_id: RecordId) -> ServiceResult<Vec<RatingResponse>> {
        self.ctx
            .rater_repo()
            .find_by_id(rater_id)
            .await?
            .ok_or(DomainError::RaterNotFound(rater_id))?;

        let ratings = self.ctx.rating_repo().find_by_rater(rater_id).await?;
        Ok(ratings.iter().map(RatingResponse::from).collect())
    }

    /// Resolve per-tier limits: the rater's organization, else the fallback
    async fn resolve_limits(&self, organization: Option<&str>) -> ServiceResult<DailyLimits> {
        match organization {
            Some(code) => Ok(self
                .ctx
                .organization_repo()
                .find_by_code(code)
                .await?
                .map_or(DailyLimits::FALLBACK, |org| org.limits)),
            None => Ok(DailyLimits::FALLBACK),
        }
    }

    async fn require_admin(&self, actor_id: RecordId) -> ServiceResult<Rater> {
        let actor = self
            .ctx
            .rater_repo()
            .find_by_id(actor_id)
            .await?
            .ok_or(DomainError::RaterNotFound(actor_id))?;

        if !actor.is_admin() {
            return Err(ServiceError::permission_denied("administer ratings"));
        }

        Ok(actor)
    }
}
