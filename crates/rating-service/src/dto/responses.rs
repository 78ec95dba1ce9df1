//! Response DTOs for service operations
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Record IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, NaiveDate, Utc};
use rating_core::entities::InteractionKind;
use rating_core::traits::TierUsage;
use rating_core::value_objects::{DailyLimits, Tier};
use serde::Serialize;

/// Rating with its current counters
#[derive(Debug, Clone, Serialize)]
pub struct RatingResponse {
    pub id: String,
    pub target_id: String,
    pub rater_id: String,
    pub tier: Tier,
    pub reason: String,
    pub likes: i32,
    pub dislikes: i32,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Quota state for one tier
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TierQuotaResponse {
    pub limit: u32,
    pub used: u32,
    pub remaining: u32,
}

impl TierQuotaResponse {
    fn new(limit: u32, used: i64) -> Self {
        let used = u32::try_from(used.max(0)).unwrap_or(u32::MAX);
        Self {
            limit,
            used,
            remaining: limit.saturating_sub(used),
        }
    }
}

/// Aggregate quota block (sums across tiers)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuotaTotals {
    pub limit: u32,
    pub used: u32,
    pub remaining: u32,
}

/// Full per-day quota report for a rater
#[derive(Debug, Clone, Serialize)]
pub struct QuotaResponse {
    pub date: NaiveDate,
    pub t1: TierQuotaResponse,
    pub t2: TierQuotaResponse,
    pub t3: TierQuotaResponse,
    pub totals: QuotaTotals,
}

impl QuotaResponse {
    /// Assemble the report from resolved limits and the day's ledger usage
    pub fn build(date: NaiveDate, limits: DailyLimits, usage: TierUsage) -> Self {
        let t1 = TierQuotaResponse::new(limits.limit_for(Tier::T1), usage.used_for(Tier::T1));
        let t2 = TierQuotaResponse::new(limits.limit_for(Tier::T2), usage.used_for(Tier::T2));
        let t3 = TierQuotaResponse::new(limits.limit_for(Tier::T3), usage.used_for(Tier::T3));

        let totals = QuotaTotals {
            limit: limits.total(),
            used: t1.used + t2.used + t3.used,
            remaining: t1.remaining + t2.remaining + t3.remaining,
        };

        Self {
            date,
            t1,
            t2,
            t3,
            totals,
        }
    }

    /// The per-tier block for one tier
    pub fn tier(&self, tier: Tier) -> TierQuotaResponse {
        match tier {
            Tier::T1 => self.t1,
            Tier::T2 => self.t2,
            Tier::T3 => self.t3,
        }
    }
}

/// Result of a like/dislike toggle
///
/// `reaction` is the caller's state after the toggle: None when the press
/// removed their reaction.
#[derive(Debug, Clone, Serialize)]
pub struct ToggleResponse {
    pub rating: RatingResponse,
    pub reaction: Option<InteractionKind>,
}
