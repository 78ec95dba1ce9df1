//! Request DTOs for service operations
//!
//! All request DTOs implement `Deserialize`; those carrying free-form
//! input also implement `Validate`.

use rating_core::value_objects::{DailyLimits, RecordId};
use serde::Deserialize;
use validator::Validate;

/// Rating submission request
///
/// The tier travels as its wire code ("T1", "T2", "T3"); anything else is
/// rejected as a validation error before any quota logic runs.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitRatingRequest {
    pub target_id: RecordId,

    pub tier: String,

    #[validate(length(min = 1, max = 200, message = "Reason must be 1-200 characters"))]
    pub reason: String,
}

/// Like/dislike toggle request
///
/// `kind` is exactly "like" or "dislike".
#[derive(Debug, Clone, Deserialize)]
pub struct ToggleInteractionRequest {
    pub kind: String,
}

/// Admin request to flip the featured flag on a rating
#[derive(Debug, Clone, Deserialize)]
pub struct SetFeaturedRequest {
    pub featured: bool,
}

/// Admin request to replace an organization's per-tier daily limits
///
/// Unsigned fields make negative limits unrepresentable.
#[derive(Debug, Clone, Deserialize)]
pub struct SetDailyLimitsRequest {
    pub t1: u32,
    pub t2: u32,
    pub t3: u32,
}

impl SetDailyLimitsRequest {
    /// Convert into the domain limit set
    pub fn into_limits(self) -> DailyLimits {
        DailyLimits::new(self.t1, self.t2, self.t3)
    }
}
