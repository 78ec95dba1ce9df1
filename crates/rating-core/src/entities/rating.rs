//! Rating entity - a tiered rating of a target

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{RecordId, Tier};

/// Maximum length of the free-text reason
pub const MAX_REASON_LEN: usize = 200;

/// Rating entity
///
/// Immutable after creation except for the two counters (owned by the
/// interaction toggle engine) and the admin-controlled `featured` flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    pub id: RecordId,
    pub target_id: RecordId,
    pub rater_id: RecordId,
    pub tier: Tier,
    pub reason: String,
    pub likes: i32,
    pub dislikes: i32,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Rating {
    /// Check if the given rater authored this rating
    #[inline]
    pub fn is_authored_by(&self, rater_id: RecordId) -> bool {
        self.rater_id == rater_id
    }
}

/// A rating as submitted, before the database assigns an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingDraft {
    pub rater_id: RecordId,
    pub target_id: RecordId,
    pub tier: Tier,
    pub reason: String,
}

impl RatingDraft {
    /// Create a new draft
    pub fn new(rater_id: RecordId, target_id: RecordId, tier: Tier, reason: String) -> Self {
        Self {
            rater_id,
            target_id,
            tier,
            reason,
        }
    }

    /// Validate the free-text reason (non-blank, bounded length)
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.reason.trim().is_empty() {
            return Err(DomainError::BlankReason);
        }
        if self.reason.chars().count() > MAX_REASON_LEN {
            return Err(DomainError::ReasonTooLong {
                max: MAX_REASON_LEN,
            });
        }
        Ok(())
    }
}
