//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{RecordId, Tier};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Rater not found: {0}")]
    RaterNotFound(RecordId),

    #[error("Target not found: {0}")]
    TargetNotFound(RecordId),

    #[error("Rating not found: {0}")]
    RatingNotFound(RecordId),

    #[error("Organization not found: {0}")]
    OrganizationNotFound(String),

    // =========================================================================
    // Authorization Rejections
    // =========================================================================
    #[error("Account has not been approved")]
    NotApproved,

    #[error("Rating permission is disabled for this account")]
    RatingDisabled,

    #[error("Cannot rate a target from another organization")]
    CrossOrganization,

    // =========================================================================
    // Quota / Uniqueness Rejections
    // =========================================================================
    #[error("Daily {tier} limit ({limit}) exceeded")]
    QuotaExceeded { tier: Tier, limit: u32 },

    #[error("Already rated this target today")]
    AlreadyRatedToday,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Reason must not be blank")]
    BlankReason,

    #[error("Reason too long: max {max} characters")]
    ReasonTooLong { max: usize },

    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::RaterNotFound(_) => "UNKNOWN_RATER",
            Self::TargetNotFound(_) => "UNKNOWN_TARGET",
            Self::RatingNotFound(_) => "UNKNOWN_RATING",
            Self::OrganizationNotFound(_) => "UNKNOWN_ORGANIZATION",

            // Authorization
            Self::NotApproved => "NOT_APPROVED",
            Self::RatingDisabled => "RATING_DISABLED",
            Self::CrossOrganization => "CROSS_ORGANIZATION",

            // Quota / uniqueness
            Self::QuotaExceeded { .. } => "QUOTA_EXCEEDED",
            Self::AlreadyRatedToday => "ALREADY_RATED_TODAY",

            // Validation
            Self::BlankReason => "BLANK_REASON",
            Self::ReasonTooLong { .. } => "REASON_TOO_LONG",
            Self::ValidationError(_) => "VALIDATION_ERROR",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::RaterNotFound(_)
                | Self::TargetNotFound(_)
                | Self::RatingNotFound(_)
                | Self::OrganizationNotFound(_)
        )
    }

    /// Check if this is an authorization rejection (never retried)
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotApproved | Self::RatingDisabled | Self::CrossOrganization
        )
    }

    /// Check if this is a daily quota rejection
    pub fn is_quota(&self) -> bool {
        matches!(self, Self::QuotaExceeded { .. })
    }

    /// Check if this is a uniqueness conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AlreadyRatedToday)
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::BlankReason | Self::ReasonTooLong { .. } | Self::ValidationError(_)
        )
    }
}
