//! Data transfer objects for service requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for inputs
//! - Response DTOs for serializing outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    SetDailyLimitsRequest, SetFeaturedRequest, SubmitRatingRequest, ToggleInteractionRequest,
};

// Re-export commonly used response types
pub use responses::{
    QuotaResponse, QuotaTotals, RatingResponse, TierQuotaResponse, ToggleResponse,
};
