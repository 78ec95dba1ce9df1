//! # rating-service
//!
//! Application layer containing business logic, services, and DTOs.
//!
//! The two core services are [`services::RatingService`] (submission under
//! daily per-tier quotas) and [`services::InteractionService`] (the
//! like/dislike toggle engine). Both operate through a
//! [`services::ServiceContext`] dependency container holding repository
//! trait objects and the local-day clock.

pub mod dto;
pub mod services;

pub use services::{
    InteractionService, RatingService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult,
};
