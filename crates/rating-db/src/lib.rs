//! # rating-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `rating-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations, including the two transactional
//!   operations (rating + vote ledger creation, interaction toggle)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rating_db::pool::{create_pool, DatabaseConfig};
//! use rating_db::repositories::PgRatingRepository;
//! use rating_core::traits::RatingRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let rating_repo = PgRatingRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgInteractionRepository, PgOrganizationRepository, PgRaterRepository, PgRatingRepository,
    PgTargetRepository, PgVoteLedgerRepository,
};
