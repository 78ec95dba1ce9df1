//! Rater repository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use rating_core::entities::Rater;
use rating_core::traits::{RaterRepository, RepoResult};
use rating_core::value_objects::RecordId;

use crate::models::RaterModel;

use super::error::map_db_error;

/// PostgreSQL implementation of RaterRepository
pub struct PgRaterRepository {
    pool: PgPool,
}

impl PgRaterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RaterRepository for PgRaterRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Rater>> {
        let model = sqlx::query_as::<_, RaterModel>(
            r#"
            SELECT rater_id, username, organization_code, approved, can_rate, admin, created_at
            FROM raters
            WHERE rater_id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.map(Rater::from))
    }
}
