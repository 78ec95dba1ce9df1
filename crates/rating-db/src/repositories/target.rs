//! Target repository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use rating_core::entities::Target;
use rating_core::traits::{RepoResult, TargetRepository};
use rating_core::value_objects::RecordId;

use crate::models::TargetModel;

use super::error::map_db_error;

/// PostgreSQL implementation of TargetRepository
pub struct PgTargetRepository {
    pool: PgPool,
}

impl PgTargetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TargetRepository for PgTargetRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Target>> {
        let model = sqlx::query_as::<_, TargetModel>(
            r#"
            SELECT target_id, name, organization_code, created_at
            FROM targets
            WHERE target_id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.map(Target::from))
    }
}
