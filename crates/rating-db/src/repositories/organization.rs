//! Organization repository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use rating_core::entities::Organization;
use rating_core::error::DomainError;
use rating_core::traits::{OrganizationRepository, RepoResult};
use rating_core::value_objects::DailyLimits;

use crate::models::OrganizationModel;

use super::error::map_db_error;

/// PostgreSQL implementation of OrganizationRepository
pub struct PgOrganizationRepository {
    pool: PgPool,
}

impl PgOrganizationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrganizationRepository for PgOrganizationRepository {
    #[instrument(skip(self))]
    async fn find_by_code(&self, code: &str) -> RepoResult<Option<Organization>> {
        let model = sqlx::query_as::<_, OrganizationModel>(
            r#"
            SELECT code, name, t1_limit, t2_limit, t3_limit, created_at
            FROM organizations
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.map(Organization::from))
    }

    #[instrument(skip(self))]
    async fn update_limits(&self, code: &str, limits: DailyLimits) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE organizations
            SET t1_limit = $2, t2_limit = $3, t3_limit = $4
            WHERE code = $1
            "#,
        )
        .bind(code)
        .bind(limits.t1 as i32)
        .bind(limits.t2 as i32)
        .bind(limits.t3 as i32)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::OrganizationNotFound(code.to_string()));
        }

        Ok(())
    }
}
