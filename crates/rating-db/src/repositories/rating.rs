//! Rating repository implementation

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use tracing::instrument;

use rating_core::entities::{Rating, RatingDraft};
use rating_core::error::DomainError;
use rating_core::traits::{RatingRepository, RepoResult};
use rating_core::value_objects::RecordId;

use crate::models::RatingModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of RatingRepository
pub struct PgRatingRepository {
    pool: PgPool,
}

impl PgRatingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RatingRepository for PgRatingRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Rating>> {
        let model = sqlx::query_as::<_, RatingModel>(
            r#"
            SELECT rating_id, target_id, rater_id, tier, reason,
                   likes, dislikes, is_featured, created_at, updated_at
            FROM ratings
            WHERE rating_id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.map(Rating::from))
    }

    #[instrument(skip(self))]
    async fn create_with_vote(
        &self,
        draft: &RatingDraft,
        vote_date: NaiveDate,
    ) -> RepoResult<Rating> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let model = sqlx::query_as::<_, RatingModel>(
            r#"
            INSERT INTO ratings (target_id, rater_id, tier, reason)
            VALUES ($1, $2, $3, $4)
            RETURNING rating_id, target_id, rater_id, tier, reason,
                      likes, dislikes, is_featured, created_at, updated_at
            "#,
        )
        .bind(draft.target_id.into_inner())
        .bind(draft.rater_id.into_inner())
        .bind(draft.tier.as_code())
        .bind(&draft.reason)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        // The ledger's (rater, day, target) key closes the race between
        // concurrent submissions; losing it aborts the whole transaction
        // so the rating row above never lands alone.
        sqlx::query(
            r#"
            INSERT INTO votes (rater_id, vote_date, target_id, tier)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(draft.rater_id.into_inner())
        .bind(vote_date)
        .bind(draft.target_id.into_inner())
        .bind(draft.tier.as_code())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyRatedToday))?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(Rating::from(model))
    }

    #[instrument(skip(self))]
    async fn exists_in_window(
        &self,
        rater_id: RecordId,
        target_id: RecordId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM ratings
                WHERE rater_id = $1 AND target_id = $2
                  AND created_at >= $3 AND created_at < $4
            )
            "#,
        )
        .bind(rater_id.into_inner())
        .bind(target_id.into_inner())
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn find_by_target(&self, target_id: RecordId) -> RepoResult<Vec<Rating>> {
        let models = sqlx::query_as::<_, RatingModel>(
            r#"
            SELECT rating_id, target_id, rater_id, tier, reason,
                   likes, dislikes, is_featured, created_at, updated_at
            FROM ratings
            WHERE target_id = $1
            ORDER BY is_featured DESC, created_at DESC
            "#,
        )
        .bind(target_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Rating::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_rater(&self, rater_id: RecordId) -> RepoResult<Vec<Rating>> {
        let models = sqlx::query_as::<_, RatingModel>(
            r#"
            SELECT rating_id, target_id, rater_id, tier, reason,
                   likes, dislikes, is_featured, created_at, updated_at
            FROM ratings
            WHERE rater_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(rater_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Rating::from).collect())
    }

    #[instrument(skip(self))]
    async fn set_featured(&self, id: RecordId, featured: bool) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE ratings
            SET is_featured = $2, updated_at = NOW()
            WHERE rating_id = $1
            "#,
        )
        .bind(id.into_inner())
        .bind(featured)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::RatingNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        // Interactions cascade away with the rating; the vote ledger row
        // stays so the day's quota slot remains consumed.
        let result = sqlx::query("DELETE FROM ratings WHERE rating_id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::RatingNotFound(id));
        }

        Ok(())
    }
}
