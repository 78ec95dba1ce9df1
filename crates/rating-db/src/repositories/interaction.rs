//! Interaction repository implementation
//!
//! The toggle walks the absent/liked/disliked state machine inside one
//! transaction: the rating row is locked first, then the interaction row
//! and the materialized counters are written together.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use rating_core::entities::{Interaction, InteractionKind, Rating};
use rating_core::traits::{InteractionRepository, RepoResult};
use rating_core::value_objects::RecordId;

use crate::models::{InteractionModel, RatingModel};

use super::error::map_db_error;

/// PostgreSQL implementation of InteractionRepository
pub struct PgInteractionRepository {
    pool: PgPool,
}

impl PgInteractionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Counter update applied when the rater had no interaction yet
const fn increment_sql(kind: InteractionKind) -> &'static str {
    match kind {
        InteractionKind::Like => {
            r#"
            UPDATE ratings
            SET likes = likes + 1, updated_at = NOW()
            WHERE rating_id = $1
            RETURNING rating_id, target_id, rater_id, tier, reason,
                      likes, dislikes, is_featured, created_at, updated_at
            "#
        }
        InteractionKind::Dislike => {
            r#"
            UPDATE ratings
            SET dislikes = dislikes + 1, updated_at = NOW()
            WHERE rating_id = $1
            RETURNING rating_id, target_id, rater_id, tier, reason,
                      likes, dislikes, is_featured, created_at, updated_at
            "#
        }
    }
}

/// Counter update applied when the same reaction is pressed again
///
/// GREATEST floors the counter at zero in case it ever drifted.
const fn decrement_sql(kind: InteractionKind) -> &'static str {
    match kind {
        InteractionKind::Like => {
            r#"
            UPDATE ratings
            SET likes = GREATEST(likes - 1, 0), updated_at = NOW()
            WHERE rating_id = $1
            RETURNING rating_id, target_id, rater_id, tier, reason,
                      likes, dislikes, is_featured, created_at, updated_at
            "#
        }
        InteractionKind::Dislike => {
            r#"
            UPDATE ratings
            SET dislikes = GREATEST(dislikes - 1, 0), updated_at = NOW()
            WHERE rating_id = $1
            RETURNING rating_id, target_id, rater_id, tier, reason,
                      likes, dislikes, is_featured, created_at, updated_at
            "#
        }
    }
}

/// Counter update applied when switching to the opposite reaction
const fn switch_sql(kind: InteractionKind) -> &'static str {
    match kind {
        InteractionKind::Like => {
            r#"
            UPDATE ratings
            SET likes = likes + 1, dislikes = GREATEST(dislikes - 1, 0), updated_at = NOW()
            WHERE rating_id = $1
            RETURNING rating_id, target_id, rater_id, tier, reason,
                      likes, dislikes, is_featured, created_at, updated_at
            "#
        }
        InteractionKind::Dislike => {
            r#"
            UPDATE ratings
            SET dislikes = dislikes + 1, likes = GREATEST(likes - 1, 0), updated_at = NOW()
            WHERE rating_id = $1
            RETURNING rating_id, target_id, rater_id, tier, reason,
                      likes, dislikes, is_featured, created_at, updated_at
            "#
        }
    }
}

#[async_trait]
impl InteractionRepository for PgInteractionRepository {
    #[instrument(skip(self))]
    async fn find(
        &self,
        rating_id: RecordId,
        rater_id: RecordId,
    ) -> RepoResult<Option<Interaction>> {
        let model = sqlx::query_as::<_, InteractionModel>(
            r#"
            SELECT rating_id, rater_id, kind, created_at
            FROM interactions
            WHERE rating_id = $1 AND rater_id = $2
            "#,
        )
        .bind(rating_id.into_inner())
        .bind(rater_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.map(Interaction::from))
    }

    #[instrument(skip(self))]
    async fn toggle(
        &self,
        rating_id: RecordId,
        rater_id: RecordId,
        kind: InteractionKind,
    ) -> RepoResult<Option<Rating>> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Lock the rating row so concurrent toggles on the same rating
        // serialize and the counters stay consistent with the records.
        let locked = sqlx::query_scalar::<_, i64>(
            "SELECT rating_id FROM ratings WHERE rating_id = $1 FOR UPDATE",
        )
        .bind(rating_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if locked.is_none() {
            // Dropping the transaction rolls it back.
            return Ok(None);
        }

        let existing = sqlx::query_as::<_, InteractionModel>(
            r#"
            SELECT rating_id, rater_id, kind, created_at
            FROM interactions
            WHERE rating_id = $1 AND rater_id = $2
            "#,
        )
        .bind(rating_id.into_inner())
        .bind(rater_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let model = match existing {
            None => {
                sqlx::query(
                    r#"
                    INSERT INTO interactions (rating_id, rater_id, kind)
                    VALUES ($1, $2, $3)
                    "#,
                )
                .bind(rating_id.into_inner())
                .bind(rater_id.into_inner())
                .bind(kind.as_code())
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;

                sqlx::query_as::<_, RatingModel>(increment_sql(kind))
                    .bind(rating_id.into_inner())
                    .fetch_one(&mut *tx)
                    .await
                    .map_err(map_db_error)?
            }
            Some(ref current) if current.kind == kind.as_code() => {
                // Same reaction again: remove it.
                sqlx::query(
                    "DELETE FROM interactions WHERE rating_id = $1 AND rater_id = $2",
                )
                .bind(rating_id.into_inner())
                .bind(rater_id.into_inner())
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;

                sqlx::query_as::<_, RatingModel>(decrement_sql(kind))
                    .bind(rating_id.into_inner())
                    .fetch_one(&mut *tx)
                    .await
                    .map_err(map_db_error)?
            }
            Some(_) => {
                // Opposite reaction held: switch it over.
                sqlx::query(
                    r#"
                    UPDATE interactions
                    SET kind = $3
                    WHERE rating_id = $1 AND rater_id = $2
                    "#,
                )
                .bind(rating_id.into_inner())
                .bind(rater_id.into_inner())
                .bind(kind.as_code())
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;

                sqlx::query_as::<_, RatingModel>(switch_sql(kind))
                    .bind(rating_id.into_inner())
                    .fetch_one(&mut *tx)
                    .await
                    .map_err(map_db_error)?
            }
        };

        tx.commit().await.map_err(map_db_error)?;

        Ok(Some(Rating::from(model)))
    }
}
