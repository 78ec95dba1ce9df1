//! Vote ledger repository implementation

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;

use rating_core::traits::{RepoResult, TierUsage, VoteLedgerRepository};
use rating_core::value_objects::{RecordId, Tier};

use crate::models::TierCountRow;

use super::error::map_db_error;

/// PostgreSQL implementation of VoteLedgerRepository
pub struct PgVoteLedgerRepository {
    pool: PgPool,
}

impl PgVoteLedgerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteLedgerRepository for PgVoteLedgerRepository {
    #[instrument(skip(self))]
    async fn count_for_tier(
        &self,
        rater_id: RecordId,
        date: NaiveDate,
        tier: Tier,
    ) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM votes
            WHERE rater_id = $1 AND vote_date = $2 AND tier = $3
            "#,
        )
        .bind(rater_id.into_inner())
        .bind(date)
        .bind(tier.as_code())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn counts_for_day(&self, rater_id: RecordId, date: NaiveDate) -> RepoResult<TierUsage> {
        let rows = sqlx::query_as::<_, TierCountRow>(
            r#"
            SELECT tier, COUNT(*) AS count FROM votes
            WHERE rater_id = $1 AND vote_date = $2
            GROUP BY tier
            "#,
        )
        .bind(rater_id.into_inner())
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut usage = TierUsage::default();
        for row in rows {
            match Tier::from_code(&row.tier) {
                Some(Tier::T1) => usage.t1 = row.count,
                Some(Tier::T2) => usage.t2 = row.count,
                Some(Tier::T3) => usage.t3 = row.count,
                None => {}
            }
        }

        Ok(usage)
    }
}
