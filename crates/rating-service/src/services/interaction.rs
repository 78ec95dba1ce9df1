//! Interaction service - the like/dislike toggle engine
//!
//! Each press walks the absent/liked/disliked state machine for the
//! (rater, rating) pair. The repository applies the whole step atomically;
//! the only rejection is not-found for an unknown rating.

use tracing::{info, instrument};

use rating_core::entities::InteractionKind;
use rating_core::error::DomainError;
use rating_core::value_objects::RecordId;

use crate::dto::{RatingResponse, ToggleInteractionRequest, ToggleResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Interaction service
pub struct InteractionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> InteractionService<'a> {
    /// Create a new InteractionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle a like on a rating
    pub async fn toggle_like(
        &self,
        rater_id: RecordId,
        rating_id: RecordId,
    ) -> ServiceResult<ToggleResponse> {
        self.toggle(rater_id, rating_id, InteractionKind::Like).await
    }

    /// Toggle a dislike on a rating
    pub async fn toggle_dislike(
        &self,
        rater_id: RecordId,
        rating_id: RecordId,
    ) -> ServiceResult<ToggleResponse> {
        self.toggle(rater_id, rating_id, InteractionKind::Dislike)
            .await
    }

    /// Toggle from a request carrying the kind as its wire code
    pub async fn toggle_from_request(
        &self,
        rater_id: RecordId,
        rating_id: RecordId,
        request: ToggleInteractionRequest,
    ) -> ServiceResult<ToggleResponse> {
        let kind = InteractionKind::from_code(&request.kind).ok_or_else(|| {
            ServiceError::validation(format!("Unknown interaction kind: {}", request.kind))
        })?;
        self.toggle(rater_id, rating_id, kind).await
    }

    /// Apply one toggle press
    #[instrument(skip(self))]
    pub async fn toggle(
        &self,
        rater_id: RecordId,
        rating_id: RecordId,
        kind: InteractionKind,
    ) -> ServiceResult<ToggleResponse> {
        let rating = self
            .ctx
            .interaction_repo()
            .toggle(rating_id, rater_id, kind)
            .await?
            .ok_or(DomainError::RatingNotFound(rating_id))?;

        let reaction = self
            .ctx
            .interaction_repo()
            .find(rating_id, rater_id)
            .await?
            .map(|i| i.kind);

        info!(
            rating_id = %rating_id,
            rater_id = %rater_id,
            kind = kind.as_code(),
            likes = rating.likes,
            dislikes = rating.dislikes,
            "Interaction toggled"
        );

        Ok(ToggleResponse {
            rating: RatingResponse::from(&rating),
            reaction,
        })
    }
}
