//! Service-level tests against in-memory repositories
//!
//! Cover the quota enforcer's check chain, the one-per-target-per-day
//! rule, the like/dislike state machine, and admin gating.

mod common;

use common::{context, MemoryStore};
use rating_core::error::DomainError;
use rating_core::traits::RatingRepository;
use rating_core::value_objects::{DailyLimits, RecordId, Tier};
use rating_core::RatingDraft;
use rating_service::dto::{SetDailyLimitsRequest, SubmitRatingRequest, ToggleInteractionRequest};
use rating_service::{InteractionService, RatingService, ServiceError};

fn submit(target_id: RecordId, tier: &str) -> SubmitRatingRequest {
    SubmitRatingRequest {
        target_id,
        tier: tier.to_string(),
        reason: "explains things clearly".to_string(),
    }
}

// ============================================================================
// Quota enforcement
// ============================================================================

#[tokio::test]
async fn test_fallback_t1_limit_worked_example() {
    let store = MemoryStore::new();
    let ctx = context(&store);
    let service = RatingService::new(&ctx);
    let rater = store.add_rater(None);

    for _ in 0..3 {
        let target = store.add_target(None);
        service
            .submit_rating(rater, submit(target, "T1"))
            .await
            .expect("within limit");
    }

    let target = store.add_target(None);
    let err = service
        .submit_rating(rater, submit(target, "T1"))
        .await
        .expect_err("fourth T1 should exceed the quota");

    assert_eq!(err.status_code(), 429);
    assert_eq!(err.error_code(), "QUOTA_EXCEEDED");
    assert_eq!(err.to_string(), "Daily T1 limit (3) exceeded");

    let quota = service.get_quota(rater).await.unwrap();
    assert_eq!(quota.t1.limit, 3);
    assert_eq!(quota.t1.used, 3);
    assert_eq!(quota.t1.remaining, 0);
    assert_eq!(quota.totals.limit, 6);
    assert_eq!(quota.totals.used, 3);
}

#[tokio::test]
async fn test_quota_is_tracked_per_tier() {
    let store = MemoryStore::new();
    let ctx = context(&store);
    let service = RatingService::new(&ctx);
    let rater = store.add_rater(None);

    for _ in 0..3 {
        let target = store.add_target(None);
        service.submit_rating(rater, submit(target, "T1")).await.unwrap();
    }

    // T1 exhausted; T2 still has budget.
    let target = store.add_target(None);
    service
        .submit_rating(rater, submit(target, "T2"))
        .await
        .expect("T2 budget is independent of T1");
}

#[tokio::test]
async fn test_organization_limits_override_fallback() {
    let store = MemoryStore::new();
    store.add_organization("S001", DailyLimits::new(1, 0, 1));
    let ctx = context(&store);
    let service = RatingService::new(&ctx);
    let rater = store.add_rater(Some("S001"));

    let target = store.add_target(Some("S001"));
    service.submit_rating(rater, submit(target, "T1")).await.unwrap();

    let second = store.add_target(Some("S001"));
    let err = service
        .submit_rating(rater, submit(second, "T1"))
        .await
        .expect_err("limit 1 reached");
    assert_eq!(err.to_string(), "Daily T1 limit (1) exceeded");

    // A zero limit rejects the first attempt.
    let err = service
        .submit_rating(rater, submit(second, "T2"))
        .await
        .expect_err("limit 0 leaves no budget");
    assert_eq!(err.to_string(), "Daily T2 limit (0) exceeded");
}

#[tokio::test]
async fn test_same_target_same_day_rejected_across_tiers() {
    let store = MemoryStore::new();
    let ctx = context(&store);
    let service = RatingService::new(&ctx);
    let rater = store.add_rater(None);
    let target = store.add_target(None);

    service.submit_rating(rater, submit(target, "T1")).await.unwrap();

    // T2 has budget left, but the target was already rated today.
    let err = service
        .submit_rating(rater, submit(target, "T2"))
        .await
        .expect_err("second rating of the same target must fail");
    assert_eq!(err.status_code(), 409);
    assert_eq!(err.error_code(), "ALREADY_RATED_TODAY");
}

#[tokio::test]
async fn test_ledger_race_surfaces_as_already_rated() {
    // Two submissions that both passed the pre-checks: the second insert
    // loses on the ledger key.
    let store = MemoryStore::new();
    let rater = store.add_rater(None);
    let target = store.add_target(None);
    let today = rating_core::value_objects::DayClock::utc().today();

    let draft = RatingDraft::new(rater, target, Tier::T1, "fine".to_string());
    RatingRepository::create_with_vote(&*store, &draft, today)
        .await
        .expect("first insert wins");

    let err = RatingRepository::create_with_vote(&*store, &draft, today)
        .await
        .expect_err("second insert loses the race");
    assert!(matches!(err, DomainError::AlreadyRatedToday));
}

// ============================================================================
// Authorization gates
// ============================================================================

#[tokio::test]
async fn test_unapproved_rater_rejected() {
    let store = MemoryStore::new();
    let ctx = context(&store);
    let service = RatingService::new(&ctx);
    let rater = store.add_rater_full(None, false, true, false);
    let target = store.add_target(None);

    let err = service
        .submit_rating(rater, submit(target, "T1"))
        .await
        .expect_err("unapproved rater");
    assert_eq!(err.status_code(), 403);
    assert_eq!(err.error_code(), "NOT_APPROVED");
}

#[tokio::test]
async fn test_rating_disabled_rater_rejected() {
    let store = MemoryStore::new();
    let ctx = context(&store);
    let service = RatingService::new(&ctx);
    let rater = store.add_rater_full(None, true, false, false);
    let target = store.add_target(None);

    let err = service
        .submit_rating(rater, submit(target, "T1"))
        .await
        .expect_err("rating disabled");
    assert_eq!(err.error_code(), "RATING_DISABLED");
}

#[tokio::test]
async fn test_cross_organization_blocked() {
    let store = MemoryStore::new();
    let ctx = context(&store);
    let service = RatingService::new(&ctx);
    let rater = store.add_rater(Some("A"));
    let target = store.add_target(Some("B"));

    let err = service
        .submit_rating(rater, submit(target, "T1"))
        .await
        .expect_err("organizations differ");
    assert_eq!(err.error_code(), "CROSS_ORGANIZATION");
}

#[tokio::test]
async fn test_missing_organization_is_an_escape_hatch() {
    let store = MemoryStore::new();
    let ctx = context(&store);
    let service = RatingService::new(&ctx);

    let free_rater = store.add_rater(None);
    let org_target = store.add_target(Some("B"));
    service
        .submit_rating(free_rater, submit(org_target, "T1"))
        .await
        .expect("rater without organization may rate anywhere");

    let org_rater = store.add_rater(Some("A"));
    let free_target = store.add_target(None);
    service
        .submit_rating(org_rater, submit(free_target, "T1"))
        .await
        .expect("target without organization is open to everyone");
}

// ============================================================================
// Input validation
// ============================================================================

#[tokio::test]
async fn test_unknown_tier_code_is_a_validation_error() {
    let store = MemoryStore::new();
    let ctx = context(&store);
    let service = RatingService::new(&ctx);
    let rater = store.add_rater(None);
    let target = store.add_target(None);

    let err = service
        .submit_rating(rater, submit(target, "T9"))
        .await
        .expect_err("unknown tier");
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn test_blank_reason_rejected() {
    let store = MemoryStore::new();
    let ctx = context(&store);
    let service = RatingService::new(&ctx);
    let rater = store.add_rater(None);
    let target = store.add_target(None);

    let request = SubmitRatingRequest {
        target_id: target,
        tier: "T1".to_string(),
        reason: "   ".to_string(),
    };
    let err = service
        .submit_rating(rater, request)
        .await
        .expect_err("whitespace-only reason");
    assert_eq!(err.error_code(), "BLANK_REASON");
}

#[tokio::test]
async fn test_unknown_rater_and_target_are_not_found() {
    let store = MemoryStore::new();
    let ctx = context(&store);
    let service = RatingService::new(&ctx);

    let err = service
        .submit_rating(RecordId::new(999), submit(RecordId::new(1), "T1"))
        .await
        .expect_err("unknown rater");
    assert_eq!(err.status_code(), 404);

    let rater = store.add_rater(None);
    let err = service
        .submit_rating(rater, submit(RecordId::new(999), "T1"))
        .await
        .expect_err("unknown target");
    assert_eq!(err.error_code(), "UNKNOWN_TARGET");
}

// ============================================================================
// Interaction toggle
// ============================================================================

#[tokio::test]
async fn test_toggle_like_round_trip() {
    let store = MemoryStore::new();
    let ctx = context(&store);
    let ratings = RatingService::new(&ctx);
    let interactions = InteractionService::new(&ctx);

    let author = store.add_rater(None);
    let reader = store.add_rater(None);
    let target = store.add_target(None);
    let rating = ratings.submit_rating(author, submit(target, "T1")).await.unwrap();
    let rating_id: RecordId = rating.id.parse().unwrap();

    let pressed = interactions.toggle_like(reader, rating_id).await.unwrap();
    assert_eq!(pressed.rating.likes, 1);
    assert_eq!(
        pressed.reaction,
        Some(rating_core::InteractionKind::Like)
    );

    let undone = interactions.toggle_like(reader, rating_id).await.unwrap();
    assert_eq!(undone.rating.likes, 0);
    assert_eq!(undone.reaction, None);
    assert_eq!(store.interaction_count(rating_id), 0);
}

#[tokio::test]
async fn test_toggle_switch_keeps_one_record() {
    let store = MemoryStore::new();
    let ctx = context(&store);
    let ratings = RatingService::new(&ctx);
    let interactions = InteractionService::new(&ctx);

    let author = store.add_rater(None);
    let reader = store.add_rater(None);
    let target = store.add_target(None);
    let rating = ratings.submit_rating(author, submit(target, "T1")).await.unwrap();
    let rating_id: RecordId = rating.id.parse().unwrap();

    interactions.toggle_like(reader, rating_id).await.unwrap();
    let switched = interactions.toggle_dislike(reader, rating_id).await.unwrap();

    assert_eq!(switched.rating.likes, 0);
    assert_eq!(switched.rating.dislikes, 1);
    assert_eq!(
        switched.reaction,
        Some(rating_core::InteractionKind::Dislike)
    );
    assert_eq!(store.interaction_count(rating_id), 1);
}

#[tokio::test]
async fn test_two_raters_react_independently() {
    let store = MemoryStore::new();
    let ctx = context(&store);
    let ratings = RatingService::new(&ctx);
    let interactions = InteractionService::new(&ctx);

    let author = store.add_rater(None);
    let target = store.add_target(None);
    let rating = ratings.submit_rating(author, submit(target, "T1")).await.unwrap();
    let rating_id: RecordId = rating.id.parse().unwrap();

    let first = store.add_rater(None);
    let second = store.add_rater(None);
    interactions.toggle_like(first, rating_id).await.unwrap();
    let result = interactions.toggle_like(second, rating_id).await.unwrap();

    assert_eq!(result.rating.likes, 2);
    assert_eq!(store.interaction_count(rating_id), 2);
}

#[tokio::test]
async fn test_toggle_unknown_rating_is_not_found() {
    let store = MemoryStore::new();
    let ctx = context(&store);
    let interactions = InteractionService::new(&ctx);
    let reader = store.add_rater(None);

    let err = interactions
        .toggle_like(reader, RecordId::new(999))
        .await
        .expect_err("unknown rating");
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_toggle_request_rejects_unknown_kind() {
    let store = MemoryStore::new();
    let ctx = context(&store);
    let interactions = InteractionService::new(&ctx);
    let reader = store.add_rater(None);

    let err = interactions
        .toggle_from_request(
            reader,
            RecordId::new(1),
            ToggleInteractionRequest {
                kind: "meh".to_string(),
            },
        )
        .await
        .expect_err("unknown kind");
    assert!(matches!(err, ServiceError::Validation(_)));
}

// ============================================================================
// Deletion and admin operations
// ============================================================================

#[tokio::test]
async fn test_deleting_a_rating_keeps_the_quota_slot() {
    let store = MemoryStore::new();
    let ctx = context(&store);
    let service = RatingService::new(&ctx);
    let rater = store.add_rater(None);
    let target = store.add_target(None);

    let rating = service.submit_rating(rater, submit(target, "T1")).await.unwrap();
    let rating_id: RecordId = rating.id.parse().unwrap();

    service.delete_rating(rater, rating_id).await.unwrap();

    let quota = service.get_quota(rater).await.unwrap();
    assert_eq!(quota.t1.used, 1);

    // Re-rating the same target the same day still fails on the ledger.
    let err = service
        .submit_rating(rater, submit(target, "T1"))
        .await
        .expect_err("ledger entry outlives the rating");
    assert_eq!(err.error_code(), "ALREADY_RATED_TODAY");
}

#[tokio::test]
async fn test_delete_requires_author_or_admin() {
    let store = MemoryStore::new();
    let ctx = context(&store);
    let service = RatingService::new(&ctx);
    let author = store.add_rater(None);
    let stranger = store.add_rater(None);
    let admin = store.add_admin();
    let target = store.add_target(None);

    let rating = service.submit_rating(author, submit(target, "T1")).await.unwrap();
    let rating_id: RecordId = rating.id.parse().unwrap();

    let err = service
        .delete_rating(stranger, rating_id)
        .await
        .expect_err("stranger may not delete");
    assert_eq!(err.status_code(), 403);

    service
        .delete_rating(admin, rating_id)
        .await
        .expect("admin may delete any rating");
}

#[tokio::test]
async fn test_set_featured_is_admin_only_and_sorts_first() {
    let store = MemoryStore::new();
    let ctx = context(&store);
    let service = RatingService::new(&ctx);
    let admin = store.add_admin();
    let target = store.add_target(None);

    let first = service
        .submit_rating(store.add_rater(None), submit(target, "T1"))
        .await
        .unwrap();
    let second = service
        .submit_rating(store.add_rater(None), submit(target, "T1"))
        .await
        .unwrap();
    let first_id: RecordId = first.id.parse().unwrap();

    let err = service
        .set_featured(store.add_rater(None), first_id, true)
        .await
        .expect_err("non-admin may not feature");
    assert_eq!(err.status_code(), 403);

    let featured = service.set_featured(admin, first_id, true).await.unwrap();
    assert!(featured.featured);

    let listed = service
        .ratings_for_target(target)
        .await
        .unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, first.id);
    assert_eq!(listed[1].id, second.id);
}

#[tokio::test]
async fn test_set_daily_limits_applies_prospectively() {
    let store = MemoryStore::new();
    store.add_organization("S001", DailyLimits::FALLBACK);
    let ctx = context(&store);
    let service = RatingService::new(&ctx);
    let admin = store.add_admin();
    let rater = store.add_rater(Some("S001"));

    let err = service
        .set_daily_limits(rater, "S001", SetDailyLimitsRequest { t1: 9, t2: 9, t3: 9 })
        .await
        .expect_err("non-admin may not change limits");
    assert_eq!(err.status_code(), 403);

    service
        .set_daily_limits(admin, "S001", SetDailyLimitsRequest { t1: 5, t2: 2, t3: 1 })
        .await
        .unwrap();

    let quota = service.get_quota(rater).await.unwrap();
    assert_eq!(quota.t1.limit, 5);
}
