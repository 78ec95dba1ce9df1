//! Test support: in-memory repository implementations
//!
//! Backs the service tests with a single mutex-guarded store that
//! implements every repository trait, including the two transactional
//! operations with the same semantics as the PostgreSQL layer.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use rating_core::entities::{
    Interaction, InteractionKind, Organization, Rater, Rating, RatingDraft, Target,
    VoteLedgerEntry,
};
use rating_core::error::DomainError;
use rating_core::traits::{
    InteractionRepository, OrganizationRepository, RaterRepository, RatingRepository, RepoResult,
    TargetRepository, TierUsage, VoteLedgerRepository,
};
use rating_core::value_objects::{DailyLimits, DayClock, RecordId, Tier};
use rating_service::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
struct State {
    organizations: HashMap<String, Organization>,
    raters: HashMap<i64, Rater>,
    targets: HashMap<i64, Target>,
    ratings: HashMap<i64, Rating>,
    votes: Vec<VoteLedgerEntry>,
    interactions: HashMap<(i64, i64), Interaction>,
    next_id: i64,
}

impl State {
    fn alloc(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("store lock poisoned")
    }

    pub fn add_organization(&self, code: &str, limits: DailyLimits) {
        let mut org = Organization::new(code.to_string(), format!("{code} school"));
        org.limits = limits;
        self.lock().organizations.insert(code.to_string(), org);
    }

    pub fn add_rater(&self, organization: Option<&str>) -> RecordId {
        self.add_rater_full(organization, true, true, false)
    }

    pub fn add_admin(&self) -> RecordId {
        self.add_rater_full(None, true, true, true)
    }

    pub fn add_rater_full(
        &self,
        organization: Option<&str>,
        approved: bool,
        can_rate: bool,
        admin: bool,
    ) -> RecordId {
        let mut state = self.lock();
        let id = RecordId::new(state.alloc());
        let mut rater = Rater::new(
            id,
            format!("rater-{id}"),
            organization.map(String::from),
        );
        rater.approved = approved;
        rater.can_rate = can_rate;
        rater.admin = admin;
        state.raters.insert(id.into_inner(), rater);
        id
    }

    pub fn add_target(&self, organization: Option<&str>) -> RecordId {
        let mut state = self.lock();
        let id = RecordId::new(state.alloc());
        let target = Target::new(id, format!("target-{id}"), organization.map(String::from));
        state.targets.insert(id.into_inner(), target);
        id
    }

    /// Number of interaction records held on a rating
    pub fn interaction_count(&self, rating_id: RecordId) -> usize {
        self.lock()
            .interactions
            .keys()
            .filter(|(rid, _)| *rid == rating_id.into_inner())
            .count()
    }
}

#[async_trait]
impl OrganizationRepository for MemoryStore {
    async fn find_by_code(&self, code: &str) -> RepoResult<Option<Organization>> {
        Ok(self.lock().organizations.get(code).cloned())
    }

    async fn update_limits(&self, code: &str, limits: DailyLimits) -> RepoResult<()> {
        let mut state = self.lock();
        match state.organizations.get_mut(code) {
            Some(org) => {
                org.limits = limits;
                Ok(())
            }
            None => Err(DomainError::OrganizationNotFound(code.to_string())),
        }
    }
}

#[async_trait]
impl RaterRepository for MemoryStore {
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Rater>> {
        Ok(self.lock().raters.get(&id.into_inner()).cloned())
    }
}

#[async_trait]
impl TargetRepository for MemoryStore {
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Target>> {
        Ok(self.lock().targets.get(&id.into_inner()).cloned())
    }
}

#[async_trait]
impl RatingRepository for MemoryStore {
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Rating>> {
        Ok(self.lock().ratings.get(&id.into_inner()).cloned())
    }

    async fn create_with_vote(
        &self,
        draft: &RatingDraft,
        vote_date: NaiveDate,
    ) -> RepoResult<Rating> {
        let mut state = self.lock();

        let duplicate = state.votes.iter().any(|v| {
            v.rater_id == draft.rater_id
                && v.vote_date == vote_date
                && v.target_id == draft.target_id
        });
        if duplicate {
            return Err(DomainError::AlreadyRatedToday);
        }

        let now = Utc::now();
        let rating = Rating {
            id: RecordId::new(state.alloc()),
            target_id: draft.target_id,
            rater_id: draft.rater_id,
            tier: draft.tier,
            reason: draft.reason.clone(),
            likes: 0,
            dislikes: 0,
            featured: false,
            created_at: now,
            updated_at: now,
        };
        state.ratings.insert(rating.id.into_inner(), rating.clone());

        let vote = VoteLedgerEntry {
            id: RecordId::new(state.alloc()),
            rater_id: draft.rater_id,
            vote_date,
            target_id: draft.target_id,
            tier: draft.tier,
        };
        state.votes.push(vote);

        Ok(rating)
    }

    async fn exists_in_window(
        &self,
        rater_id: RecordId,
        target_id: RecordId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> RepoResult<bool> {
        Ok(self.lock().ratings.values().any(|r| {
            r.rater_id == rater_id
                && r.target_id == target_id
                && r.created_at >= start
                && r.created_at < end
        }))
    }

    async fn find_by_target(&self, target_id: RecordId) -> RepoResult<Vec<Rating>> {
        let mut ratings: Vec<Rating> = self
            .lock()
            .ratings
            .values()
            .filter(|r| r.target_id == target_id)
            .cloned()
            .collect();
        ratings.sort_by(|a, b| {
            b.featured
                .cmp(&a.featured)
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(ratings)
    }

    async fn find_by_rater(&self, rater_id: RecordId) -> RepoResult<Vec<Rating>> {
        let mut ratings: Vec<Rating> = self
            .lock()
            .ratings
            .values()
            .filter(|r| r.rater_id == rater_id)
            .cloned()
            .collect();
        ratings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(ratings)
    }

    async fn set_featured(&self, id: RecordId, featured: bool) -> RepoResult<()> {
        let mut state = self.lock();
        match state.ratings.get_mut(&id.into_inner()) {
            Some(rating) => {
                rating.featured = featured;
                rating.updated_at = Utc::now();
                Ok(())
            }
            None => Err(DomainError::RatingNotFound(id)),
        }
    }

    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        let mut state = self.lock();
        if state.ratings.remove(&id.into_inner()).is_none() {
            return Err(DomainError::RatingNotFound(id));
        }
        // Interactions cascade; votes stay.
        state
            .interactions
            .retain(|(rating_id, _), _| *rating_id != id.into_inner());
        Ok(())
    }
}

#[async_trait]
impl VoteLedgerRepository for MemoryStore {
    async fn count_for_tier(
        &self,
        rater_id: RecordId,
        date: NaiveDate,
        tier: Tier,
    ) -> RepoResult<i64> {
        Ok(self
            .lock()
            .votes
            .iter()
            .filter(|v| v.rater_id == rater_id && v.vote_date == date && v.tier == tier)
            .count() as i64)
    }

    async fn counts_for_day(&self, rater_id: RecordId, date: NaiveDate) -> RepoResult<TierUsage> {
        let state = self.lock();
        let mut usage = TierUsage::default();
        for vote in state
            .votes
            .iter()
            .filter(|v| v.rater_id == rater_id && v.vote_date == date)
        {
            match vote.tier {
                Tier::T1 => usage.t1 += 1,
                Tier::T2 => usage.t2 += 1,
                Tier::T3 => usage.t3 += 1,
            }
        }
        Ok(usage)
    }
}

#[async_trait]
impl InteractionRepository for MemoryStore {
    async fn find(
        &self,
        rating_id: RecordId,
        rater_id: RecordId,
    ) -> RepoResult<Option<Interaction>> {
        Ok(self
            .lock()
            .interactions
            .get(&(rating_id.into_inner(), rater_id.into_inner()))
            .cloned())
    }

    async fn toggle(
        &self,
        rating_id: RecordId,
        rater_id: RecordId,
        kind: InteractionKind,
    ) -> RepoResult<Option<Rating>> {
        let mut state = self.lock();
        if !state.ratings.contains_key(&rating_id.into_inner()) {
            return Ok(None);
        }

        let key = (rating_id.into_inner(), rater_id.into_inner());
        let held = state.interactions.get(&key).map(|i| i.kind);

        match held {
            None => {
                state
                    .interactions
                    .insert(key, Interaction::new(rating_id, rater_id, kind));
                let rating = state.ratings.get_mut(&rating_id.into_inner()).unwrap();
                match kind {
                    InteractionKind::Like => rating.likes += 1,
                    InteractionKind::Dislike => rating.dislikes += 1,
                }
            }
            Some(current) if current == kind => {
                state.interactions.remove(&key);
                let rating = state.ratings.get_mut(&rating_id.into_inner()).unwrap();
                match kind {
                    InteractionKind::Like => rating.likes = (rating.likes - 1).max(0),
                    InteractionKind::Dislike => rating.dislikes = (rating.dislikes - 1).max(0),
                }
            }
            Some(_) => {
                if let Some(record) = state.interactions.get_mut(&key) {
                    record.kind = kind;
                }
                let rating = state.ratings.get_mut(&rating_id.into_inner()).unwrap();
                match kind {
                    InteractionKind::Like => {
                        rating.likes += 1;
                        rating.dislikes = (rating.dislikes - 1).max(0);
                    }
                    InteractionKind::Dislike => {
                        rating.dislikes += 1;
                        rating.likes = (rating.likes - 1).max(0);
                    }
                }
            }
        }

        let rating = state.ratings.get_mut(&rating_id.into_inner()).unwrap();
        rating.updated_at = Utc::now();
        Ok(Some(rating.clone()))
    }
}

/// Build a service context backed by the store
pub fn context(store: &Arc<MemoryStore>) -> ServiceContext {
    ServiceContextBuilder::new()
        .clock(DayClock::utc())
        .organization_repo(store.clone())
        .rater_repo(store.clone())
        .target_repo(store.clone())
        .rating_repo(store.clone())
        .vote_repo(store.clone())
        .interaction_repo(store.clone())
        .build()
        .expect("context should build")
}
