//! Rater entity - the identity/authorization facts the core consumes

use chrono::{DateTime, Utc};

use crate::value_objects::RecordId;

use super::target::Target;

/// Rater entity
///
/// Carries the authorization fact sheet maintained outside the core:
/// `approved` gates any use of the system, `can_rate` gates rating
/// submission, `admin` gates featured/limit administration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rater {
    pub id: RecordId,
    pub username: String,
    pub organization: Option<String>,
    pub approved: bool,
    pub can_rate: bool,
    pub admin: bool,
    pub created_at: DateTime<Utc>,
}

impl Rater {
    /// Create a new Rater with default gates (approved, allowed to rate)
    pub fn new(id: RecordId, username: String, organization: Option<String>) -> Self {
        Self {
            id,
            username,
            organization,
            approved: true,
            can_rate: true,
            admin: false,
            created_at: Utc::now(),
        }
    }

    /// Check if rating this target would cross an organization boundary
    ///
    /// Only forbidden when both sides declare an organization and they
    /// differ; either side without one is free to rate anywhere.
    pub fn organization_conflicts_with(&self, target: &Target) -> bool {
        match (&self.organization, &target.organization) {
            (Some(own), Some(theirs)) => own != theirs,
            _ => false,
        }
    }

    /// Check if the rater holds administrator rights
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.admin
    }
}
