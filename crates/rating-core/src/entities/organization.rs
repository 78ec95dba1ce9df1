//! Organization entity - the tenant boundary (school) scoping quotas

use chrono::{DateTime, Utc};

use crate::value_objects::DailyLimits;

/// Organization entity
///
/// Identified by a stable code. Owns the three per-tier daily rating
/// limits; limit changes apply prospectively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    pub code: String,
    pub name: String,
    pub limits: DailyLimits,
    pub created_at: DateTime<Utc>,
}

impl Organization {
    /// Create a new Organization with fallback limits
    pub fn new(code: String, name: String) -> Self {
        Self {
            code,
            name,
            limits: DailyLimits::FALLBACK,
            created_at: Utc::now(),
        }
    }
}
