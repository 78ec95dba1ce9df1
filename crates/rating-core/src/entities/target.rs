//! Target entity - the person being rated

use chrono::{DateTime, Utc};

use crate::value_objects::RecordId;

/// Target entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub id: RecordId,
    pub name: String,
    pub organization: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Target {
    /// Create a new Target
    pub fn new(id: RecordId, name: String, organization: Option<String>) -> Self {
        Self {
            id,
            name,
            organization,
            created_at: Utc::now(),
        }
    }
}
