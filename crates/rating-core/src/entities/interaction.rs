//! Interaction record - the single like/dislike a rater holds on a rating

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::RecordId;

/// Kind of reaction a rater can place on a rating
///
/// Stored and transmitted as exactly "like" or "dislike".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Like,
    Dislike,
}

impl InteractionKind {
    /// Parse the wire code; returns None for anything else
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "like" => Some(InteractionKind::Like),
            "dislike" => Some(InteractionKind::Dislike),
            _ => None,
        }
    }

    /// The wire code as stored
    pub const fn as_code(self) -> &'static str {
        match self {
            InteractionKind::Like => "like",
            InteractionKind::Dislike => "dislike",
        }
    }

    /// The mutually exclusive counterpart
    pub const fn opposite(self) -> Self {
        match self {
            InteractionKind::Like => InteractionKind::Dislike,
            InteractionKind::Dislike => InteractionKind::Like,
        }
    }
}

/// Interaction record entity
///
/// At most one exists per (rater, rating); the uniqueness is what makes
/// reactions mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    pub rating_id: RecordId,
    pub rater_id: RecordId,
    pub kind: InteractionKind,
    pub created_at: DateTime<Utc>,
}

impl Interaction {
    /// Create a new Interaction
    pub fn new(rating_id: RecordId, rater_id: RecordId, kind: InteractionKind) -> Self {
        Self {
            rating_id,
            rater_id,
            kind,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes_round_trip() {
        assert_eq!(InteractionKind::from_code("like"), Some(InteractionKind::Like));
        assert_eq!(
            InteractionKind::from_code("dislike"),
            Some(InteractionKind::Dislike)
        );
        assert_eq!(InteractionKind::from_code("LIKE"), None);
    }

    #[test]
    fn test_opposite() {
        assert_eq!(InteractionKind::Like.opposite(), InteractionKind::Dislike);
        assert_eq!(InteractionKind::Dislike.opposite(), InteractionKind::Like);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&InteractionKind::Like).unwrap();
        assert_eq!(json, "\"like\"");
    }
}
