//! Severity tier and per-tier daily limits

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity tier of a rating
///
/// Each tier carries an independent daily submission quota. The wire
/// representation is exactly the three-character codes "T1", "T2", "T3".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    T1,
    T2,
    T3,
}

impl Tier {
    /// All tiers, in quota-report order
    pub const ALL: [Tier; 3] = [Tier::T1, Tier::T2, Tier::T3];

    /// Parse a tier code; returns None for anything outside {T1, T2, T3}
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "T1" => Some(Tier::T1),
            "T2" => Some(Tier::T2),
            "T3" => Some(Tier::T3),
            _ => None,
        }
    }

    /// The tier code as stored and transmitted
    pub const fn as_code(self) -> &'static str {
        match self {
            Tier::T1 => "T1",
            Tier::T2 => "T2",
            Tier::T3 => "T3",
        }
    }

    /// Daily limit applied when the rater has no organization
    pub const fn fallback_limit(self) -> u32 {
        DailyLimits::FALLBACK.limit_for(self)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Per-tier daily submission limits owned by an organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyLimits {
    pub t1: u32,
    pub t2: u32,
    pub t3: u32,
}

impl DailyLimits {
    /// Limits used for raters without an organization
    pub const FALLBACK: DailyLimits = DailyLimits { t1: 3, t2: 2, t3: 1 };

    /// Create a new limit set
    pub const fn new(t1: u32, t2: u32, t3: u32) -> Self {
        Self { t1, t2, t3 }
    }

    /// Resolve the limit for one tier
    pub const fn limit_for(&self, tier: Tier) -> u32 {
        match tier {
            Tier::T1 => self.t1,
            Tier::T2 => self.t2,
            Tier::T3 => self.t3,
        }
    }

    /// Sum of all per-tier limits (aggregate quota reporting)
    pub const fn total(&self) -> u32 {
        self.t1 + self.t2 + self.t3
    }
}

impl Default for DailyLimits {
    fn default() -> Self {
        Self::FALLBACK
    }
}
