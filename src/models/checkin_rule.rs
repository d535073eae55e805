//! Check-in rule models

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::utils::normalize_rule_name;

/// Requirement level of a check-in rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "rule_requirement", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleRequirement {
    Mandatory,
    Optional,
}

impl std::fmt::Display for RuleRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mandatory => write!(f, "MANDATORY"),
            Self::Optional => write!(f, "OPTIONAL"),
        }
    }
}

/// Persisted check-in rule
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinRule {
    pub id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub active: bool,
    pub requirement: RuleRequirement,
    pub release_minutes_before: i32,
    pub close_minutes_after: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Candidate check-in rule, as submitted for a full rule-set replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCheckinRule {
    /// Present when an existing rule is being kept
    pub id: Option<Uuid>,
    pub name: String,
    pub active: bool,
    pub requirement: RuleRequirement,
    pub release_minutes_before: i32,
    pub close_minutes_after: i32,
}

impl NewCheckinRule {
    /// Whether this rule takes part in window conflict detection
    pub fn is_mandatory_active(&self) -> bool {
        self.active && self.requirement == RuleRequirement::Mandatory
    }

    /// Name used for uniqueness checks: trimmed and lower-cased
    pub fn normalized_name(&self) -> String {
        normalize_rule_name(&self.name)
    }

    /// Check-in window of this rule relative to the event's scheduled time
    pub fn window(&self, event_time: DateTime<Utc>) -> CheckinWindow {
        CheckinWindow {
            start: event_time - Duration::minutes(i64::from(self.release_minutes_before)),
            end: event_time + Duration::minutes(i64::from(self.close_minutes_after)),
        }
    }
}

/// Closed time interval during which a rule's check-in is permitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckinWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl CheckinWindow {
    /// Two windows intersect unless one ends strictly before the other starts.
    /// Touching endpoints intersect.
    pub fn intersects(&self, other: &CheckinWindow) -> bool {
        !(self.end < other.start || other.end < self.start)
    }
}
