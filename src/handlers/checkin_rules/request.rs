//! Check-in rule request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::MAX_RULE_WINDOW_MINUTES,
    models::{NewCheckinRule, RuleRequirement},
};

/// One rule of a replacement set
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckinRuleRequest {
    /// Existing rule ID to keep; omitted for new rules
    pub id: Option<Uuid>,

    #[validate(custom(function = "crate::utils::validate_rule_name"))]
    pub name: String,

    pub active: bool,

    /// MANDATORY or OPTIONAL
    pub requirement: RuleRequirement,

    /// Minutes before the event start when check-in opens
    #[validate(range(min = 0, max = MAX_RULE_WINDOW_MINUTES))]
    pub release_minutes_before: i32,

    /// Minutes after the event start when check-in closes
    #[validate(range(min = 0, max = MAX_RULE_WINDOW_MINUTES))]
    pub close_minutes_after: i32,
}

/// Replace all check-in rules of an event
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCheckinRulesRequest {
    #[validate(nested)]
    pub rules: Vec<CheckinRuleRequest>,
}

impl From<CheckinRuleRequest> for NewCheckinRule {
    fn from(req: CheckinRuleRequest) -> Self {
        Self {
            id: req.id,
            name: req.name,
            active: req.active,
            requirement: req.requirement,
            release_minutes_before: req.release_minutes_before,
            close_minutes_after: req.close_minutes_after,
        }
    }
}
