//! Check-in rule response DTOs

use serde::Serialize;

use crate::models::CheckinRule;

/// Rule set of an event, in creation order
#[derive(Debug, Serialize)]
pub struct CheckinRulesResponse {
    pub rules: Vec<CheckinRule>,
}
