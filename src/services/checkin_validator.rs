//! Check-in rule-set validation
//!
//! Pure consistency checks run against a full candidate rule set before it
//! replaces an event's stored rules. Every check runs on every call and all
//! failures are reported together.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    constants::rule_errors,
    models::{CheckinWindow, NewCheckinRule},
};

/// A pair of mandatory active rules whose check-in windows share no instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowConflict {
    pub rule_a: String,
    pub rule_b: String,
    pub message: String,
}

/// Everything wrong with a candidate rule set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSetViolations {
    pub errors: Vec<String>,
    pub conflicts: Vec<WindowConflict>,
}

impl RuleSetViolations {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.conflicts.is_empty()
    }
}

/// Outcome of validating a candidate rule set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(RuleSetViolations),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Convert into a `Result`, handing back the violations on failure
    pub fn into_result(self) -> Result<(), RuleSetViolations> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(violations) => Err(violations),
        }
    }
}

/// Validate a candidate rule set for an event scheduled at `event_time`.
///
/// Checks, in reporting order:
/// 1. names are unique after trimming and lower-casing;
/// 2. a non-empty set has at least one active rule;
/// 3. the windows of every pair of active mandatory rules intersect.
pub fn validate(rules: &[NewCheckinRule], event_time: DateTime<Utc>) -> ValidationResult {
    let mut violations = RuleSetViolations::default();

    let distinct: HashSet<String> = rules.iter().map(NewCheckinRule::normalized_name).collect();
    if distinct.len() != rules.len() {
        violations.errors.push(rule_errors::DUPLICATE_NAMES.to_string());
    }

    if !rules.is_empty() && !rules.iter().any(|r| r.active) {
        violations.errors.push(rule_errors::NO_ACTIVE_RULE.to_string());
    }

    let mandatory: Vec<(&str, CheckinWindow)> = rules
        .iter()
        .filter(|r| r.is_mandatory_active())
        .map(|r| (r.name.as_str(), r.window(event_time)))
        .collect();

    if mandatory.len() >= 2 {
        let conflicts = detect_window_conflicts(&mandatory);
        if !conflicts.is_empty() {
            violations.errors.push(format!(
                "window conflict detected between {} pair(s) of mandatory rules",
                conflicts.len()
            ));
        }
        violations.conflicts = conflicts;
    }

    if violations.is_empty() {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(violations)
    }
}

/// Compare every unordered pair of named windows, in input order.
pub fn detect_window_conflicts(windows: &[(&str, CheckinWindow)]) -> Vec<WindowConflict> {
    let mut conflicts = Vec::new();

    for (i, (name_a, window_a)) in windows.iter().enumerate() {
        for (name_b, window_b) in &windows[i + 1..] {
            if !window_a.intersects(window_b) {
                conflicts.push(WindowConflict {
                    rule_a: name_a.to_string(),
                    rule_b: name_b.to_string(),
                    message: format!(
                        "the windows of \"{}\" and \"{}\" do not intersect; both mandatory rules cannot be satisfied",
                        name_a, name_b
                    ),
                });
            }
        }
    }

    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RuleRequirement;
    use chrono::{Duration, TimeZone};

    fn event_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 15, 18, 0, 0).unwrap()
    }

    fn rule(name: &str, active: bool, requirement: RuleRequirement) -> NewCheckinRule {
        NewCheckinRule {
            id: None,
            name: name.to_string(),
            active,
            requirement,
            release_minutes_before: 30,
            close_minutes_after: 60,
        }
    }

    fn errors(result: ValidationResult) -> Vec<String> {
        match result {
            ValidationResult::Valid => vec![],
            ValidationResult::Invalid(v) => v.errors,
        }
    }

    #[test]
    fn test_empty_set_is_valid() {
        assert_eq!(validate(&[], event_time()), ValidationResult::Valid);
    }

    #[test]
    fn test_single_active_rule_is_valid() {
        let rules = vec![rule("QR Code", true, RuleRequirement::Mandatory)];
        assert!(validate(&rules, event_time()).is_valid());
    }

    #[test]
    fn test_unique_names_with_one_mandatory_active_are_valid() {
        let rules = vec![
            rule("QR Code", true, RuleRequirement::Mandatory),
            rule("Printed list", true, RuleRequirement::Optional),
            rule("Face match", false, RuleRequirement::Mandatory),
        ];
        assert!(validate(&rules, event_time()).is_valid());
    }

    #[test]
    fn test_duplicate_names_ignore_case_and_whitespace() {
        let rules = vec![
            rule("QR Code", true, RuleRequirement::Optional),
            rule("  qr code ", true, RuleRequirement::Optional),
        ];
        assert_eq!(
            errors(validate(&rules, event_time())),
            vec!["duplicate rule names".to_string()]
        );
    }

    #[test]
    fn test_all_inactive_rules_rejected() {
        let rules = vec![
            rule("QR Code", false, RuleRequirement::Mandatory),
            rule("Document", false, RuleRequirement::Optional),
        ];
        assert_eq!(
            errors(validate(&rules, event_time())),
            vec!["at least one active rule required".to_string()]
        );
    }

    #[test]
    fn test_failures_are_accumulated() {
        let rules = vec![
            rule("QR Code", false, RuleRequirement::Mandatory),
            rule("QR CODE", false, RuleRequirement::Optional),
        ];
        assert_eq!(
            errors(validate(&rules, event_time())),
            vec![
                "duplicate rule names".to_string(),
                "at least one active rule required".to_string(),
            ]
        );
    }

    #[test]
    fn test_touching_mandatory_windows_are_valid() {
        let mut before = rule("Early QR", true, RuleRequirement::Mandatory);
        before.release_minutes_before = 60;
        before.close_minutes_after = 0;
        let mut after = rule("Late badge", true, RuleRequirement::Mandatory);
        after.release_minutes_before = 0;
        after.close_minutes_after = 60;

        assert!(validate(&[before, after], event_time()).is_valid());
    }

    #[test]
    fn test_no_false_conflicts_for_extreme_bounds() {
        let mut widest = rule("Widest", true, RuleRequirement::Mandatory);
        widest.release_minutes_before = 1440;
        widest.close_minutes_after = 1440;
        let mut instant = rule("Instant", true, RuleRequirement::Mandatory);
        instant.release_minutes_before = 0;
        instant.close_minutes_after = 0;
        let mut only_before = rule("Only before", true, RuleRequirement::Mandatory);
        only_before.release_minutes_before = 1440;
        only_before.close_minutes_after = 0;

        let result = validate(&[widest, instant, only_before], event_time());
        assert_eq!(result, ValidationResult::Valid);
    }

    #[test]
    fn test_detects_disjoint_windows_pairwise() {
        let t = event_time();
        let morning = CheckinWindow { start: t - Duration::hours(10), end: t - Duration::hours(9) };
        let evening = CheckinWindow { start: t, end: t + Duration::hours(1) };
        let all_day = CheckinWindow { start: t - Duration::hours(12), end: t + Duration::hours(12) };

        let conflicts = detect_window_conflicts(&[
            ("Morning", morning),
            ("Evening", evening),
            ("All day", all_day),
        ]);

        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].rule_a, "Morning");
        assert_eq!(conflicts[0].rule_b, "Evening");
        assert!(conflicts[0].message.contains("\"Morning\""));
    }

    #[test]
    fn test_touching_windows_are_not_reported() {
        let t = event_time();
        let a = CheckinWindow { start: t - Duration::hours(1), end: t };
        let b = CheckinWindow { start: t, end: t + Duration::hours(1) };
        assert!(detect_window_conflicts(&[("A", a), ("B", b)]).is_empty());
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationResult::Valid.into_result().is_ok());

        let rules = vec![rule("Off", false, RuleRequirement::Optional)];
        let violations = validate(&rules, event_time()).into_result().unwrap_err();
        assert_eq!(violations.errors.len(), 1);
        assert!(violations.conflicts.is_empty());
    }
}
