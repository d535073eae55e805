//! Business logic services

pub mod auth_service;
pub mod checkin_rule_service;
pub mod checkin_validator;

pub use auth_service::AuthService;
pub use checkin_rule_service::CheckinRuleService;
pub use checkin_validator::{validate, RuleSetViolations, ValidationResult, WindowConflict};
