//! Utility functions

pub mod validation;

pub use validation::{normalize_rule_name, validate_rule_name};
