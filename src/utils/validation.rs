//! Input validation utilities

use std::borrow::Cow;

use validator::ValidationError;

use crate::constants::MIN_RULE_NAME_LENGTH;

/// Normalize a rule name for uniqueness comparisons
pub fn normalize_rule_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Validate a check-in rule name: at least three characters once trimmed
pub fn validate_rule_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().chars().count() < MIN_RULE_NAME_LENGTH {
        let mut err = ValidationError::new("rule_name_too_short");
        err.message = Some(Cow::Borrowed(
            "Rule name must be at least 3 characters long",
        ));
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rule_name() {
        assert!(validate_rule_name("QR Code").is_ok());
        assert!(validate_rule_name("abc").is_ok());
        assert!(validate_rule_name("ab").is_err());
        assert!(validate_rule_name("  ab   ").is_err()); // Too short once trimmed
        assert!(validate_rule_name("").is_err());
    }

    #[test]
    fn test_validate_rule_name_counts_characters() {
        assert!(validate_rule_name("çãé").is_ok());
    }

    #[test]
    fn test_normalize_rule_name() {
        assert_eq!(normalize_rule_name("  QR Code "), "qr code");
        assert_eq!(normalize_rule_name("BADGE"), "badge");
    }
}
