//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// CHECK-IN RULES
// =============================================================================

/// Minimum rule name length, counted after trimming
pub const MIN_RULE_NAME_LENGTH: usize = 3;

/// Upper bound for `releaseMinutesBefore` and `closeMinutesAfter` (one day)
pub const MAX_RULE_WINDOW_MINUTES: i32 = 1440;

/// Business-rule failure messages reported by the rule-set validator
pub mod rule_errors {
    pub const DUPLICATE_NAMES: &str = "duplicate rule names";
    pub const NO_ACTIVE_RULE: &str = "at least one active rule required";
}

// =============================================================================
// ERROR CODES
// =============================================================================

/// Machine-readable error codes carried in error response bodies
pub mod error_codes {
    pub const EVENT_NOT_FOUND: &str = "EVENT_NOT_FOUND";
    pub const CHECKIN_RULES_VALIDATION_ERROR: &str = "CHECKIN_RULES_VALIDATION_ERROR";
}

// =============================================================================
// API VERSIONING
// =============================================================================

/// Current API version
pub const API_VERSION: &str = "v1";

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";
