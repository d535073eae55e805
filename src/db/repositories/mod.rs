//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod checkin_rule_repo;
pub mod event_repo;

pub use checkin_rule_repo::CheckinRuleRepository;
pub use event_repo::EventRepository;
