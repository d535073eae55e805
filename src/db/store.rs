//! Storage seam for check-in rule sets
//!
//! Services depend on this trait rather than on a connection pool so the
//! same orchestration runs against PostgreSQL in production and against the
//! in-memory store in tests.

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{CheckinRule, Event, NewCheckinRule},
};

/// Event lookup and rule-set persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CheckinStore: Send + Sync {
    /// Find an event by ID
    async fn find_event(&self, event_id: Uuid) -> AppResult<Option<Event>>;

    /// All rules of an event, in creation order
    async fn list_rules(&self, event_id: Uuid) -> AppResult<Vec<CheckinRule>>;

    /// Atomically replace every rule of an event with `rules` and return the
    /// stored set in creation order. On error the previous set is untouched.
    async fn replace_rules(
        &self,
        event_id: Uuid,
        rules: Vec<NewCheckinRule>,
    ) -> AppResult<Vec<CheckinRule>>;
}
