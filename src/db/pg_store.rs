//! PostgreSQL-backed check-in store

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{
    repositories::{CheckinRuleRepository, EventRepository},
    store::CheckinStore,
};
use crate::{
    error::{AppError, AppResult},
    models::{CheckinRule, Event, NewCheckinRule},
};

/// Check-in store on top of a PostgreSQL pool
#[derive(Clone)]
pub struct PgCheckinStore {
    pool: PgPool,
}

impl PgCheckinStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CheckinStore for PgCheckinStore {
    async fn find_event(&self, event_id: Uuid) -> AppResult<Option<Event>> {
        EventRepository::find_by_id(&self.pool, &event_id).await
    }

    async fn list_rules(&self, event_id: Uuid) -> AppResult<Vec<CheckinRule>> {
        CheckinRuleRepository::list_by_event(&self.pool, &event_id).await
    }

    async fn replace_rules(
        &self,
        event_id: Uuid,
        rules: Vec<NewCheckinRule>,
    ) -> AppResult<Vec<CheckinRule>> {
        // Dropping `tx` on any early return rolls the transaction back.
        let mut tx = self.pool.begin().await?;

        // Serializes concurrent replaces of the same event.
        if !EventRepository::lock_for_update(&mut tx, &event_id).await? {
            return Err(AppError::EventNotFound(event_id));
        }

        let removed = CheckinRuleRepository::delete_by_event(&mut tx, &event_id).await?;
        CheckinRuleRepository::insert_many(&mut tx, &event_id, &rules).await?;

        let stored = CheckinRuleRepository::list_by_event(&mut *tx, &event_id).await?;
        tx.commit().await?;

        tracing::debug!(
            event_id = %event_id,
            removed,
            inserted = stored.len(),
            "Check-in rule set replaced"
        );

        Ok(stored)
    }
}
