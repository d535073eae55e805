//! Check-in rule service

use uuid::Uuid;

use crate::{
    db::CheckinStore,
    error::{AppError, AppResult},
    models::{CheckinRule, Event, NewCheckinRule},
    services::checkin_validator,
};

/// Check-in rule service for business logic
pub struct CheckinRuleService;

impl CheckinRuleService {
    /// List the rules of an event in creation order
    pub async fn list_rules(store: &dyn CheckinStore, event_id: &Uuid) -> AppResult<Vec<CheckinRule>> {
        Self::find_event(store, event_id).await?;
        store.list_rules(*event_id).await
    }

    /// Replace the whole rule set of an event.
    ///
    /// Nothing is written unless the candidate set passes validation against
    /// the event's scheduled time.
    pub async fn replace_rules(
        store: &dyn CheckinStore,
        event_id: &Uuid,
        rules: Vec<NewCheckinRule>,
    ) -> AppResult<Vec<CheckinRule>> {
        let event = Self::find_event(store, event_id).await?;

        checkin_validator::validate(&rules, event.date_time)
            .into_result()
            .map_err(|violations| {
                tracing::info!(
                    event_id = %event_id,
                    errors = violations.errors.len(),
                    conflicts = violations.conflicts.len(),
                    "Rejected check-in rule set"
                );
                AppError::CheckinRulesValidation(violations)
            })?;

        let stored = store.replace_rules(*event_id, rules).await?;

        tracing::info!(
            event_id = %event_id,
            rules = stored.len(),
            "Check-in rules updated"
        );

        Ok(stored)
    }

    async fn find_event(store: &dyn CheckinStore, event_id: &Uuid) -> AppResult<Event> {
        store
            .find_event(*event_id)
            .await?
            .ok_or(AppError::EventNotFound(*event_id))
    }
}
