//! Check-in rule handler implementations

use axum::{extract::State, Json};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::extract::{ApiJson, ApiPath},
    middleware::auth::AuthenticatedUser,
    models::NewCheckinRule,
    services::CheckinRuleService,
    state::AppState,
};

use super::{request::UpdateCheckinRulesRequest, response::CheckinRulesResponse};

/// List the check-in rules of an event
pub async fn list_checkin_rules(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    ApiPath(event_id): ApiPath<Uuid>,
) -> AppResult<Json<CheckinRulesResponse>> {
    let rules = CheckinRuleService::list_rules(state.store(), &event_id).await?;
    Ok(Json(CheckinRulesResponse { rules }))
}

/// Replace all check-in rules of an event
pub async fn update_checkin_rules(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    ApiPath(event_id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdateCheckinRulesRequest>,
) -> AppResult<Json<CheckinRulesResponse>> {
    payload.validate()?;

    tracing::debug!(
        event_id = %event_id,
        user_id = %auth_user.id,
        rules = payload.rules.len(),
        "Replacing check-in rules"
    );

    let candidates: Vec<NewCheckinRule> = payload.rules.into_iter().map(Into::into).collect();
    let rules = CheckinRuleService::replace_rules(state.store(), &event_id, candidates).await?;

    Ok(Json(CheckinRulesResponse { rules }))
}
