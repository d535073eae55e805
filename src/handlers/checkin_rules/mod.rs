//! Check-in rule handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Check-in rule routes, nested under `/events`
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/{event_id}/checkin-rules",
        get(handler::list_checkin_rules).put(handler::update_checkin_rules),
    )
}
