//! Logging middleware

use std::time::Instant;

use axum::{
    body::Body,
    extract::Request,
    http::{Method, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

use crate::error::ErrorCode;

/// How a completed request is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Completed,
    ClientError,
    ServerError,
}

impl Outcome {
    /// 404s are routine lookups of unknown events and stay at `info`.
    fn of(status: StatusCode) -> Self {
        if status.is_server_error() {
            Self::ServerError
        } else if status.is_client_error() && status != StatusCode::NOT_FOUND {
            Self::ClientError
        } else {
            Self::Completed
        }
    }
}

/// Request logging middleware
///
/// Failed requests carry the `AppError` code that produced them, so rejected
/// rule sets can be told apart from malformed requests in the logs.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method: Method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0);
    let error_code = response
        .extensions()
        .get::<ErrorCode>()
        .map_or("-", |code| code.0);

    match Outcome::of(status) {
        Outcome::ServerError => warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            error_code,
            duration_ms = %duration_ms,
            "Request completed with server error"
        ),
        Outcome::ClientError => warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            error_code,
            duration_ms = %duration_ms,
            "Request completed with client error"
        ),
        Outcome::Completed => info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request completed"
        ),
    }

    response
}
