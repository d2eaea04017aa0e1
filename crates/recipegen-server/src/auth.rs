//! Simple API Key Authentication (Bearer Token)

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
    Json,
};

use crate::models::ErrorResponse;
use crate::AppState;

fn unauthorized(reason: &str) -> (StatusCode, Json<ErrorResponse>) {
    tracing::warn!("{}", reason);
    (StatusCode::UNAUTHORIZED, Json(ErrorResponse::new(reason)))
}

/// Authentication middleware
/// Validates Bearer token against the configured API key
pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    // No API key configured = auth disabled (for development)
    let Some(api_key) = state.api_key.as_deref() else {
        return Ok(next.run(request).await);
    };

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    match auth_header.map(|h| h.strip_prefix("Bearer ")) {
        Some(Some(token)) if token == api_key => Ok(next.run(request).await),
        Some(Some(_)) => Err(unauthorized("Invalid API key")),
        Some(None) => Err(unauthorized("Invalid Authorization header format")),
        None => Err(unauthorized("Missing Authorization header")),
    }
}
