// src/logging_middleware.rs
//! Middleware for logging requests, responses and JSON bodies in debug mode

use axum::body::to_bytes;
use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{debug, enabled, Level};

use crate::common::helpers::redact_passwords;

/// Largest body buffered for logging
const MAX_LOGGED_BODY: usize = 64 * 1024;

/// Pretty-printed JSON with passwords masked, `None` for non-JSON bodies
fn loggable_json(bytes: &Bytes) -> Option<String> {
    let mut json = serde_json::from_slice::<serde_json::Value>(bytes).ok()?;
    redact_passwords(&mut json);
    serde_json::to_string_pretty(&json).ok()
}

/// With debug logging on, logs JSON request and response bodies plus method,
/// path, status and latency. Otherwise the request passes straight through.
pub async fn log_request_response(request: Request, next: Next) -> Result<Response, StatusCode> {
    let started = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    // Request summaries without bodies come from the TraceLayer
    if !enabled!(Level::DEBUG) {
        return Ok(next.run(request).await);
    }

    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, MAX_LOGGED_BODY)
        .await
        .map_err(|_| StatusCode::PAYLOAD_TOO_LARGE)?;

    if let Some(body) = loggable_json(&bytes) {
        debug!(%method, %path, request_body = %body, "📥 Request");
    }

    let request = Request::from_parts(parts, Body::from(bytes));
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    if let Some(body) = loggable_json(&bytes) {
        debug!(status = %parts.status, response_body = %body, "📤 Response");
    }
    debug!(
        %method,
        %path,
        status = %parts.status,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Request handled"
    );

    Ok(Response::from_parts(parts, Body::from(bytes)))
}
