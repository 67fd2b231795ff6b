// src/app.rs
//! Router composition shared by `main` and the router-level tests

use axum::{
    extract::{Extension, Request},
    http::{header, HeaderValue, Method},
    middleware,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use time::{Date, PrimitiveDateTime, Time};
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer};
use tracing::debug;

use crate::auth::{self, gate, CurrentSession};
use crate::common::{ApiError, AppState};
use crate::logging_middleware;
use crate::portal;

/// Name of the cookie that keys each client's session slot
pub const SESSION_COOKIE: &str = "nil_portal.sid";

/// Sessions last until logout. Left unset, tower-sessions would expire the
/// stored record two weeks after its last write, so pin it to the last
/// representable date instead.
pub fn session_expiry() -> Expiry {
    Expiry::AtDateTime(PrimitiveDateTime::new(Date::MAX, Time::MIDNIGHT).assume_utc())
}

pub fn build_router(state: Arc<AppState>) -> Router {
    // Session slots live in memory and are only dropped by logout; the store
    // grows with every client that never logs out
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE)
        .with_expiry(session_expiry())
        .with_secure(state.config.session_secure)
        .with_same_site(SameSite::Lax);

    let origins: Vec<HeaderValue> = state
        .config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let protected = auth::routes::session_routes()
        .merge(portal::portal_routes())
        .route_layer(middleware::from_fn(auth::middleware::require_session));

    Router::new()
        // ====================================================================
        // PUBLIC ONLY (login / signup) AND REDIRECT-ONLY ROOT
        // ====================================================================
        .merge(auth::routes::public_only_routes())
        .merge(auth::routes::root_routes())
        // ====================================================================
        // PROTECTED ROUTES
        // ====================================================================
        .merge(protected)
        .route("/health", get(health))
        .fallback(not_found)
        // ====================================================================
        // MIDDLEWARE AND LAYERS
        // ====================================================================
        .layer(middleware::from_fn(logging_middleware::log_request_response))
        .layer(session_layer)
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Unknown paths get a 404 pointing at a page the caller can actually open
async fn not_found(session: CurrentSession, request: Request) -> ApiError {
    let home = match session.read_session().await {
        Ok(Some(record)) => gate::default_route(record.role),
        _ => gate::LOGIN_ROUTE,
    };
    debug!(path = %request.uri().path(), "No route matched");

    ApiError::NotFound(format!("No page at {}", request.uri().path()), home)
}
