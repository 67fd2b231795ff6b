//! Gate middleware for protected and public-only routes

use axum::{
    extract::{Extension, MatchedPath, Request},
    http::header::REFERER,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::gate::{self, GateDecision};
use super::session::CurrentSession;
use crate::common::{safe_email_log, ApiError, AppState, DenyPolicy};

/// Requires a session and, when the matched route declares one, a role from
/// its allowed set. On success the `SessionRecord` is added to the request
/// extensions for handlers.
pub async fn require_session(
    Extension(state): Extension<Arc<AppState>>,
    session: CurrentSession,
    matched: Option<MatchedPath>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let record = session.read_session().await?;

    let requested = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());
    let allowed = matched.as_ref().and_then(|m| gate::allowed_roles(m.as_str()));

    match gate::protect(record.as_ref(), &requested, allowed) {
        GateDecision::Render => {
            if let Some(record) = record {
                request.extensions_mut().insert(record);
            }
            Ok(next.run(request).await)
        }
        GateDecision::RedirectToLogin { from } => {
            debug!(path = %from, "No session, redirecting to login");
            Ok(Redirect::to(&gate::login_redirect_target(&from)).into_response())
        }
        GateDecision::Deny { role } => {
            let home = gate::default_route(role);
            warn!(
                email = %record.as_ref().map(|r| safe_email_log(&r.email)).unwrap_or_default(),
                role = %role,
                path = %request.uri().path(),
                "Route access denied for role"
            );

            match state.config.deny_policy {
                DenyPolicy::Forbidden => Err(ApiError::Forbidden(
                    format!("The {} role cannot open this page", role),
                    home,
                )),
                DenyPolicy::StepBack => {
                    let back = request
                        .headers()
                        .get(REFERER)
                        .and_then(|h| h.to_str().ok())
                        .and_then(gate::referer_path)
                        .filter(|path| *path != requested && *path != request.uri().path())
                        .unwrap_or(home);
                    Ok(Redirect::to(back).into_response())
                }
            }
        }
        // protect() never asks to go home; treat it like a normal redirect
        GateDecision::RedirectHome { to } => Ok(Redirect::to(to).into_response()),
    }
}

/// Keeps signed-in users off login and signup
pub async fn redirect_authenticated(
    session: CurrentSession,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let record = session.read_session().await?;

    match gate::public_only(record.as_ref()) {
        GateDecision::RedirectHome { to } => {
            info!(
                email = %record.as_ref().map(|r| safe_email_log(&r.email)).unwrap_or_default(),
                to = to,
                "Signed-in user sent home from public-only page"
            );
            Ok(Redirect::to(to).into_response())
        }
        _ => Ok(next.run(request).await),
    }
}
