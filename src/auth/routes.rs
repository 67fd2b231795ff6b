//! Authentication routes

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use super::handlers;
use super::middleware::redirect_authenticated;

/// Login and signup, visible only without a session
///
/// # Routes
/// - `GET|POST /login` - login form and credential check
/// - `GET|POST /signup` - signup form
pub fn public_only_routes() -> Router {
    Router::new()
        .route("/login", get(handlers::login_page).post(handlers::login))
        .route("/signup", get(handlers::signup_page).post(handlers::signup))
        .route_layer(middleware::from_fn(redirect_authenticated))
}

/// Routes needing a session but no particular role. The caller layers
/// `require_session` over these.
///
/// # Routes
/// - `POST /logout` - clear the session
/// - `GET /api/me` - current session record
pub fn session_routes() -> Router {
    Router::new()
        .route("/logout", post(handlers::logout))
        .route("/api/me", get(handlers::me))
}

/// Redirect-only root
pub fn root_routes() -> Router {
    Router::new().route("/", get(handlers::root_redirect))
}
