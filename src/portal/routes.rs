// src/portal/routes.rs

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers;

/// Role-gated portal pages. The caller layers `require_session` over these;
/// per-route roles come from `auth::gate::ROUTE_ACCESS`.
pub fn portal_routes() -> Router {
    Router::new()
        // Talent home
        .route("/dashboard", get(handlers::dashboard::dashboard))
        .route("/earnings", get(handlers::dashboard::earnings))
        .route(
            "/earnings/payment-method",
            get(handlers::payments::get_payment_method).put(handlers::payments::update_payment_method),
        )
        // Brand discovery
        .route("/discover", get(handlers::talent::discover))
        .route("/talent/:id", get(handlers::talent::talent_profile))
        .route("/roster", get(handlers::talent::roster))
        // Deals
        .route("/deals", get(handlers::deals::list_deals))
        .route("/deals/:id", get(handlers::deals::deal_detail))
        .route("/deals/:id/accept", post(handlers::deals::accept_deal))
        .route("/deals/:id/reject", post(handlers::deals::reject_deal))
        .route("/deals/:id/uploads", post(handlers::deals::add_upload))
        .route("/deals/:id/uploads/:index", delete(handlers::deals::remove_upload))
        // Campaigns and reporting
        .route("/campaigns", get(handlers::campaigns::list_campaigns))
        .route("/analytics", get(handlers::dashboard::analytics))
        // Account
        .route(
            "/profile",
            get(handlers::profile::get_profile).put(handlers::profile::update_profile),
        )
        .route("/api/nav", get(handlers::profile::navigation))
        // Admin
        .route("/admin", get(handlers::dashboard::admin))
}
