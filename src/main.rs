// src/main.rs
use dotenv::dotenv;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

// ============================================================================
// MODULE IMPORTS
// ============================================================================

mod app;
mod auth;
mod common;
mod logging_middleware;
mod portal;

use auth::FixtureVerifier;
use common::{AppConfig, AppState};
use portal::Fixtures;

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // ========================================================================
    // ENVIRONMENT CONFIGURATION
    // ========================================================================

    let config = AppConfig::from_env();
    info!(
        port = config.port,
        deny_policy = ?config.deny_policy,
        view_tick_secs = config.view_tick.as_secs(),
        "Configuration loaded"
    );

    // ========================================================================
    // SERVICE INITIALIZATION
    // ========================================================================

    let fixtures = Arc::new(Fixtures::bundled()?);
    info!(
        talents = fixtures.talents.len(),
        deals = fixtures.deals.len(),
        campaigns = fixtures.campaigns.len(),
        "Fixture data loaded"
    );

    let verifier = Arc::new(FixtureVerifier::demo());
    info!("Credential verifier initialized with demo accounts");

    // ========================================================================
    // APPLICATION STATE
    // ========================================================================

    let port = config.port;
    let state = Arc::new(AppState::new(config, verifier, fixtures));

    // ========================================================================
    // SERVER STARTUP
    // ========================================================================

    let app = app::build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
