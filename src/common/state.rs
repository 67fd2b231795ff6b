// Application state shared across all modules

use std::sync::Arc;

use crate::auth::CredentialVerifier;
use crate::common::config::AppConfig;
use crate::portal::{Fixtures, LiveViews};

/// Application state: configuration, the credential backend, the bundled
/// fixture data and the live view counters
pub struct AppState {
    pub config: AppConfig,
    pub verifier: Arc<dyn CredentialVerifier>,
    pub fixtures: Arc<Fixtures>,
    pub live_views: LiveViews,
}

impl AppState {
    /// Builds the state and starts one live view counter per fixture deal.
    /// Must be called from inside a Tokio runtime.
    pub fn new(
        config: AppConfig,
        verifier: Arc<dyn CredentialVerifier>,
        fixtures: Arc<Fixtures>,
    ) -> Self {
        let seeds = fixtures
            .deals
            .iter()
            .map(|deal| (deal.id.clone(), fixtures.deal_analytics.engagement.views));
        let live_views = LiveViews::start(seeds, config.view_tick);

        Self {
            config,
            verifier,
            fixtures,
            live_views,
        }
    }
}
