// src/common/config.rs
//! Runtime configuration loaded from the environment

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// What the route gate does when a signed-in user hits a route their role
/// may not see
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyPolicy {
    /// Redirect to the page the user came from (or their home route)
    StepBack,
    /// Answer with an explicit 403 carrying a link home
    Forbidden,
}

impl FromStr for DenyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "back" | "step-back" | "stepback" => Ok(DenyPolicy::StepBack),
            "forbidden" | "403" => Ok(DenyPolicy::Forbidden),
            other => Err(format!("unknown deny policy '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub deny_policy: DenyPolicy,
    pub view_tick: Duration,
    pub session_secure: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            cors_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:5173".to_string(),
            ],
            deny_policy: DenyPolicy::StepBack,
            view_tick: Duration::from_secs(10),
            session_secure: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, keeping defaults for
    /// anything unset or unparsable
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // PORT - listen port
        if let Ok(port) = env::var("PORT") {
            match port.parse::<u16>() {
                Ok(val) => config.port = val,
                Err(_) => tracing::warn!(value = %port, "Ignoring invalid PORT"),
            }
        }

        // CORS_ORIGINS - comma-separated list of allowed origins
        if let Ok(origins) = env::var("CORS_ORIGINS") {
            config.cors_origins = origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect();
        }

        // ROLE_DENY_POLICY - "back" or "forbidden"
        if let Ok(policy) = env::var("ROLE_DENY_POLICY") {
            match policy.parse::<DenyPolicy>() {
                Ok(val) => config.deny_policy = val,
                Err(e) => tracing::warn!(error = %e, "Ignoring invalid ROLE_DENY_POLICY"),
            }
        }

        // VIEW_TICK_SECS - live view counter interval, at least one second
        if let Ok(secs) = env::var("VIEW_TICK_SECS") {
            if let Ok(val) = secs.parse::<u64>() {
                config.view_tick = Duration::from_secs(val.max(1));
            }
        }

        // SESSION_SECURE - mark the session cookie Secure
        if let Ok(secure) = env::var("SESSION_SECURE") {
            config.session_secure = secure.to_lowercase() == "true";
        }

        config
    }
}
