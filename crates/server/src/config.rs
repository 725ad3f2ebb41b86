//! Server configuration

use std::time::Duration;

use crate::ai::client::DEFAULT_MODEL;

/// Server configuration loaded from environment variables
#[derive(Clone)]
pub struct Config {
    pub bind_address: String,
    /// Used only by the `visit-report` binary; the HTTP service holds no
    /// database connection.
    pub database_url: String,
    pub anthropic_api_key: Option<String>,
    pub model: String,
    pub upstream_timeout: Duration,
    pub cors_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            bind_address: std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "host=localhost user=postgres dbname=hospital".into()),
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY").ok(),
            model: std::env::var("TRIAGE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into()),
            upstream_timeout: Duration::from_secs(
                std::env::var("UPSTREAM_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(30),
            ),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_else(|_| vec!["*".to_string()]),
        }
    }
}
