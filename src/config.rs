//! Configuration handling for the funnel

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default form-intake endpoint (local static-site dev server)
const DEFAULT_ENDPOINT: &str = "http://localhost:8888/";
const DEFAULT_BOOKING_URL: &str = "https://calendly.com/sbmgservice2024/30min";

/// Funnel configuration, stored as JSON in the platform config directory
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FunnelConfig {
    /// Form-intake endpoint that receives urlencoded submissions
    pub endpoint: String,
    /// Upper bound on a single submission request
    pub submit_timeout_secs: u64,
    /// Delay between the confirmation and the thank-you view
    pub redirect_delay_ms: u64,
    /// Accept submissions locally instead of posting them
    pub dry_run: bool,
    /// Scheduling page opened from the contact and thank-you views
    pub booking_url: String,
}

impl Default for FunnelConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            submit_timeout_secs: 15,
            redirect_delay_ms: 2000,
            dry_run: false,
            booking_url: DEFAULT_BOOKING_URL.to_string(),
        }
    }
}

impl FunnelConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "sbmg", "interest-funnel")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                tracing::debug!(path = %path.display(), "loaded config");
                serde_json::from_str(&content)?
            }
            _ => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Override fields from `FUNNEL_*` variables
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(endpoint) = var("FUNNEL_ENDPOINT") {
            self.endpoint = endpoint;
        }
        if let Some(dry_run) = var("FUNNEL_DRY_RUN") {
            self.dry_run = matches!(dry_run.as_str(), "1" | "true" | "yes");
        }
    }

    pub fn submit_timeout(&self) -> Duration {
        Duration::from_secs(self.submit_timeout_secs.max(1))
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}
