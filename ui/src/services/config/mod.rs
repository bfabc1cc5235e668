//! Configuration for the sign-up client
//!
//! A WASM bundle has no process environment, so overrides are read at build
//! time through `option_env!`.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::console_warn;

/// Default backend used when `RESTAURANT_API_URL` is not set at build time
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3333";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub notifications: NotificationConfig,
}

/// Registration backend settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL the `/restaurants` path is joined onto
    pub base_url: String,

    /// User agent sent with every request
    pub user_agent: String,
}

/// Toast display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// How long a toast stays on screen before it is dismissed (0 keeps it until closed)
    pub toast_duration_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: concat!("restaurant-sign-up/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 4000,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            notifications: NotificationConfig::default(),
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `RESTAURANT_API_URL` when it was set at compile time
    pub fn from_build_env() -> Self {
        Self::with_api_override(option_env!("RESTAURANT_API_URL"))
    }

    fn with_api_override(base_url: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = base_url.map(str::trim).filter(|url| !url.is_empty()) {
            config.api.base_url = url.trim_end_matches('/').to_string();
        }
        config
    }

    pub fn validate(&self) -> Result<(), String> {
        let base_url = self.api.base_url.trim();
        if base_url.is_empty() {
            return Err("api.base_url must not be empty".to_string());
        }

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(format!("api.base_url must be an http(s) URL, got {}", base_url));
        }

        if self.api.user_agent.trim().is_empty() {
            return Err("api.user_agent must not be empty".to_string());
        }

        Ok(())
    }
}

static GLOBAL_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the global configuration, falling back to defaults when the build-time override is invalid
pub fn get_global_config() -> AppConfig {
    GLOBAL_CONFIG
        .get_or_init(|| {
            let config = AppConfig::from_build_env();
            if let Err(e) = config.validate() {
                console_warn!("Invalid configuration: {}", e);
                AppConfig::default()
            } else {
                config
            }
        })
        .clone()
}
