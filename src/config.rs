//! Application Configuration
//!
//! Build-time settings baked into the bundle.

use tracing::Level;

const DEFAULT_API_BASE_URL: &str = "http://localhost:5001/api";

/// Local storage keys for persisted client state
#[derive(Debug, Clone, PartialEq)]
pub struct StorageKeys {
    pub access_token: String,
    pub refresh_token: String,
    pub user: String,
    pub theme: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            access_token: "task_manager_token".to_string(),
            refresh_token: "task_manager_refresh_token".to_string(),
            user: "task_manager_user".to_string(),
            theme: "theme".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend base URL, every request path is appended to it
    pub api_base_url: String,
    pub keys: StorageKeys,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            keys: StorageKeys::default(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Read overrides from `TASK_MANAGER_API_URL` / `TASK_MANAGER_LOG` at compile time
    pub fn from_env() -> Self {
        Self::with_overrides(option_env!("TASK_MANAGER_API_URL"), option_env!("TASK_MANAGER_LOG"))
    }

    fn with_overrides(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = api_url.map(str::trim).filter(|u| !u.is_empty()) {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(level) = log_level.and_then(parse_level) {
            config.log_level = level;
        }
        config
    }
}

fn default_log_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

fn parse_level(raw: &str) -> Option<Level> {
    raw.trim().parse::<Level>().ok()
}
