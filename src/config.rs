//! Top-level application configuration.
//!
//! Configuration is stored in `.deskhub/config.yaml` and includes:
//! - Request timeout and retry policy for the API boundary
//! - Notification settings

use std::fs;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{DeskError, Result};
use crate::paths::config_path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Request timeout in seconds for API calls (default: 5)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// How many times a timed-out request is retried (default: 2)
    #[serde(default = "default_request_retries")]
    pub request_retries: u32,

    /// Notification settings
    #[serde(default, skip_serializing_if = "NotificationsConfig::is_default")]
    pub notifications: NotificationsConfig,
}

fn default_request_timeout() -> u64 {
    5
}

fn default_request_retries() -> u32 {
    2
}

impl Default for Config {
    fn default() -> Self {
        Config {
            request_timeout: default_request_timeout(),
            request_retries: default_request_retries(),
            notifications: NotificationsConfig::default(),
        }
    }
}

/// Notification settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Whether outcome notifications are shown (default: true)
    #[serde(default = "default_notifications_enabled")]
    pub enabled: bool,
}

fn default_notifications_enabled() -> bool {
    true
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: default_notifications_enabled(),
        }
    }
}

impl NotificationsConfig {
    /// Check if this config has default values (for serialization skip)
    pub fn is_default(&self) -> bool {
        self.enabled == default_notifications_enabled()
    }
}

impl Config {
    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Get the API request timeout as a duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Read a config value by dotted key
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "request_timeout" => Ok(self.request_timeout.to_string()),
            "request_retries" => Ok(self.request_retries.to_string()),
            "notifications.enabled" => Ok(self.notifications.enabled.to_string()),
            _ => Err(DeskError::Config(format!("unknown config key '{key}'"))),
        }
    }

    /// Set a config value by dotted key, parsing the value for that key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "request_timeout" => {
                self.request_timeout = value
                    .parse()
                    .map_err(|_| DeskError::Config(format!("'{value}' is not a number of seconds")))?;
            }
            "request_retries" => {
                self.request_retries = value
                    .parse()
                    .map_err(|_| DeskError::Config(format!("'{value}' is not a retry count")))?;
            }
            "notifications.enabled" => {
                self.notifications.enabled = value
                    .parse()
                    .map_err(|_| DeskError::Config(format!("'{value}' is not true/false")))?;
            }
            _ => return Err(DeskError::Config(format!("unknown config key '{key}'"))),
        }
        Ok(())
    }

    /// The keys accepted by `get`/`set`, for help output.
    pub fn known_keys() -> &'static [&'static str] {
        &["request_timeout", "request_retries", "notifications.enabled"]
    }
}
