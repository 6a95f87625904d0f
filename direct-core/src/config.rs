//! Configuration management.
//!
//! Holds the API origin, customer identifier, bearer token and logging
//! preferences. Configuration is persisted as TOML on disk, and a few
//! values can be overridden from the environment.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::constants;
use crate::error::{DirectError, DirectResult};
use crate::platform;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectConfig {
    /// API connection settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API origin (e.g. "https://api.uber.com"). Trailing slashes are ignored.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Customer (organization) identifier placed in every request path.
    #[serde(default)]
    pub customer_id: String,

    /// OAuth2 bearer token. Acquiring and refreshing it is up to the caller.
    #[serde(default)]
    pub access_token: String,

    /// Transport request timeout in milliseconds.
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,

    /// Transport connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for log files. If empty, uses the default data directory.
    #[serde(default)]
    pub directory: String,

    /// Enable JSON structured logging output for the log file.
    #[serde(default)]
    pub json_output: bool,
}

// Default value functions for serde

fn default_base_url() -> String {
    constants::DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    constants::DEFAULT_TIMEOUT_MS
}

fn default_connect_timeout() -> u64 {
    constants::DEFAULT_CONNECT_TIMEOUT_MS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            customer_id: String::new(),
            access_token: String::new(),
            timeout_ms: default_timeout(),
            connect_timeout_ms: default_connect_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: String::new(),
            json_output: false,
        }
    }
}

impl DirectConfig {
    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> DirectResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: DirectConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a specific file path.
    pub fn save_to_file(&self, path: &Path) -> DirectResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| DirectError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> DirectResult<PathBuf> {
        Ok(platform::config_dir()?.join("config.toml"))
    }

    /// Get the effective log directory, using the configured path or the default.
    pub fn effective_log_dir(&self) -> DirectResult<PathBuf> {
        if self.logging.directory.is_empty() {
            Ok(platform::data_dir()?.join("logs"))
        } else {
            Ok(PathBuf::from(&self.logging.directory))
        }
    }

    /// Apply `DIRECT_BASE_URL`, `DIRECT_CUSTOMER_ID` and `DIRECT_ACCESS_TOKEN`
    /// from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup. Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(base_url) = get(constants::ENV_BASE_URL) {
            self.api.base_url = base_url;
        }
        if let Some(customer_id) = get(constants::ENV_CUSTOMER_ID) {
            self.api.customer_id = customer_id;
        }
        if let Some(token) = get(constants::ENV_ACCESS_TOKEN) {
            self.api.access_token = token;
        }
    }

    /// Check that the values needed to build a client are present.
    pub fn validate(&self) -> DirectResult<()> {
        if Self::sanitize_base_url(&self.api.base_url).is_empty() {
            return Err(DirectError::MissingConfig("api.base_url".into()));
        }
        if self.api.customer_id.trim().is_empty() {
            return Err(DirectError::MissingConfig("api.customer_id".into()));
        }
        Ok(())
    }

    /// Normalize an API origin: trims whitespace and quotes, strips trailing slashes.
    pub fn sanitize_base_url(base_url: &str) -> String {
        base_url
            .trim()
            .trim_matches('"')
            .trim()
            .trim_end_matches('/')
            .to_string()
    }
}

/// Thread-safe configuration holder for shared access.
#[derive(Clone)]
pub struct ConfigHandle {
    inner: Arc<RwLock<DirectConfig>>,
}

impl ConfigHandle {
    /// Create a new configuration handle.
    pub fn new(config: DirectConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Read the configuration.
    pub async fn read(&self) -> tokio::sync::RwLockReadGuard<'_, DirectConfig> {
        self.inner.read().await
    }

    /// Write/update the configuration.
    pub async fn write(&self) -> tokio::sync::RwLockWriteGuard<'_, DirectConfig> {
        self.inner.write().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = DirectConfig::default();
        assert_eq!(config.api.base_url, "https://api.uber.com");
        assert_eq!(config.api.timeout_ms, 30_000);
        assert_eq!(config.api.connect_timeout_ms, 15_000);
        assert_eq!(config.logging.level, "info");
        assert!(config.api.customer_id.is_empty());
    }

    #[test]
    fn test_sanitize_base_url() {
        assert_eq!(
            DirectConfig::sanitize_base_url("https://api.uber.com/"),
            "https://api.uber.com"
        );
        assert_eq!(
            DirectConfig::sanitize_base_url("  \"https://sandbox.example.com//\"  "),
            "https://sandbox.example.com"
        );
        assert_eq!(DirectConfig::sanitize_base_url("   "), "");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: DirectConfig = toml::from_str(
            r#"
            [api]
            customer_id = "cust_123"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.customer_id, "cust_123");
        assert_eq!(config.api.base_url, "https://api.uber.com");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_overrides_skip_empty_values() {
        let env: HashMap<&str, &str> = [
            ("DIRECT_CUSTOMER_ID", "cust_env"),
            ("DIRECT_ACCESS_TOKEN", "  "),
        ]
        .into_iter()
        .collect();

        let mut config = DirectConfig::default();
        config.api.access_token = "from_file".into();
        config.apply_overrides(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.api.customer_id, "cust_env");
        assert_eq!(config.api.access_token, "from_file");
        assert_eq!(config.api.base_url, "https://api.uber.com");
    }

    #[test]
    fn test_validate() {
        let mut config = DirectConfig::default();
        assert!(matches!(
            config.validate(),
            Err(DirectError::MissingConfig(ref k)) if k == "api.customer_id"
        ));
        config.api.customer_id = "cust_1".into();
        assert!(config.validate().is_ok());
        config.api.base_url = "/".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = DirectConfig::default();
        config.api.customer_id = "cust_42".into();
        config.logging.json_output = true;
        config.save_to_file(&path).unwrap();

        let loaded = DirectConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.api.customer_id, "cust_42");
        assert!(loaded.logging.json_output);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api\ncustomer_id = ").unwrap();
        assert!(matches!(
            DirectConfig::load_from_file(&path),
            Err(DirectError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_config_handle_write_is_visible() {
        let handle = ConfigHandle::new(DirectConfig::default());
        handle.write().await.api.access_token = "tok".into();
        assert_eq!(handle.read().await.api.access_token, "tok");
    }
}
