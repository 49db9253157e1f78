//! Global configuration (`~/.depview/config.toml`).
//!
//! Holds the defaults every command falls back to: the object-list endpoint,
//! the bearer token used to call it, the namespace for bare object names and
//! the polling/timeout settings. The file is optional; a missing file means
//! all defaults.
//!
//! ```toml
//! endpoint = "https://gitops.example.com/v1/terraform-objects"
//! token = "eyJhbGciOi..."
//! default_namespace = "flux-system"
//! poll_interval_secs = 10
//! request_timeout_secs = 30
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;

use crate::constants::{
    CONFIG_PATH_ENV, DEFAULT_NAMESPACE, DEFAULT_POLL_INTERVAL_SECS, DEFAULT_REQUEST_TIMEOUT_SECS,
};
use crate::core::DepviewError;

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

const fn default_poll_interval_secs() -> u64 {
    DEFAULT_POLL_INTERVAL_SECS
}

const fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

/// User-wide depview settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlobalConfig {
    /// Object-list endpoint used when no `--file`/`--url` is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Bearer token for the endpoint. Never commit this file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Namespace for object references given without one.
    #[serde(default = "default_namespace")]
    pub default_namespace: String,

    /// Seconds between refreshes in `depview watch`.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Seconds before a single endpoint request times out.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            token: None,
            default_namespace: default_namespace(),
            poll_interval_secs: default_poll_interval_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl GlobalConfig {
    /// Load from `path`, or from `$DEPVIEW_CONFIG`, or from the default location.
    ///
    /// A missing file yields the defaults.
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => match std::env::var_os(CONFIG_PATH_ENV) {
                Some(path) => PathBuf::from(path),
                None => Self::default_path()?,
            },
        };

        if path.exists() {
            Self::load_from(&path).await
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load and validate a config file.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read global config from {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse global config from {}", path.display()))?;
        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write the config, readable by the owner only on Unix.
    pub async fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize global config")?;

        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write global config to {}", path.display()))?;

        // The file may hold a bearer token.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let mut perms = fs::metadata(path)
                .await
                .with_context(|| format!("Failed to read permissions for {}", path.display()))?
                .permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms).await.with_context(|| {
                format!("Failed to set secure permissions on {}", path.display())
            })?;
        }

        Ok(())
    }

    /// `~/.depview/config.toml`, or `%LOCALAPPDATA%\depview\config.toml` on Windows.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "windows") {
            dirs::data_local_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine local data directory"))?
                .join("depview")
        } else {
            dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine home directory"))?
                .join(".depview")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Reject settings no command can work with.
    pub fn validate(&self) -> Result<(), DepviewError> {
        if self.poll_interval_secs == 0 {
            return Err(config_error("poll_interval_secs must be at least 1"));
        }
        if self.request_timeout_secs == 0 {
            return Err(config_error("request_timeout_secs must be at least 1"));
        }
        if self.default_namespace.contains('/') {
            return Err(config_error("default_namespace must not contain '/'"));
        }
        if let Some(endpoint) = &self.endpoint
            && !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(config_error("endpoint must be an http:// or https:// URL"));
        }
        Ok(())
    }

    /// Interval between refreshes in `depview watch`.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// Timeout for one endpoint request.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn config_error(message: &str) -> DepviewError {
    DepviewError::ConfigError {
        message: message.to_string(),
    }
}
