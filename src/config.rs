//! Configuration System
//!
//! Layered `express.conf` configuration: system file, user file, then an explicit `--config`
//! file. Files use the `key=value` INI dialect with an optional `[logging]` section.

use crate::error::ContextError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

mod facade;
mod merge;
mod sources;

pub use facade::{ConfigLoader, ConfigPaths};
pub use sources::global_file::{global_config_path, OPENSHIFT_CONFIG_ENV};
pub use sources::system_file::SYSTEM_CONFIG_PATH;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RhcConfig {
    /// Broker host, e.g. `openshift.redhat.com`
    #[serde(default)]
    pub libra_server: Option<String>,

    /// Login used when `--rhlogin` is not given
    #[serde(default)]
    pub default_rhlogin: Option<String>,

    /// HTTP request timeout in seconds
    #[serde(default)]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification
    #[serde(default)]
    pub insecure: bool,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RhcConfig {
    pub fn validate(&self) -> Result<(), ContextError> {
        if let Some(server) = &self.libra_server {
            if server.contains(char::is_whitespace) {
                return Err(ContextError::ConfigError(format!(
                    "libra_server '{}' must not contain whitespace",
                    server
                )));
            }
        }
        if self.timeout == Some(0) {
            return Err(ContextError::ConfigError(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}
