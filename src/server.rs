//! Server endpoint selection.

use crate::config::RhcConfig;
use crate::options::{CommandOptions, OptionKey};

/// Environment variable naming the broker host.
pub const LIBRA_SERVER_ENV: &str = "LIBRA_SERVER";

/// Broker used when nothing else is configured.
pub const OPENSHIFT_ONLINE_SERVER: &str = "openshift.redhat.com";

/// Precedence chain for the broker host: environment, configuration, built-in default.
#[derive(Debug, Clone, Default)]
pub struct ServerContext {
    env_server: Option<String>,
    configured_server: Option<String>,
}

impl ServerContext {
    pub fn new(env_server: Option<String>, configured_server: Option<String>) -> Self {
        Self {
            env_server: non_blank(env_server),
            configured_server: non_blank(configured_server),
        }
    }

    /// Snapshot of `LIBRA_SERVER` and the configured `libra_server`.
    pub fn from_env(config: &RhcConfig) -> Self {
        Self::new(
            std::env::var(LIBRA_SERVER_ENV).ok(),
            config.libra_server.clone(),
        )
    }

    /// `clean` skips the configured server entirely.
    pub fn server_context(&self, clean: bool) -> String {
        self.env_server
            .clone()
            .or_else(|| {
                if clean {
                    None
                } else {
                    self.configured_server.clone()
                }
            })
            .unwrap_or_else(|| OPENSHIFT_ONLINE_SERVER.to_string())
    }

    /// Resolve the server and write it into `defaults[key]` when unset.
    pub fn server_default(&self, defaults: &mut CommandOptions, key: OptionKey) -> String {
        let value = self.server_context(defaults.clean);
        defaults.set_default(key, value.clone());
        value
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
