//! Local git metadata: the `rhc.*` keys written into a cloned application's git config.

use crate::options::{present, CommandOptions, OptionKey};
use serde::Serialize;
use std::cell::OnceCell;
use std::path::PathBuf;
use std::process::Command;
use std::sync::Arc;
use tracing::debug;

pub const GIT_APP_ID_KEY: &str = "rhc.app-id";
pub const GIT_APP_NAME_KEY: &str = "rhc.app-name";
pub const GIT_DOMAIN_NAME_KEY: &str = "rhc.domain-name";

/// Reads a single git configuration key.
pub trait GitConfigReader {
    /// `None` when the key is unset or git is unavailable.
    fn git_config_get(&self, key: &str) -> Option<String>;
}

/// `git config --get` in a working directory.
#[derive(Debug, Clone)]
pub struct GitCli {
    work_dir: PathBuf,
}

impl GitCli {
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
        }
    }

    pub fn current_dir() -> Self {
        Self::new(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}

impl GitConfigReader for GitCli {
    fn git_config_get(&self, key: &str) -> Option<String> {
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.work_dir)
            .args(["config", "--get", key])
            .output()
            .ok()?;
        if !output.status.success() {
            debug!(key, status = ?output.status.code(), "git config key not set");
            return None;
        }
        let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
        (!value.is_empty()).then_some(value)
    }
}

impl<T: GitConfigReader + ?Sized> GitConfigReader for &T {
    fn git_config_get(&self, key: &str) -> Option<String> {
        (**self).git_config_get(key)
    }
}

impl<T: GitConfigReader + ?Sized> GitConfigReader for Box<T> {
    fn git_config_get(&self, key: &str) -> Option<String> {
        (**self).git_config_get(key)
    }
}

impl<T: GitConfigReader + ?Sized> GitConfigReader for Arc<T> {
    fn git_config_get(&self, key: &str) -> Option<String> {
        (**self).git_config_get(key)
    }
}

/// Defaults derived from the local git configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocalGitConfig {
    pub application_id: Option<String>,
    pub app: Option<String>,
    pub namespace: Option<String>,
}

impl LocalGitConfig {
    pub fn get(&self, key: OptionKey) -> Option<&str> {
        let value = match key {
            OptionKey::ApplicationId => &self.application_id,
            OptionKey::App => &self.app,
            OptionKey::Namespace => &self.namespace,
            _ => return None,
        };
        present(value.as_deref())
    }
}

/// Default hook backed by local git metadata, memoized for one invocation.
pub struct LocalGitDefaults<G> {
    reader: G,
    cache: OnceCell<LocalGitConfig>,
}

impl<G: GitConfigReader> LocalGitDefaults<G> {
    pub fn new(reader: G) -> Self {
        Self {
            reader,
            cache: OnceCell::new(),
        }
    }

    /// The memoized git defaults, read on first access.
    pub fn local_git_config(&self) -> &LocalGitConfig {
        self.cache.get_or_init(|| {
            let read = |key: &str| {
                self.reader
                    .git_config_get(key)
                    .filter(|v| !v.trim().is_empty())
            };
            let config = LocalGitConfig {
                application_id: read(GIT_APP_ID_KEY),
                app: read(GIT_APP_NAME_KEY),
                namespace: read(GIT_DOMAIN_NAME_KEY),
            };
            debug!(?config, "Loaded local git defaults");
            config
        })
    }

    /// Fill `defaults[key]` from git metadata when git knows a value and the option is unset.
    pub fn from_local_git(&self, defaults: &mut CommandOptions, key: OptionKey) -> &LocalGitConfig {
        let config = self.local_git_config();
        if let Some(value) = config.get(key) {
            defaults.set_default(key, value);
        }
        config
    }
}
