//! User config file source: ~/.openshift/express.conf, or ~/.openshift/$OPENSHIFT_CONFIG.conf

use config::builder::DefaultState;
use config::{ConfigBuilder, File, FileFormat};
use directories::BaseDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Names an alternate user config file under ~/.openshift.
pub const OPENSHIFT_CONFIG_ENV: &str = "OPENSHIFT_CONFIG";

/// Path to the user config file.
pub fn global_config_path() -> Option<PathBuf> {
    let home = BaseDirs::new()?.home_dir().to_path_buf();
    let name = std::env::var(OPENSHIFT_CONFIG_ENV)
        .ok()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| "express".to_string());
    Some(home.join(".openshift").join(format!("{}.conf", name)))
}

/// Add the user config file to the builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> ConfigBuilder<DefaultState> {
    if !path.exists() {
        debug!(
            config_path = %path.display(),
            "User configuration file not found; run 'rhc setup' to create one"
        );
        return builder;
    }
    builder.add_source(File::from(path).format(FileFormat::Ini).required(false))
}
