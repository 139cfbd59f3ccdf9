//! Config facade: single entry point for loading `RhcConfig`.

use super::merge::merge_policy;
use super::sources::{explicit_file, global_file, system_file};
use super::RhcConfig;
use crate::error::ContextError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Files consulted when loading configuration, lowest precedence first.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    pub system: Option<PathBuf>,
    pub global: Option<PathBuf>,
    /// Required when set.
    pub explicit: Option<PathBuf>,
}

impl ConfigPaths {
    /// Standard locations plus an optional `--config` file.
    pub fn standard(explicit: Option<PathBuf>) -> Self {
        Self {
            system: Some(PathBuf::from(system_file::SYSTEM_CONFIG_PATH)),
            global: global_file::global_config_path(),
            explicit,
        }
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the standard locations with `path` layered on top.
    pub fn load_with_file(path: Option<&Path>) -> Result<RhcConfig, ContextError> {
        Self::load_with_paths(&ConfigPaths::standard(path.map(Path::to_path_buf)))
    }

    /// Load a single file, ignoring the standard locations.
    pub fn load_from_file(path: &Path) -> Result<RhcConfig, ContextError> {
        Self::load_with_paths(&ConfigPaths {
            system: None,
            global: None,
            explicit: Some(path.to_path_buf()),
        })
    }

    pub fn load_with_paths(paths: &ConfigPaths) -> Result<RhcConfig, ContextError> {
        let mut builder = merge_policy::builder_with_defaults()?;
        if let Some(system) = &paths.system {
            builder = system_file::add_to_builder(builder, system);
        }
        if let Some(global) = &paths.global {
            builder = global_file::add_to_builder(builder, global);
        }
        if let Some(explicit) = &paths.explicit {
            builder = explicit_file::add_to_builder(builder, explicit)?;
        }

        let config: RhcConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        debug!(server = ?config.libra_server, "Configuration loaded");
        Ok(config)
    }
}
