//! Explicit config file source: the file passed with --config.

use crate::error::ContextError;
use config::builder::DefaultState;
use config::{ConfigBuilder, File, FileFormat};
use std::path::Path;

/// Add the explicit config file; it must exist.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> Result<ConfigBuilder<DefaultState>, ContextError> {
    if !path.is_file() {
        return Err(ContextError::ConfigError(format!(
            "Config file {} does not exist",
            path.display()
        )));
    }
    Ok(builder.add_source(File::from(path).format(FileFormat::Ini).required(true)))
}
