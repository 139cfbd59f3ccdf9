//! System-wide config file source: /etc/openshift/express.conf

use config::builder::DefaultState;
use config::{ConfigBuilder, File, FileFormat};
use std::path::Path;

pub const SYSTEM_CONFIG_PATH: &str = "/etc/openshift/express.conf";

/// Add the system config file to the builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> ConfigBuilder<DefaultState> {
    if !path.exists() {
        return builder;
    }
    builder.add_source(File::from(path).format(FileFormat::Ini).required(false))
}
