//! Print the info line for a config

use std::path::Path;

use bridge::BridgeConfig;
use bridge::output::{InfoOutput, OutputMode};

/// Print `"<name> v<version>"` for the given config file, or the default config
pub fn info(config: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let config = match config {
        Some(path) => BridgeConfig::load(path)?,
        None => BridgeConfig::default(),
    };

    InfoOutput {
        info: config.info(),
        name: config.name,
        version: config.version,
    }
    .render(mode);
    Ok(())
}
