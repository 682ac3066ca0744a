use std::fs;
use std::path::Path;

use nf_core::NoiseConfig;
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Error, Debug)]
pub enum ConfigIoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON serialization error: {0}")]
    Ron(#[from] ron::Error),
    #[error("RON parse error: {0}")]
    RonSpanned(#[from] ron::error::SpannedError),
}

/// Save a noise configuration to a RON file.
pub fn save_config(path: &Path, config: &NoiseConfig) -> Result<(), ConfigIoError> {
    let pretty_config = ron::ser::PrettyConfig::new()
        .depth_limit(2)
        .separate_tuple_members(true);

    let ron_string = ron::ser::to_string_pretty(config, pretty_config)?;
    fs::write(path, ron_string)?;
    Ok(())
}

/// Load a noise configuration from a RON file.
pub fn load_config(path: &Path) -> Result<NoiseConfig, ConfigIoError> {
    let contents = fs::read_to_string(path)?;
    let config: NoiseConfig = ron::from_str(&contents)?;
    Ok(config)
}
