//! Core TOML config loading: read from path or platform default.

use std::path::Path;

use mosaic_common::ConfigError;
use tracing::{info, warn};

use crate::schema::MosaicConfig;
use crate::validation;

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// Validation problems are logged; the parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<MosaicConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: MosaicConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), error = %e, "config validation warning");
    }

    info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/mosaic/config.toml`
/// On Linux: `~/.config/mosaic/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<MosaicConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!(path = %path.display(), "no config found, creating default");
        create_default_config(&path)?;
        return Ok(MosaicConfig::default());
    }

    load_from_path(&path)
}
