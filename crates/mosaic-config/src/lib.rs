//! Mosaic configuration system.
//!
//! TOML-based configuration with full validation. All config sections use
//! sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mosaic_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("{} px between panels", config.layout.panel_gap);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{MosaicConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use mosaic_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Creates a documented default file if none exists yet.
pub fn load_config() -> Result<MosaicConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it.
pub fn load_config_from(path: &Path) -> Result<MosaicConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
