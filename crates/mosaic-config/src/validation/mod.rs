//! Full configuration validation.
//!
//! Validates numeric ranges and the values that end up inside injected
//! CSS or script, collecting every error into a single `ConfigError`.

mod helpers;
mod layout;
mod misc;


use mosaic_common::ConfigError;

use crate::schema::MosaicConfig;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &MosaicConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    layout::validate_window(&mut errors, config);
    layout::validate_layout(&mut errors, config);
    misc::validate_panels(&mut errors, config);
    misc::validate_fullscreen(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
