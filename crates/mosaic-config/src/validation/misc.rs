//! Panel and fullscreen validation.

use mosaic_fullscreen::sanitize::{validate_attribute_name, validate_css_color};

use crate::schema::MosaicConfig;

use super::helpers::{push_err, validate_range};

pub(crate) fn validate_panels(errors: &mut Vec<String>, config: &MosaicConfig) {
    validate_range(
        errors,
        "panels.initial_count",
        config.panels.initial_count,
        0,
        config.layout.max_panels,
    );
    if config.panels.home_url.trim().is_empty() {
        errors.push("panels.home_url must not be empty".into());
    }
}

pub(crate) fn validate_fullscreen(errors: &mut Vec<String>, config: &MosaicConfig) {
    let fs = &config.fullscreen;
    if fs.z_index == 0 {
        errors.push("fullscreen.z_index must be greater than zero".into());
    }
    push_err(errors, "fullscreen.background", validate_css_color(&fs.background));
    push_err(
        errors,
        "fullscreen.indicator_attribute",
        validate_attribute_name(&fs.indicator_attribute),
    );
}
