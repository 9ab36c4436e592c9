//! Window and grid layout validation.

use mosaic_fullscreen::sanitize::validate_css_color;

use crate::schema::MosaicConfig;

use super::helpers::{push_err, validate_range};

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &MosaicConfig) {
    validate_range(errors, "window.width", config.window.width, 320, 7680);
    validate_range(errors, "window.height", config.window.height, 240, 4320);
    push_err(
        errors,
        "window.background",
        validate_css_color(&config.window.background),
    );
}

pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &MosaicConfig) {
    validate_range(errors, "layout.panel_gap", config.layout.panel_gap, 0, 40);
    validate_range(errors, "layout.outer_padding", config.layout.outer_padding, 0, 40);
    validate_range(errors, "layout.toolbar_height", config.layout.toolbar_height, 24, 96);
    validate_range(errors, "layout.url_bar_height", config.layout.url_bar_height, 24, 80);
    validate_range(errors, "layout.max_panels", config.layout.max_panels, 1, 16);
}
