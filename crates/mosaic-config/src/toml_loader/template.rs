//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Mosaic Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Mosaic"
# width = 1200           # 320-7680
# height = 800           # 240-4320
# background = "#111827"

[layout]
# panel_gap = 8          # 0-40
# outer_padding = 8      # 0-40
# toolbar_height = 44    # 24-96
# url_bar_height = 40    # 24-80
# max_panels = 8         # 1-16

[panels]
# initial_count = 1      # 0 to max_panels
# home_url = "about:blank"
# user_agent = "Mozilla/5.0 ..."
# devtools = false
# autoplay = true

[fullscreen]
# Expand fullscreen video inside its panel instead of taking over the screen.
# enabled = true
# z_index = 999999
# background = "#000000"
# indicator_attribute = "data-custom-fullscreen"
# exit_on_escape = true
# exit_on_outside_click = true
# hide_player_chrome = true

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
