//! Content panel configuration types.

use serde::{Deserialize, Serialize};

/// Defaults for content panels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelsConfig {
    /// Panels opened at startup when no `--url` is given
    /// (valid range: 0 to `layout.max_panels`).
    pub initial_count: u32,
    /// Address loaded into new panels.
    pub home_url: String,
    /// Custom user agent for content panels.
    pub user_agent: Option<String>,
    /// Enable web inspector in content panels.
    pub devtools: bool,
    /// Allow media to start playing without a gesture.
    pub autoplay: bool,
}

impl Default for PanelsConfig {
    fn default() -> Self {
        Self {
            initial_count: 1,
            home_url: "about:blank".into(),
            user_agent: None,
            devtools: false,
            autoplay: true,
        }
    }
}
