use mosaic_common::Color;

/// Registry key of the chrome webview. Panel IDs start at 1.
pub const CHROME_WEBVIEW_ID: u32 = 0;

/// What a webview is for; decides its navigation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebViewRole {
    /// The toolbar and URL bars, served from `mosaic://`.
    Chrome,
    /// A panel showing arbitrary web content.
    Content,
}

/// Configuration for creating a new WebView instance.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    pub role: WebViewRole,
    /// Initial URL to load.
    pub url: String,
    /// Scripts run before any page script, after the IPC bridge.
    pub init_scripts: Vec<String>,
    /// Run the IPC bridge and `init_scripts` in every frame, not only the
    /// top-level document.
    pub subframes: bool,
    /// Whether the WebView background should be transparent.
    pub transparent: bool,
    /// Background shown before the page paints.
    pub background: Option<Color>,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Whether to enable clipboard access.
    pub clipboard: bool,
    /// Whether to enable autoplay for media.
    pub autoplay: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            role: WebViewRole::Content,
            url: "about:blank".to_string(),
            init_scripts: Vec::new(),
            subframes: true,
            transparent: false,
            background: None,
            devtools: cfg!(debug_assertions),
            user_agent: None,
            clipboard: true,
            autoplay: true,
        }
    }
}

impl WebViewConfig {
    /// A content panel loading `url`.
    pub fn content(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// The chrome page loading `url`.
    pub fn chrome(url: impl Into<String>) -> Self {
        Self {
            role: WebViewRole::Chrome,
            url: url.into(),
            subframes: false,
            ..Default::default()
        }
    }

    /// Add an initialization script.
    pub fn with_init_script(mut self, script: impl Into<String>) -> Self {
        self.init_scripts.push(script.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_defaults() {
        let config = WebViewConfig::content("https://example.com");
        assert_eq!(config.role, WebViewRole::Content);
        assert_eq!(config.url, "https://example.com");
        assert!(config.autoplay);
        assert!(!config.transparent);
        assert!(config.init_scripts.is_empty());
    }

    #[test]
    fn content_scripts_reach_subframes() {
        assert!(WebViewConfig::content("https://example.com").subframes);
        assert!(!WebViewConfig::chrome("mosaic://localhost/chrome/index.html").subframes);
    }

    #[test]
    fn chrome_role() {
        let config = WebViewConfig::chrome("mosaic://localhost/chrome/index.html");
        assert_eq!(config.role, WebViewRole::Chrome);
        assert!(config.background.is_none());
    }

    #[test]
    fn init_scripts_keep_order() {
        let config = WebViewConfig::content("about:blank")
            .with_init_script("a()")
            .with_init_script("b()");
        assert_eq!(config.init_scripts, vec!["a()", "b()"]);
    }
}
