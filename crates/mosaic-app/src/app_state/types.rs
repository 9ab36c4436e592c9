//! Internal types and constants for the app state module.

use std::time::Duration;

/// How often to poll for webview events (approx 120 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);

/// Bundled chrome page. WebView2 on Windows only reaches custom protocols
/// through the `http://<scheme>.localhost` form.
#[cfg(target_os = "windows")]
pub(super) const CHROME_URL: &str = "http://mosaic.localhost/chrome/index.html";
#[cfg(not(target_os = "windows"))]
pub(super) const CHROME_URL: &str = "mosaic://localhost/chrome/index.html";

/// Asks a content page to leave in-page fullscreen through its own API,
/// so the shim restores the element and reports back.
pub(super) const EXIT_FULLSCREEN_SCRIPT: &str =
    "if (document.exitFullscreen) { document.exitFullscreen(); }";
