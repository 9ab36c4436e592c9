//! URL normalization for the panel address bar and navigation policy
//! for each webview role.

use crate::manager::WebViewRole;

/// Scheme served by the [`ContentProvider`](crate::content::ContentProvider).
pub const CUSTOM_SCHEME: &str = "mosaic";

/// Prefixes that address bundled content. WebView2 on Windows rewrites
/// `mosaic://localhost/...` to `http://mosaic.localhost/...`.
pub const BUNDLED_PREFIXES: &[&str] = &["mosaic://", "http://mosaic.localhost"];

/// Prefixes kept as typed in the address bar.
const KEPT_PREFIXES: &[&str] = &["http://", "https://", "about:", "mosaic://"];

/// Turn address-bar input into a loadable URL.
///
/// Input is trimmed; empty input yields `None`. Anything without a known
/// scheme is assumed to be a web address and gets `https://`.
pub fn normalize_url(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lower = trimmed.to_ascii_lowercase();
    if KEPT_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        Some(trimmed.to_string())
    } else {
        Some(format!("https://{trimmed}"))
    }
}

fn is_bundled(url: &str) -> bool {
    BUNDLED_PREFIXES.iter().any(|prefix| url.starts_with(prefix))
}

/// Check whether a webview of `role` may navigate to `url`.
///
/// The chrome page stays inside bundled content. Content panels may go
/// anywhere on the web but never into bundled content, which would hand
/// them the chrome's IPC surface.
pub fn is_navigation_allowed(role: WebViewRole, url: &str) -> bool {
    match role {
        WebViewRole::Chrome => is_bundled(url) || url == "about:blank",
        WebViewRole::Content => {
            let lower = url.trim().to_ascii_lowercase();
            !is_bundled(&lower)
                && !lower.starts_with("javascript:")
                && !lower.starts_with("file:")
                && !lower.is_empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- normalize_url --

    #[test]
    fn bare_host_gets_https() {
        assert_eq!(
            normalize_url("example.com"),
            Some("https://example.com".into())
        );
        assert_eq!(
            normalize_url("youtube.com/watch?v=abc"),
            Some("https://youtube.com/watch?v=abc".into())
        );
    }

    #[test]
    fn explicit_schemes_are_kept() {
        assert_eq!(
            normalize_url("http://localhost:3000"),
            Some("http://localhost:3000".into())
        );
        assert_eq!(
            normalize_url("HTTPS://Example.com"),
            Some("HTTPS://Example.com".into())
        );
        assert_eq!(normalize_url("about:blank"), Some("about:blank".into()));
    }

    #[test]
    fn input_is_trimmed() {
        assert_eq!(
            normalize_url("  rust-lang.org \n"),
            Some("https://rust-lang.org".into())
        );
    }

    #[test]
    fn empty_input_is_none() {
        assert_eq!(normalize_url(""), None);
        assert_eq!(normalize_url("   "), None);
    }

    // -- chrome policy --

    #[test]
    fn chrome_stays_in_bundled_content() {
        assert!(is_navigation_allowed(
            WebViewRole::Chrome,
            "mosaic://localhost/chrome/index.html"
        ));
        assert!(is_navigation_allowed(
            WebViewRole::Chrome,
            "http://mosaic.localhost/chrome/index.html"
        ));
        assert!(!is_navigation_allowed(WebViewRole::Chrome, "https://example.com"));
        assert!(!is_navigation_allowed(WebViewRole::Chrome, "javascript:alert(1)"));
    }

    // -- content policy --

    #[test]
    fn content_may_browse_the_web() {
        assert!(is_navigation_allowed(WebViewRole::Content, "https://www.youtube.com"));
        assert!(is_navigation_allowed(WebViewRole::Content, "http://localhost:8080"));
        assert!(is_navigation_allowed(WebViewRole::Content, "about:blank"));
    }

    #[test]
    fn content_cannot_reach_bundled_or_local() {
        assert!(!is_navigation_allowed(
            WebViewRole::Content,
            "mosaic://localhost/chrome/index.html"
        ));
        assert!(!is_navigation_allowed(
            WebViewRole::Content,
            "http://mosaic.localhost/chrome/index.html"
        ));
        assert!(!is_navigation_allowed(WebViewRole::Content, "file:///etc/passwd"));
        assert!(!is_navigation_allowed(WebViewRole::Content, "JavaScript:void(0)"));
        assert!(!is_navigation_allowed(WebViewRole::Content, ""));
    }
}
