//! Window title management: reflects the focused panel.

use mosaic_tiling::Pane;

use super::core::MosaicApp;

/// Format: "{page} - {base}", falling back to the bare base title.
fn window_title(base: &str, pane: Option<&Pane>) -> String {
    let page = pane.and_then(|p| {
        if !p.title.trim().is_empty() {
            Some(p.title.trim())
        } else if !p.url.is_empty() && p.url != "about:blank" {
            Some(p.url.as_str())
        } else {
            None
        }
    });
    match page {
        Some(page) => format!("{page} - {base}"),
        None => base.to_string(),
    }
}

impl MosaicApp {
    /// Update the window title to the focused (or expanded) panel's page.
    pub(super) fn update_window_title(&self) {
        let Some(ref window) = self.window else {
            return;
        };
        let pane = self
            .tiling
            .fullscreen_id()
            .or(self.tiling.focused_id())
            .and_then(|id| self.tiling.pane(id));
        window.set_title(&window_title(&self.config.window.title, pane));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_common::PaneId;
    use mosaic_config::MosaicConfig;

    #[test]
    fn title_prefers_page_title() {
        let mut pane = Pane::new(PaneId(1), "https://example.com");
        pane.title = "Example Domain".into();
        assert_eq!(window_title("Mosaic", Some(&pane)), "Example Domain - Mosaic");
    }

    #[test]
    fn title_falls_back_to_url() {
        let pane = Pane::new(PaneId(1), "https://example.com");
        assert_eq!(window_title("Mosaic", Some(&pane)), "https://example.com - Mosaic");
    }

    #[test]
    fn blank_panel_uses_base() {
        let pane = Pane::new(PaneId(1), "about:blank");
        assert_eq!(window_title("Mosaic", Some(&pane)), "Mosaic");
        assert_eq!(window_title("Mosaic", None), "Mosaic");
    }

    #[test]
    fn update_title_without_window_does_not_panic() {
        let app = MosaicApp::new(MosaicConfig::default(), Vec::new());
        app.update_window_title();
    }
}
