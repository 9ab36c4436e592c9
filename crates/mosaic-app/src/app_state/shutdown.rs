//! Graceful shutdown: destroy webviews, then release the window.

use super::core::MosaicApp;

impl MosaicApp {
    /// Perform graceful shutdown.
    ///
    /// Webviews are children of the window and go first.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        if let Some(ref mut registry) = self.webviews {
            registry.destroy_all();
        }
        self.chrome_ready = false;
        self.window = None;

        tracing::info!("Graceful shutdown complete");
    }
}

#[cfg(test)]
mod tests {
    use crate::app_state::core::MosaicApp;
    use mosaic_config::MosaicConfig;

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let mut app = MosaicApp::new(MosaicConfig::default(), Vec::new());
        app.shutdown();

        assert!(app.window.is_none());
        assert!(!app.chrome_ready);
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut app = MosaicApp::new(MosaicConfig::default(), Vec::new());
        app.chrome_ready = true;

        app.shutdown();
        app.shutdown();

        assert!(!app.chrome_ready);
        assert!(app.window.is_none());
    }
}
