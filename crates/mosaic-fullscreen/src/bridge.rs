//! Event & input bridge: tells page observers and the host about
//! fullscreen transitions.

use tracing::{debug, warn};

use crate::dom::{Document, Element};
use crate::errors::NotifyError;
use crate::options::ShimOptions;

/// Change notifications fanned out on every transition: the standard name
/// first, then the legacy vendor spellings.
pub const CHANGE_EVENT_NAMES: &[&str] = &[
    "fullscreenchange",
    "webkitfullscreenchange",
    "mozfullscreenchange",
    "MSFullscreenChange",
];

/// Name of the host hook on `window.mosaic` that pages report through.
pub const HOST_HOOK_NAME: &str = "notifyFullscreen";

/// Selectors for player chrome faded out while a pane is fullscreen.
const PLAYER_CHROME_SELECTORS: &[&str] = &[".ytp-chrome-top", ".ytp-chrome-bottom"];

/// Player containers that get the fullscreen backdrop.
const PLAYER_CONTAINER_SELECTORS: &[&str] = &[".html5-video-player", ".video-js", ".plyr", ".vjs-tech"];

/// Native fullscreen pseudo-classes. Each gets its own rule because one
/// unknown pseudo-class invalidates a whole selector list.
const NATIVE_FULLSCREEN_PSEUDOS: &[&str] = &[":fullscreen", ":-webkit-full-screen", ":-moz-full-screen"];

/// The one canonical transition event; names come from [`CHANGE_EVENT_NAMES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenChange {
    Entered,
    Exited,
}

impl FullscreenChange {
    pub fn is_active(self) -> bool {
        matches!(self, FullscreenChange::Entered)
    }
}

/// Receiver for fullscreen state on the host side of a pane.
pub trait HostNotifier {
    fn notify_fullscreen(&self, active: bool) -> Result<(), NotifyError>;
}

/// Fans transitions out to the DOM and the optional host hook.
#[derive(Default)]
pub struct EventBridge {
    notifier: Option<Box<dyn HostNotifier>>,
}

impl EventBridge {
    pub fn new(notifier: Option<Box<dyn HostNotifier>>) -> Self {
        Self { notifier }
    }

    pub fn set_notifier(&mut self, notifier: Box<dyn HostNotifier>) {
        self.notifier = Some(notifier);
    }

    pub fn has_notifier(&self) -> bool {
        self.notifier.is_some()
    }

    /// Dispatch every change-event name on `target` and on the document,
    /// then notify the host.
    pub fn emit<D: Document>(&self, document: &D, target: &D::Element, change: FullscreenChange) {
        for name in CHANGE_EVENT_NAMES {
            target.dispatch_event(name, true);
            document.dispatch_event(name, true);
        }
        debug!(?change, element = ?target, "fullscreen change dispatched");
        self.notify_host(change.is_active());
    }

    /// Best-effort host notification. Never fails.
    fn notify_host(&self, active: bool) {
        let result = match &self.notifier {
            Some(notifier) => notifier.notify_fullscreen(active),
            None => Err(NotifyError::HookMissing),
        };
        if let Err(e) = result {
            warn!(active, error = %e, "could not notify host of fullscreen state");
        }
    }
}

impl std::fmt::Debug for EventBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBridge")
            .field("notifier", &self.notifier.is_some())
            .finish()
    }
}

/// Presentation rules injected once per document.
///
/// Natively fullscreened media letterboxes, player containers inside the
/// fullscreen element get the backdrop, and (optionally) player chrome
/// fades out until hovered.
pub fn presentation_stylesheet(options: &ShimOptions) -> String {
    let attr = &options.indicator_attribute;
    let background = &options.background;
    let mut css = String::new();

    for pseudo in NATIVE_FULLSCREEN_PSEUDOS {
        css.push_str(&format!(
            "video{pseudo} {{\n  width: 100% !important;\n  height: 100% !important;\n  object-fit: contain !important;\n  background: {background} !important;\n}}\n"
        ));
    }

    let containers = PLAYER_CONTAINER_SELECTORS
        .iter()
        .flat_map(|sel| [format!("[{attr}]{sel}"), format!("[{attr}] {sel}")])
        .collect::<Vec<_>>()
        .join(",\n");
    css.push_str(&format!(
        "{containers} {{\n  background: {background} !important;\n}}\n"
    ));

    if options.hide_player_chrome {
        let hidden = PLAYER_CHROME_SELECTORS
            .iter()
            .map(|sel| format!("[{attr}=\"true\"] {sel}"))
            .collect::<Vec<_>>()
            .join(",\n");
        let hovered = PLAYER_CHROME_SELECTORS
            .iter()
            .map(|sel| format!("[{attr}=\"true\"]:hover {sel}"))
            .collect::<Vec<_>>()
            .join(",\n");
        css.push_str(&format!(
            "{hidden} {{\n  opacity: 0 !important;\n  transition: opacity 0.3s ease !important;\n}}\n"
        ));
        css.push_str(&format!("{hovered} {{\n  opacity: 1 !important;\n}}\n"));
    }

    css
}
