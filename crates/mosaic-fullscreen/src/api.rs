//! Capability interface for the Fullscreen API and the legacy names pages
//! reach it through.

use std::future::{ready, Ready};

use tracing::trace;

use crate::dom::Document;
use crate::machine::FullscreenMachine;

/// Element methods that request fullscreen.
pub const REQUEST_ENTER_NAMES: &[&str] = &[
    "requestFullscreen",
    "webkitRequestFullscreen",
    "webkitRequestFullScreen",
    "mozRequestFullScreen",
    "msRequestFullscreen",
    "webkitEnterFullscreen",
    "webkitEnterFullScreen",
];

/// Document methods that leave fullscreen.
pub const REQUEST_EXIT_NAMES: &[&str] = &[
    "exitFullscreen",
    "webkitExitFullscreen",
    "webkitCancelFullScreen",
    "mozCancelFullScreen",
    "msExitFullscreen",
    "webkitExitFullScreen",
];

/// Video element methods WebKit uses for its native player. They live on
/// `HTMLVideoElement.prototype`, not `Element.prototype`.
pub const MEDIA_REQUEST_NAMES: &[&str] = &["webkitEnterFullscreen", "webkitEnterFullScreen"];

/// Video element methods leaving the native player.
pub const MEDIA_EXIT_NAMES: &[&str] = &["webkitExitFullscreen", "webkitExitFullScreen"];

/// Document properties reporting the fullscreen element.
pub const CURRENT_TARGET_NAMES: &[&str] = &[
    "fullscreenElement",
    "webkitFullscreenElement",
    "webkitCurrentFullScreenElement",
    "mozFullScreenElement",
    "msFullscreenElement",
];

/// Boolean document properties reporting whether anything is fullscreen.
pub const ACTIVE_NAMES: &[&str] = &["fullscreen", "webkitIsFullScreen", "mozFullScreen"];

/// Document properties reporting whether fullscreen is available.
pub const SUPPORTED_NAMES: &[&str] = &[
    "fullscreenEnabled",
    "webkitFullscreenEnabled",
    "mozFullScreenEnabled",
    "msFullscreenEnabled",
];

/// Completion signal of a request. Always already resolved: the shim
/// presents every request as successful and does no async work.
pub type Completion = Ready<()>;

/// What a page can do with fullscreen, independent of how it spells it.
pub trait FullscreenApi<E> {
    fn request_enter(&mut self, element: &E) -> Completion;
    fn request_exit(&mut self) -> Completion;
    fn current_target(&self) -> Option<&E>;
    fn is_supported(&self) -> bool;

    fn is_active(&self) -> bool {
        self.current_target().is_some()
    }
}

impl<D: Document> FullscreenApi<D::Element> for FullscreenMachine<D> {
    fn request_enter(&mut self, element: &D::Element) -> Completion {
        FullscreenMachine::request_enter(self, element);
        ready(())
    }

    fn request_exit(&mut self) -> Completion {
        FullscreenMachine::request_exit(self);
        ready(())
    }

    fn current_target(&self) -> Option<&D::Element> {
        FullscreenMachine::current_target(self)
    }

    fn is_supported(&self) -> bool {
        true
    }
}

/// Canonical entry point behind a set of aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryPoint {
    RequestEnter,
    RequestExit,
    CurrentTarget,
    Active,
    Supported,
}

impl EntryPoint {
    pub const ALL: [EntryPoint; 5] = [
        EntryPoint::RequestEnter,
        EntryPoint::RequestExit,
        EntryPoint::CurrentTarget,
        EntryPoint::Active,
        EntryPoint::Supported,
    ];

    /// Every name this entry point is reachable under, standard first.
    pub fn names(self) -> &'static [&'static str] {
        match self {
            EntryPoint::RequestEnter => REQUEST_ENTER_NAMES,
            EntryPoint::RequestExit => REQUEST_EXIT_NAMES,
            EntryPoint::CurrentTarget => CURRENT_TARGET_NAMES,
            EntryPoint::Active => ACTIVE_NAMES,
            EntryPoint::Supported => SUPPORTED_NAMES,
        }
    }

    pub fn standard_name(self) -> &'static str {
        self.names()[0]
    }

    /// Map any alias to its entry point. Names are case-sensitive, as in
    /// the DOM.
    pub fn resolve(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|entry| entry.names().contains(&name))
    }
}

/// Result of a by-name call.
#[derive(Debug)]
pub enum EntryPointResult<'a, E> {
    Pending(Completion),
    Target(Option<&'a E>),
    Active(bool),
    Supported(bool),
}

/// Route a call made under any legacy name.
///
/// `this` is the receiver for element methods. Unknown names return
/// `None` and the caller skips them.
pub fn invoke_entry_point<'a, E, A>(
    api: &'a mut A,
    name: &str,
    this: &E,
) -> Option<EntryPointResult<'a, E>>
where
    A: FullscreenApi<E>,
{
    let Some(entry) = EntryPoint::resolve(name) else {
        trace!(name, "unknown fullscreen entry point skipped");
        return None;
    };
    let result = match entry {
        EntryPoint::RequestEnter => EntryPointResult::Pending(api.request_enter(this)),
        EntryPoint::RequestExit => EntryPointResult::Pending(api.request_exit()),
        EntryPoint::CurrentTarget => EntryPointResult::Target(api.current_target()),
        EntryPoint::Active => EntryPointResult::Active(api.is_active()),
        EntryPoint::Supported => EntryPointResult::Supported(api.is_supported()),
    };
    Some(result)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::options::ShimOptions;
    use crate::test_dom::{TestDocument, TestElement};

    fn machine() -> FullscreenMachine<TestDocument> {
        FullscreenMachine::install(TestDocument::new(), ShimOptions::default())
    }

    #[test]
    fn every_alias_resolves_to_its_entry_point() {
        for entry in EntryPoint::ALL {
            for name in entry.names() {
                assert_eq!(EntryPoint::resolve(name), Some(entry), "{name}");
            }
        }
    }

    #[test]
    fn aliases_do_not_overlap() {
        let mut seen = HashSet::new();
        for entry in EntryPoint::ALL {
            for name in entry.names() {
                assert!(seen.insert(*name), "duplicate alias {name}");
            }
        }
    }

    #[test]
    fn standard_name_comes_first() {
        for entry in EntryPoint::ALL {
            assert!(entry.names().len() >= 3, "{entry:?}");
        }
        assert_eq!(EntryPoint::RequestEnter.standard_name(), "requestFullscreen");
        assert_eq!(EntryPoint::CurrentTarget.standard_name(), "fullscreenElement");
        assert_eq!(EntryPoint::Active.standard_name(), "fullscreen");
    }

    #[test]
    fn webkit_video_and_boolean_names_resolve() {
        assert_eq!(EntryPoint::resolve("webkitEnterFullscreen"), Some(EntryPoint::RequestEnter));
        assert_eq!(EntryPoint::resolve("webkitExitFullScreen"), Some(EntryPoint::RequestExit));
        assert_eq!(EntryPoint::resolve("fullscreen"), Some(EntryPoint::Active));
        assert_eq!(EntryPoint::resolve("webkitIsFullScreen"), Some(EntryPoint::Active));
    }

    #[test]
    fn media_names_are_request_aliases() {
        for name in MEDIA_REQUEST_NAMES {
            assert_eq!(EntryPoint::resolve(name), Some(EntryPoint::RequestEnter), "{name}");
        }
        for name in MEDIA_EXIT_NAMES {
            assert_eq!(EntryPoint::resolve(name), Some(EntryPoint::RequestExit), "{name}");
        }
    }

    #[test]
    fn video_enter_fullscreen_is_intercepted() {
        let mut m = machine();
        let video = TestElement::new("video");

        let result = invoke_entry_point(&mut m, "webkitEnterFullscreen", &video);
        assert!(matches!(result, Some(EntryPointResult::Pending(_))));
        assert_eq!(m.current_target(), Some(&video));

        let _ = invoke_entry_point(&mut m, "webkitExitFullScreen", &video);
        assert!(!m.is_active());
    }

    #[test]
    fn boolean_status_follows_the_session() {
        let mut m = machine();
        let el = TestElement::new("div");
        for name in ACTIVE_NAMES {
            let result = invoke_entry_point(&mut m, name, &el);
            assert!(matches!(result, Some(EntryPointResult::Active(false))), "{name}");
        }

        let _ = invoke_entry_point(&mut m, "requestFullscreen", &el);
        for name in ACTIVE_NAMES {
            let result = invoke_entry_point(&mut m, name, &el);
            assert!(matches!(result, Some(EntryPointResult::Active(true))), "{name}");
        }
    }

    #[test]
    fn unknown_names_are_skipped() {
        assert_eq!(EntryPoint::resolve("requestPointerLock"), None);
        assert_eq!(EntryPoint::resolve("RequestFullscreen"), None);

        let mut m = machine();
        let el = TestElement::new("div");
        assert!(invoke_entry_point(&mut m, "oRequestFullscreen", &el).is_none());
        assert!(!m.is_active());
    }

    #[test]
    fn legacy_request_enters_and_resolves_immediately() {
        let mut m = machine();
        let el = TestElement::new("video");

        let result = invoke_entry_point(&mut m, "webkitRequestFullScreen", &el);
        assert!(matches!(result, Some(EntryPointResult::Pending(_))));
        assert_eq!(m.current_target(), Some(&el));
    }

    #[test]
    fn redundant_requests_still_complete() {
        let mut m = machine();
        let el = TestElement::new("div");
        let other = TestElement::new("div");

        let _first: Completion = FullscreenApi::request_enter(&mut m, &el);
        let _second: Completion = FullscreenApi::request_enter(&mut m, &other);
        assert_eq!(FullscreenApi::current_target(&m), Some(&el));

        let _exit: Completion = FullscreenApi::request_exit(&mut m);
        let _again: Completion = FullscreenApi::request_exit(&mut m);
        assert_eq!(FullscreenApi::current_target(&m), None);
    }

    #[test]
    fn status_aliases_report_target_then_null() {
        let mut m = machine();
        let el = TestElement::new("div");
        let _ = invoke_entry_point(&mut m, "mozRequestFullScreen", &el);

        for name in CURRENT_TARGET_NAMES {
            let result = invoke_entry_point(&mut m, name, &el);
            assert!(
                matches!(result, Some(EntryPointResult::Target(Some(t))) if *t == el),
                "{name}"
            );
        }

        let _ = invoke_entry_point(&mut m, "msExitFullscreen", &el);
        let result = invoke_entry_point(&mut m, "webkitFullscreenElement", &el);
        assert!(matches!(result, Some(EntryPointResult::Target(None))));
    }

    #[test]
    fn always_supported() {
        let mut m = machine();
        let el = TestElement::new("div");
        assert!(FullscreenApi::is_supported(&m));
        for name in SUPPORTED_NAMES {
            let result = invoke_entry_point(&mut m, name, &el);
            assert!(matches!(result, Some(EntryPointResult::Supported(true))));
        }
    }
}
