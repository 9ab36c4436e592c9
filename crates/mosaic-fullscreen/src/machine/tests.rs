use std::cell::RefCell;
use std::rc::Rc;

use mosaic_common::Rect;

use super::*;
use crate::bridge::{HostNotifier, CHANGE_EVENT_NAMES};
use crate::dom::{Element, Priority, StyleProperty};
use crate::errors::NotifyError;
use crate::options::ShimOptions;
use crate::test_dom::{TestDocument, TestElement};

fn machine() -> (FullscreenMachine<TestDocument>, TestDocument) {
    let doc = TestDocument::new();
    (FullscreenMachine::install(doc.clone(), ShimOptions::default()), doc)
}

fn styled_div() -> TestElement {
    TestElement::new("div")
        .with_inline("width", "300px")
        .with_inline("height", "200px")
        .with_inline("background-color", "rgb(255, 0, 0)")
        .with_computed("position", "static")
        .with_computed("top", "auto")
        .with_computed("margin", "4px")
}

struct Recording(Rc<RefCell<Vec<bool>>>);

impl HostNotifier for Recording {
    fn notify_fullscreen(&self, active: bool) -> Result<(), NotifyError> {
        self.0.borrow_mut().push(active);
        Ok(())
    }
}

struct Throwing;

impl HostNotifier for Throwing {
    fn notify_fullscreen(&self, _active: bool) -> Result<(), NotifyError> {
        Err(NotifyError::HookFailed("boom".into()))
    }
}

#[test]
fn install_injects_presentation_stylesheet() {
    let (m, doc) = machine();
    assert_eq!(doc.stylesheets().len(), 1);
    assert!(doc.stylesheets()[0].contains("video:fullscreen"));
    assert_eq!(m.state(), FullscreenState::Idle);
}

#[test]
fn enter_applies_overrides_and_marks_element() {
    let (mut m, _doc) = machine();
    let el = styled_div();

    assert_eq!(m.request_enter(&el), Transition::Entered);
    assert_eq!(m.state(), FullscreenState::Active(&el));
    assert_eq!(
        el.inline("position"),
        Some(("fixed".to_string(), Priority::Important))
    );
    assert_eq!(el.inline("width").map(|(v, _)| v), Some("100vw".into()));
    assert_eq!(el.inline("z-index").map(|(v, _)| v), Some("999999".into()));
    assert_eq!(el.attribute("data-custom-fullscreen"), Some("true".into()));
    assert_eq!(el.inline("object-fit"), None);
}

#[test]
fn enter_on_video_forces_contain_fit() {
    let (mut m, _doc) = machine();
    let video = TestElement::new("video");
    m.request_enter(&video);
    assert_eq!(
        video.inline("object-fit"),
        Some(("contain".to_string(), Priority::Important))
    );
    m.request_exit();
    assert_eq!(video.inline("object-fit"), None);
}

#[test]
fn enter_then_exit_round_trips_every_property() {
    let (mut m, _doc) = machine();
    let el = styled_div().with_inline("transform", "scale(2)");
    let before: Vec<_> = StyleProperty::ALL
        .iter()
        .map(|p| el.computed_style(p.css_name()))
        .collect();

    m.request_enter(&el);
    m.request_exit();

    for (property, prior) in StyleProperty::ALL.iter().zip(before) {
        assert_eq!(
            el.computed_style(property.css_name()),
            prior,
            "property {property}"
        );
    }
    // sentinel values are cleared rather than pinned
    assert_eq!(el.inline("position"), None);
    assert_eq!(el.inline("top"), None);
}

#[test]
fn explicit_width_reverts_exactly() {
    let (mut m, _doc) = machine();
    let el = TestElement::new("div").with_inline("width", "300px");

    m.request_enter(&el);
    assert_eq!(el.inline("width").map(|(v, _)| v), Some("100vw".into()));
    m.request_exit();
    assert_eq!(
        el.inline("width"),
        Some(("300px".to_string(), Priority::Normal))
    );
}

#[test]
fn computed_auto_width_leaves_no_inline_override() {
    let (mut m, _doc) = machine();
    let el = TestElement::new("div").with_computed("width", "auto");

    m.request_enter(&el);
    m.request_exit();
    assert_eq!(el.inline("width"), None);
    assert_eq!(el.inline("position"), None);
}

#[test]
fn second_enter_is_ignored() {
    let (mut m, _doc) = machine();
    let first = TestElement::new("div");
    let second = TestElement::new("div").with_inline("width", "10px");

    assert_eq!(m.request_enter(&first), Transition::Entered);
    assert_eq!(m.request_enter(&second), Transition::Ignored);
    assert_eq!(m.current_target(), Some(&first));
    assert_eq!(second.style_writes(), 0);
    assert_eq!(second.attribute("data-custom-fullscreen"), None);
    assert_eq!(m.snapshot_count(), 1);
}

#[test]
fn reentering_same_element_is_ignored() {
    let (mut m, doc) = machine();
    let el = TestElement::new("div");
    m.request_enter(&el);
    let events = doc.events().len();
    assert_eq!(m.request_enter(&el), Transition::Ignored);
    assert_eq!(doc.events().len(), events);
}

#[test]
fn exit_while_idle_touches_nothing() {
    let (mut m, doc) = machine();
    let body = doc.body_element().unwrap();

    assert_eq!(m.request_exit(), Transition::Ignored);
    assert_eq!(m.state(), FullscreenState::Idle);
    assert_eq!(body.style_writes(), 0);
    assert!(doc.events().is_empty());
}

#[test]
fn status_tracks_session() {
    let (mut m, _doc) = machine();
    let el = TestElement::new("div");
    assert_eq!(m.current_target(), None);
    m.request_enter(&el);
    assert_eq!(m.current_target(), Some(&el));
    assert!(m.is_active());
    m.request_exit();
    assert_eq!(m.current_target(), None);
    assert!(m.session().is_none());
    assert_eq!(m.snapshot_count(), 0);
}

#[test]
fn body_scroll_is_suppressed_while_active() {
    let (mut m, doc) = machine();
    let body = doc.body_element().unwrap();
    let el = TestElement::new("div");

    m.request_enter(&el);
    assert_eq!(
        body.inline("overflow"),
        Some(("hidden".to_string(), Priority::Important))
    );
    assert!(m.session().unwrap().scroll_locked());
    m.request_exit();
    assert_eq!(body.inline("overflow"), None);
}

#[test]
fn missing_body_skips_scroll_lock() {
    let doc = TestDocument::without_body();
    let mut m = FullscreenMachine::install(doc, ShimOptions::default());
    let el = TestElement::new("div");

    assert_eq!(m.request_enter(&el), Transition::Entered);
    assert!(!m.session().unwrap().scroll_locked());
    assert_eq!(m.request_exit(), Transition::Exited);
}

#[test]
fn exit_removes_indicator_attribute() {
    let (mut m, _doc) = machine();
    let el = TestElement::new("div");
    m.request_enter(&el);
    m.request_exit();
    assert_eq!(el.attribute("data-custom-fullscreen"), None);
}

#[test]
fn transitions_dispatch_change_events_on_element_and_document() {
    let (mut m, doc) = machine();
    let el = TestElement::new("div");

    m.request_enter(&el);
    m.request_exit();

    assert_eq!(el.events().len(), CHANGE_EVENT_NAMES.len() * 2);
    assert_eq!(doc.events().len(), CHANGE_EVENT_NAMES.len() * 2);
    assert!(doc.events().iter().all(|(_, bubbles)| *bubbles));
}

#[test]
fn host_is_notified_on_each_transition() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let doc = TestDocument::new();
    let mut m = FullscreenMachine::install(doc, ShimOptions::default())
        .with_notifier(Box::new(Recording(Rc::clone(&calls))));
    let el = TestElement::new("div");

    m.request_enter(&el);
    m.request_enter(&el);
    m.request_exit();
    m.request_exit();
    assert_eq!(*calls.borrow(), vec![true, false]);
}

#[test]
fn failing_host_hook_does_not_block_transition() {
    let doc = TestDocument::new();
    let mut m = FullscreenMachine::install(doc, ShimOptions::default())
        .with_notifier(Box::new(Throwing));
    let el = TestElement::new("div");

    assert_eq!(m.request_enter(&el), Transition::Entered);
    assert_eq!(m.request_exit(), Transition::Exited);
}

#[test]
fn escape_exits_once_and_stops_the_event() {
    let (mut m, doc) = machine();
    let el = TestElement::new("div");
    m.request_enter(&el);
    let events_after_enter = doc.events().len();

    let mut key = KeyEvent::new("Escape");
    assert_eq!(m.handle_key(&mut key), InputOutcome::Consumed);
    assert!(key.propagation_stopped());
    assert!(key.default_prevented());
    assert_eq!(m.state(), FullscreenState::Idle);
    assert_eq!(doc.events().len() - events_after_enter, CHANGE_EVENT_NAMES.len());

    let mut again = KeyEvent::new("Escape");
    assert_eq!(m.handle_key(&mut again), InputOutcome::Ignored);
    assert!(!again.propagation_stopped());
}

#[test]
fn other_keys_pass_through() {
    let (mut m, _doc) = machine();
    m.request_enter(&TestElement::new("div"));
    let mut key = KeyEvent::new("f");
    assert_eq!(m.handle_key(&mut key), InputOutcome::Ignored);
    assert!(!key.propagation_stopped());
    assert!(m.is_active());
}

#[test]
fn escape_respects_option() {
    let doc = TestDocument::new();
    let options = ShimOptions {
        exit_on_escape: false,
        ..Default::default()
    };
    let mut m = FullscreenMachine::install(doc, options);
    m.request_enter(&TestElement::new("div"));
    assert_eq!(m.handle_key(&mut KeyEvent::new("Escape")), InputOutcome::Ignored);
    assert!(m.is_active());
}

#[test]
fn click_inside_target_keeps_fullscreen() {
    let (mut m, _doc) = machine();
    let player = TestElement::new("div").with_bounds(Rect::new(0.0, 0.0, 800.0, 600.0));
    let button = TestElement::new("button");
    player.append(&button);
    m.request_enter(&player);

    assert_eq!(
        m.handle_pointer(&PointerEvent::on(button, 10.0, 10.0)),
        InputOutcome::Ignored
    );
    assert_eq!(
        m.handle_pointer(&PointerEvent::at(400.0, 300.0)),
        InputOutcome::Ignored
    );
    assert!(m.is_active());
}

#[test]
fn click_outside_target_exits_once() {
    let (mut m, doc) = machine();
    let player = TestElement::new("div").with_bounds(Rect::new(0.0, 0.0, 800.0, 600.0));
    let elsewhere = TestElement::new("div");
    m.request_enter(&player);
    let events_after_enter = doc.events().len();

    assert_eq!(
        m.handle_pointer(&PointerEvent::on(elsewhere.clone(), 5.0, 5.0)),
        InputOutcome::Consumed
    );
    assert_eq!(
        m.handle_pointer(&PointerEvent::on(elsewhere, 5.0, 5.0)),
        InputOutcome::Ignored
    );
    assert_eq!(doc.events().len() - events_after_enter, CHANGE_EVENT_NAMES.len());
}

#[test]
fn click_outside_bounds_without_target_exits() {
    let (mut m, _doc) = machine();
    let player = TestElement::new("div").with_bounds(Rect::new(0.0, 0.0, 800.0, 600.0));
    m.request_enter(&player);
    assert_eq!(
        m.handle_pointer(&PointerEvent::at(900.0, 10.0)),
        InputOutcome::Consumed
    );
    assert!(!m.is_active());
}

#[test]
fn pointer_while_idle_is_ignored() {
    let (mut m, _doc) = machine();
    assert_eq!(
        m.handle_pointer(&PointerEvent::at(1.0, 1.0)),
        InputOutcome::Ignored
    );
}

#[test]
fn custom_options_flow_into_overrides() {
    let doc = TestDocument::new();
    let options = ShimOptions {
        z_index: 42,
        background: "#101010".into(),
        indicator_attribute: "data-pane-fullscreen".into(),
        ..Default::default()
    };
    let mut m = FullscreenMachine::install(doc, options);
    let el = TestElement::new("div");
    m.request_enter(&el);
    assert_eq!(el.inline("z-index").map(|(v, _)| v), Some("42".into()));
    assert_eq!(
        el.inline("background-color").map(|(v, _)| v),
        Some("#101010".into())
    );
    assert_eq!(el.attribute("data-pane-fullscreen"), Some("true".into()));
}

#[test]
fn unsafe_options_fall_back_to_defaults() {
    let doc = TestDocument::new();
    let options = ShimOptions {
        background: "red; }".into(),
        ..Default::default()
    };
    let m = FullscreenMachine::install(doc, options);
    assert_eq!(m.options().background, "#000000");
}
