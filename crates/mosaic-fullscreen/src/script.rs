//! JavaScript adapter that installs the shim inside a live page.
//!
//! The script carries no tables of its own: property lists, sentinels,
//! alias names, override values and the stylesheet are serialized from
//! this crate into a single config object, so the page behaves exactly
//! like [`FullscreenMachine`](crate::machine::FullscreenMachine).

use serde::Serialize;

use crate::api::{
    ACTIVE_NAMES, CURRENT_TARGET_NAMES, MEDIA_EXIT_NAMES, MEDIA_REQUEST_NAMES, REQUEST_ENTER_NAMES,
    REQUEST_EXIT_NAMES, SUPPORTED_NAMES,
};
use crate::bridge::{presentation_stylesheet, CHANGE_EVENT_NAMES, HOST_HOOK_NAME};
use crate::dom::{StyleProperty, MEDIA_TAGS};
use crate::errors::ShimError;
use crate::options::ShimOptions;
use crate::overrides::{OverrideStyle, SCROLL_PROPERTY};
use crate::style::NOOP_SENTINELS;

const CONFIG_PLACEHOLDER: &str = "__MOSAIC_SHIM_CONFIG__";

const SHIM_TEMPLATE: &str = r#"
(function() {
    if (window.__mosaicFullscreen) {
        return;
    }
    var cfg = __MOSAIC_SHIM_CONFIG__;
    var state = { target: null, snapshots: new Map(), scroll: null };

    function isSentinel(value) {
        var v = value == null ? '' : String(value).trim().toLowerCase();
        return cfg.sentinels.indexOf(v) !== -1;
    }

    function isMedia(el) {
        return cfg.mediaTags.indexOf(String(el.tagName).toUpperCase()) !== -1;
    }

    function capture(el) {
        var computed = null;
        try {
            computed = window.getComputedStyle(el);
        } catch (e) {}
        var snapshot = {};
        cfg.properties.forEach(function(p) {
            var v = el.style.getPropertyValue(p);
            var priority = v ? el.style.getPropertyPriority(p) : '';
            if (!v && computed) {
                v = computed.getPropertyValue(p);
            }
            if (v) {
                snapshot[p] = { value: v, priority: priority };
            }
        });
        return snapshot;
    }

    function restore(el, snapshot) {
        cfg.properties.forEach(function(p) {
            var v = snapshot[p];
            if (v !== undefined && !isSentinel(v.value)) {
                el.style.setProperty(p, v.value, v.priority);
            } else {
                el.style.removeProperty(p);
            }
        });
    }

    function notifyHost(active) {
        try {
            var hook = window.mosaic && window.mosaic[cfg.hostHook];
            if (typeof hook !== 'function') {
                throw new Error('host hook missing');
            }
            hook(active);
        } catch (e) {
            console.warn('[mosaic] could not notify host of fullscreen state:', e);
        }
    }

    function emit(el, active) {
        cfg.changeEvents.forEach(function(name) {
            el.dispatchEvent(new Event(name, { bubbles: true }));
            document.dispatchEvent(new Event(name, { bubbles: true }));
        });
        notifyHost(active);
    }

    function enter(el) {
        if (state.target || !(el instanceof Element)) {
            return;
        }
        state.snapshots.set(el, capture(el));
        cfg.overrides.forEach(function(d) {
            el.style.setProperty(d[0], d[1], 'important');
        });
        if (isMedia(el)) {
            cfg.mediaOverrides.forEach(function(d) {
                el.style.setProperty(d[0], d[1], 'important');
            });
        }
        var body = document.body;
        if (body) {
            state.scroll = {
                value: body.style.getPropertyValue(cfg.scrollProperty),
                priority: body.style.getPropertyPriority(cfg.scrollProperty)
            };
            body.style.setProperty(cfg.scrollProperty, 'hidden', 'important');
        }
        state.target = el;
        el.setAttribute(cfg.attribute, 'true');
        emit(el, true);
    }

    function exit() {
        var el = state.target;
        if (!el) {
            return;
        }
        var snapshot = state.snapshots.get(el);
        if (snapshot) {
            restore(el, snapshot);
            state.snapshots.delete(el);
        }
        var body = document.body;
        if (state.scroll && body) {
            if (state.scroll.value) {
                body.style.setProperty(cfg.scrollProperty, state.scroll.value, state.scroll.priority);
            } else {
                body.style.removeProperty(cfg.scrollProperty);
            }
        }
        state.scroll = null;
        el.removeAttribute(cfg.attribute);
        state.target = null;
        emit(el, false);
    }

    function requestEnter() {
        enter(this);
        return Promise.resolve();
    }

    function requestExit() {
        exit();
        return Promise.resolve();
    }

    function currentTarget() {
        return state.target;
    }

    function isActive() {
        return state.target !== null;
    }

    function supported() {
        return true;
    }

    function overrideMethods(proto, names, fn) {
        names.forEach(function(name, i) {
            if (i === 0 || typeof proto[name] === 'function') {
                proto[name] = fn;
            }
        });
    }

    function overridePresent(proto, names, fn) {
        names.forEach(function(name) {
            if (typeof proto[name] === 'function') {
                proto[name] = fn;
            }
        });
    }

    function overrideGetters(target, names, getter) {
        names.forEach(function(name, i) {
            if (i === 0 || name in target) {
                try {
                    Object.defineProperty(target, name, { get: getter, configurable: true });
                } catch (e) {}
            }
        });
    }

    overrideMethods(Element.prototype, cfg.requestNames, requestEnter);
    overrideMethods(Document.prototype, cfg.exitNames, requestExit);
    overrideGetters(document, cfg.statusNames, currentTarget);
    overrideGetters(document, cfg.activeNames, isActive);
    overrideGetters(document, cfg.supportedNames, supported);
    if (typeof HTMLVideoElement !== 'undefined') {
        overridePresent(HTMLVideoElement.prototype, cfg.mediaRequestNames, requestEnter);
        overridePresent(HTMLVideoElement.prototype, cfg.mediaExitNames, requestExit);
    }

    if (cfg.exitOnEscape) {
        window.addEventListener('keydown', function(e) {
            if (e.key === 'Escape' && state.target) {
                e.preventDefault();
                e.stopPropagation();
                exit();
            }
        }, true);
    }

    if (cfg.exitOnOutsideClick) {
        document.addEventListener('click', function(e) {
            if (state.target && !state.target.contains(e.target)) {
                exit();
            }
        }, true);
    }

    function injectStylesheet() {
        var root = document.head || document.documentElement;
        if (!root) {
            return false;
        }
        var style = document.createElement('style');
        style.setAttribute('data-mosaic-fullscreen', '');
        style.textContent = cfg.stylesheet;
        root.appendChild(style);
        return true;
    }

    if (!injectStylesheet()) {
        document.addEventListener('DOMContentLoaded', injectStylesheet, { once: true });
    }

    window.__mosaicFullscreen = {
        current: currentTarget,
        exit: exit
    };
})();
"#;

/// Everything the page script needs, in the shape it reads it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScriptConfig<'a> {
    properties: Vec<&'static str>,
    sentinels: &'static [&'static str],
    overrides: Vec<(&'static str, String)>,
    media_overrides: Vec<(&'static str, String)>,
    media_tags: &'static [&'static str],
    scroll_property: &'static str,
    request_names: &'static [&'static str],
    exit_names: &'static [&'static str],
    media_request_names: &'static [&'static str],
    media_exit_names: &'static [&'static str],
    status_names: &'static [&'static str],
    active_names: &'static [&'static str],
    supported_names: &'static [&'static str],
    change_events: &'static [&'static str],
    attribute: &'a str,
    host_hook: &'static str,
    exit_on_escape: bool,
    exit_on_outside_click: bool,
    stylesheet: String,
}

impl<'a> ScriptConfig<'a> {
    fn new(options: &'a ShimOptions) -> Self {
        let style = OverrideStyle::from_options(options);
        let css_pairs = |decls: Vec<(StyleProperty, String)>| {
            decls
                .into_iter()
                .map(|(p, v)| (p.css_name(), v))
                .collect::<Vec<_>>()
        };

        Self {
            properties: StyleProperty::ALL.iter().map(|p| p.css_name()).collect(),
            sentinels: NOOP_SENTINELS,
            overrides: css_pairs(style.declarations()),
            media_overrides: css_pairs(style.media_declarations()),
            media_tags: MEDIA_TAGS,
            scroll_property: SCROLL_PROPERTY,
            request_names: REQUEST_ENTER_NAMES,
            exit_names: REQUEST_EXIT_NAMES,
            media_request_names: MEDIA_REQUEST_NAMES,
            media_exit_names: MEDIA_EXIT_NAMES,
            status_names: CURRENT_TARGET_NAMES,
            active_names: ACTIVE_NAMES,
            supported_names: SUPPORTED_NAMES,
            change_events: CHANGE_EVENT_NAMES,
            attribute: &options.indicator_attribute,
            host_hook: HOST_HOOK_NAME,
            exit_on_escape: options.exit_on_escape,
            exit_on_outside_click: options.exit_on_outside_click,
            stylesheet: presentation_stylesheet(options),
        }
    }
}

/// Render the page-side shim for `options`.
///
/// Meant to run as a webview initialization script, before page scripts.
/// Re-running it in the same page is a no-op.
pub fn render_shim_script(options: &ShimOptions) -> Result<String, ShimError> {
    let options = options.sanitized();
    let config = serde_json::to_string(&ScriptConfig::new(&options))?;
    Ok(SHIM_TEMPLATE.replace(CONFIG_PLACEHOLDER, &config))
}
