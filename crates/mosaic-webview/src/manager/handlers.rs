use std::sync::{Arc, Mutex};

use tracing::{debug, info, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};
use crate::navigation::is_navigation_allowed;

use super::types::WebViewRole;
use super::WebViewManager;

fn push(events: &Mutex<Vec<WebViewEvent>>, event: WebViewEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        pid: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(
                    pane_id = pid,
                    body_len = body.len(),
                    "IPC message rejected: invalid JSON"
                );
                return;
            }

            debug!(pane_id = pid, body_len = body.len(), "IPC message from JS");
            push(&events, WebViewEvent::IpcMessage { pane_id: pid, body });
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        pid: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(pane_id = pid, ?state, url = %url, "page load");
            push(
                &events,
                WebViewEvent::PageLoad {
                    pane_id: pid,
                    state,
                    url,
                },
            );
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        pid: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(pane_id = pid, title = %title, "title changed");
            push(
                &events,
                WebViewEvent::TitleChanged {
                    pane_id: pid,
                    title,
                },
            );
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        pid: u32,
        role: WebViewRole,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if !is_navigation_allowed(role, &url) {
                warn!(pane_id = pid, ?role, url = %url, "navigation blocked");
                return false;
            }

            debug!(pane_id = pid, url = %url, "navigation allowed");
            push(&events, WebViewEvent::NavigationRequested { pane_id: pid, url });
            true
        })
    }

    /// Popups never get their own native window; the host decides what
    /// to do with the URL.
    pub(super) fn attach_new_window_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        pid: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_new_window_req_handler(move |url| {
            info!(pane_id = pid, url = %url, "popup intercepted");
            push(&events, WebViewEvent::NewWindowRequested { pane_id: pid, url });
            false
        })
    }
}
