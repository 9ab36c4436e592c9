use std::borrow::Cow;
use std::sync::Arc;

use tracing::{debug, warn};
use wry::http::Response;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::content::{request_path, ContentProvider};
use crate::ipc::IPC_INIT_SCRIPT;
use crate::navigation::CUSTOM_SCHEME;

use super::handle::WebViewHandle;
use super::types::{WebViewConfig, WebViewRole};
use super::WebViewManager;

type ProtocolResponse = Response<Cow<'static, [u8]>>;

impl WebViewManager {
    /// Create a new WebView as a child of the given window.
    ///
    /// The `window` must implement `raw_window_handle::HasWindowHandle`.
    /// The WebView is positioned at `bounds` within the parent window.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        pane_id: u32,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let events = Arc::clone(&self.events);
        let pid = pane_id;
        let role = config.role;

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_autoplay(config.autoplay)
            .with_focused(false);

        if let Some(color) = config.background {
            builder = builder.with_background_color(color.to_tuple());
        }

        // The IPC bridge goes first so later scripts can rely on it.
        let main_only = !config.subframes;
        builder = builder.with_initialization_script_for_main_only(IPC_INIT_SCRIPT, main_only);
        for script in &config.init_scripts {
            builder = builder.with_initialization_script_for_main_only(script, main_only);
        }

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&events), pid);
        builder = Self::attach_page_load_handler(builder, Arc::clone(&events), pid);
        builder = Self::attach_title_handler(builder, Arc::clone(&events), pid);
        builder = Self::attach_navigation_handler(builder, Arc::clone(&events), pid, role);
        if role == WebViewRole::Content {
            builder = Self::attach_new_window_handler(builder, Arc::clone(&events), pid);
        }
        builder = self.attach_custom_protocol(builder);

        builder = builder.with_url(&config.url);

        let webview = builder.build_as_child(window)?;

        debug!(pane_id, ?role, url = %config.url, "WebView created");

        Ok(WebViewHandle {
            webview,
            pane_id,
            role,
            current_url: config.url,
            current_title: String::new(),
            visible: true,
        })
    }

    /// Set the content provider for serving bundled assets via `mosaic://`.
    pub fn set_content_provider(&mut self, provider: ContentProvider) {
        self.content_provider = Some(Arc::new(provider));
    }

    fn attach_custom_protocol<'a>(&self, mut builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        if let Some(provider) = &self.content_provider {
            let cp = Arc::clone(provider);
            builder = builder.with_custom_protocol(CUSTOM_SCHEME.to_string(), move |_wv_id, request| {
                let uri = request.uri().to_string();
                let path = request_path(&uri);

                match cp.resolve(path) {
                    Some((mime, data)) => asset_response(mime.as_ref(), data.into_owned()),
                    None => {
                        warn!(path = %path, "custom protocol: asset not found");
                        not_found_response()
                    }
                }
            });
        }
        builder
    }
}

fn asset_response(mime: &str, data: Vec<u8>) -> ProtocolResponse {
    Response::builder()
        .status(200)
        .header("Content-Type", mime)
        .header("Access-Control-Allow-Origin", "mosaic://localhost")
        .body(Cow::from(data))
        .unwrap_or_else(|e| {
            warn!(error = %e, "custom protocol: bad response headers");
            not_found_response()
        })
}

fn not_found_response() -> ProtocolResponse {
    let mut response = Response::new(Cow::from(b"Not Found".to_vec()));
    *response.status_mut() = wry::http::StatusCode::NOT_FOUND;
    response
}
