use mosaic_common::PaneId;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pane {
    pub id: PaneId,
    /// Last page title reported by the pane's webview.
    pub title: String,
    /// Address shown in the pane's URL bar.
    pub url: String,
}

impl Pane {
    pub fn new(id: PaneId, url: impl Into<String>) -> Self {
        Self {
            id,
            title: String::new(),
            url: url.into(),
        }
    }
}
