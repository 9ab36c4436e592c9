//! The fixed style set that turns an element into a pane-filling overlay.

use crate::dom::{Element, Priority, StyleProperty};
use crate::options::ShimOptions;

/// Body property used to stop the page scrolling underneath the overlay.
pub const SCROLL_PROPERTY: &str = "overflow";

/// Declarations written on enter, all with `!important`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideStyle {
    z_index: u32,
    background: String,
}

impl OverrideStyle {
    pub fn from_options(options: &ShimOptions) -> Self {
        Self {
            z_index: options.z_index,
            background: options.background.clone(),
        }
    }

    /// Declarations applied to every fullscreen element.
    pub fn declarations(&self) -> Vec<(StyleProperty, String)> {
        vec![
            (StyleProperty::Position, "fixed".into()),
            (StyleProperty::Top, "0".into()),
            (StyleProperty::Left, "0".into()),
            (StyleProperty::Width, "100vw".into()),
            (StyleProperty::Height, "100vh".into()),
            (StyleProperty::ZIndex, self.z_index.to_string()),
            (StyleProperty::BackgroundColor, self.background.clone()),
            (StyleProperty::Margin, "0".into()),
            (StyleProperty::Padding, "0".into()),
            (StyleProperty::Border, "0".into()),
            (StyleProperty::BorderRadius, "0".into()),
        ]
    }

    /// Extra declarations for video-like elements.
    pub fn media_declarations(&self) -> Vec<(StyleProperty, String)> {
        vec![(StyleProperty::ObjectFit, "contain".into())]
    }

    pub fn apply<E: Element>(&self, element: &E) {
        for (property, value) in self.declarations() {
            element.set_inline_style(property.css_name(), &value, Priority::Important);
        }
        if element.is_media() {
            for (property, value) in self.media_declarations() {
                element.set_inline_style(property.css_name(), &value, Priority::Important);
            }
        }
    }
}

/// Inline `overflow` the body had before scrolling was suppressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollLock {
    prior: Option<(String, Priority)>,
}

impl ScrollLock {
    /// Hide body overflow, remembering any inline value it replaces.
    pub fn engage<E: Element>(body: &E) -> Self {
        let prior = body
            .inline_style(SCROLL_PROPERTY)
            .filter(|v| !v.is_empty())
            .map(|v| (v, body.inline_priority(SCROLL_PROPERTY)));
        body.set_inline_style(SCROLL_PROPERTY, "hidden", Priority::Important);
        Self { prior }
    }

    /// Put the body's overflow back the way `engage` found it.
    pub fn release<E: Element>(self, body: &E) {
        match self.prior {
            Some((value, priority)) => body.set_inline_style(SCROLL_PROPERTY, &value, priority),
            None => body.remove_inline_style(SCROLL_PROPERTY),
        }
    }
}
