//! The slice of the DOM the fullscreen shim needs.
//!
//! Handles follow DOM semantics: they are cheap to clone, compare by
//! identity, and mutate through `&self`.

use std::fmt;
use std::hash::Hash;

use mosaic_common::Rect;

/// Visual properties captured before fullscreen and restored after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleProperty {
    Position,
    Top,
    Left,
    Width,
    Height,
    ZIndex,
    BackgroundColor,
    Margin,
    Padding,
    Border,
    BorderRadius,
    Transform,
    ObjectFit,
}

impl StyleProperty {
    /// Every snapshotted property, in capture order.
    pub const ALL: [StyleProperty; 13] = [
        StyleProperty::Position,
        StyleProperty::Top,
        StyleProperty::Left,
        StyleProperty::Width,
        StyleProperty::Height,
        StyleProperty::ZIndex,
        StyleProperty::BackgroundColor,
        StyleProperty::Margin,
        StyleProperty::Padding,
        StyleProperty::Border,
        StyleProperty::BorderRadius,
        StyleProperty::Transform,
        StyleProperty::ObjectFit,
    ];

    /// The CSS property name as accepted by `style.setProperty`.
    pub fn css_name(self) -> &'static str {
        match self {
            StyleProperty::Position => "position",
            StyleProperty::Top => "top",
            StyleProperty::Left => "left",
            StyleProperty::Width => "width",
            StyleProperty::Height => "height",
            StyleProperty::ZIndex => "z-index",
            StyleProperty::BackgroundColor => "background-color",
            StyleProperty::Margin => "margin",
            StyleProperty::Padding => "padding",
            StyleProperty::Border => "border",
            StyleProperty::BorderRadius => "border-radius",
            StyleProperty::Transform => "transform",
            StyleProperty::ObjectFit => "object-fit",
        }
    }

    pub fn from_css_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.css_name() == name)
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

/// Declaration priority for inline style writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    #[default]
    Normal,
    Important,
}

/// Tag names treated as video-like for `object-fit` handling.
pub const MEDIA_TAGS: &[&str] = &["VIDEO"];

/// A handle to one element in a pane's document.
pub trait Element: Clone + Eq + Hash + fmt::Debug {
    /// Upper-case tag name, e.g. `VIDEO`.
    fn tag_name(&self) -> String;

    /// Inline (`style` attribute) value for a CSS property, if set.
    fn inline_style(&self, property: &str) -> Option<String>;

    /// Resolved value for a CSS property, if the engine can produce one.
    fn computed_style(&self, property: &str) -> Option<String>;

    /// Inline priority of a CSS property. Only meaningful when set.
    fn inline_priority(&self, property: &str) -> Priority;

    fn set_inline_style(&self, property: &str, value: &str, priority: Priority);

    fn remove_inline_style(&self, property: &str);

    fn attribute(&self, name: &str) -> Option<String>;

    fn set_attribute(&self, name: &str, value: &str);

    fn remove_attribute(&self, name: &str);

    /// Inclusive descendant check: an element contains itself.
    fn contains(&self, other: &Self) -> bool;

    /// Layout box in viewport coordinates.
    fn bounds(&self) -> Rect;

    /// Dispatch a synthetic event with the given name.
    fn dispatch_event(&self, name: &str, bubbles: bool);

    /// Whether the element gets video-specific fit handling.
    fn is_media(&self) -> bool {
        let tag = self.tag_name();
        MEDIA_TAGS.iter().any(|m| m.eq_ignore_ascii_case(&tag))
    }
}

/// The document of one content pane.
pub trait Document {
    type Element: Element;

    /// The `<body>` element, absent while the document is still parsing.
    fn body(&self) -> Option<Self::Element>;

    fn dispatch_event(&self, name: &str, bubbles: bool);

    /// Append a `<style>` block with the given text.
    fn inject_stylesheet(&self, css: &str);
}
