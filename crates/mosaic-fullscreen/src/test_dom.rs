//! A minimal in-memory DOM for exercising the shim without a webview.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use mosaic_common::Rect;

use crate::dom::{Document, Element, Priority};

struct ElementState {
    tag: String,
    inline: RefCell<BTreeMap<String, (String, Priority)>>,
    stylesheet: RefCell<HashMap<String, String>>,
    attributes: RefCell<HashMap<String, String>>,
    children: RefCell<Vec<TestElement>>,
    bounds: Cell<Rect>,
    events: RefCell<Vec<(String, bool)>>,
    style_writes: Cell<usize>,
}

#[derive(Clone)]
pub struct TestElement(Rc<ElementState>);

impl TestElement {
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(ElementState {
            tag: tag.to_ascii_uppercase(),
            inline: RefCell::new(BTreeMap::new()),
            stylesheet: RefCell::new(HashMap::new()),
            attributes: RefCell::new(HashMap::new()),
            children: RefCell::new(Vec::new()),
            bounds: Cell::new(Rect::default()),
            events: RefCell::new(Vec::new()),
            style_writes: Cell::new(0),
        }))
    }

    /// Value the "stylesheet" resolves for a property when no inline value is set.
    pub fn with_computed(self, property: &str, value: &str) -> Self {
        self.0
            .stylesheet
            .borrow_mut()
            .insert(property.to_string(), value.to_string());
        self
    }

    pub fn with_inline(self, property: &str, value: &str) -> Self {
        self.with_inline_priority(property, value, Priority::Normal)
    }

    pub fn with_inline_priority(self, property: &str, value: &str, priority: Priority) -> Self {
        self.0
            .inline
            .borrow_mut()
            .insert(property.to_string(), (value.to_string(), priority));
        self
    }

    pub fn with_bounds(self, bounds: Rect) -> Self {
        self.0.bounds.set(bounds);
        self
    }

    pub fn append(&self, child: &TestElement) {
        self.0.children.borrow_mut().push(child.clone());
    }

    pub fn inline(&self, property: &str) -> Option<(String, Priority)> {
        self.0.inline.borrow().get(property).cloned()
    }

    pub fn events(&self) -> Vec<(String, bool)> {
        self.0.events.borrow().clone()
    }

    /// Number of inline style mutations performed so far.
    pub fn style_writes(&self) -> usize {
        self.0.style_writes.get()
    }
}

impl PartialEq for TestElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for TestElement {}

impl Hash for TestElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Rc::as_ptr(&self.0) as usize).hash(state);
    }
}

impl fmt::Debug for TestElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}@{:p}>", self.0.tag, Rc::as_ptr(&self.0))
    }
}

impl Element for TestElement {
    fn tag_name(&self) -> String {
        self.0.tag.clone()
    }

    fn inline_style(&self, property: &str) -> Option<String> {
        self.0
            .inline
            .borrow()
            .get(property)
            .map(|(value, _)| value.clone())
    }

    fn computed_style(&self, property: &str) -> Option<String> {
        self.inline_style(property)
            .filter(|v| !v.is_empty())
            .or_else(|| self.0.stylesheet.borrow().get(property).cloned())
    }

    fn inline_priority(&self, property: &str) -> Priority {
        self.0
            .inline
            .borrow()
            .get(property)
            .map(|(_, priority)| *priority)
            .unwrap_or_default()
    }

    fn set_inline_style(&self, property: &str, value: &str, priority: Priority) {
        self.0.style_writes.set(self.0.style_writes.get() + 1);
        self.0
            .inline
            .borrow_mut()
            .insert(property.to_string(), (value.to_string(), priority));
    }

    fn remove_inline_style(&self, property: &str) {
        self.0.style_writes.set(self.0.style_writes.get() + 1);
        self.0.inline.borrow_mut().remove(property);
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.attributes.borrow().get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.0
            .attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&self, name: &str) {
        self.0.attributes.borrow_mut().remove(name);
    }

    fn contains(&self, other: &Self) -> bool {
        self == other || self.0.children.borrow().iter().any(|c| c.contains(other))
    }

    fn bounds(&self) -> Rect {
        self.0.bounds.get()
    }

    fn dispatch_event(&self, name: &str, bubbles: bool) {
        self.0.events.borrow_mut().push((name.to_string(), bubbles));
    }
}

struct DocumentState {
    body: Option<TestElement>,
    events: RefCell<Vec<(String, bool)>>,
    stylesheets: RefCell<Vec<String>>,
}

#[derive(Clone)]
pub struct TestDocument(Rc<DocumentState>);

impl TestDocument {
    pub fn new() -> Self {
        Self(Rc::new(DocumentState {
            body: Some(TestElement::new("body")),
            events: RefCell::new(Vec::new()),
            stylesheets: RefCell::new(Vec::new()),
        }))
    }

    /// A document whose body has not been parsed yet.
    pub fn without_body() -> Self {
        Self(Rc::new(DocumentState {
            body: None,
            events: RefCell::new(Vec::new()),
            stylesheets: RefCell::new(Vec::new()),
        }))
    }

    pub fn body_element(&self) -> Option<TestElement> {
        self.0.body.clone()
    }

    pub fn events(&self) -> Vec<(String, bool)> {
        self.0.events.borrow().clone()
    }

    pub fn stylesheets(&self) -> Vec<String> {
        self.0.stylesheets.borrow().clone()
    }
}

impl Document for TestDocument {
    type Element = TestElement;

    fn body(&self) -> Option<TestElement> {
        self.0.body.clone()
    }

    fn dispatch_event(&self, name: &str, bubbles: bool) {
        self.0.events.borrow_mut().push((name.to_string(), bubbles));
    }

    fn inject_stylesheet(&self, css: &str) {
        self.0.stylesheets.borrow_mut().push(css.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inline_value_falls_through_to_stylesheet() {
        let el = TestElement::new("div")
            .with_inline("height", "")
            .with_computed("height", "auto");
        assert_eq!(el.inline_style("height").as_deref(), Some(""));
        assert_eq!(el.computed_style("height").as_deref(), Some("auto"));
    }

    #[test]
    fn set_inline_value_wins_over_stylesheet() {
        let el = TestElement::new("div")
            .with_inline("width", "300px")
            .with_computed("width", "640px");
        assert_eq!(el.computed_style("width").as_deref(), Some("300px"));
    }
}
