//! Style snapshot store: capture an element's visual state before
//! fullscreen and put it back afterwards.

use std::collections::{BTreeMap, HashMap};

use tracing::trace;

use crate::dom::{Element, Priority, StyleProperty};

/// Values the layout engine reports for "nothing was set". Restoring one
/// of these would pin a default as an inline override, so they clear the
/// property instead.
pub const NOOP_SENTINELS: &[&str] = &["", "auto", "static"];

/// Whether `value` is one of the [`NOOP_SENTINELS`].
pub fn is_noop_sentinel(value: &str) -> bool {
    let value = value.trim();
    NOOP_SENTINELS.iter().any(|s| s.eq_ignore_ascii_case(value))
}

/// Pre-fullscreen values of the snapshotted properties, each with the
/// priority it was declared with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSnapshot {
    values: BTreeMap<StyleProperty, (String, Priority)>,
}

impl StyleSnapshot {
    /// Read every property from `element`: the inline value and its
    /// priority when one is set, else the resolved value at normal
    /// priority. Properties with neither are omitted.
    pub fn capture<E: Element>(element: &E) -> Self {
        let mut values = BTreeMap::new();
        for property in StyleProperty::ALL {
            let name = property.css_name();
            let value = match element.inline_style(name).filter(|v| !v.is_empty()) {
                Some(inline) => Some((inline, element.inline_priority(name))),
                None => element
                    .computed_style(name)
                    .map(|computed| (computed, Priority::Normal)),
            };
            if let Some(value) = value {
                values.insert(property, value);
            }
        }
        Self { values }
    }

    /// Write the snapshot back onto `element`.
    ///
    /// Meaningful values become inline overrides again, at the priority
    /// they were captured with. Sentinels and omitted properties have
    /// their inline override removed so the stylesheet takes over.
    pub fn restore<E: Element>(&self, element: &E) {
        for property in StyleProperty::ALL {
            let name = property.css_name();
            match self.values.get(&property) {
                Some((value, priority)) if !is_noop_sentinel(value) => {
                    element.set_inline_style(name, value, *priority);
                }
                _ => element.remove_inline_style(name),
            }
        }
        trace!(element = ?element, restored = self.values.len(), "style snapshot restored");
    }

    pub fn get(&self, property: StyleProperty) -> Option<&str> {
        self.values.get(&property).map(|(v, _)| v.as_str())
    }

    pub fn priority(&self, property: StyleProperty) -> Option<Priority> {
        self.values.get(&property).map(|(_, p)| *p)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &str)> {
        self.values.iter().map(|(p, (v, _))| (*p, v.as_str()))
    }
}

/// Element-keyed snapshot storage.
///
/// Only one element is fullscreen at a time, but keying by element keeps
/// a stale snapshot from ever being applied to a different node.
#[derive(Debug)]
pub struct SnapshotStore<E: Element> {
    snapshots: HashMap<E, StyleSnapshot>,
}

impl<E: Element> SnapshotStore<E> {
    pub fn new() -> Self {
        Self {
            snapshots: HashMap::new(),
        }
    }

    /// Capture `element` and store the snapshot, replacing any older one.
    pub fn save(&mut self, element: &E) -> &StyleSnapshot {
        let snapshot = StyleSnapshot::capture(element);
        self.snapshots.insert(element.clone(), snapshot);
        &self.snapshots[element]
    }

    pub fn get(&self, element: &E) -> Option<&StyleSnapshot> {
        self.snapshots.get(element)
    }

    /// Remove and return the snapshot for `element`.
    pub fn take(&mut self, element: &E) -> Option<StyleSnapshot> {
        self.snapshots.remove(element)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl<E: Element> Default for SnapshotStore<E> {
    fn default() -> Self {
        Self::new()
    }
}
