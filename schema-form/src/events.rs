//! Listener registration and lookup, keyed by node and event kind.

use std::collections::HashMap;

use crate::dom::NodeId;

/// The events a page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The control's value changed through user input.
    Input,
    /// A validity check found the control invalid.
    Invalid,
    /// The control lost focus.
    Blur,
    /// The form was submitted.
    Submit,
}

/// What to do when an event fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listener {
    /// Refresh the custom validity message of the rendered field at this index.
    LiveInput { field: usize },
    /// Suppress the native bubble and show an accessible inline alert.
    InlineAlert,
    /// Validate the control and report to the status area.
    ValidateOnBlur,
    /// Validate everything and post the payload.
    SubmitForm,
}

/// Listeners registered on a page, in registration order per node and kind.
#[derive(Debug, Clone, Default)]
pub struct DispatchTable {
    listeners: HashMap<(NodeId, EventKind), Vec<Listener>>,
}

impl DispatchTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, node: NodeId, kind: EventKind, listener: Listener) {
        self.listeners.entry((node, kind)).or_default().push(listener);
    }

    /// Listeners for a node and event kind (a copy, so handlers may mutate the table).
    pub fn listeners(&self, node: NodeId, kind: EventKind) -> Vec<Listener> {
        self.listeners
            .get(&(node, kind))
            .cloned()
            .unwrap_or_default()
    }

    pub fn has_listeners(&self, node: NodeId, kind: EventKind) -> bool {
        self.listeners
            .get(&(node, kind))
            .is_some_and(|l| !l.is_empty())
    }

    /// Drop every listener registered on a node.
    pub fn remove_node(&mut self, node: NodeId) {
        self.listeners.retain(|(n, _), _| *n != node);
    }

    /// Drop every listener except those on `keep`.
    pub fn retain_only(&mut self, keep: NodeId) {
        self.listeners.retain(|(n, _), _| *n == keep);
    }

    pub fn len(&self) -> usize {
        self.listeners.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
