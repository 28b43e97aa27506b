//! A minimal DOM-like UI tree.
//!
//! Nodes live in an arena and are addressed by `NodeId`. Removed nodes stay in
//! the arena and can be re-inserted; discarded and cleared nodes go back to a
//! free list and their ids are reused. `input` elements carry control state
//! (value, checkedness, custom validity) next to their attributes.

use std::cell::OnceCell;

use crate::{ControlConstraints, InputType, ValidityState};

/// Attributes the constraint set is built from.
const CONSTRAINT_ATTRIBUTES: &[&str] = &["type", "required", "pattern"];

/// Handle to a node in a `Document`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    data: NodeData,
}

#[derive(Debug, Clone)]
enum NodeData {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone)]
struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    classes: Vec<String>,
    control: Option<ControlState>,
}

/// Runtime state of a form control.
#[derive(Debug, Clone, Default)]
struct ControlState {
    value: String,
    checked: bool,
    custom_validity: String,
    /// Built on first use, dropped when a constraint attribute changes.
    constraints: OnceCell<ControlConstraints>,
}

/// The UI tree of one page.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    free: Vec<NodeId>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document with an empty `body` root.
    pub fn new() -> Self {
        let mut document = Self {
            nodes: Vec::new(),
            free: Vec::new(),
            root: NodeId(0),
        };
        document.root = document.create_element("body");
        document
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of slots in the arena, live or free.
    pub fn arena_len(&self) -> usize {
        self.nodes.len()
    }

    /// Create a detached element. `input` elements get control state.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let tag = tag.to_ascii_lowercase();
        let control = (tag == "input").then(ControlState::default);
        self.push(NodeData::Element(Element {
            tag,
            attributes: Vec::new(),
            classes: Vec::new(),
            control,
        }))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.push(NodeData::Text(text.into()))
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let node = Node {
            parent: None,
            children: Vec::new(),
            data,
        };
        if let Some(id) = self.free.pop() {
            self.nodes[id.0] = node;
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    // === Tree structure ===

    /// Append `child` as the last child of `parent`, detaching it first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// Insert `node` directly after `reference` under the same parent.
    ///
    /// Does nothing if `reference` has no parent.
    pub fn insert_after(&mut self, reference: NodeId, node: NodeId) {
        self.detach(node);
        let Some(parent) = self.nodes[reference.0].parent else {
            return;
        };
        let siblings = &mut self.nodes[parent.0].children;
        let position = siblings
            .iter()
            .position(|&sibling| sibling == reference)
            .map_or(siblings.len(), |i| i + 1);
        siblings.insert(position, node);
        self.nodes[node.0].parent = Some(parent);
    }

    /// Detach a node (and its subtree) from its parent. It can be inserted again.
    pub fn remove(&mut self, node: NodeId) {
        self.detach(node);
    }

    /// Detach a node and free it with its subtree. Their ids may be reused.
    pub fn discard(&mut self, node: NodeId) {
        if node == self.root {
            return;
        }
        self.detach(node);
        self.release(node);
    }

    /// Free all children of a node with their subtrees.
    pub fn clear_children(&mut self, node: NodeId) {
        let children = std::mem::take(&mut self.nodes[node.0].children);
        for child in children {
            self.nodes[child.0].parent = None;
            self.release(child);
        }
    }

    /// Return a detached subtree to the free list.
    fn release(&mut self, node: NodeId) {
        let mut stack = vec![node];
        while let Some(next) = stack.pop() {
            let slot = std::mem::replace(
                &mut self.nodes[next.0],
                Node {
                    parent: None,
                    children: Vec::new(),
                    data: NodeData::Text(String::new()),
                },
            );
            stack.extend(slot.children);
            self.free.push(next);
        }
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != node);
        }
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// All descendants of a node in document order, excluding the node itself.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(node).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev());
        }
        out
    }

    /// Check if a node is reachable from the root.
    pub fn is_connected(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == self.root {
                return true;
            }
            current = self.parent(n);
        }
        false
    }

    /// Nearest ancestor (or self) with the given tag.
    pub fn closest(&self, node: NodeId, tag: &str) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(n) = current {
            if self.tag(n) == Some(tag) {
                return Some(n);
            }
            current = self.parent(n);
        }
        None
    }

    /// First connected element with the given `id` attribute, in document order.
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .find(|&node| self.attribute(node, "id") == Some(id))
    }

    // === Elements ===

    pub fn is_element(&self, node: NodeId) -> bool {
        matches!(self.nodes[node.0].data, NodeData::Element(_))
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|e| e.tag.as_str())
    }

    fn element(&self, node: NodeId) -> Option<&Element> {
        match &self.nodes[node.0].data {
            NodeData::Element(element) => Some(element),
            NodeData::Text(_) => None,
        }
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        match &mut self.nodes[node.0].data {
            NodeData::Element(element) => Some(element),
            NodeData::Text(_) => None,
        }
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)?
            .attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    /// Attributes in insertion order.
    pub fn attributes(&self, node: NodeId) -> &[(String, String)] {
        self.element(node)
            .map(|e| e.attributes.as_slice())
            .unwrap_or_default()
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: impl Into<String>) {
        let value = value.into();
        let Some(element) = self.element_mut(node) else {
            return;
        };
        invalidate_constraints(element, name);
        match element.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value,
            None => element.attributes.push((name.to_string(), value)),
        }
    }

    /// Set or remove a boolean attribute.
    pub fn toggle_attribute(&mut self, node: NodeId, name: &str, on: bool) {
        if on {
            self.set_attribute(node, name, "");
        } else {
            self.remove_attribute(node, name);
        }
    }

    pub fn remove_attribute(&mut self, node: NodeId, name: &str) {
        if let Some(element) = self.element_mut(node) {
            invalidate_constraints(element, name);
            element.attributes.retain(|(key, _)| key != name);
        }
    }

    pub fn classes(&self, node: NodeId) -> &[String] {
        self.element(node)
            .map(|e| e.classes.as_slice())
            .unwrap_or_default()
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.classes(node).iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if self.has_class(node, class) {
            return;
        }
        if let Some(element) = self.element_mut(node) {
            element.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(element) = self.element_mut(node) {
            element.classes.retain(|c| c != class);
        }
    }

    // === Text ===

    /// Replace all children with a single text node (or nothing, for empty text).
    ///
    /// An existing lone text child is updated in place.
    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        let text = text.into();
        if let NodeData::Text(existing) = &mut self.nodes[node.0].data {
            *existing = text;
            return;
        }
        let children = &self.nodes[node.0].children;
        if children.len() == 1 && !text.is_empty() {
            let only = children[0];
            if let NodeData::Text(existing) = &mut self.nodes[only.0].data {
                *existing = text;
                return;
            }
        }
        self.clear_children(node);
        if !text.is_empty() {
            let text_node = self.create_text(text);
            self.append_child(node, text_node);
        }
    }

    /// Concatenated text of the node and its descendants.
    pub fn text_content(&self, node: NodeId) -> String {
        if let NodeData::Text(text) = &self.nodes[node.0].data {
            return text.clone();
        }
        self.descendants(node)
            .into_iter()
            .filter_map(|n| match &self.nodes[n.0].data {
                NodeData::Text(text) => Some(text.as_str()),
                NodeData::Element(_) => None,
            })
            .collect()
    }

    pub(crate) fn text(&self, node: NodeId) -> Option<&str> {
        match &self.nodes[node.0].data {
            NodeData::Text(text) => Some(text),
            NodeData::Element(_) => None,
        }
    }

    // === Form controls ===

    pub fn is_control(&self, node: NodeId) -> bool {
        self.control(node).is_some()
    }

    fn control(&self, node: NodeId) -> Option<&ControlState> {
        self.element(node)?.control.as_ref()
    }

    fn control_mut(&mut self, node: NodeId) -> Option<&mut ControlState> {
        self.element_mut(node)?.control.as_mut()
    }

    /// Controls under `root`, in document order.
    pub fn controls(&self, root: NodeId) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&node| self.is_control(node))
            .collect()
    }

    /// The control's type as declared by its `type` attribute.
    pub fn input_type(&self, node: NodeId) -> InputType {
        InputType::parse(self.attribute(node, "type").unwrap_or_default())
    }

    pub fn is_radio(&self, node: NodeId) -> bool {
        self.is_control(node) && self.input_type(node) == InputType::Radio
    }

    /// Current value. Radios report their `value` attribute (`"on"` if absent).
    pub fn value(&self, node: NodeId) -> Option<&str> {
        if self.is_radio(node) {
            return Some(self.attribute(node, "value").unwrap_or("on"));
        }
        self.control(node).map(|c| c.value.as_str())
    }

    pub fn set_value(&mut self, node: NodeId, value: impl Into<String>) {
        if let Some(control) = self.control_mut(node) {
            control.value = value.into();
        }
    }

    pub fn is_checked(&self, node: NodeId) -> bool {
        self.control(node).is_some_and(|c| c.checked)
    }

    /// Set checkedness. Checking a radio unchecks the rest of its group.
    pub fn set_checked(&mut self, node: NodeId, checked: bool) {
        if checked && self.is_radio(node) {
            for sibling in self.radio_group(node) {
                if let Some(control) = self.control_mut(sibling) {
                    control.checked = false;
                }
            }
        }
        if let Some(control) = self.control_mut(node) {
            control.checked = checked;
        }
    }

    /// All radios sharing `node`'s name within the same form (or tree), including `node`.
    pub fn radio_group(&self, node: NodeId) -> Vec<NodeId> {
        let name = self.attribute(node, "name").unwrap_or_default();
        if name.is_empty() {
            return vec![node];
        }
        let owner = self.closest(node, "form").unwrap_or_else(|| self.tree_root(node));
        self.descendants(owner)
            .into_iter()
            .filter(|&other| {
                self.is_radio(other) && self.attribute(other, "name") == Some(name)
            })
            .collect()
    }

    fn tree_root(&self, node: NodeId) -> NodeId {
        let mut current = node;
        while let Some(parent) = self.parent(current) {
            current = parent;
        }
        current
    }

    pub fn custom_validity(&self, node: NodeId) -> &str {
        self.control(node).map_or("", |c| c.custom_validity.as_str())
    }

    pub fn set_custom_validity(&mut self, node: NodeId, message: impl Into<String>) {
        if let Some(control) = self.control_mut(node) {
            control.custom_validity = message.into();
        }
    }

    /// Constraint set declared through the control's attributes.
    ///
    /// Compiled once per control and kept until `type`, `required` or
    /// `pattern` changes. `None` for non-controls.
    pub fn constraints(&self, node: NodeId) -> Option<&ControlConstraints> {
        let control = self.control(node)?;
        Some(control.constraints.get_or_init(|| {
            ControlConstraints::new(
                self.input_type(node),
                self.has_attribute(node, "required"),
                self.attribute(node, "pattern"),
            )
        }))
    }

    /// Current validity. Non-controls and disabled controls are always valid.
    pub fn validity(&self, node: NodeId) -> ValidityState {
        let Some(control) = self.control(node) else {
            return ValidityState::default();
        };
        if self.has_attribute(node, "disabled") {
            return ValidityState::default();
        }
        if self.is_radio(node) {
            let group = self.radio_group(node);
            let group_required = group.iter().any(|&r| self.has_attribute(r, "required"));
            let group_checked = group.iter().any(|&r| self.is_checked(r));
            let group_constraints = ControlConstraints::new(InputType::Radio, group_required, None);
            return group_constraints.check_radio(group_checked, &control.custom_validity);
        }
        self.constraints(node)
            .map(|constraints| constraints.check(&control.value, &control.custom_validity))
            .unwrap_or_default()
    }

    /// The message describing the current validity. Empty when valid.
    pub fn validation_message(&self, node: NodeId) -> String {
        let validity = self.validity(node);
        self.constraints(node)
            .map(|constraints| constraints.validation_message(&validity, self.custom_validity(node)))
            .unwrap_or_default()
    }

    /// Restore every control under `root` to its default state.
    ///
    /// Values fall back to the `value` attribute and checkedness to the
    /// `checked` attribute. Custom validity is left untouched.
    pub fn reset(&mut self, root: NodeId) {
        for node in self.controls(root) {
            let radio = self.is_radio(node);
            let default_value = self.attribute(node, "value").unwrap_or_default().to_string();
            let default_checked = self.has_attribute(node, "checked");
            if let Some(control) = self.control_mut(node) {
                if !radio {
                    control.value = default_value;
                }
                control.checked = default_checked;
            }
        }
    }
}

fn invalidate_constraints(element: &mut Element, attribute: &str) {
    if CONSTRAINT_ATTRIBUTES.contains(&attribute)
        && let Some(control) = element.control.as_mut()
    {
        control.constraints = OnceCell::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radio(document: &mut Document, parent: NodeId, name: &str, value: &str) -> NodeId {
        let input = document.create_element("input");
        document.set_attribute(input, "type", "radio");
        document.set_attribute(input, "name", name);
        document.set_attribute(input, "value", value);
        document.append_child(parent, input);
        input
    }

    #[test]
    fn append_and_descendants_in_document_order() {
        let mut document = Document::new();
        let root = document.root();
        let a = document.create_element("div");
        let b = document.create_element("span");
        let c = document.create_element("p");
        document.append_child(root, a);
        document.append_child(a, b);
        document.append_child(root, c);

        assert_eq!(document.descendants(root), vec![a, b, c]);
        assert_eq!(document.parent(b), Some(a));
    }

    #[test]
    fn insert_after_and_remove() {
        let mut document = Document::new();
        let root = document.root();
        let a = document.create_element("div");
        let c = document.create_element("div");
        document.append_child(root, a);
        document.append_child(root, c);

        let b = document.create_element("div");
        document.insert_after(a, b);
        assert_eq!(document.children(root), &[a, b, c]);

        document.remove(b);
        assert_eq!(document.children(root), &[a, c]);
        assert!(!document.is_connected(b));
    }

    #[test]
    fn element_by_id_returns_first_connected_match() {
        let mut document = Document::new();
        let root = document.root();
        let detached = document.create_element("div");
        document.set_attribute(detached, "id", "dup");
        let first = document.create_element("div");
        document.set_attribute(first, "id", "dup");
        let second = document.create_element("div");
        document.set_attribute(second, "id", "dup");
        document.append_child(root, first);
        document.append_child(root, second);

        assert_eq!(document.element_by_id("dup"), Some(first));
        assert_eq!(document.element_by_id("missing"), None);
    }

    #[test]
    fn text_content_and_classes() {
        let mut document = Document::new();
        let label = document.create_element("label");
        document.set_text(label, "Name");
        document.add_class(label, "error");
        document.add_class(label, "error");

        assert_eq!(document.text_content(label), "Name");
        assert_eq!(document.classes(label), &["error".to_string()]);

        document.set_text(label, "");
        document.remove_class(label, "error");
        assert_eq!(document.text_content(label), "");
        assert!(!document.has_class(label, "error"));
    }

    #[test]
    fn checking_a_radio_unchecks_its_group() {
        let mut document = Document::new();
        let form = document.create_element("form");
        let root = document.root();
        document.append_child(root, form);
        let red = radio(&mut document, form, "color", "red");
        let blue = radio(&mut document, form, "color", "blue");
        let other = radio(&mut document, form, "size", "xl");

        document.set_checked(other, true);
        document.set_checked(red, true);
        document.set_checked(blue, true);

        assert!(!document.is_checked(red));
        assert!(document.is_checked(blue));
        assert!(document.is_checked(other));
        assert_eq!(document.value(blue), Some("blue"));
    }

    #[test]
    fn required_radio_group_validity() {
        let mut document = Document::new();
        let form = document.create_element("form");
        let root = document.root();
        document.append_child(root, form);
        let yes = radio(&mut document, form, "agree", "yes");
        let no = radio(&mut document, form, "agree", "no");
        document.toggle_attribute(yes, "required", true);
        document.toggle_attribute(no, "required", true);

        assert!(document.validity(no).value_missing);
        document.set_checked(yes, true);
        assert!(document.validity(no).valid());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut document = Document::new();
        let form = document.create_element("form");
        let input = document.create_element("input");
        document.append_child(form, input);
        let choice = radio(&mut document, form, "pick", "a");

        document.set_value(input, "typed");
        document.set_checked(choice, true);
        document.reset(form);

        assert_eq!(document.value(input), Some(""));
        assert!(!document.is_checked(choice));
    }

    #[test]
    fn set_text_reuses_its_text_node() {
        let mut document = Document::new();
        let status = document.create_element("p");
        document.append_child(document.root(), status);
        document.set_text(status, "first");
        let len = document.arena_len();

        for i in 0..100 {
            document.set_text(status, format!("message {i}"));
            document.set_text(status, "");
        }

        assert_eq!(document.text_content(status), "");
        assert_eq!(document.arena_len(), len);
    }

    #[test]
    fn cleared_subtrees_are_recycled() {
        let mut document = Document::new();
        let container = document.create_element("div");
        document.append_child(document.root(), container);
        let build = |document: &mut Document| {
            let wrapper = document.create_element("div");
            let input = document.create_element("input");
            document.append_child(wrapper, input);
            document.append_child(container, wrapper);
        };
        build(&mut document);
        let len = document.arena_len();

        for _ in 0..50 {
            document.clear_children(container);
            build(&mut document);
        }

        assert_eq!(document.arena_len(), len);
        assert_eq!(document.controls(container).len(), 1);
    }

    #[test]
    fn discard_frees_but_remove_keeps() {
        let mut document = Document::new();
        let root = document.root();
        let kept = document.create_element("div");
        document.append_child(root, kept);

        document.remove(kept);
        document.append_child(root, kept);
        assert!(document.is_connected(kept));

        let alert = document.create_element("div");
        document.set_text(alert, "oops");
        document.append_child(root, alert);
        let len = document.arena_len();
        document.discard(alert);
        assert!(!document.is_connected(alert));

        let again = document.create_element("div");
        document.set_text(again, "oops");
        assert_eq!(document.arena_len(), len);
        assert_eq!(document.children(root), &[kept]);
    }

    #[test]
    fn constraints_are_cached_until_an_attribute_changes() {
        let mut document = Document::new();
        let input = document.create_element("input");
        document.set_attribute(input, "type", "text");
        document.set_attribute(input, "pattern", "[0-9]+");

        let first = document.constraints(input).unwrap() as *const ControlConstraints;
        let second = document.constraints(input).unwrap() as *const ControlConstraints;
        assert_eq!(first, second);

        document.set_value(input, "abc");
        assert!(document.validity(input).pattern_mismatch);

        document.remove_attribute(input, "pattern");
        assert!(!document.constraints(input).unwrap().has_pattern());
        assert!(document.validity(input).valid());

        let label = document.create_element("label");
        assert!(document.constraints(label).is_none());
    }
}
