use serde::Serialize;
use std::cell::Cell;
use std::fmt;

/// Handle to a node inside one [`Document`](super::Document).
///
/// Ids are never reused: once a node is removed its id stays dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Write access to activation records.
///
/// Only obtainable with the `record-writer` feature, which the activation
/// gate's crate enables. Everyone else can read records but not set them.
#[derive(Debug, Clone)]
pub struct RecordKey(());

impl RecordKey {
    #[cfg(feature = "record-writer")]
    #[must_use]
    pub const fn issue() -> Self {
        Self(())
    }
}

/// Per-element flag stating that the element was upgraded to a rich widget.
///
/// One-way: it can be set but never cleared. It lives inside the element,
/// so it disappears together with the element. Interior mutability lets a
/// scan record outcomes while it holds a shared borrow of the document.
#[derive(Debug, Default)]
pub struct ActivationRecord(Cell<bool>);

impl ActivationRecord {
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.0.get()
    }

    /// Marks the element as activated.
    pub fn set(&self, _key: &RecordKey) {
        self.mark();
    }

    pub(crate) fn mark(&self) {
        self.0.set(true);
    }
}

/// An element: tag, ordered attributes and its activation record.
#[derive(Debug)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    record: ActivationRecord,
}

impl Element {
    pub(crate) fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), attributes: Vec::new(), record: ActivationRecord::default() }
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// ASCII case-insensitive tag comparison.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    #[must_use]
    pub const fn activation(&self) -> &ActivationRecord {
        &self.record
    }

    #[must_use]
    pub fn is_activated(&self) -> bool {
        self.record.is_set()
    }

    pub(crate) fn set_attribute(&mut self, name: String, value: String) {
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }
}

#[derive(Debug)]
pub enum NodeData {
    Element(Element),
    Text(String),
}

#[derive(Debug)]
pub struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) data: NodeData,
}

impl Node {
    pub(crate) const fn new(data: NodeData) -> Self {
        Self { parent: None, children: Vec::new(), data }
    }

    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[must_use]
    pub const fn data(&self) -> &NodeData {
        &self.data
    }

    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match &self.data {
            NodeData::Element(element) => Some(element),
            NodeData::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(text) => Some(text),
            NodeData::Element(_) => None,
        }
    }
}
