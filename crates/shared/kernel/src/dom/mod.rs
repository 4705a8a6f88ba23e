//! In-memory document tree.
//!
//! Nodes live in an arena owned by [`Document`] and are addressed by
//! [`NodeId`]. Removing a node destroys its whole subtree; the freed slots
//! are never reused, so stale ids simply stop resolving.

mod error;
mod node;

pub use error::{DocumentError, DocumentErrorExt};
pub use node::{ActivationRecord, Element, Node, NodeData, NodeId, RecordKey};

use mdf_domain::constants::{ACTIVATION_RECORD_ATTR, DOCUMENT_ROOT_TAG, ID_ATTR};

/// A mutable tree of elements and text.
///
/// Not `Sync`: activation records use interior mutability and the whole
/// tree is meant to be driven from one thread.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Option<Node>>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty document holding only its root element.
    #[must_use]
    pub fn new() -> Self {
        let root = Node::new(NodeData::Element(Element::new(DOCUMENT_ROOT_TAG)));
        Self { nodes: vec![Some(root)], root: NodeId(0) }
    }

    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Creates a detached element.
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        self.insert(NodeData::Element(Element::new(tag)))
    }

    /// Creates a detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.insert(NodeData::Text(text.into()))
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.node(id).and_then(Node::as_element)
    }

    /// Whether `id` refers to a live node (attached or not).
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::parent)
    }

    /// Children of `id`; empty for dead ids and text nodes.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.node(id) {
            Some(node) => node.children(),
            None => &[],
        }
    }

    #[must_use]
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).and_then(|element| element.attribute(name))
    }

    /// Sets or replaces an attribute.
    ///
    /// # Errors
    /// [`DocumentError::ReservedAttribute`] for the activation record name,
    /// [`DocumentError::NodeNotFound`] / [`DocumentError::NotAnElement`] for bad ids.
    pub fn set_attribute(
        &mut self,
        id: NodeId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), DocumentError> {
        let name = name.into();
        if name.eq_ignore_ascii_case(ACTIVATION_RECORD_ATTR) {
            return Err(DocumentError::ReservedAttribute { message: name.into(), context: None });
        }

        let element = match self.node_mut(id)?.data {
            NodeData::Element(ref mut element) => element,
            NodeData::Text(_) => {
                return Err(DocumentError::NotAnElement {
                    message: format!("cannot set '{name}' on text node {id}").into(),
                    context: None,
                });
            },
        };
        element.set_attribute(name, value.into());
        Ok(())
    }

    /// Appends a detached node as the last child of `parent`.
    ///
    /// # Errors
    /// Fails if either id is dead, `parent` is a text node, `child` already
    /// has a parent or is the root, or `child` is an ancestor of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DocumentError> {
        if child == self.root {
            return Err(DocumentError::RootImmovable {
                message: "the root cannot become a child".into(),
                context: None,
            });
        }
        if self.node_ref(parent)?.as_element().is_none() {
            return Err(DocumentError::NotAnElement {
                message: format!("text node {parent} cannot have children").into(),
                context: None,
            });
        }
        if let Some(existing) = self.node_ref(child)?.parent {
            return Err(DocumentError::AlreadyAttached {
                message: format!("{child} is already a child of {existing}").into(),
                context: None,
            });
        }
        if self.ancestors(parent).any(|ancestor| ancestor == child) {
            return Err(DocumentError::CycleDetected {
                message: format!("{child} is an ancestor of {parent}").into(),
                context: None,
            });
        }

        self.link(parent, child)
    }

    /// Appends a node that was created detached and has no children yet.
    ///
    /// Such a node cannot be an ancestor of anything, so the cycle walk is
    /// skipped; it only falls back to [`Document::append_child`] otherwise.
    pub(crate) fn append_leaf(&mut self, parent: NodeId, child: NodeId) -> Result<(), DocumentError> {
        let node = self.node_ref(child)?;
        if child == self.root || node.parent.is_some() || !node.children.is_empty() {
            return self.append_child(parent, child);
        }
        if self.node_ref(parent)?.as_element().is_none() {
            return Err(DocumentError::NotAnElement {
                message: format!("text node {parent} cannot have children").into(),
                context: None,
            });
        }
        self.link(parent, child)
    }

    /// Detaches `id` from its parent and destroys its subtree.
    ///
    /// Returns the number of nodes destroyed.
    ///
    /// # Errors
    /// [`DocumentError::NodeNotFound`] for dead ids and
    /// [`DocumentError::RootImmovable`] for the root.
    pub fn remove(&mut self, id: NodeId) -> Result<usize, DocumentError> {
        if id == self.root {
            return Err(DocumentError::RootImmovable {
                message: "the root cannot be removed".into(),
                context: None,
            });
        }

        if let Some(parent) = self.node_ref(id)?.parent {
            self.node_mut(parent)?.children.retain(|c| *c != id);
        }

        let doomed: Vec<NodeId> = self.descendants(id).collect();
        for node in &doomed {
            self.nodes[node.0] = None;
        }
        Ok(doomed.len())
    }

    /// Whether `id` is reachable from the root.
    #[must_use]
    pub fn is_attached(&self, id: NodeId) -> bool {
        self.contains(id) && (id == self.root || self.ancestors(id).any(|a| a == self.root))
    }

    /// Proper ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |current| self.parent(*current))
    }

    /// Lazy pre-order walk of `start` and everything below it, in document order.
    ///
    /// Yields nothing when `start` is dead.
    #[must_use]
    pub fn descendants(&self, start: NodeId) -> Descendants<'_> {
        let stack = if self.contains(start) { vec![start] } else { Vec::new() };
        Descendants { document: self, stack }
    }

    /// First attached element whose `id` attribute equals `value`.
    #[must_use]
    pub fn find_by_id(&self, value: &str) -> Option<NodeId> {
        self.descendants(self.root).find(|node| self.attribute(*node, ID_ATTR) == Some(value))
    }

    /// Concatenated text of `id` and its descendants.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        self.descendants(id).filter_map(|node| self.node(node).and_then(Node::as_text)).collect()
    }

    fn link(&mut self, parent: NodeId, child: NodeId) -> Result<(), DocumentError> {
        self.node_mut(parent)?.children.push(child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    fn insert(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(Node::new(data)));
        id
    }

    fn node_ref(&self, id: NodeId) -> Result<&Node, DocumentError> {
        self.node(id).ok_or_else(|| not_found(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, DocumentError> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut).ok_or_else(|| not_found(id))
    }
}

fn not_found(id: NodeId) -> DocumentError {
    DocumentError::NodeNotFound { message: format!("no live node {id}").into(), context: None }
}

/// Iterator returned by [`Document::descendants`].
#[derive(Debug, Clone)]
pub struct Descendants<'d> {
    document: &'d Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        self.stack.extend(self.document.children(current).iter().rev().copied());
        Some(current)
    }
}
