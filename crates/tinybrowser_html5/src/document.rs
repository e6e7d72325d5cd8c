use crate::node::arena::NodeArena;
use crate::node::data::element::ElementData;
use crate::node::data::text::TextData;
use crate::node::{Node, NodeData};
use tinybrowser_shared::errors::Error;
use tinybrowser_shared::node::NodeId;
use tinybrowser_shared::types::Result;

pub mod query;

/// Defines a document. The document owns every node through its arena and knows which node is
/// the root element of the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Holds and owns all nodes in the document
    pub(crate) arena: NodeArena,
    /// Id of the root element
    root: NodeId,
    /// Doctype as found in the markup, or an empty string
    doctype: String,
}

impl Document {
    /// Creates a new document with a single, empty root element
    pub fn new(root_tag: &str) -> Result<Self> {
        let mut arena = NodeArena::new();
        let root = arena.register_node(NodeData::Element(ElementData::new(root_tag)?));

        Ok(Self {
            arena,
            root,
            doctype: String::new(),
        })
    }

    /// Document with the default `html` root element and no doctype
    pub(crate) fn new_default() -> Self {
        let mut arena = NodeArena::new();
        let root = arena.register_node(NodeData::Element(ElementData::html()));

        Self {
            arena,
            root,
            doctype: String::new(),
        }
    }

    pub(crate) fn from_parts(arena: NodeArena, root: NodeId, doctype: String) -> Self {
        Self {
            arena,
            root,
            doctype,
        }
    }

    /// Returns the id of the root element
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the root element node
    pub fn root_node(&self) -> &Node {
        // The root is registered at construction and nodes are never removed from the arena
        match self.arena.node_ref(self.root) {
            Some(node) => node,
            None => unreachable!("document root {} missing from arena", self.root),
        }
    }

    pub fn doctype(&self) -> &str {
        &self.doctype
    }

    /// Fetches a node by id or returns None when no node with this ID is found
    pub fn node_by_id(&self, node_id: NodeId) -> Option<&Node> {
        self.arena.node_ref(node_id)
    }

    /// Number of nodes owned by the document, including nodes not attached to the tree
    pub fn node_count(&self) -> usize {
        self.arena.node_count()
    }

    /// Creates a new, detached element node
    pub fn create_element(&mut self, name: &str) -> Result<NodeId> {
        let data = ElementData::new(name)?;
        Ok(self.arena.register_node(NodeData::Element(data)))
    }

    /// Creates a new, detached text node
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.arena
            .register_node(NodeData::Text(TextData::with_value(text)))
    }

    /// Sets an attribute on the given element
    pub fn set_attribute(&mut self, node_id: NodeId, name: &str, value: &str) -> Result<()> {
        let node = self
            .arena
            .node_mut(node_id)
            .ok_or(Error::NodeNotFound(node_id))?;

        match node.get_element_data_mut() {
            Some(data) => data.set_attribute(name, value),
            None => Err(Error::InvalidArgument(format!(
                "node {node_id} is not an element"
            ))),
        }
    }

    /// Appends `child_id` as the last child of `parent_id`. When the child already has a parent,
    /// it is moved rather than duplicated.
    pub fn append_child(&mut self, parent_id: NodeId, child_id: NodeId) -> Result<()> {
        let parent = self
            .arena
            .node_ref(parent_id)
            .ok_or(Error::NodeNotFound(parent_id))?;
        if !self.arena.contains(child_id) {
            return Err(Error::NodeNotFound(child_id));
        }

        if !parent.is_element_node() {
            return Err(Error::InvalidArgument(format!(
                "node {parent_id} is not an element and cannot have children"
            )));
        }

        if self.is_ancestor_or_self(child_id, parent_id) {
            return Err(Error::InvalidArgument(format!(
                "appending node {child_id} to {parent_id} would create a cycle"
            )));
        }

        log::trace!("appending node {child_id} to {parent_id}");
        self.arena.attach_child(parent_id, child_id);

        Ok(())
    }

    /// Removes `child_id` from the children of `parent_id`. Nothing happens when the node is not
    /// a child of the parent. The removed node stays in the arena, detached.
    pub fn remove_child(&mut self, parent_id: NodeId, child_id: NodeId) -> Result<()> {
        let parent = self
            .arena
            .node_ref(parent_id)
            .ok_or(Error::NodeNotFound(parent_id))?;
        if !self.arena.contains(child_id) {
            return Err(Error::NodeNotFound(child_id));
        }

        if parent.children().contains(&child_id) {
            self.arena.detach(child_id);
        }

        Ok(())
    }

    /// Returns true when `ancestor_id` is `node_id` itself or one of its ancestors
    fn is_ancestor_or_self(&self, ancestor_id: NodeId, node_id: NodeId) -> bool {
        let mut current = Some(node_id);
        while let Some(id) = current {
            if id == ancestor_id {
                return true;
            }
            current = self.arena.node_ref(id).and_then(|n| n.parent);
        }

        false
    }
}
