use crate::node::data::element::ElementData;
use crate::node::data::text::TextData;
use tinybrowser_shared::node::NodeId;

pub mod arena;
pub mod data;

/// Payload of a node. Only elements and text are kept in the tree, comments and the doctype are
/// handled by the parser directly.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    /// Represents an element
    Element(ElementData),
    /// Represents a text
    Text(TextData),
}

/// Node structure that resembles a DOM node
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// ID of the node inside its arena
    pub id: NodeId,
    /// parent of the node, if any. Only used for traversal, ownership lies with the arena.
    pub parent: Option<NodeId>,
    /// any children of the node, in document order
    pub children: Vec<NodeId>,
    /// actual data of the node
    pub data: NodeData,
}

impl Node {
    pub(crate) fn new(id: NodeId, data: NodeData) -> Self {
        Self {
            id,
            parent: None,
            children: Vec::new(),
            data,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn parent_id(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        self.children.as_slice()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_element_node(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    pub fn is_text_node(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    pub fn get_element_data(&self) -> Option<&ElementData> {
        if let NodeData::Element(data) = &self.data {
            return Some(data);
        }
        None
    }

    pub fn get_element_data_mut(&mut self) -> Option<&mut ElementData> {
        if let NodeData::Element(data) = &mut self.data {
            return Some(data);
        }
        None
    }

    pub fn get_text_data(&self) -> Option<&TextData> {
        if let NodeData::Text(data) = &self.data {
            return Some(data);
        }
        None
    }

    /// Returns the tag name for element nodes
    pub fn tag_name(&self) -> Option<&str> {
        self.get_element_data().map(|data| data.name.as_str())
    }
}
