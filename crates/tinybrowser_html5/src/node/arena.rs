use crate::node::{Node, NodeData};
use std::collections::HashMap;
use tinybrowser_shared::node::NodeId;

/// The node arena is the single source for nodes in a document. Nodes refer to each other by
/// their [`NodeId`] only, the arena owns every node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeArena {
    /// Current nodes stored as <id, node>
    nodes: HashMap<NodeId, Node>,
    /// Next node ID to use
    next_id: NodeId,
}

impl NodeArena {
    /// Creates a new NodeArena
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            next_id: NodeId::default(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn get_next_id(&mut self) -> NodeId {
        let node_id = self.next_id;
        self.next_id = node_id.next();

        node_id
    }

    /// Registers a new, unattached node and returns its id
    pub fn register_node(&mut self, data: NodeData) -> NodeId {
        let id = self.get_next_id();
        self.nodes.insert(id, Node::new(id, data));

        id
    }

    /// Gets the node with the given id
    pub fn node_ref(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(&node_id)
    }

    /// Get the node with the given id as a mutable reference
    pub fn node_mut(&mut self, node_id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&node_id)
    }

    pub fn contains(&self, node_id: NodeId) -> bool {
        self.nodes.contains_key(&node_id)
    }

    /// Appends `child_id` as the last child of `parent_id`. A child that already has a parent is
    /// detached from it first. No validation is done, callers must make sure both nodes exist and
    /// that no cycle is created.
    pub(crate) fn attach_child(&mut self, parent_id: NodeId, child_id: NodeId) {
        self.detach(child_id);

        if let Some(parent) = self.nodes.get_mut(&parent_id) {
            parent.children.push(child_id);
        }
        if let Some(child) = self.nodes.get_mut(&child_id) {
            child.parent = Some(parent_id);
        }
    }

    /// Removes the node from its parent's child list, if it has a parent
    pub(crate) fn detach(&mut self, node_id: NodeId) {
        let Some(parent_id) = self.nodes.get(&node_id).and_then(|n| n.parent) else {
            return;
        };

        if let Some(parent) = self.nodes.get_mut(&parent_id) {
            parent.children.retain(|&id| id != node_id);
        }
        if let Some(node) = self.nodes.get_mut(&node_id) {
            node.parent = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::data::text::TextData;

    #[test]
    fn register_node() {
        let mut arena = NodeArena::new();
        let a = arena.register_node(NodeData::Text(TextData::with_value("a")));
        let b = arena.register_node(NodeData::Text(TextData::with_value("b")));

        assert_ne!(a, b);
        assert_eq!(arena.node_count(), 2);
        assert_eq!(arena.node_ref(a).unwrap().id(), a);
        assert!(arena.node_ref(b).unwrap().parent_id().is_none());
        assert!(!arena.contains(NodeId::from(42usize)));
    }

    #[test]
    fn attach_reparents() {
        let mut arena = NodeArena::new();
        let p1 = arena.register_node(NodeData::Text(TextData::with_value("p1")));
        let p2 = arena.register_node(NodeData::Text(TextData::with_value("p2")));
        let c = arena.register_node(NodeData::Text(TextData::with_value("c")));

        arena.attach_child(p1, c);
        assert_eq!(arena.node_ref(p1).unwrap().children(), &[c]);

        arena.attach_child(p2, c);
        assert!(arena.node_ref(p1).unwrap().children().is_empty());
        assert_eq!(arena.node_ref(p2).unwrap().children(), &[c]);
        assert_eq!(arena.node_ref(c).unwrap().parent_id(), Some(p2));

        arena.detach(c);
        assert!(arena.node_ref(p2).unwrap().children().is_empty());
        assert!(arena.node_ref(c).unwrap().parent_id().is_none());
    }
}
