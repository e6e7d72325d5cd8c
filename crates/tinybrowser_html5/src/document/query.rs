use crate::document::Document;
use crate::node::NodeData;
use tinybrowser_shared::node::NodeId;

/// Pre-order (document order) iterator over a subtree of a document
pub struct TreeIterator<'a> {
    node_stack: Vec<NodeId>,
    document: &'a Document,
}

impl<'a> TreeIterator<'a> {
    /// Iterates over the complete tree, starting at the root element
    #[must_use]
    pub fn new(doc: &'a Document) -> Self {
        Self::from_node(doc, doc.root())
    }

    /// Iterates over the subtree starting at (and including) the given node
    #[must_use]
    pub fn from_node(doc: &'a Document, node_id: NodeId) -> Self {
        Self {
            node_stack: vec![node_id],
            document: doc,
        }
    }
}

impl Iterator for TreeIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current_node_id = self.node_stack.pop()?;

        if let Some(current_node) = self.document.node_by_id(current_node_id) {
            self.node_stack
                .extend(current_node.children().iter().rev().copied());
        }

        Some(current_node_id)
    }
}

impl Document {
    /// Returns all elements with the given tag name in document order. The name is matched
    /// case-insensitively.
    pub fn get_elements_by_tag_name(&self, tag_name: &str) -> Vec<NodeId> {
        let tag_name = tag_name.to_lowercase();

        TreeIterator::new(self)
            .filter(|id| {
                self.node_by_id(*id)
                    .and_then(|node| node.tag_name())
                    .is_some_and(|name| name == tag_name)
            })
            .collect()
    }

    /// Returns the first element in document order whose `id` attribute equals the given id
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        TreeIterator::new(self).find(|node_id| {
            self.node_by_id(*node_id)
                .and_then(|node| node.get_element_data())
                .and_then(|data| data.get_attribute("id"))
                .is_some_and(|value| value == id)
        })
    }

    /// Concatenation of all text below (and including) the given node, in document order
    pub fn text_content(&self, node_id: NodeId) -> String {
        let mut content = String::new();
        for id in TreeIterator::from_node(self, node_id) {
            if let Some(text) = self.node_by_id(id).and_then(|node| node.get_text_data()) {
                content.push_str(text.value());
            }
        }

        content
    }

    /// Collects the stylesheet text of every `<style>` element below the given node. Each text
    /// child of a style element is followed by a newline.
    pub fn style_text(&self, node_id: NodeId) -> String {
        let mut css = String::new();

        for id in TreeIterator::from_node(self, node_id) {
            let Some(node) = self.node_by_id(id) else {
                continue;
            };
            if node.tag_name() != Some("style") {
                continue;
            }

            for child_id in node.children() {
                if let Some(NodeData::Text(text)) = self.node_by_id(*child_id).map(|n| &n.data) {
                    css.push_str(text.value());
                    css.push('\n');
                }
            }
        }

        log::debug!("extracted {} bytes of stylesheet text", css.len());
        css
    }
}
