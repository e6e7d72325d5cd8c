use std::collections::HashMap;
use tinybrowser_html5::node::Node;

/// A node of the styled tree. It mirrors exactly one DOM node, borrows it read-only and carries
/// the computed properties for that node.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledNode<'a> {
    /// The DOM node this styled node was computed for
    pub node: &'a Node,
    /// Computed properties (property name => value)
    pub properties: HashMap<String, String>,
    /// Styled children, in document order
    pub children: Vec<StyledNode<'a>>,
}

impl<'a> StyledNode<'a> {
    pub(crate) fn new(node: &'a Node, properties: HashMap<String, String>) -> Self {
        Self {
            node,
            properties,
            children: Vec::new(),
        }
    }

    pub fn get_property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Returns the computed value or the given fallback when the property is not set
    pub fn get_property_or<'s>(&'s self, name: &str, default: &'s str) -> &'s str {
        self.get_property(name).unwrap_or(default)
    }

    pub fn is_element(&self) -> bool {
        self.node.is_element_node()
    }

    pub fn is_text(&self) -> bool {
        self.node.is_text_node()
    }

    /// Properties sorted by name
    pub fn sorted_properties(&self) -> Vec<(&str, &str)> {
        let mut props: Vec<(&str, &str)> = self
            .properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        props.sort_unstable();
        props
    }

    /// Iterates over this node and all its descendants in document order
    pub fn iter(&self) -> StyledNodeIterator<'_, 'a> {
        StyledNodeIterator { stack: vec![self] }
    }
}

impl Drop for StyledNode<'_> {
    /// Tears the tree down level by level instead of recursing into every child
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Pre-order iterator over a styled tree
pub struct StyledNodeIterator<'s, 'a> {
    stack: Vec<&'s StyledNode<'a>>,
}

impl<'s, 'a> Iterator for StyledNodeIterator<'s, 'a> {
    type Item = &'s StyledNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        self.stack.extend(current.children.iter().rev());

        Some(current)
    }
}

impl<'s, 'a> IntoIterator for &'s StyledNode<'a> {
    type Item = &'s StyledNode<'a>;
    type IntoIter = StyledNodeIterator<'s, 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
