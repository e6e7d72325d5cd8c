use crate::document::Document;
use crate::node::NodeData;
use std::fmt;
use tinybrowser_shared::node::NodeId;

/// Writer that converts a (sub)tree into an indented, human readable dump. Elements with
/// children are written as open/close tag pairs, empty elements as `<tag />` and text as
/// `TEXT: "..."` lines. Attributes are sorted by name so the output is stable.
pub struct DocumentWriter<'a> {
    document: &'a Document,
    /// The buffer to write to
    buffer: String,
}

/// Pending work of the writer: a node still to be written, or the closing tag of an element whose
/// children are being written
enum Step<'a> {
    Visit(NodeId, usize),
    Close(&'a str, usize),
}

impl<'a> DocumentWriter<'a> {
    pub fn write_from_node(document: &'a Document, node_id: NodeId) -> String {
        let mut w = Self {
            document,
            buffer: String::new(),
        };

        let mut steps = vec![Step::Visit(node_id, 0)];
        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(id, depth) => w.visit_node(id, depth, &mut steps),
                Step::Close(name, depth) => {
                    let indent = "  ".repeat(depth);
                    w.buffer.push_str(&format!("{indent}</{name}>\n"));
                }
            }
        }

        w.buffer
    }

    fn visit_node(&mut self, node_id: NodeId, depth: usize, steps: &mut Vec<Step<'a>>) {
        let document = self.document;
        let Some(node) = document.node_by_id(node_id) else {
            return;
        };
        let indent = "  ".repeat(depth);

        match &node.data {
            NodeData::Element(data) => {
                self.buffer.push_str(&indent);
                self.buffer.push('<');
                self.buffer.push_str(data.name());
                for (key, value) in data.sorted_attributes() {
                    self.buffer.push_str(&format!(r#" {key}="{value}""#));
                }

                if !node.has_children() {
                    self.buffer.push_str(" />\n");
                    return;
                }

                self.buffer.push_str(">\n");
                steps.push(Step::Close(data.name(), depth));
                for child_id in node.children().iter().rev() {
                    steps.push(Step::Visit(*child_id, depth + 1));
                }
            }
            NodeData::Text(text) => {
                let value = text.value().trim();
                if !value.is_empty() {
                    self.buffer.push_str(&format!("{indent}TEXT: \"{value}\"\n"));
                }
            }
        }
    }
}

/// Dumps the tree below the given node
pub fn tree_string(document: &Document, node_id: NodeId) -> String {
    DocumentWriter::write_from_node(document, node_id)
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.doctype().is_empty() {
            writeln!(f, "<{}>", self.doctype())?;
        }
        write!(f, "{}", tree_string(self, self.root()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html_compile;

    #[test]
    fn write_tree() {
        let doc = html_compile(
            "<div id='main' class=\"a\"><p>  Hello  </p><br/><p>   </p></div>",
        );

        let expected = r#"<div class="a" id="main">
  <p>
    TEXT: "Hello"
  </p>
  <br />
  <p />
</div>
"#;
        assert_eq!(tree_string(&doc, doc.root()), expected);
    }

    #[test]
    fn write_document() {
        let doc = html_compile("<!DOCTYPE html><html></html>");

        assert_eq!(doc.to_string(), "<!DOCTYPE html>\n<html />\n");
        assert_eq!(html_compile("").to_string(), "<html />\n");
    }

    #[test]
    fn deeply_nested_tree() {
        let depth = 5000;
        let html = format!("{}x{}", "<div>".repeat(depth), "</div>".repeat(depth));
        let doc = html_compile(&html);
        let dump = tree_string(&doc, doc.root());

        assert_eq!(dump.lines().count(), 2 * depth + 1);
        assert!(dump.contains(&format!("\n{}TEXT: \"x\"\n", "  ".repeat(depth))));
        assert!(dump.ends_with("\n</div>\n"));
    }
}
