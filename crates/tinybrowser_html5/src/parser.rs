use crate::document::Document;
use crate::node::arena::NodeArena;
use crate::node::data::element::ElementData;
use crate::node::data::text::TextData;
use crate::node::NodeData;
use crate::tokenizer::token::Token;
use crate::tokenizer::{Options, Tokenizer};
use std::collections::HashMap;
use tinybrowser_shared::node::NodeId;

/// Options for the parser
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Html5ParserOptions {
    /// Whitespace-only text between tags is not turned into text nodes
    pub skip_whitespace_text: bool,
}

impl Default for Html5ParserOptions {
    fn default() -> Self {
        Self {
            skip_whitespace_text: true,
        }
    }
}

/// The main parser object. It pulls tokens from the tokenizer and keeps a stack of open elements.
/// Any nesting is accepted as written: an end tag simply closes whatever element is open.
pub struct Html5Parser {
    /// tokenizer object
    tokenizer: Tokenizer,
    /// Arena that receives all created nodes
    arena: NodeArena,
    /// Stack of open elements
    open_elements: Vec<NodeId>,
    /// The first top level element
    root: Option<NodeId>,
    /// Doctype as found in the markup
    doctype: String,
}

impl Html5Parser {
    /// Parses the given input into a document. Blank input results in a document with an empty
    /// `html` root element. Parsing never fails: malformed markup is accepted as well as possible.
    pub fn parse_document(input: &str, options: Option<Html5ParserOptions>) -> Document {
        if input.trim().is_empty() {
            return Document::new_default();
        }

        let options = options.unwrap_or_default();
        let tokenizer = Tokenizer::new(
            input,
            Some(Options {
                skip_whitespace_text: options.skip_whitespace_text,
            }),
        );

        let mut parser = Html5Parser {
            tokenizer,
            arena: NodeArena::new(),
            open_elements: Vec::new(),
            root: None,
            doctype: String::new(),
        };

        parser.do_parse();
        parser.finish()
    }

    /// Internal parser function that does the actual parsing
    fn do_parse(&mut self) {
        let mut token_count = 0;

        loop {
            let token = self.tokenizer.next_token();
            token_count += 1;

            match token {
                Token::Eof => break,
                Token::DocType { content } => self.doctype = content,
                Token::StartTag { name, attributes } => {
                    if let Some(node_id) = self.insert_element(&name, &attributes) {
                        self.open_elements.push(node_id);
                    }
                }
                Token::SelfClosingTag { name, attributes } => {
                    self.insert_element(&name, &attributes);
                }
                Token::EndTag { name } => {
                    if let Some(node_id) = self.open_elements.pop() {
                        let open_name = self.arena.node_ref(node_id).and_then(|n| n.tag_name());
                        if open_name != Some(name.as_str()) {
                            log::trace!("end tag </{name}> closes <{}>", open_name.unwrap_or_default());
                        }
                    }
                }
                Token::Text { text } => {
                    if let Some(&parent_id) = self.open_elements.last() {
                        let node_id = self
                            .arena
                            .register_node(NodeData::Text(TextData::with_value(&text)));
                        self.arena.attach_child(parent_id, node_id);
                    }
                }
                Token::Comment { .. } => {}
            }
        }

        log::debug!(
            "parsed {token_count} tokens into {} nodes",
            self.arena.node_count()
        );
    }

    /// Creates an element and inserts it below the current node. When no element is open, the
    /// element becomes the root (if there is none yet) or stays detached. Returns None when no
    /// element could be created from the tag.
    fn insert_element(
        &mut self,
        name: &str,
        attributes: &HashMap<String, String>,
    ) -> Option<NodeId> {
        let data = ElementData::with_attributes(name, attributes).ok()?;
        let node_id = self.arena.register_node(NodeData::Element(data));

        match self.open_elements.last() {
            Some(&parent_id) => self.arena.attach_child(parent_id, node_id),
            None if self.root.is_none() => self.root = Some(node_id),
            None => log::trace!("element <{name}> has no parent and is not attached"),
        }

        Some(node_id)
    }

    fn finish(mut self) -> Document {
        let root = match self.root {
            Some(root) => root,
            None => self
                .arena
                .register_node(NodeData::Element(ElementData::html())),
        };

        Document::from_parts(self.arena, root, self.doctype)
    }
}
