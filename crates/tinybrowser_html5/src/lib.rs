//! HTML tokenizer and parser
//!
//! The parser's job is to take a string of markup and turn it into a DOM tree. Tokenizing is done
//! lazily: the tree builder pulls one token at a time and keeps a stack of open elements. There is
//! no HTML5 error recovery, any nesting is accepted as written.
use crate::document::Document;
use crate::parser::Html5Parser;

pub mod document;
pub mod node;
pub mod parser;
pub mod tokenizer;
pub mod writer;

/// Parses the given HTML string with the default options and returns the resulting document.
pub fn html_compile(html: &str) -> Document {
    Html5Parser::parse_document(html, None)
}
