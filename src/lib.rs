//! Tinybrowser
//!
//! A small browser engine core. Markup is parsed into a document by [`html5`], the stylesheet text
//! found in its `<style>` elements is parsed by [`css3`] and [`styling`] runs the cascade to
//! compute the properties of every node.
//!
//! ```
//! use tinybrowser::{html5, styling};
//!
//! let doc = html5::html_compile("<html><style>p { color: red }</style><p>Hello</p></html>");
//! let sheet = tinybrowser::stylesheet_from_document(&doc);
//! let root = styling::styling::generate_styled_tree(&doc, &sheet);
//!
//! let p = root.iter().find(|n| n.node.tag_name() == Some("p"));
//! assert_eq!(p.and_then(|n| n.get_property("color")), Some("red"));
//! ```
pub use tinybrowser_css3 as css3;
pub use tinybrowser_html5 as html5;
pub use tinybrowser_shared as shared;
pub use tinybrowser_styling as styling;

use tinybrowser_css3::stylesheet::CssStylesheet;
use tinybrowser_css3::Css3;
use tinybrowser_html5::document::Document;

/// Parses the text of all `<style>` elements of the document into a single stylesheet
pub fn stylesheet_from_document(document: &Document) -> CssStylesheet {
    let css = document.style_text(document.root());
    Css3::parse_str(&css)
}
