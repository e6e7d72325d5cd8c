//! CSS parser
//!
//! The parser understands a small subset of CSS: rules made of comma separated simple selectors
//! (tag, `#id` and `.class` parts) followed by a block of `property: value` declarations. At-rules,
//! combinators and `!important` are not supported. Malformed input never results in an error, the
//! parser skips what it cannot use.
use crate::stylesheet::CssStylesheet;
use crate::tokenizer::Tokenizer;

pub mod matcher;
pub mod parser;
pub mod stylesheet;
pub mod tokenizer;

pub struct Css3 {
    /// The tokenizer is responsible for reading the input and emitting tokens
    pub tokenizer: Tokenizer,
}

impl Css3 {
    /// Creates a new parser for the given CSS source
    fn new(data: &str) -> Self {
        Self {
            tokenizer: Tokenizer::new(data),
        }
    }

    /// Parses a direct string to a `CssStylesheet`. Blank input results in an empty stylesheet.
    pub fn parse_str(data: &str) -> CssStylesheet {
        if data.trim().is_empty() {
            return CssStylesheet::default();
        }

        Css3::new(data).parse()
    }

    fn parse(&mut self) -> CssStylesheet {
        let sheet = self.parse_stylesheet_internal();
        log::debug!("parsed stylesheet with {} rules", sheet.rules.len());

        sheet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert!(Css3::parse_str("").rules.is_empty());
        assert!(Css3::parse_str(" \n\t ").rules.is_empty());
        assert!(Css3::parse_str("/* only a comment */").rules.is_empty());
    }
}
