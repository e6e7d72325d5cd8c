use crate::stylesheet::{CssRule, CssSelector};
use crate::tokenizer::TokenType;
use crate::Css3;

impl Css3 {
    /// Parses a single rule. Returns None when the input ends before the declaration block starts,
    /// or when the rule has no usable selector.
    pub fn parse_rule(&mut self) -> Option<CssRule> {
        log::trace!("parse_rule");

        let selectors = self.parse_selector_group()?;
        let declarations = self.parse_declaration_block();

        if selectors.is_empty() {
            return None;
        }

        Some(CssRule {
            selectors,
            declarations,
        })
    }

    /// Parses the comma separated selectors up to and including the `{`
    fn parse_selector_group(&mut self) -> Option<Vec<CssSelector>> {
        log::trace!("parse_selector_group");

        let mut selectors = Vec::new();
        loop {
            let t = self.consume_any();
            match t.token_type {
                TokenType::Eof => return None,
                TokenType::LCurly => break,
                TokenType::Ident(value) if !value.is_empty() => {
                    selectors.push(CssSelector::parse(&value));
                }
                _ => {}
            }
        }

        Some(selectors)
    }
}
