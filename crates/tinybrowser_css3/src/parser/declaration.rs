use crate::stylesheet::CssDeclaration;
use crate::tokenizer::TokenType;
use crate::Css3;

impl Css3 {
    /// Parses declarations until the closing `}` (or the end of the input). Malformed
    /// declarations are skipped.
    pub(crate) fn parse_declaration_block(&mut self) -> Vec<CssDeclaration> {
        log::trace!("parse_declaration_block");

        let mut declarations = Vec::new();
        loop {
            let t = self.consume_any();
            let property = match t.token_type {
                TokenType::Eof | TokenType::RCurly => break,
                TokenType::Ident(property) => property,
                // stray ';' or delimiters that cannot start a declaration
                _ => continue,
            };

            let t = self.consume_any();
            match t.token_type {
                TokenType::Colon => {}
                // a `}` here still closes this block, the next rule is parsed on its own
                TokenType::Eof | TokenType::RCurly => break,
                _ => {
                    log::trace!("skipping declaration without ':' for property {property}");
                    continue;
                }
            }

            let (value, block_ended) = self.parse_value();
            if !property.is_empty() && !value.is_empty() {
                declarations.push(CssDeclaration { property, value });
            }

            if block_ended {
                break;
            }
        }

        declarations
    }

    /// Collects the value tokens up to `;`, `}` or the end of the input. Returns the value and
    /// whether the declaration block has ended.
    fn parse_value(&mut self) -> (String, bool) {
        let mut parts: Vec<String> = Vec::new();
        // When set, the next identifier is appended to the last part without a space
        let mut glue = false;

        let block_ended = loop {
            let t = self.consume_any();
            let is_colon = t.token_type == TokenType::Colon;

            match t.token_type {
                TokenType::Semicolon => break false,
                TokenType::RCurly | TokenType::Eof => break true,
                TokenType::Ident(value) => match parts.last_mut() {
                    Some(last) if glue => last.push_str(&value),
                    _ => parts.push(value),
                },
                TokenType::Comma => match parts.last_mut() {
                    Some(last) => last.push(','),
                    None => parts.push(",".to_string()),
                },
                TokenType::Colon => match parts.last_mut() {
                    Some(last) => last.push(':'),
                    None => parts.push(":".to_string()),
                },
                TokenType::LCurly => {}
            }

            glue = is_colon;
        };

        (parts.join(" "), block_ended)
    }
}
