use crate::tokenizer::token::Token;
use std::collections::HashMap;

pub mod token;

/// Options that can be passed to the tokenizer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    /// Text runs that only contain whitespace are not emitted at all
    pub skip_whitespace_text: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            skip_whitespace_text: true,
        }
    }
}

/// The tokenizer will read the input stream and emit tokens that can be used by the parser. It
/// never backtracks: every call moves the cursor forward (or leaves it at the end of the input).
pub struct Tokenizer {
    /// Input characters
    chars: Vec<char>,
    /// Current position in the input
    position: usize,
    /// Options for the tokenizer
    options: Options,
    /// Set once the iterator has handed out its EOF token
    eof_emitted: bool,
}

impl Tokenizer {
    /// Creates a new tokenizer with the given input and options set
    #[must_use]
    pub fn new(input: &str, opts: Option<Options>) -> Self {
        Self {
            chars: input.chars().collect(),
            position: 0,
            options: opts.unwrap_or_default(),
            eof_emitted: false,
        }
    }

    /// Current position (in characters) of the cursor
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns true while there is input left to consume
    pub fn has_more_tokens(&self) -> bool {
        self.position < self.chars.len()
    }

    /// Returns the next token. Once the input is exhausted, every call returns [`Token::Eof`].
    pub fn next_token(&mut self) -> Token {
        loop {
            let Some(&current) = self.chars.get(self.position) else {
                return Token::Eof;
            };

            if current == '<' {
                return self.consume_tag();
            }

            let token = Token::Text {
                text: self.consume_text(),
            };
            if self.options.skip_whitespace_text && token.is_empty_or_white() {
                continue;
            }

            return token;
        }
    }

    fn current_char(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    /// Returns true when the input at the cursor starts with the given string
    fn lookahead_matches(&self, wanted: &str, case_insensitive: bool) -> bool {
        let mut chars = self.chars[self.position..].iter();
        wanted.chars().all(|w| match chars.next() {
            Some(c) if case_insensitive => c.eq_ignore_ascii_case(&w),
            Some(c) => *c == w,
            None => false,
        })
    }

    fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(char::is_whitespace) {
            self.position += 1;
        }
    }

    /// Consumes characters as long as the predicate holds and returns them
    fn consume_while(&mut self, predicate: impl Fn(char) -> bool) -> String {
        let start = self.position;
        while self.current_char().is_some_and(&predicate) {
            self.position += 1;
        }

        self.chars[start..self.position].iter().collect()
    }

    fn consume_tag(&mut self) -> Token {
        // skip '<'
        self.position += 1;

        let Some(next) = self.current_char() else {
            return Token::Eof;
        };

        if next == '!' && self.lookahead_matches("!--", false) {
            return self.consume_comment();
        }
        if next == '!' && self.lookahead_matches("!DOCTYPE", true) {
            return self.consume_doctype();
        }
        if next == '/' {
            return self.consume_end_tag();
        }

        self.consume_start_tag()
    }

    fn consume_comment(&mut self) -> Token {
        // skip '!--'
        self.position += 3;

        let mut comment = String::new();
        while let Some(c) = self.current_char() {
            if self.lookahead_matches("-->", false) {
                self.position += 3;
                break;
            }
            comment.push(c);
            self.position += 1;
        }

        Token::Comment { comment }
    }

    fn consume_doctype(&mut self) -> Token {
        let content = self.consume_while(|c| c != '>');
        self.skip_tag_end();

        Token::DocType {
            content: content.trim().to_string(),
        }
    }

    fn consume_end_tag(&mut self) -> Token {
        // skip '/'
        self.position += 1;

        let mut name = String::new();
        while let Some(c) = self.current_char() {
            self.position += 1;
            if c == '>' {
                break;
            }
            if !c.is_whitespace() {
                name.push(c);
            }
        }

        Token::EndTag {
            name: name.to_lowercase(),
        }
    }

    fn consume_start_tag(&mut self) -> Token {
        let name = self
            .consume_while(|c| !c.is_whitespace() && c != '>' && c != '/')
            .to_lowercase();
        self.skip_whitespace();

        let attributes = self.consume_attributes();

        let is_self_closing = self.current_char() == Some('/');
        if is_self_closing {
            self.position += 1;
        }

        // anything up to the closing '>' is ignored
        self.consume_while(|c| c != '>');
        self.skip_tag_end();

        if is_self_closing {
            Token::SelfClosingTag { name, attributes }
        } else {
            Token::StartTag { name, attributes }
        }
    }

    fn consume_attributes(&mut self) -> HashMap<String, String> {
        let mut attributes = HashMap::new();

        while let Some(c) = self.current_char() {
            if c == '>' || c == '/' {
                break;
            }
            if c.is_whitespace() {
                self.position += 1;
                continue;
            }

            let name = self
                .consume_while(|c| c != '=' && !c.is_whitespace() && c != '>' && c != '/')
                .to_lowercase();
            if name.is_empty() {
                break;
            }

            self.skip_whitespace();

            let mut value = String::new();
            if self.current_char() == Some('=') {
                self.position += 1;
                self.skip_whitespace();
                value = self.consume_attribute_value();
            }

            attributes.insert(name, value);
            self.skip_whitespace();
        }

        attributes
    }

    fn consume_attribute_value(&mut self) -> String {
        match self.current_char() {
            Some(quote) if quote == '"' || quote == '\'' => {
                self.position += 1;
                let value = self.consume_while(|c| c != quote);
                // closing quote, if any
                if self.current_char().is_some() {
                    self.position += 1;
                }
                value
            }
            Some(_) => self.consume_while(|c| !c.is_whitespace() && c != '>' && c != '/'),
            None => String::new(),
        }
    }

    fn consume_text(&mut self) -> String {
        self.consume_while(|c| c != '<')
    }

    fn skip_tag_end(&mut self) {
        if self.current_char() == Some('>') {
            self.position += 1;
        }
    }
}

impl Iterator for Tokenizer {
    type Item = Token;

    /// Yields every token including a single trailing [`Token::Eof`]
    fn next(&mut self) -> Option<Token> {
        if self.eof_emitted {
            return None;
        }

        let token = self.next_token();
        log::trace!("emitting token: {token:?}");
        if token.is_eof() {
            self.eof_emitted = true;
        }

        Some(token)
    }
}
