use std::fmt;

/// The different kinds of tokens the CSS tokenizer emits. The tokenizer does not know whether an
/// identifier is a selector, a property or a value, that is up to the parser.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TokenType {
    /// A `{`
    LCurly,
    /// A `}`
    RCurly,
    /// A `:`
    Colon,
    /// A `;`
    Semicolon,
    /// A `,`
    Comma,
    /// Any run of characters that is neither whitespace nor one of the delimiters above
    Ident(String),
    /// End of the input
    Eof,
}

/// A token together with the offset (in characters) where it starts
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    /// Type of the token
    pub token_type: TokenType,
    /// Offset of the token in the input
    pub position: usize,
}

impl Token {
    /// Returns a new token for the given type on the given position
    fn new(token_type: TokenType, position: usize) -> Token {
        Token {
            token_type,
            position,
        }
    }

    fn new_ident(value: &str, position: usize) -> Token {
        Token::new(TokenType::Ident(value.to_string()), position)
    }

    pub fn is_eof(&self) -> bool {
        self.token_type == TokenType::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.token_type {
            TokenType::LCurly => write!(f, "{{"),
            TokenType::RCurly => write!(f, "}}"),
            TokenType::Colon => write!(f, ":"),
            TokenType::Semicolon => write!(f, ";"),
            TokenType::Comma => write!(f, ","),
            TokenType::Ident(value) => write!(f, "{value}"),
            TokenType::Eof => write!(f, "EOF"),
        }
    }
}

/// CSS tokenizer. Whitespace and comments are skipped, they never show up as tokens.
pub struct Tokenizer {
    /// Input characters
    chars: Vec<char>,
    /// Current position in the input
    position: usize,
}

fn is_delimiter(c: char) -> bool {
    matches!(c, '{' | '}' | ':' | ';' | ',')
}

impl Tokenizer {
    /// Creates a new tokenizer for the given input
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            position: 0,
        }
    }

    /// Tokenizes the complete input. The last token is always [`TokenType::Eof`].
    pub fn tokenize(input: &str) -> Vec<Token> {
        let mut tokenizer = Tokenizer::new(input);
        let mut tokens = Vec::new();
        loop {
            let token = tokenizer.consume();
            let eof = token.is_eof();
            tokens.push(token);
            if eof {
                break;
            }
        }

        tokens
    }

    /// Returns true when there are tokens left, skipping any whitespace and comments
    pub fn has_more_tokens(&mut self) -> bool {
        self.skip_whitespace_and_comments();
        !self.eof()
    }

    /// Returns true when the end of the input has been reached
    pub fn eof(&self) -> bool {
        self.position >= self.chars.len()
    }

    /// Consumes and returns the next token. At the end of the input an EOF token is returned,
    /// each time this function is called.
    pub fn consume(&mut self) -> Token {
        self.skip_whitespace_and_comments();

        let start = self.position;
        let Some(&c) = self.chars.get(self.position) else {
            return Token::new(TokenType::Eof, start);
        };

        let token_type = match c {
            '{' => TokenType::LCurly,
            '}' => TokenType::RCurly,
            ':' => TokenType::Colon,
            ';' => TokenType::Semicolon,
            ',' => TokenType::Comma,
            _ => {
                let token = self.consume_ident();
                log::trace!("{token:?}");
                return token;
            }
        };
        self.position += 1;

        let token = Token::new(token_type, start);
        log::trace!("{token:?}");
        token
    }

    fn consume_ident(&mut self) -> Token {
        let start = self.position;
        while let Some(&c) = self.chars.get(self.position) {
            if c.is_whitespace() || is_delimiter(c) {
                break;
            }
            self.position += 1;
        }

        let value: String = self.chars[start..self.position].iter().collect();
        Token::new_ident(&value, start)
    }

    fn at_comment_start(&self) -> bool {
        self.chars.get(self.position) == Some(&'/') && self.chars.get(self.position + 1) == Some(&'*')
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(&c) = self.chars.get(self.position) {
            if c.is_whitespace() {
                self.position += 1;
                continue;
            }

            if self.at_comment_start() {
                self.position += 2;
                while self.position < self.chars.len() {
                    if self.chars.get(self.position) == Some(&'*')
                        && self.chars.get(self.position + 1) == Some(&'/')
                    {
                        self.position += 2;
                        break;
                    }
                    self.position += 1;
                }
                continue;
            }

            break;
        }
    }
}
