use std::collections::HashMap;

/// The different token structures that can be emitted by the tokenizer
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    DocType {
        /// Everything between `<` and `>`, trimmed (`!DOCTYPE html`)
        content: String,
    },
    StartTag {
        name: String,
        attributes: HashMap<String, String>,
    },
    EndTag {
        name: String,
    },
    SelfClosingTag {
        name: String,
        attributes: HashMap<String, String>,
    },
    Comment {
        comment: String,
    },
    Text {
        text: String,
    },
    Eof,
}

impl Token {
    /// Returns true when the token is an EOF token
    pub fn is_eof(&self) -> bool {
        matches!(self, Token::Eof)
    }

    /// Returns true if the text token is empty or only contains whitespace
    pub fn is_empty_or_white(&self) -> bool {
        if let Token::Text { text } = self {
            text.trim().is_empty()
        } else {
            false
        }
    }
}

fn write_attributes(
    f: &mut std::fmt::Formatter,
    attributes: &HashMap<String, String>,
) -> std::fmt::Result {
    let mut sorted: Vec<_> = attributes.iter().collect();
    sorted.sort_unstable();
    for (key, value) in sorted {
        write!(f, r#" {key}="{value}""#)?;
    }
    Ok(())
}

// Each token can be displayed as a string
impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Token::DocType { content } => write!(f, "<{content}>"),
            Token::Comment { comment } => write!(f, "<!--{comment}-->"),
            Token::Text { text } => write!(f, "{text}"),
            Token::StartTag { name, attributes } => {
                write!(f, "<{name}")?;
                write_attributes(f, attributes)?;
                write!(f, ">")
            }
            Token::SelfClosingTag { name, attributes } => {
                write!(f, "<{name}")?;
                write_attributes(f, attributes)?;
                write!(f, " />")
            }
            Token::EndTag { name } => write!(f, "</{name}>"),
            Token::Eof => write!(f, "EOF"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty_or_white() {
        let token = Token::Text {
            text: " \t\n".to_string(),
        };
        assert!(token.is_empty_or_white());

        let token = Token::Text {
            text: " a ".to_string(),
        };
        assert!(!token.is_empty_or_white());

        assert!(!Token::Eof.is_empty_or_white());
    }

    #[test]
    fn test_display() {
        let mut attributes = HashMap::new();
        attributes.insert("src".to_string(), "a.png".to_string());
        attributes.insert("alt".to_string(), "".to_string());

        let token = Token::SelfClosingTag {
            name: "img".to_string(),
            attributes: attributes.clone(),
        };
        assert_eq!(token.to_string(), r#"<img alt="" src="a.png" />"#);

        let token = Token::StartTag {
            name: "img".to_string(),
            attributes,
        };
        assert_eq!(token.to_string(), r#"<img alt="" src="a.png">"#);

        let token = Token::DocType {
            content: "!DOCTYPE html".to_string(),
        };
        assert_eq!(token.to_string(), "<!DOCTYPE html>");
        assert_eq!(Token::Eof.to_string(), "EOF");
    }
}
