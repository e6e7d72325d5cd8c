use crate::stylesheet::CssStylesheet;
use crate::tokenizer::Token;
use crate::Css3;

mod declaration;
mod rule;

impl Css3 {
    /// Consumes any token
    pub fn consume_any(&mut self) -> Token {
        self.tokenizer.consume()
    }

    /// Parses rules until the input is exhausted. Rules without any selector are dropped.
    pub(crate) fn parse_stylesheet_internal(&mut self) -> CssStylesheet {
        log::trace!("parse_stylesheet");

        let mut sheet = CssStylesheet::default();
        while self.tokenizer.has_more_tokens() {
            if let Some(rule) = self.parse_rule() {
                sheet.rules.push(rule);
            }
        }

        sheet
    }
}

#[cfg(test)]
mod tests {
    use crate::stylesheet::{CssDeclaration, CssSelector};
    use crate::Css3;

    #[test]
    fn parse_stylesheet() {
        let sheet = Css3::parse_str(
            r#"
            /* headings */
            h1, h2 { font-size: 20px; font-weight: bold }
            .note { color: gray; }
            #main { margin: 0 auto; }
            "#,
        );

        assert_eq!(sheet.rules.len(), 3);
        assert_eq!(
            sheet.rules[0].selectors,
            vec![CssSelector::parse("h1"), CssSelector::parse("h2")]
        );
        assert_eq!(
            sheet.rules[0].declarations,
            vec![
                CssDeclaration::new("font-size", "20px"),
                CssDeclaration::new("font-weight", "bold")
            ]
        );
        assert_eq!(sheet.rules[2].declarations, vec![CssDeclaration::new("margin", "0 auto")]);
    }

    #[test]
    fn rules_keep_source_order() {
        let sheet = Css3::parse_str("a{x:1} b{x:2} c{x:3}");
        let names: Vec<String> = sheet
            .rules
            .iter()
            .map(|rule| rule.selectors[0].to_string())
            .collect();

        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn display_round_trip() {
        let css = "div#main.container {\n  color: red;\n  margin: 0 auto;\n}\n";
        let sheet = Css3::parse_str(css);

        assert_eq!(sheet.to_string(), css);
        assert_eq!(Css3::parse_str(&sheet.to_string()), sheet);
    }
}
