use tinybrowser_shared::traits::ElementDataType;

use crate::stylesheet::CssSelector;

/// Matches a selector against the given element. Every constraint of the selector (tag, id and
/// each class) must hold for the selector to match.
pub fn match_selector<E: ElementDataType>(selector: &CssSelector, element: &E) -> bool {
    if let Some(tag) = &selector.tag {
        if tag != element.name() {
            return false;
        }
    }

    if let Some(id) = &selector.id {
        if element.id() != Some(id.as_str()) {
            return false;
        }
    }

    selector.classes.iter().all(|class| element.has_class(class))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use test_case::test_case;

    struct TestElement {
        name: String,
        attributes: HashMap<String, String>,
    }

    impl TestElement {
        fn new(name: &str, attributes: &[(&str, &str)]) -> Self {
            Self {
                name: name.to_string(),
                attributes: attributes
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            }
        }
    }

    impl ElementDataType for TestElement {
        fn name(&self) -> &str {
            &self.name
        }

        fn attribute(&self, name: &str) -> Option<&str> {
            self.attributes.get(name).map(String::as_str)
        }
    }

    #[test_case("div", true ; "tag")]
    #[test_case("p", false ; "other tag")]
    #[test_case("*", true ; "universal")]
    #[test_case("#main", true ; "id")]
    #[test_case("#other", false ; "other id")]
    #[test_case(".container", true ; "class")]
    #[test_case(".wide.container", true ; "classes in any order")]
    #[test_case(".container.missing", false ; "missing class")]
    #[test_case("div#main.container.wide", true ; "compound")]
    #[test_case("span#main", false ; "compound with wrong tag")]
    #[test_case(".contain", false ; "class prefix")]
    fn matches(selector: &str, expected: bool) {
        let element = TestElement::new(
            "div",
            &[("id", "main"), ("class", " container\twide ")],
        );

        assert_eq!(match_selector(&CssSelector::parse(selector), &element), expected);
    }

    #[test]
    fn element_without_attributes() {
        let element = TestElement::new("div", &[]);

        assert!(!match_selector(&CssSelector::parse(".a"), &element));
        assert!(!match_selector(&CssSelector::parse("#a"), &element));
        assert!(match_selector(&CssSelector::parse("div"), &element));
    }
}
