use std::cmp::Ordering;
use std::fmt::{self, Display};
use tinybrowser_shared::traits::ElementDataType;

use crate::matcher::match_selector;

/// Defines a complete stylesheet with all its rules in source order
#[derive(Debug, Default, PartialEq, Clone)]
pub struct CssStylesheet {
    /// List of rules found in this stylesheet
    pub rules: Vec<CssRule>,
}

impl CssStylesheet {
    /// Returns every rule that matches the element, together with the specificity it matched
    /// with. Rules are returned in source order.
    pub fn rules_for_element<E: ElementDataType>(
        &self,
        element: &E,
    ) -> Vec<(&CssRule, Specificity)> {
        self.rules
            .iter()
            .filter_map(|rule| {
                rule.matching_selector(element)
                    .map(|selector| (rule, selector.specificity()))
            })
            .collect()
    }
}

impl Display for CssStylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}

/// A CSS rule, which contains a list of selectors and a list of declarations
#[derive(Debug, Default, PartialEq, Clone)]
pub struct CssRule {
    /// Selectors that must match for the declarations to apply
    pub selectors: Vec<CssSelector>,
    /// Actual declarations that will be applied if the selectors match
    pub declarations: Vec<CssDeclaration>,
}

impl CssRule {
    pub fn declarations(&self) -> &Vec<CssDeclaration> {
        &self.declarations
    }

    /// Returns the first selector (in group order) that matches the element
    pub fn matching_selector<E: ElementDataType>(&self, element: &E) -> Option<&CssSelector> {
        self.selectors
            .iter()
            .find(|selector| match_selector(selector, element))
    }
}

impl Display for CssRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let selectors: Vec<String> = self.selectors.iter().map(ToString::to_string).collect();
        writeln!(f, "{} {{", selectors.join(", "))?;
        for declaration in &self.declarations {
            writeln!(f, "  {declaration};")?;
        }
        write!(f, "}}")
    }
}

/// A CSS declaration, which contains a property and its raw value
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CssDeclaration {
    /// Property name (`color`)
    pub property: String,
    /// Raw value of the declaration, multiple parts joined by a single space ("1px solid black")
    pub value: String,
}

impl CssDeclaration {
    pub fn new(property: &str, value: &str) -> Self {
        Self {
            property: property.to_string(),
            value: value.to_string(),
        }
    }
}

impl Display for CssDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.value)
    }
}

/// A simple selector: an optional tag name, an optional id and a set of classes that all must be
/// present on the element. A selector without any constraint matches every element.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct CssSelector {
    /// Tag name (lowercase), None matches any tag
    pub tag: Option<String>,
    /// Id the element must have
    pub id: Option<String>,
    /// Classes the element must have. Order is irrelevant, duplicates are not stored.
    pub classes: Vec<String>,
}

impl CssSelector {
    /// Parses a selector like `div#main.container.wide`. `*` (or an empty tag part) does not
    /// constrain the tag.
    pub fn parse(selector: &str) -> Self {
        let mut result = CssSelector::default();
        let mut tag = String::new();
        let mut chars = selector.trim().chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '#' | '.' => {
                    let mut segment = String::new();
                    while let Some(&next) = chars.peek() {
                        if next == '#' || next == '.' {
                            break;
                        }
                        segment.push(next);
                        chars.next();
                    }

                    if segment.is_empty() {
                        continue;
                    }
                    if c == '#' {
                        result.id = Some(segment);
                    } else if !result.classes.contains(&segment) {
                        result.classes.push(segment);
                    }
                }
                _ => tag.push(c),
            }
        }

        let tag = tag.trim();
        if !tag.is_empty() && tag != "*" {
            result.tag = Some(tag.to_lowercase());
        }

        result
    }

    /// Generate specificity for this selector
    pub fn specificity(&self) -> Specificity {
        Specificity::new(
            u32::from(self.id.is_some()),
            u32::try_from(self.classes.len()).unwrap_or(u32::MAX),
            u32::from(self.tag.is_some()),
        )
    }
}

impl Display for CssSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "{tag}")?,
            None if self.id.is_none() && self.classes.is_empty() => write!(f, "*")?,
            None => {}
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        Ok(())
    }
}

/// Defines the specificity for a selector as (ids, classes, tags)
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Specificity(u32, u32, u32);

impl Specificity {
    pub fn new(a: u32, b: u32, c: u32) -> Self {
        Self(a, b, c)
    }
}

impl Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

impl PartialOrd for Specificity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Specificity {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.0.cmp(&other.0) {
            Ordering::Equal => match self.1.cmp(&other.1) {
                Ordering::Equal => self.2.cmp(&other.2),
                ordering => ordering,
            },
            ordering => ordering,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("div", Some("div"), None, &[] ; "tag")]
    #[test_case("DIV", Some("div"), None, &[] ; "tag is lowercased")]
    #[test_case("*", None, None, &[] ; "universal")]
    #[test_case("#main", None, Some("main"), &[] ; "id")]
    #[test_case(".a.b", None, None, &["a", "b"] ; "classes")]
    #[test_case("div#main.container", Some("div"), Some("main"), &["container"] ; "compound")]
    #[test_case("*.note", None, None, &["note"] ; "universal with class")]
    #[test_case(".a.a", None, None, &["a"] ; "duplicate classes")]
    #[test_case("p..x.", Some("p"), None, &["x"] ; "empty class segments")]
    #[test_case("#one#two", None, Some("two"), &[] ; "last id wins")]
    #[test_case("  span  ", Some("span"), None, &[] ; "trimmed")]
    fn parse_selector(input: &str, tag: Option<&str>, id: Option<&str>, classes: &[&str]) {
        let selector = CssSelector::parse(input);

        assert_eq!(selector.tag.as_deref(), tag);
        assert_eq!(selector.id.as_deref(), id);
        assert_eq!(selector.classes, classes);
    }

    #[test_case("div", Specificity::new(0, 0, 1))]
    #[test_case(".a", Specificity::new(0, 1, 0))]
    #[test_case("#x", Specificity::new(1, 0, 0))]
    #[test_case("*", Specificity::new(0, 0, 0))]
    #[test_case("h1#x.a.b", Specificity::new(1, 2, 1))]
    fn selector_specificity(input: &str, expected: Specificity) {
        assert_eq!(CssSelector::parse(input).specificity(), expected);
    }

    #[test]
    fn test_specificity_ordering() {
        let id = Specificity::new(1, 0, 0);
        let class = Specificity::new(0, 1, 0);
        let tag = Specificity::new(0, 0, 1);

        assert!(id > class);
        assert!(class > tag);
        assert!(Specificity::new(1, 0, 0) > Specificity::new(0, 10, 10));
        assert!(Specificity::new(0, 2, 0) > Specificity::new(0, 1, 5));
        assert_eq!(
            Specificity::new(0, 1, 1).cmp(&Specificity::new(0, 1, 1)),
            Ordering::Equal
        );
    }

    #[test]
    fn display() {
        assert_eq!(CssSelector::parse("DIV#main.container").to_string(), "div#main.container");
        assert_eq!(CssSelector::parse("*").to_string(), "*");
        assert_eq!(CssSelector::parse(".a").to_string(), ".a");
        assert_eq!(CssDeclaration::new("color", "red").to_string(), "color: red");

        let rule = CssRule {
            selectors: vec![CssSelector::parse("h1"), CssSelector::parse("h2")],
            declarations: vec![CssDeclaration::new("font-size", "20px")],
        };
        assert_eq!(rule.to_string(), "h1, h2 {\n  font-size: 20px;\n}");
    }
}
