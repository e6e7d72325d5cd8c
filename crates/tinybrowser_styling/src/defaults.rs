use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

type Properties = Vec<(&'static str, &'static str)>;

fn block(extra: &[(&'static str, &'static str)]) -> Properties {
    let mut props = vec![("display", "block")];
    props.extend_from_slice(extra);
    props
}

fn display(value: &'static str, extra: &[(&'static str, &'static str)]) -> Properties {
    let mut props = vec![("display", value)];
    props.extend_from_slice(extra);
    props
}

fn heading(size: &'static str, margin: &'static str) -> Properties {
    block(&[
        ("font-size", size),
        ("font-weight", "bold"),
        ("margin-top", margin),
        ("margin-bottom", margin),
    ])
}

const VERTICAL_MARGINS: [(&str, &str); 2] = [("margin-top", "1em"), ("margin-bottom", "1em")];

lazy_static! {
    /// Properties every element starts out with
    pub static ref GLOBAL_DEFAULTS: Properties = vec![
        ("color", "black"),
        ("background-color", "transparent"),
        ("font-size", "16px"),
        ("font-family", "serif"),
        ("font-weight", "normal"),
        ("font-style", "normal"),
        ("text-decoration", "none"),
        ("text-align", "left"),
        ("display", "inline"),
    ];

    /// Default properties per tag name. Tags not in this table only get the global defaults.
    pub static ref TAG_DEFAULTS: HashMap<&'static str, Properties> = {
        let mut m = HashMap::new();

        // block level elements
        m.insert("html", block(&[]));
        m.insert("body", block(&[("margin", "8px")]));
        m.insert("div", block(&[]));
        m.insert("p", block(&VERTICAL_MARGINS));
        m.insert("h1", heading("2em", "0.67em"));
        m.insert("h2", heading("1.5em", "0.83em"));
        m.insert("h3", heading("1.17em", "1em"));
        m.insert("h4", heading("1em", "1.33em"));
        m.insert("h5", heading("0.83em", "1.67em"));
        m.insert("h6", heading("0.67em", "2.33em"));
        m.insert("ul", block(&[
            VERTICAL_MARGINS[0],
            VERTICAL_MARGINS[1],
            ("padding-left", "40px"),
            ("list-style-type", "disc"),
        ]));
        m.insert("ol", block(&[
            VERTICAL_MARGINS[0],
            VERTICAL_MARGINS[1],
            ("padding-left", "40px"),
            ("list-style-type", "decimal"),
        ]));
        m.insert("li", display("list-item", &[]));
        m.insert("blockquote", block(&[
            VERTICAL_MARGINS[0],
            VERTICAL_MARGINS[1],
            ("margin-left", "40px"),
            ("margin-right", "40px"),
        ]));
        m.insert("pre", block(&[
            ("font-family", "monospace"),
            ("white-space", "pre"),
            VERTICAL_MARGINS[0],
            VERTICAL_MARGINS[1],
        ]));
        for tag in ["header", "footer", "section", "article", "nav", "aside"] {
            m.insert(tag, block(&[]));
        }

        // inline elements
        m.insert("span", display("inline", &[]));
        m.insert("a", display("inline", &[("color", "blue"), ("text-decoration", "underline")]));
        m.insert("strong", display("inline", &[("font-weight", "bold")]));
        m.insert("b", display("inline", &[("font-weight", "bold")]));
        m.insert("em", display("inline", &[("font-style", "italic")]));
        m.insert("i", display("inline", &[("font-style", "italic")]));
        m.insert("code", display("inline", &[("font-family", "monospace")]));
        m.insert("small", display("inline", &[("font-size", "0.83em")]));

        // void elements
        m.insert("br", block(&[]));
        m.insert("hr", block(&[
            ("margin-top", "0.5em"),
            ("margin-bottom", "0.5em"),
            ("border-top", "1px solid black"),
        ]));
        m.insert("img", display("inline", &[]));

        // form elements
        for tag in ["input", "button", "textarea", "select"] {
            m.insert(tag, display("inline-block", &[]));
        }

        // tables
        m.insert("table", display("table", &[
            ("border-collapse", "separate"),
            ("border-spacing", "2px"),
        ]));
        m.insert("tr", display("table-row", &[]));
        m.insert("td", display("table-cell", &[("padding", "1px")]));
        m.insert("th", display("table-cell", &[
            ("padding", "1px"),
            ("font-weight", "bold"),
            ("text-align", "center"),
        ]));
        m.insert("thead", display("table-header-group", &[]));
        m.insert("tbody", display("table-row-group", &[]));
        m.insert("tfoot", display("table-footer-group", &[]));

        // head elements are never displayed
        for tag in ["head", "title", "meta", "link", "style", "script"] {
            m.insert(tag, display("none", &[]));
        }

        m
    };

    /// Properties that are passed from a parent element to its child elements
    pub static ref INHERITABLE_PROPERTIES: HashSet<&'static str> = [
        "color",
        "font-family",
        "font-size",
        "font-weight",
        "font-style",
        "line-height",
        "text-align",
        "text-decoration",
        "text-transform",
        "letter-spacing",
        "word-spacing",
        "white-space",
        "list-style-type",
    ]
    .into_iter()
    .collect();
}

/// Default properties for the given tag name (empty for unknown tags)
pub fn defaults_for(tag_name: &str) -> &'static [(&'static str, &'static str)] {
    TAG_DEFAULTS
        .get(tag_name)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

pub fn is_inheritable(property: &str) -> bool {
    INHERITABLE_PROPERTIES.contains(property)
}
