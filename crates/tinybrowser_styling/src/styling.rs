use std::collections::HashMap;

use tinybrowser_css3::stylesheet::CssStylesheet;
use tinybrowser_html5::document::Document;
use tinybrowser_html5::node::data::element::ElementData;
use tinybrowser_html5::node::{Node, NodeData};
use tinybrowser_shared::errors::Error;
use tinybrowser_shared::node::NodeId;
use tinybrowser_shared::types::Result;

use crate::defaults::{defaults_for, is_inheritable, GLOBAL_DEFAULTS};
use crate::styled_node::StyledNode;

/// Generates the styled tree for the complete document. The tree is built without recursion, so
/// the nesting depth of the document is only limited by memory.
pub fn generate_styled_tree<'a>(document: &'a Document, sheet: &CssStylesheet) -> StyledNode<'a> {
    let root = style_subtree(document, document.root_node(), sheet);
    log::debug!("styled {} nodes", root.iter().count());

    root
}

/// Generates the styled tree for the subtree starting at the given node. The node is styled as if
/// it had no parent, so nothing is inherited into it.
pub fn style_node<'a>(
    document: &'a Document,
    node_id: NodeId,
    sheet: &CssStylesheet,
) -> Result<StyledNode<'a>> {
    let node = document
        .node_by_id(node_id)
        .ok_or(Error::NodeNotFound(node_id))?;

    Ok(style_subtree(document, node, sheet))
}

fn node_properties(
    node: &Node,
    sheet: &CssStylesheet,
    parent: Option<&HashMap<String, String>>,
) -> HashMap<String, String> {
    match &node.data {
        NodeData::Element(data) => compute_element_properties(data, sheet, parent),
        NodeData::Text(_) => parent.cloned().unwrap_or_default(),
    }
}

/// Styles `top` and all its descendants. Nodes are styled in pre-order from an explicit stack, so
/// every parent is styled before its children. The flat list is then folded back into a tree from
/// the end, which attaches every node to its parent only after its own children are complete.
fn style_subtree<'a>(
    document: &'a Document,
    top: &'a Node,
    sheet: &CssStylesheet,
) -> StyledNode<'a> {
    let mut root = StyledNode::new(top, node_properties(top, sheet, None));

    // styled descendants in pre-order, with the index of their parent (None for `root`)
    let mut styled: Vec<(StyledNode<'a>, Option<usize>)> = Vec::new();
    let mut stack: Vec<(&'a Node, Option<usize>)> = Vec::new();
    push_children(document, top, None, &mut stack);

    while let Some((node, parent_idx)) = stack.pop() {
        let inherited = match parent_idx {
            Some(idx) => styled.get(idx).map(|(parent, _)| &parent.properties),
            None => Some(&root.properties),
        };
        let properties = node_properties(node, sheet, inherited);

        let idx = styled.len();
        styled.push((StyledNode::new(node, properties), parent_idx));
        push_children(document, node, Some(idx), &mut stack);
    }

    // children are collected last-to-first, so every list is reversed once it is complete
    while let Some((mut node, parent_idx)) = styled.pop() {
        node.children.reverse();
        match parent_idx.and_then(|idx| styled.get_mut(idx)) {
            Some((parent, _)) => parent.children.push(node),
            None => root.children.push(node),
        }
    }
    root.children.reverse();

    root
}

fn push_children<'a>(
    document: &'a Document,
    node: &Node,
    parent_idx: Option<usize>,
    stack: &mut Vec<(&'a Node, Option<usize>)>,
) {
    for child_id in node.children().iter().rev() {
        if let Some(child) = document.node_by_id(*child_id) {
            stack.push((child, parent_idx));
        }
    }
}

/// Computes the properties of a single element. Later layers overwrite earlier ones: global
/// defaults, tag defaults, inherited values and finally the declarations of the matching rules
/// from the lowest to the highest specificity.
pub fn compute_element_properties(
    element: &ElementData,
    sheet: &CssStylesheet,
    parent: Option<&HashMap<String, String>>,
) -> HashMap<String, String> {
    let mut props = HashMap::new();

    for (name, value) in GLOBAL_DEFAULTS.iter() {
        props.insert(name.to_string(), value.to_string());
    }

    for (name, value) in defaults_for(element.name()) {
        props.insert(name.to_string(), value.to_string());
    }

    if let Some(parent) = parent {
        for (name, value) in parent {
            if is_inheritable(name) {
                props.insert(name.clone(), value.clone());
            }
        }
    }

    // stable sort: rules with equal specificity stay in source order, so the later rule wins
    let mut matched = sheet.rules_for_element(element);
    matched.sort_by_key(|(_, specificity)| *specificity);

    for (rule, specificity) in matched {
        log::trace!(
            "applying rule {:?} with specificity {specificity} to <{}>",
            rule.selectors,
            element.name()
        );
        for declaration in rule.declarations() {
            props.insert(declaration.property.clone(), declaration.value.clone());
        }
    }

    props
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinybrowser_css3::Css3;
    use tinybrowser_html5::html_compile;
    use test_case::test_case;

    fn find<'s, 'a>(root: &'s StyledNode<'a>, tag: &str) -> &'s StyledNode<'a> {
        root.iter()
            .find(|n| n.node.tag_name() == Some(tag))
            .unwrap()
    }

    #[test]
    fn global_and_tag_defaults() {
        let doc = html_compile("<h1>Title</h1>");
        let sheet = Css3::parse_str("");
        let root = generate_styled_tree(&doc, &sheet);

        assert_eq!(root.get_property("display"), Some("block"));
        assert_eq!(root.get_property("font-weight"), Some("bold"));
        assert_eq!(root.get_property("font-size"), Some("2em"));
        assert_eq!(root.get_property("color"), Some("black"));
        assert_eq!(root.get_property("background-color"), Some("transparent"));
    }

    #[test]
    fn unknown_tag_gets_global_defaults_only() {
        let doc = html_compile("<widget></widget>");
        let root = generate_styled_tree(&doc, &Css3::parse_str(""));

        assert_eq!(root.properties.len(), GLOBAL_DEFAULTS.len());
        assert_eq!(root.get_property("display"), Some("inline"));
    }

    #[test_case(".a { color: blue } #x { color: red }", "red" ; "id beats class")]
    #[test_case("#x { color: red } .a { color: blue }", "red" ; "id beats class regardless of order")]
    #[test_case(".a { color: blue } div { color: green }", "blue" ; "class beats tag")]
    #[test_case("div { color: green } div { color: olive }", "olive" ; "later rule wins tie")]
    #[test_case("div.a { color: green } .a.b { color: olive }", "olive" ; "more classes win")]
    #[test_case("* { color: gray }", "gray" ; "universal")]
    #[test_case("span { color: gray }", "black" ; "no match")]
    fn cascade_order(css: &str, expected: &str) {
        let doc = html_compile(r#"<div id="x" class="a b"></div>"#);
        let root = generate_styled_tree(&doc, &Css3::parse_str(css));

        assert_eq!(root.get_property("color"), Some(expected));
    }

    #[test]
    fn specificity_of_first_matching_selector() {
        // the group matches through `div` (0,0,1) and not through `#x`
        let doc = html_compile(r#"<div class="a"></div>"#);
        let sheet = Css3::parse_str("#x, div { color: red } .a { color: blue }");
        let root = generate_styled_tree(&doc, &sheet);

        assert_eq!(root.get_property("color"), Some("blue"));
    }

    #[test]
    fn inheritance() {
        let doc = html_compile("<div><p><span>Hi</span></p></div>");
        let sheet = Css3::parse_str(
            "div { color: blue; margin: 4px; background-color: red; line-height: 2 }",
        );
        let root = generate_styled_tree(&doc, &sheet);
        let span = find(&root, "span");

        assert_eq!(span.get_property("color"), Some("blue"));
        assert_eq!(span.get_property("line-height"), Some("2"));
        assert_eq!(span.get_property("background-color"), Some("transparent"));
        assert_eq!(span.get_property("display"), Some("inline"));
        assert_eq!(span.get_property("margin"), None);
    }

    #[test]
    fn inherited_values_override_tag_defaults() {
        let doc = html_compile("<div><h1>x</h1></div>");
        let sheet = Css3::parse_str("div { font-size: 10px }");
        let root = generate_styled_tree(&doc, &sheet);

        assert_eq!(find(&root, "h1").get_property("font-size"), Some("10px"));
    }

    #[test]
    fn text_nodes_copy_parent() {
        let doc = html_compile("<div><p>Hi</p></div>");
        let root = generate_styled_tree(&doc, &Css3::parse_str("p { margin: 3px; color: blue }"));
        let p = find(&root, "p");
        let text = &p.children[0];

        assert!(text.is_text());
        assert_eq!(text.properties, p.properties);
        assert_eq!(text.get_property("margin"), Some("3px"));
    }

    #[test]
    fn styled_tree_mirrors_dom() {
        let doc = html_compile("<ul><li>a</li><li>b<b>c</b></li></ul>");
        let root = generate_styled_tree(&doc, &Css3::parse_str(""));

        let styled: Vec<_> = root.iter().map(|n| n.node.id()).collect();
        let dom: Vec<_> = tinybrowser_html5::document::query::TreeIterator::new(&doc).collect();
        assert_eq!(styled, dom);
    }

    #[test]
    fn deeply_nested_document() {
        let depth = 5000;
        let html = format!("{}x{}", "<div>".repeat(depth), "</div>".repeat(depth));
        let doc = html_compile(&html);
        let root = generate_styled_tree(&doc, &Css3::parse_str("div { color: red; margin: 1px }"));

        assert_eq!(root.iter().count(), depth + 1);

        let text = root.iter().last().unwrap();
        assert!(text.is_text());
        assert_eq!(text.get_property("color"), Some("red"));
        assert_eq!(text.get_property("margin"), Some("1px"));
    }

    #[test]
    fn style_single_node() {
        let doc = html_compile("<div><p>x</p></div>");
        let sheet = Css3::parse_str("div { color: red }");
        let p = doc.get_elements_by_tag_name("p")[0];
        let text = doc.node_by_id(p).unwrap().children()[0];

        let styled = style_node(&doc, p, &sheet).unwrap();
        assert_eq!(styled.get_property("color"), Some("black"));
        assert_eq!(styled.get_property("margin-top"), Some("1em"));

        let styled_text = style_node(&doc, text, &sheet).unwrap();
        assert!(styled_text.properties.is_empty());

        let missing = NodeId::from(999usize);
        assert_eq!(
            style_node(&doc, missing, &sheet).unwrap_err(),
            Error::NodeNotFound(missing)
        );
    }

    #[test]
    fn deterministic() {
        let html = "<div class='a'><p id='b'>x</p><p>y</p></div>";
        let css = ".a { color: red } #b { color: blue } p { font-size: 12px }";
        let doc = html_compile(html);
        let sheet = Css3::parse_str(css);

        assert_eq!(
            generate_styled_tree(&doc, &sheet),
            generate_styled_tree(&doc, &sheet)
        );
    }
}
