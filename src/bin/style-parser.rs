use std::fs;

use anyhow::{Context, Result};
use simple_logger::SimpleLogger;

use tinybrowser::html5::html_compile;
use tinybrowser::html5::node::NodeData;
use tinybrowser::styling::styled_node::StyledNode;
use tinybrowser::styling::styling::generate_styled_tree;

fn print_tree(root: &StyledNode, property: Option<&str>) {
    let mut stack = vec![(root, 0)];

    while let Some((node, depth)) = stack.pop() {
        let indent = "  ".repeat(depth);

        match &node.node.data {
            NodeData::Element(data) => println!("{indent}<{}>", data.name()),
            NodeData::Text(text) => println!("{indent}TEXT: \"{}\"", text.value().trim()),
        }

        match property {
            Some(name) => {
                if let Some(value) = node.get_property(name) {
                    println!("{indent}  {name}: {value}");
                }
            }
            None => {
                for (name, value) in node.sorted_properties() {
                    println!("{indent}  {name}: {value}");
                }
            }
        }

        stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
    }
}

fn main() -> Result<()> {
    let matches = clap::Command::new("Tinybrowser style parser")
        .version("0.1.0")
        .arg(
            clap::Arg::new("file")
                .help("The HTML file to style")
                .required(true)
                .index(1),
        )
        .arg(
            clap::Arg::new("debug")
                .help("Enable debug logging")
                .short('d')
                .long("debug")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("property")
                .help("Only display this property")
                .long("property")
                .short('p'),
        )
        .get_matches();

    let file = matches
        .get_one::<String>("file")
        .context("no file given")?;
    let property = matches.get_one::<String>("property").map(String::as_str);

    if matches.get_flag("debug") {
        SimpleLogger::new().init()?;
    }

    let html = fs::read_to_string(file).with_context(|| format!("could not read {file}"))?;

    let document = html_compile(&html);
    let sheet = tinybrowser::stylesheet_from_document(&document);
    log::info!("found {} rules in the document", sheet.rules.len());

    let styled = generate_styled_tree(&document, &sheet);
    print_tree(&styled, property);

    Ok(())
}
