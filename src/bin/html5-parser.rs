use std::fs;

use anyhow::{Context, Result};
use simple_logger::SimpleLogger;

use tinybrowser::html5::parser::{Html5Parser, Html5ParserOptions};
use tinybrowser::html5::tokenizer::{Options, Tokenizer};

fn main() -> Result<()> {
    let matches = clap::Command::new("Tinybrowser HTML5 parser")
        .version("0.1.0")
        .arg(
            clap::Arg::new("file")
                .help("The file to parse")
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
            clap::Arg::new("tokens")
                .help("Just print the tokens")
                .long("tokens")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("keep-whitespace")
                .help("Keep text that only contains whitespace")
                .long("keep-whitespace")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let file = matches
        .get_one::<String>("file")
        .context("no file given")?;
    let skip_whitespace_text = !matches.get_flag("keep-whitespace");

    if matches.get_flag("debug") {
        SimpleLogger::new().init()?;
    }

    let html = fs::read_to_string(file).with_context(|| format!("could not read {file}"))?;

    if matches.get_flag("tokens") {
        let tokenizer = Tokenizer::new(&html, Some(Options { skip_whitespace_text }));
        for token in tokenizer {
            println!("{token}");
        }
        return Ok(());
    }

    let document =
        Html5Parser::parse_document(&html, Some(Html5ParserOptions { skip_whitespace_text }));
    print!("{document}");

    Ok(())
}
