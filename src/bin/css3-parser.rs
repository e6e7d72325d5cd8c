use std::fs;

use anyhow::{Context, Result};
use simple_logger::SimpleLogger;

use tinybrowser::css3::tokenizer::Tokenizer;
use tinybrowser::css3::Css3;

fn main() -> Result<()> {
    let matches = clap::Command::new("Tinybrowser CSS3 parser")
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
        .get_matches();

    let file = matches
        .get_one::<String>("file")
        .context("no file given")?;

    if matches.get_flag("debug") {
        SimpleLogger::new().init()?;
    }

    let css = fs::read_to_string(file).with_context(|| format!("could not read {file}"))?;

    if matches.get_flag("tokens") {
        for token in Tokenizer::tokenize(&css) {
            println!("{:<6} {token}", token.position);
        }
        return Ok(());
    }

    let sheet = Css3::parse_str(&css);
    print!("{sheet}");

    Ok(())
}
