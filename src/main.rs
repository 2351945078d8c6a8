//! tagwright CLI
//!
//! Usage:
//!   tagwright [OPTIONS] [FILE]
//!
//! Options:
//!   -f, --flavor <NAME>  List a built-in flavor's catalog instead of compiling
//!   -p, --prefix <P>     Prefix for derived builder names
//!   -h, --help           Print help
//!
//! Compiles a tag-catalog template and prints the derived builders, one per
//! line, so a template can be checked before it is wired into a flavor.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use tagwright::{
    compile_template_with_prefix, BuilderDefinition, BuilderTable, CompileError, Flavor,
    HandlerRegistry,
};

#[derive(Parser)]
#[command(name = "tagwright")]
#[command(about = "Inspect tag-catalog templates and built-in flavors")]
struct Cli {
    /// Template file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// List a built-in flavor's catalog: xml, html, xhtml, html5, bootstrap
    #[arg(short, long)]
    flavor: Option<String>,

    /// Prefix for derived builder names, overriding the template's own
    #[arg(short, long)]
    prefix: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    if let Some(name) = &cli.flavor {
        let flavor = match name.as_str() {
            "xml" => Flavor::xml(),
            "html" => Flavor::html(),
            "xhtml" => Flavor::xhtml(),
            "html5" => Flavor::html5(),
            "bootstrap" => Flavor::bootstrap(),
            other => {
                eprintln!(
                    "Unknown flavor '{}' (expected xml, html, xhtml, html5 or bootstrap)",
                    other
                );
                std::process::exit(1);
            }
        };
        print_catalog(flavor.builders());
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Read input
    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    match compile_template_with_prefix(&source, cli.prefix.as_deref(), &HandlerRegistry::default())
    {
        Ok(table) => print_catalog(&table),
        Err(CompileError::Parse(errors)) => {
            for error in errors {
                eprintln!("{}", error.format(&source, &filename));
            }
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_catalog(table: &BuilderTable) {
    for name in table.names() {
        let definition = table.get(name).expect("listed name resolves");
        match definition.as_ref() {
            BuilderDefinition::Shallow { tag, .. } => println!("{:<24} <{}>", name, tag),
            BuilderDefinition::Composite { .. } => {
                println!("{:<24} <{}> (composite)", name, definition.tag())
            }
        }
    }
}

fn print_intro() {
    println!(
        r#"tagwright - template-driven HTML/XML writer

USAGE:
    tagwright [OPTIONS] [FILE]
    echo '<template>...</template>' | tagwright

OPTIONS:
    -f, --flavor <NAME>  List a built-in catalog (xml, html, xhtml, html5, bootstrap)
    -p, --prefix <P>     Prefix for derived builder names
    -h, --help           Print help

QUICK START:
    echo '<template><p class="lead"/></template>' | tagwright

This compiles the template and prints the tag builders it derives."#
    );
}
