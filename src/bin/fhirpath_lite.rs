//! Simple CLI for path-expression evaluation
//!
//! A command-line interface for evaluating simplified FHIRPath expressions
//! against JSON resources.

use clap::{Parser, Subcommand};
use fhirpath_lite::{ExampleCatalog, PathEngine, parse_path};
use serde_json::Value as JsonValue;
use std::fs;
use std::io::{self, Read};
use std::process;

#[derive(Parser)]
#[command(name = "fhirpath-lite")]
#[command(about = "Evaluate simplified FHIRPath expressions against JSON resources")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression against a JSON resource
    Evaluate {
        /// Path expression to evaluate
        expression: String,
        /// JSON file containing the resource (reads from stdin if not provided)
        #[arg(short, long)]
        file: Option<String>,
        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
        /// Suppress informational messages
        #[arg(short, long)]
        quiet: bool,
    },
    /// Show how an expression splits and classifies into segments
    Parse {
        /// Path expression to parse
        expression: String,
    },
    /// List the built-in example expressions
    Examples {
        /// Only list examples in this category
        #[arg(short, long)]
        category: Option<String>,
    },
}

fn main() {
    human_panic::setup_panic!();
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate {
            expression,
            file,
            pretty,
            quiet,
        } => {
            handle_evaluate(&expression, file.as_deref(), pretty, quiet);
        }
        Commands::Parse { expression } => {
            handle_parse(&expression);
        }
        Commands::Examples { category } => {
            handle_examples(category.as_deref());
        }
    }
}

fn handle_evaluate(expression: &str, file: Option<&str>, pretty: bool, quiet: bool) {
    let resource_data = if let Some(filename) = file {
        match fs::read_to_string(filename) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{filename}': {e}");
                process::exit(1);
            }
        }
    } else {
        let mut buffer = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buffer) {
            eprintln!("Error reading from stdin: {e}");
            process::exit(1);
        }
        buffer
    };

    let resource: JsonValue = match serde_json::from_str(&resource_data) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error parsing JSON resource: {e}");
            process::exit(1);
        }
    };

    let engine = PathEngine::new();
    let result = engine.evaluate(expression, &resource);

    if !result.success {
        eprintln!(
            "Error: {}",
            result.error.as_deref().unwrap_or("evaluation failed")
        );
        process::exit(1);
    }

    if !quiet {
        eprintln!("Result type: {}", result.result_type);
    }
    match result.value {
        Some(value) => {
            let rendered = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };
            match rendered {
                Ok(text) => println!("{text}"),
                Err(e) => {
                    eprintln!("Error rendering result: {e}");
                    process::exit(1);
                }
            }
        }
        // An unresolved path is a successful evaluation with no value.
        None => println!("(no result)"),
    }
}

fn handle_parse(expression: &str) {
    let segments = parse_path(expression);
    if segments.is_empty() {
        println!("(root path: returns the document unchanged)");
        return;
    }
    for (position, segment) in segments.iter().enumerate() {
        println!("{position}: {segment:?}");
    }
}

fn handle_examples(category: Option<&str>) {
    let catalog = ExampleCatalog::builtin();
    let examples: Vec<_> = match category {
        Some(category) => catalog.in_category(category).collect(),
        None => catalog.examples.iter().collect(),
    };
    if examples.is_empty() {
        eprintln!("No examples found");
        process::exit(1);
    }
    for example in examples {
        let resource = example.resource_type.as_deref().unwrap_or("any");
        println!(
            "[{}] {} ({}): {}",
            example.category, example.path, resource, example.description
        );
    }
}
