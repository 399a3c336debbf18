//! Command-line interface for rstlite
//! Converts marked-up text files to HTML for preview, and dumps the
//! intermediate tree for diagnostics.
//!
//! Usage:
//!   rstlite <path> [--format <format>] [--input-format <format>]   - Convert a file (`-` reads stdin)
//!   rstlite <path> --format treeviz                                - Dump the parsed tree

use std::io::Read;

use clap::{Arg, Command};
use rstlite_babel::{convert, FormatName, HtmlOptions};
use rstlite_config::{Loader, RstliteConfig};

fn main() {
    env_logger::init();

    let matches = Command::new("rstlite")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a subset of reStructuredText to HTML for preview")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the input file, or '-' for stdin")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: html, treeviz, json")
                .default_value("html"),
        )
        .arg(
            Arg::new("input-format")
                .long("input-format")
                .short('i')
                .help("Input format: auto, rst, plain, markdown")
                .default_value("auto"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to a configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("heading-level")
                .long("heading-level")
                .value_parser(clap::value_parser!(i64).range(1..=6))
                .help("Heading level used for section titles"),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").unwrap();
    let format = matches.get_one::<String>("format").unwrap();
    let input_format = matches.get_one::<String>("input-format").unwrap();

    let config = load_config(&matches);
    let source = read_source(path);

    let output = match format.as_str() {
        "html" => handle_convert_command(&source, input_format, &config),
        "treeviz" => {
            let doc = rstlite_parser::parse(&source);
            rstlite_babel::formats::treeviz::to_treeviz(&doc, config.inspect.treeviz.label_width)
        }
        "json" => {
            let doc = rstlite_parser::parse(&source);
            serde_json::to_string_pretty(&doc).unwrap_or_else(|e| {
                eprintln!("Error formatting tree: {}", e);
                std::process::exit(1);
            })
        }
        other => {
            eprintln!("Format '{}' not supported", other);
            eprintln!("Available formats: html, treeviz, json");
            std::process::exit(1);
        }
    };

    print!("{}", output);
}

/// Layer the configuration sources and apply CLI overrides.
fn load_config(matches: &clap::ArgMatches) -> RstliteConfig {
    let mut loader = Loader::new().with_optional_file(".rstlite.toml");
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(level) = matches.get_one::<i64>("heading-level") {
        loader = loader
            .set_override("render.html.heading_level", *level)
            .unwrap_or_else(|e| {
                eprintln!("Invalid override: {}", e);
                std::process::exit(1);
            });
    }
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

/// Read the input file, or stdin for `-`.
fn read_source(path: &str) -> String {
    if path == "-" {
        let mut buffer = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
            eprintln!("Error reading stdin: {}", e);
            std::process::exit(1);
        }
        buffer
    } else {
        std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading '{}': {}", path, e);
            std::process::exit(1);
        })
    }
}

/// Convert source text to HTML honoring the input format selection.
fn handle_convert_command(source: &str, input_format: &str, config: &RstliteConfig) -> String {
    let options = HtmlOptions {
        heading_level: config.render.html.heading_level,
        document_class: config.render.html.document_class.clone(),
    };
    let default = config
        .convert
        .default_format
        .parse::<FormatName>()
        .unwrap_or_else(|e| {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        });
    let forced = match input_format {
        "auto" => None,
        other => Some(other.parse::<FormatName>().unwrap_or_else(|e| {
            eprintln!("{}", e);
            eprintln!("Available input formats: auto, rst, plain, markdown");
            std::process::exit(1);
        })),
    };
    convert(source, forced, default, &options)
}
