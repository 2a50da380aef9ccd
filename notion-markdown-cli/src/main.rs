// Command-line interface for notion-markdown
//
// Converts between Markdown and Notion block API JSON, in both directions. All conversion work is
// done by the notion-markdown library; this binary only reads input, picks the formats and writes
// output.
//
// Usage:
//  notion-markdown to-notion [FILE] [-o OUT] [--indent N]   - Markdown → JSON blocks
//  notion-markdown to-markdown [FILE] [-o OUT]              - JSON blocks → Markdown
//
// Input is read from FILE, or from stdin when it is piped. Output goes to stdout unless -o is given.
//
// Configuration:
//
// Defaults are embedded (see notion-markdown-config). A notion-markdown.toml in the working
// directory is layered on top when present, then the file given with --config, then flags.
//
// Exit codes: 0 on success, 1 on I/O and decoding errors, 2 on usage errors (missing input, JSON
// that is not an array of blocks, no subcommand).

use clap::{value_parser, Arg, ArgMatches, Command, ValueHint};
use notion_markdown::formats::{JsonFormat, MarkdownFormat};
use notion_markdown::{Format, FormatError};
use notion_markdown_config::{Loader, NotionMarkdownConfig};
use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::process;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "NOTION_MARKDOWN_LOG";
const USAGE_ERROR: i32 = 2;

fn io_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("file")
                .help("Input file (reads from stdin if omitted)")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("OUT")
                .help("Write output to a file (prints to stdout if omitted)")
                .value_hint(ValueHint::FilePath),
        )
}

fn build_cli() -> Command {
    Command::new("notion-markdown")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert between Markdown and Notion API block objects")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a notion-markdown.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            io_args(
                Command::new("to-notion").about("Convert Markdown to Notion API JSON blocks"),
            )
            .arg(
                Arg::new("indent")
                    .long("indent")
                    .value_name("N")
                    .help("JSON indentation width (default: 2, use 0 for compact)")
                    .value_parser(value_parser!(usize)),
            ),
        )
        .subcommand(io_args(
            Command::new("to-markdown").about("Convert Notion API JSON blocks to Markdown"),
        ))
}

fn main() {
    let mut cli = build_cli();
    let matches = cli.clone().get_matches();

    let Some((command, sub_matches)) = matches.subcommand() else {
        // Help goes to stdout; a missing subcommand is still a usage error.
        let _ = cli.print_help();
        println!();
        process::exit(USAGE_ERROR);
    };

    let indent = sub_matches.try_get_one::<usize>("indent").ok().flatten().copied();
    let config = load_cli_config(
        matches.get_one::<String>("config").map(String::as_str),
        indent,
    );
    init_logging(&config);

    match command {
        "to-notion" => handle_to_notion(sub_matches, &config),
        "to-markdown" => handle_to_markdown(sub_matches),
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            process::exit(USAGE_ERROR);
        }
    }
}

fn handle_to_notion(matches: &ArgMatches, config: &NotionMarkdownConfig) {
    let markdown = read_input(matches, &MarkdownFormat);
    let blocks = MarkdownFormat.parse(&markdown).unwrap_or_else(|e| fail(&e));
    tracing::debug!(blocks = blocks.len(), "parsed markdown");

    let json = JsonFormat::from(&config.output);
    let output = json.serialize(&blocks).unwrap_or_else(|e| fail(&e));
    write_output(matches, &output);
}

fn handle_to_markdown(matches: &ArgMatches) {
    let json = JsonFormat::default();
    let raw = read_input(matches, &json);
    let blocks = match json.parse(&raw) {
        Ok(blocks) => blocks,
        Err(FormatError::NotAnArray) => {
            eprintln!("Error: {}", FormatError::NotAnArray);
            process::exit(USAGE_ERROR);
        }
        Err(e) => fail(&e),
    };
    tracing::debug!(blocks = blocks.len(), "parsed json");

    let output = MarkdownFormat.serialize(&blocks).unwrap_or_else(|e| fail(&e));
    write_output(matches, &output);
}

fn fail(err: &FormatError) -> ! {
    eprintln!("Error: {err}");
    process::exit(1);
}

fn read_input(matches: &ArgMatches, format: &dyn Format) -> String {
    if let Some(path) = matches.get_one::<String>("file") {
        if !format.matches_filename(path) {
            tracing::warn!(
                path = %path,
                expected = ?format.file_extensions(),
                "reading input as {} despite its extension",
                format.name()
            );
        }
        return fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading file '{path}': {e}");
            process::exit(1);
        });
    }

    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("Error: no input provided. Pass a file or pipe via stdin.");
        process::exit(USAGE_ERROR);
    }

    let mut input = String::new();
    if let Err(e) = stdin.read_to_string(&mut input) {
        eprintln!("Error reading stdin: {e}");
        process::exit(1);
    }
    input
}

fn write_output(matches: &ArgMatches, text: &str) {
    match matches.get_one::<String>("output") {
        Some(path) => {
            if let Err(e) = fs::write(path, text) {
                eprintln!("Error writing file '{path}': {e}");
                process::exit(1);
            }
        }
        None => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()) {
                eprintln!("Error writing output: {e}");
                process::exit(1);
            }
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>, indent: Option<usize>) -> NotionMarkdownConfig {
    let loader = Loader::new().with_local_file(".");
    let loader = match explicit_path {
        Some(path) => loader.with_file(path),
        None => loader,
    };
    let loader = loader.with_json_indent(indent).unwrap_or_else(|err| {
        eprintln!("Invalid --indent value: {err}");
        process::exit(USAGE_ERROR);
    });

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        process::exit(1);
    })
}

/// Logs go to stderr so they never mix with converted output.
fn init_logging(config: &NotionMarkdownConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
