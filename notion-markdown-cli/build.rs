use clap::{value_parser, Arg, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of build_cli() from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
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

fn main() -> Result<(), Error> {
    println!("cargo:rerun-if-changed=build.rs");

    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("notion-markdown")
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
            io_args(Command::new("to-notion").about("Convert Markdown to Notion API JSON blocks"))
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
        ));

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "notion-markdown", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "notion-markdown", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "notion-markdown", &outdir)?;

    Ok(())
}
