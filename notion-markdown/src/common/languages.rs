//! Code fence info strings → Notion code block languages.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// The language Notion uses for unhighlighted code.
pub const PLAIN_TEXT: &str = "plain text";

/// Common fence aliases and their Notion spelling.
static ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("py", "python"),
        ("python3", "python"),
        ("js", "javascript"),
        ("jsx", "javascript"),
        ("ts", "typescript"),
        ("tsx", "typescript"),
        ("sh", "shell"),
        ("zsh", "shell"),
        ("fish", "shell"),
        ("console", "shell"),
        ("yml", "yaml"),
        ("rb", "ruby"),
        ("rs", "rust"),
        ("cs", "c#"),
        ("csharp", "c#"),
        ("cpp", "c++"),
        ("cc", "c++"),
        ("cxx", "c++"),
        ("objc", "objective-c"),
        ("kt", "kotlin"),
        ("kts", "kotlin"),
        ("tex", "latex"),
        ("md", "markdown"),
        ("dockerfile", "docker"),
        ("proto", "protobuf"),
        ("hs", "haskell"),
        ("ex", "elixir"),
        ("exs", "elixir"),
        ("erl", "erlang"),
        ("fs", "f#"),
        ("fsharp", "f#"),
        ("pl", "perl"),
        ("ps1", "powershell"),
        ("psm1", "powershell"),
        ("vb", "visual basic"),
        ("wasm", "webassembly"),
        ("wat", "webassembly"),
        ("text", PLAIN_TEXT),
        ("txt", PLAIN_TEXT),
        ("plaintext", PLAIN_TEXT),
        ("plain", PLAIN_TEXT),
    ])
});

/// Every language value the block API accepts for code blocks.
static NOTION_LANGUAGES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "abap",
        "agda",
        "arduino",
        "assembly",
        "bash",
        "basic",
        "bnf",
        "c",
        "c#",
        "c++",
        "clojure",
        "coffeescript",
        "coq",
        "css",
        "dart",
        "dhall",
        "diff",
        "docker",
        "ebnf",
        "elixir",
        "elm",
        "erlang",
        "f#",
        "flow",
        "fortran",
        "gherkin",
        "glsl",
        "go",
        "graphql",
        "groovy",
        "haskell",
        "html",
        "idris",
        "java",
        "javascript",
        "json",
        "julia",
        "kotlin",
        "latex",
        "less",
        "lisp",
        "livescript",
        "llvm ir",
        "lua",
        "makefile",
        "markdown",
        "markup",
        "matlab",
        "mathematica",
        "mermaid",
        "mizar",
        "nix",
        "notion formula",
        "objective-c",
        "ocaml",
        "pascal",
        "perl",
        "php",
        PLAIN_TEXT,
        "powershell",
        "prolog",
        "protobuf",
        "purescript",
        "python",
        "r",
        "racket",
        "reason",
        "ruby",
        "rust",
        "sass",
        "scala",
        "scheme",
        "scss",
        "shell",
        "solidity",
        "sql",
        "swift",
        "toml",
        "typescript",
        "vb.net",
        "verilog",
        "vhdl",
        "visual basic",
        "webassembly",
        "xml",
        "yaml",
        "java/c/c++/c#",
    ])
});

/// Normalize a fence info string to a language the block API accepts.
///
/// Only the first word counts (`python title="x"` is `python`). Unknown
/// languages become [`PLAIN_TEXT`].
pub fn normalize_language(info: &str) -> String {
    let Some(word) = info.split_whitespace().next() else {
        return PLAIN_TEXT.to_string();
    };
    let lang = word.to_lowercase();
    let mapped = ALIASES.get(lang.as_str()).copied().unwrap_or(lang.as_str());
    if NOTION_LANGUAGES.contains(mapped) {
        mapped.to_string()
    } else {
        PLAIN_TEXT.to_string()
    }
}
