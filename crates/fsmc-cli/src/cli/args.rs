//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Input file (positional). `-` reads stdin.
pub fn input_path_arg() -> Arg {
    Arg::new("input_path")
        .value_name("INPUT")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("input_text")
        .help("Automaton definition or regex file (`-` for stdin)")
}

/// Inline input text (-t/--text).
pub fn input_text_arg() -> Arg {
    Arg::new("input_text")
        .short('t')
        .long("text")
        .value_name("TEXT")
        .help("Inline automaton definition or regex")
}

/// Read the input as a regular expression (--regex).
pub fn regex_arg() -> Arg {
    Arg::new("regex")
        .long("regex")
        .action(ArgAction::SetTrue)
        .help("Input is a regular expression instead of an automaton definition")
}

/// Conversion target (--to).
pub fn to_arg() -> Arg {
    Arg::new("to")
        .long("to")
        .value_name("CLASS")
        .value_parser(["nfa", "dfa"])
        .help("Convert up to this automaton class")
}

/// Output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("def")
        .value_parser(["def", "json", "ast"])
        .help("Output format: automaton definition, JSON graph, or regex syntax tree")
}

/// Words to run (-w/--word, repeatable).
pub fn word_arg() -> Arg {
    Arg::new("words")
        .short('w')
        .long("word")
        .value_name("WORD")
        .action(ArgAction::Append)
        .allow_hyphen_values(true)
        .help("Word to run, one symbol per character (repeatable)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize error reports")
}
