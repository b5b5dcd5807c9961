//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Params extraction: correct fields are extracted from ArgMatches
//! 2. Argument validation: conflicting or missing args are rejected

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{dump_command, run_command};
use crate::commands::dump::OutputFormat;
use crate::commands::input::Target;

#[test]
fn dump_defaults() {
    let m = dump_command()
        .try_get_matches_from(["dump", "mod3.fsm"])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.input_path, Some(PathBuf::from("mod3.fsm")));
    assert_eq!(params.input_text, None);
    assert!(!params.regex);
    assert_eq!(params.to, None);
    assert_eq!(params.format, OutputFormat::Def);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn dump_regex_to_dfa_as_json() {
    let m = dump_command()
        .try_get_matches_from([
            "dump", "-t", "(1|2)*33*", "--regex", "--to", "dfa", "--format", "json", "--color",
            "never",
        ])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.input_path, None);
    assert_eq!(params.input_text.as_deref(), Some("(1|2)*33*"));
    assert!(params.regex);
    assert_eq!(params.to, Some(Target::Dfa));
    assert_eq!(params.format, OutputFormat::Json);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn dump_rejects_unknown_values() {
    let result = dump_command().try_get_matches_from(["dump", "x", "--to", "epsnfa"]);
    assert!(result.is_err());

    let result = dump_command().try_get_matches_from(["dump", "x", "--format", "dot"]);
    assert!(result.is_err());
}

#[test]
fn path_and_text_conflict() {
    let result = dump_command().try_get_matches_from(["dump", "mod3.fsm", "-t", "a"]);
    assert!(result.is_err());
}

#[test]
fn run_collects_words_in_order() {
    let m = run_command()
        .try_get_matches_from(["run", "-", "-w", "110", "--word", "", "-w", "-1", "--to", "nfa"])
        .unwrap();
    let params = RunParams::from_matches(&m);

    assert_eq!(params.input_path, Some(PathBuf::from("-")));
    assert_eq!(params.words, ["110", "", "-1"]);
    assert_eq!(params.to, Some(Target::Nfa));
}

#[test]
fn run_requires_a_word() {
    let result = run_command().try_get_matches_from(["run", "mod3.fsm"]);
    assert!(result.is_err());
}

#[test]
fn run_does_not_take_format() {
    let result = run_command().try_get_matches_from(["run", "x", "-w", "1", "--format", "json"]);
    assert!(result.is_err());
}

#[test]
fn cli_requires_subcommand() {
    assert!(build_cli().try_get_matches_from(["fsmc"]).is_err());
    assert!(build_cli().try_get_matches_from(["fsmc", "dump", "-t", "a", "--regex"]).is_ok());
}

#[test]
fn params_convert_to_args() {
    let m = run_command()
        .try_get_matches_from(["run", "-t", "a*", "--regex", "-w", "aa", "--color", "always"])
        .unwrap();
    let args: crate::commands::run::RunArgs = RunParams::from_matches(&m).into();

    assert_eq!(args.input.text.as_deref(), Some("a*"));
    assert!(args.input.regex);
    assert_eq!(args.words, ["aa"]);
    assert!(args.color);
}
