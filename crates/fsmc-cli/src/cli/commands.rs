//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Input selection and conversion args shared by every command.
fn with_input_args(cmd: Command) -> Command {
    cmd.arg(input_path_arg())
        .arg(input_text_arg())
        .arg(regex_arg())
        .arg(to_arg())
        .arg(color_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("fsmc")
        .about("Compile regexes and automaton definitions into finite automata")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(dump_command())
        .subcommand(run_command())
}

/// Print the compiled automaton.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Print the compiled automaton")
        .override_usage(
            "\
  fsmc dump <INPUT> [--to <CLASS>] [--format <FORMAT>]
  fsmc dump -t <TEXT> [--regex] [--to <CLASS>] [--format <FORMAT>]",
        )
        .after_help(
            r#"EXAMPLES:
  fsmc dump mod3.fsm                        # parsed automaton
  fsmc dump -t '(1|2)*33*' --regex          # Thompson ε-NFA
  fsmc dump -t '(1|2)*33*' --regex --to dfa # subset construction
  fsmc dump -t 'a|b' --regex --format ast   # regex syntax tree
  fsmc dump mod3.fsm --format json          # node/edge graph"#,
        );

    with_input_args(cmd).arg(format_arg())
}

/// Run words through the compiled automaton.
pub fn run_command() -> Command {
    let cmd = Command::new("run")
        .about("Run words through the compiled automaton")
        .override_usage(
            "\
  fsmc run <INPUT> -w <WORD>...
  fsmc run -t <TEXT> [--regex] [--to <CLASS>] -w <WORD>...",
        )
        .after_help(
            r#"EXAMPLES:
  fsmc run mod3.fsm -w 110110110 -w 111      # accept, reject
  fsmc run -t '(1|2)*33*' --regex -w 213     # accept
  fsmc run -t '(1|2)*33*' --regex --to dfa -w ''

Exits with status 1 if any word is rejected or cannot be run."#,
        );

    with_input_args(cmd).arg(word_arg().required(true))
}
