//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::dump::{DumpArgs, OutputFormat};
use crate::commands::input::{InputArgs, Target};
use crate::commands::run::RunArgs;

pub struct DumpParams {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub regex: bool,
    pub to: Option<Target>,
    pub format: OutputFormat,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            input_text: m.get_one::<String>("input_text").cloned(),
            regex: m.get_flag("regex"),
            to: parse_target(m),
            format: parse_format(m),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            input: InputArgs {
                path: p.input_path,
                text: p.input_text,
                regex: p.regex,
                to: p.to,
            },
            format: p.format,
            color: p.color.should_colorize(),
        }
    }
}

pub struct RunParams {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub regex: bool,
    pub to: Option<Target>,
    pub words: Vec<String>,
    pub color: ColorChoice,
}

impl RunParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            input_text: m.get_one::<String>("input_text").cloned(),
            regex: m.get_flag("regex"),
            to: parse_target(m),
            words: m
                .get_many::<String>("words")
                .map(|words| words.cloned().collect())
                .unwrap_or_default(),
            color: parse_color(m),
        }
    }
}

impl From<RunParams> for RunArgs {
    fn from(p: RunParams) -> Self {
        Self {
            input: InputArgs {
                path: p.input_path,
                text: p.input_text,
                regex: p.regex,
                to: p.to,
            },
            words: p.words,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_target(m: &ArgMatches) -> Option<Target> {
    match m.get_one::<String>("to").map(|s| s.as_str()) {
        Some("nfa") => Some(Target::Nfa),
        Some("dfa") => Some(Target::Dfa),
        _ => None,
    }
}

fn parse_format(m: &ArgMatches) -> OutputFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => OutputFormat::Json,
        Some("ast") => OutputFormat::Ast,
        _ => OutputFormat::Def,
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
