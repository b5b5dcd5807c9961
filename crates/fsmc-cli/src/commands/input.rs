//! Loading, parsing and converting the input shared by every command.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use fsmc_lib::{Automaton, AutomatonKind, Expr, parse_automaton, parse_regex, regex_to_epsnfa};

/// Automaton class to convert up to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Nfa,
    Dfa,
}

impl Target {
    fn reached_by(self, kind: AutomatonKind) -> bool {
        match self {
            Target::Nfa => kind != AutomatonKind::EpsNfa,
            Target::Dfa => kind == AutomatonKind::Dfa,
        }
    }
}

pub struct InputArgs {
    pub path: Option<PathBuf>,
    pub text: Option<String>,
    pub regex: bool,
    pub to: Option<Target>,
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("input is required: use a positional path or -t/--text")]
    Missing,

    #[error("input cannot be empty")]
    Empty,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", path.display())]
    File { path: PathBuf, source: io::Error },
}

/// Input text and where it came from.
#[derive(Debug)]
pub struct Source {
    pub text: String,
    /// Shown in error reports; `None` for inline text.
    pub path: Option<String>,
}

pub fn load_source(path: Option<&Path>, text: Option<&str>) -> Result<Source, InputError> {
    let source = match (text, path) {
        (Some(text), _) => Source {
            text: text.to_owned(),
            path: None,
        },
        (None, Some(path)) if path.as_os_str() == "-" => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(InputError::Stdin)?;
            Source {
                text: buf,
                path: Some("<stdin>".to_owned()),
            }
        }
        (None, Some(path)) => Source {
            text: fs::read_to_string(path).map_err(|source| InputError::File {
                path: path.to_owned(),
                source,
            })?,
            path: Some(path.to_string_lossy().into_owned()),
        },
        (None, None) => return Err(InputError::Missing),
    };

    if source.text.trim().is_empty() {
        return Err(InputError::Empty);
    }
    Ok(source)
}

/// The automaton built from the input, plus the regex it came from if any.
#[derive(Debug)]
pub struct Compiled {
    pub expr: Option<Expr>,
    pub automaton: Automaton,
}

pub fn compile(text: &str, regex: bool, to: Option<Target>) -> fsmc_lib::Result<Compiled> {
    let (expr, mut automaton) = if regex {
        let expr = parse_regex(text)?;
        let automaton = regex_to_epsnfa(&expr).into();
        (Some(expr), automaton)
    } else {
        (None, parse_automaton(text)?)
    };

    if let Some(target) = to {
        while !target.reached_by(automaton.kind()) {
            automaton = automaton.convert()?;
        }
    }

    Ok(Compiled { expr, automaton })
}

/// Loads and compiles the input, or reports the failure and exits.
pub fn load_or_exit(args: &InputArgs, color: bool) -> Compiled {
    let source = load_source(args.path.as_deref(), args.text.as_deref()).unwrap_or_else(|err| {
        eprintln!("error: {}", err);
        std::process::exit(1);
    });

    match compile(&source.text, args.regex, args.to) {
        Ok(compiled) => compiled,
        Err(err) => {
            let mut printer = err.printer().source(&source.text).colored(color);
            if let Some(path) = &source.path {
                printer = printer.path(path);
            }
            eprintln!("{}", printer.render());
            std::process::exit(1);
        }
    }
}
