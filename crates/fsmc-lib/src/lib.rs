//! fsmc: compiles regular expressions and automaton definitions into finite
//! automata, converts between automaton classes, and runs words through them.
//!
//! # Example
//!
//! ```
//! use fsmc_core::word;
//! use fsmc_lib::{convert_to_dfa, convert_to_nfa, parse_regex, regex_to_epsnfa};
//!
//! let expr = parse_regex("(1|2)*33*").unwrap();
//! let eps_nfa = regex_to_epsnfa(&expr);
//! let dfa = convert_to_dfa(&convert_to_nfa(&eps_nfa));
//!
//! assert!(eps_nfa.accepts(&word("213")));
//! assert_eq!(dfa.accepts(&word("213")), Ok(true));
//! assert_eq!(dfa.accepts(&word("121")), Ok(false));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod automaton;
pub mod convert;
pub mod diagnostics;
pub mod graph;
pub mod lexer;
pub mod parser;
pub mod regex;
pub mod definition;

mod invariants;

#[cfg(test)]
mod graph_tests;

pub use automaton::{Automaton, AutomatonError, AutomatonKind, Dfa, EpsNfa, LookupError, Nfa};
pub use convert::{convert_to_dfa, convert_to_nfa};
pub use diagnostics::DiagnosticsPrinter;
pub use graph::Graph;
pub use lexer::{LexError, Span};
pub use parser::ParseError;
pub use regex::{Expr, parse_regex, regex_to_epsnfa};
pub use definition::parse_automaton;

use fsmc_core::Symbol;

/// Every failure the library reports.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The parts of an automaton do not fit together.
    #[error(transparent)]
    Automaton(#[from] AutomatonError),

    /// A DFA has no transition for the current state and symbol.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// `convert` was asked to go past a DFA.
    #[error("automaton is already a DFA")]
    AlreadyDeterministic,
}

impl Error {
    /// Source range the error points at, for errors raised while reading text.
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Lex(err) => Some(err.span.clone()),
            Self::Parse(err) => Some(err.span.clone()),
            Self::Automaton(_) | Self::Lookup(_) | Self::AlreadyDeterministic => None,
        }
    }

    /// Moves the span by `by` bytes. Used when a literal embedded in a larger
    /// text is parsed on its own.
    pub fn offset(self, by: usize) -> Self {
        match self {
            Self::Lex(err) => Self::Lex(err.offset(by)),
            Self::Parse(err) => Self::Parse(err.offset(by)),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Runs `word` through any automaton. Only DFAs can fail, on a missing
/// transition.
pub fn accepts(automaton: &Automaton, word: &[Symbol]) -> Result<bool> {
    Ok(automaton.accepts(word)?)
}
