//! The automaton definition language.
//!
//! ```text
//! Q = {i, q, f};
//! A = {0, 1};
//! I = i;
//! F = {f};
//! (i, 1) -> {q, f};
//! (f, '') -> {i};
//! ```
//!
//! Statements come in any order. Each field is assigned exactly once. The
//! shape of the transitions decides the class of the result: single targets
//! give a DFA, target sets an NFA, and any epsilon transition an ε-NFA.

mod lexer;
mod parser;
mod set;
mod transition;


use std::fmt;

pub use lexer::{DefKind, lex};
pub use parser::parse_automaton;
pub use set::{SetKind, parse_set};
pub use transition::{Target, Transition, TransitionKind, parse_transition};

/// A top-level field of an automaton definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// `Q`
    States,
    /// `A`
    Alphabet,
    /// `I`
    Initial,
    /// `F`
    Accepting,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::States => "states",
            Self::Alphabet => "alphabet",
            Self::Initial => "initial state",
            Self::Accepting => "accepting states",
        })
    }
}
