use std::fmt;

use crate::lexer::Span;
use crate::definition::Field;

/// Parse failure: the tokens do not form a valid sentence of the grammar, or
/// they violate a structural rule of the automaton language.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    UnexpectedToken {
        expected: Vec<&'static str>,
        found: String,
    },
    /// `(q, '') -> p` instead of `(q, '') -> {p}`.
    EpsilonTargetNotSet,
    AlreadyDefined(Field),
    NotDefined(Field),
    TransitionsNotDefined,
    DuplicateTransition {
        state: String,
        symbol: String,
    },
    DuplicateEpsilon {
        state: String,
    },
    /// Set-valued transition after single-target transitions were committed.
    SetTargetInDfa,
    /// Single-target transition after set-valued or epsilon transitions.
    SingleTargetInNfa,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "expected {}, found {found}", join_alternatives(expected))
            }
            Self::EpsilonTargetNotSet => {
                f.write_str("epsilon transition must lead to a set of states")
            }
            Self::AlreadyDefined(field) => write!(f, "{field} already defined"),
            Self::NotDefined(field) => write!(f, "{field} not defined"),
            Self::TransitionsNotDefined => f.write_str("transitions not defined"),
            Self::DuplicateTransition { state, symbol } => {
                write!(f, "multiple transitions for ({state}, {symbol})")
            }
            Self::DuplicateEpsilon { state } => {
                write!(f, "multiple epsilon transitions for {state}")
            }
            Self::SetTargetInDfa => f.write_str(
                "transition leads to a set of states, but earlier transitions lead to single states",
            ),
            Self::SingleTargetInNfa => f.write_str(
                "transition leads to a single state, but earlier transitions lead to sets of states",
            ),
        }
    }
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Moves the span by `by` bytes, for errors raised inside an embedded literal.
    pub fn offset(mut self, by: usize) -> Self {
        self.span = self.span.start + by..self.span.end + by;
        self
    }
}

/// `a`, `a or b`, `a, b or c`.
fn join_alternatives(names: &[&str]) -> String {
    match names {
        [] => String::from("nothing"),
        [only] => (*only).to_owned(),
        [init @ .., last] => format!("{} or {last}", init.join(", ")),
    }
}
