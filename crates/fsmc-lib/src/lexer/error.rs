use std::fmt;

use super::Span;

/// Lexical failure: the input cannot be split into tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at position {}", .span.start)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// No token of the grammar starts with this character.
    UnexpectedChar(char),
    /// Character not allowed between quotes.
    InvalidIdentChar(char),
    UnterminatedIdent,
    UnterminatedSet,
    UnterminatedTransition,
    /// `''` where epsilon is not allowed.
    EmptyIdent,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedChar(c) => write!(f, "unexpected character {c:?}"),
            Self::InvalidIdentChar(c) => write!(f, "invalid character {c:?} in identifier"),
            Self::UnterminatedIdent => f.write_str("unterminated quoted identifier"),
            Self::UnterminatedSet => f.write_str("unterminated set literal"),
            Self::UnterminatedTransition => f.write_str("unterminated transition literal"),
            Self::EmptyIdent => f.write_str("empty identifier is reserved for epsilon"),
        }
    }
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// The offending character, for errors caused by one.
    pub fn character(&self) -> Option<char> {
        match self.kind {
            LexErrorKind::UnexpectedChar(c) | LexErrorKind::InvalidIdentChar(c) => Some(c),
            _ => None,
        }
    }

    /// Moves the span by `by` bytes, for errors raised inside an embedded literal.
    pub fn offset(mut self, by: usize) -> Self {
        self.span = self.span.start + by..self.span.end + by;
        self
    }
}
