//! Statement-level tokens of the automaton language.
//!
//! Set and transition literals are captured whole, as opaque blobs, and parsed
//! by their own grammars afterwards.

use crate::lexer::scan::{char_at, find, ident, punct, unexpected};
use crate::lexer::{LexError, LexErrorKind, Lexer, Token, TokenKind, tokenize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefKind {
    /// `Q`, the state set.
    States,
    /// `A`, the alphabet.
    Alphabet,
    /// `I`, the initial state.
    Initial,
    /// `F`, the accepting states.
    Accepting,
    Equals,
    Semicolon,
    /// `{...}` up to and including the first `}`.
    Set,
    /// `(...` up to but excluding the next `;`.
    Transition,
    Ident,
    Eof,
}

impl TokenKind for DefKind {
    const EOF: Self = Self::Eof;

    fn name(self) -> &'static str {
        match self {
            Self::States => "`Q`",
            Self::Alphabet => "`A`",
            Self::Initial => "`I`",
            Self::Accepting => "`F`",
            Self::Equals => "`=`",
            Self::Semicolon => "`;`",
            Self::Set => "set literal",
            Self::Transition => "transition literal",
            Self::Ident => "identifier",
            Self::Eof => "end of input",
        }
    }
}

fn scan(source: &str, at: usize) -> Result<(Token<DefKind>, usize), LexError> {
    let c = char_at(source, at);
    let kind = match c {
        'Q' => DefKind::States,
        'A' => DefKind::Alphabet,
        'I' => DefKind::Initial,
        'F' => DefKind::Accepting,
        '=' => DefKind::Equals,
        ';' => DefKind::Semicolon,
        '{' => {
            let Some(close) = find(source, at, '}') else {
                return Err(LexError::new(
                    LexErrorKind::UnterminatedSet,
                    at..source.len(),
                ));
            };
            return Ok(blob(source, DefKind::Set, at, close + 1));
        }
        '(' => {
            let Some(semi) = find(source, at, ';') else {
                return Err(LexError::new(
                    LexErrorKind::UnterminatedTransition,
                    at..source.len(),
                ));
            };
            return Ok(blob(source, DefKind::Transition, at, semi));
        }
        _ => return ident(source, at, DefKind::Ident)?.ok_or_else(|| unexpected(at, c)),
    };
    Ok(punct(kind, at, c))
}

fn blob(source: &str, kind: DefKind, start: usize, end: usize) -> (Token<DefKind>, usize) {
    (Token::with_text(kind, &source[start..end], start..end), end)
}

pub fn lex(source: &str) -> Lexer<'_, DefKind> {
    tokenize(source, scan)
}
