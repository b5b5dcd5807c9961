//! Transition literals: `(q, a) -> p`, `(q, a) -> {p, r}`, `(q, '') -> {p}`.

use indexmap::IndexSet;

use super::set::parse_set;
use crate::lexer::scan::{char_at, find, ident, punct, quoted, unexpected};
use crate::lexer::{LexError, LexErrorKind, Lexer, Token, TokenKind, tokenize};
use crate::parser::{Cursor, ParseError, ParseErrorKind, unexpected as unexpected_token};
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    ParenOpen,
    ParenClose,
    Comma,
    Arrow,
    /// `{...}` target, parsed as a set literal.
    Set,
    Ident,
    /// `''`.
    Epsilon,
    Eof,
}

impl TokenKind for TransitionKind {
    const EOF: Self = Self::Eof;

    fn name(self) -> &'static str {
        match self {
            Self::ParenOpen => "`(`",
            Self::ParenClose => "`)`",
            Self::Comma => "`,`",
            Self::Arrow => "`->`",
            Self::Set => "set literal",
            Self::Ident => "identifier",
            Self::Epsilon => "epsilon",
            Self::Eof => "end of input",
        }
    }
}

fn scan(source: &str, at: usize) -> std::result::Result<(Token<TransitionKind>, usize), LexError> {
    let c = char_at(source, at);
    let kind = match c {
        '(' => TransitionKind::ParenOpen,
        ')' => TransitionKind::ParenClose,
        ',' => TransitionKind::Comma,
        '-' if source[at..].starts_with("->") => {
            return Ok((Token::new(TransitionKind::Arrow, at..at + 2), at + 2));
        }
        '{' => {
            let Some(close) = find(source, at, '}') else {
                return Err(LexError::new(
                    LexErrorKind::UnterminatedSet,
                    at..source.len(),
                ));
            };
            let end = close + 1;
            let token = Token::with_text(TransitionKind::Set, &source[at..end], at..end);
            return Ok((token, end));
        }
        '\'' => {
            let (text, end) = quoted(source, at)?;
            let token = if text.is_empty() {
                Token::new(TransitionKind::Epsilon, at..end)
            } else {
                Token::with_text(TransitionKind::Ident, text, at..end)
            };
            return Ok((token, end));
        }
        _ => {
            return ident(source, at, TransitionKind::Ident)?.ok_or_else(|| unexpected(at, c));
        }
    };
    Ok(punct(kind, at, c))
}

pub fn lex(source: &str) -> Lexer<'_, TransitionKind> {
    tokenize(source, scan)
}

/// Right-hand side of a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Single(String),
    Set(IndexSet<String>),
}

/// One parsed transition. `symbol` is `None` for epsilon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: String,
    pub symbol: Option<String>,
    pub target: Target,
}

/// Parses a whole transition literal.
///
/// Spans in errors are relative to `source`.
pub fn parse_transition(source: &str) -> Result<Transition> {
    let mut cursor = Cursor::new(lex(source));
    cursor.expect(TransitionKind::ParenOpen)?;
    let (state, _) = cursor.expect_text(TransitionKind::Ident)?;
    cursor.expect(TransitionKind::Comma)?;

    let token = cursor.bump()?;
    let symbol = match token.kind {
        TransitionKind::Ident => Some(token.into_text()),
        TransitionKind::Epsilon => None,
        _ => {
            let expected = [TransitionKind::Ident, TransitionKind::Epsilon];
            return Err(unexpected_token(&token, &expected).into());
        }
    };

    cursor.expect(TransitionKind::ParenClose)?;
    cursor.expect(TransitionKind::Arrow)?;

    let token = cursor.bump()?;
    let target = match token.kind {
        TransitionKind::Set => {
            let start = token.span.start;
            let set = parse_set(&token.into_text()).map_err(|err| err.offset(start))?;
            Target::Set(set)
        }
        TransitionKind::Ident if symbol.is_none() => {
            return Err(ParseError::new(ParseErrorKind::EpsilonTargetNotSet, token.span).into());
        }
        TransitionKind::Ident => Target::Single(token.into_text()),
        _ => {
            let expected = [TransitionKind::Ident, TransitionKind::Set];
            return Err(unexpected_token(&token, &expected).into());
        }
    };

    cursor.expect(TransitionKind::Eof)?;
    Ok(Transition {
        state,
        symbol,
        target,
    })
}
