//! Set literals: `{a, b, 'long'}`.

use indexmap::IndexSet;

use crate::Result;
use crate::lexer::scan::{char_at, ident, punct, unexpected};
use crate::lexer::{LexError, Lexer, Token, TokenKind, tokenize};
use crate::parser::{Cursor, unexpected as unexpected_token};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetKind {
    BraceOpen,
    BraceClose,
    Comma,
    Ident,
    Eof,
}

impl TokenKind for SetKind {
    const EOF: Self = Self::Eof;

    fn name(self) -> &'static str {
        match self {
            Self::BraceOpen => "`{`",
            Self::BraceClose => "`}`",
            Self::Comma => "`,`",
            Self::Ident => "identifier",
            Self::Eof => "end of input",
        }
    }
}

fn scan(source: &str, at: usize) -> std::result::Result<(Token<SetKind>, usize), LexError> {
    let c = char_at(source, at);
    let kind = match c {
        '{' => SetKind::BraceOpen,
        '}' => SetKind::BraceClose,
        ',' => SetKind::Comma,
        _ => return ident(source, at, SetKind::Ident)?.ok_or_else(|| unexpected(at, c)),
    };
    Ok(punct(kind, at, c))
}

pub fn lex(source: &str) -> Lexer<'_, SetKind> {
    tokenize(source, scan)
}

/// Parses a whole set literal. Duplicates collapse; first occurrence wins the
/// position.
///
/// Spans in errors are relative to `source`.
pub fn parse_set(source: &str) -> Result<IndexSet<String>> {
    let mut cursor = Cursor::new(lex(source));
    cursor.expect(SetKind::BraceOpen)?;

    let mut items = IndexSet::new();
    let (first, _) = cursor.expect_text(SetKind::Ident)?;
    items.insert(first);
    while cursor.eat(SetKind::Comma)? {
        let (item, _) = cursor.expect_text(SetKind::Ident)?;
        items.insert(item);
    }

    let token = cursor.bump()?;
    if token.kind != SetKind::BraceClose {
        return Err(unexpected_token(&token, &[SetKind::Comma, SetKind::BraceClose]).into());
    }
    cursor.expect(SetKind::Eof)?;
    Ok(items)
}
