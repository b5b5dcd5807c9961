use crate::lexer::scan::{char_at, ident, punct, unexpected};
use crate::lexer::{LexError, Lexer, Token, TokenKind, tokenize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegexKind {
    ParenOpen,
    ParenClose,
    Star,
    Pipe,
    Ident,
    Eof,
}

impl TokenKind for RegexKind {
    const EOF: Self = Self::Eof;

    fn name(self) -> &'static str {
        match self {
            Self::ParenOpen => "`(`",
            Self::ParenClose => "`)`",
            Self::Star => "`*`",
            Self::Pipe => "`|`",
            Self::Ident => "identifier",
            Self::Eof => "end of input",
        }
    }
}

fn scan(source: &str, at: usize) -> Result<(Token<RegexKind>, usize), LexError> {
    let c = char_at(source, at);
    let kind = match c {
        '(' => RegexKind::ParenOpen,
        ')' => RegexKind::ParenClose,
        '*' => RegexKind::Star,
        '|' => RegexKind::Pipe,
        _ => return ident(source, at, RegexKind::Ident)?.ok_or_else(|| unexpected(at, c)),
    };
    Ok(punct(kind, at, c))
}

pub fn lex(source: &str) -> Lexer<'_, RegexKind> {
    tokenize(source, scan)
}
