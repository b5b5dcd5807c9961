//! Scanning helpers shared by the grammar-specific scanners.

use fsmc_core::utils::is_ident_char;

use super::{LexError, LexErrorKind, Token, TokenKind};

/// The character at `at`.
///
/// # Panics
/// Panics when `at` is not the start of a character. The driver only calls
/// scanners at character boundaries before the end of input.
pub(crate) fn char_at(source: &str, at: usize) -> char {
    source[at..]
        .chars()
        .next()
        .unwrap_or_else(|| panic!("scanner called at end of input (offset {at})"))
}

/// One-character token.
pub(crate) fn punct<K: TokenKind>(kind: K, at: usize, c: char) -> (Token<K>, usize) {
    let end = at + c.len_utf8();
    (Token::new(kind, at..end), end)
}

pub(crate) fn unexpected(at: usize, c: char) -> LexError {
    LexError::new(LexErrorKind::UnexpectedChar(c), at..at + c.len_utf8())
}

/// Reads a quoted identifier whose opening quote is at `at`.
///
/// Returns the text between the quotes, which may be empty, and the offset
/// past the closing quote.
pub(crate) fn quoted(source: &str, at: usize) -> Result<(String, usize), LexError> {
    let start = at + 1;
    for (i, c) in source[start..].char_indices() {
        let pos = start + i;
        if c == '\'' {
            return Ok((source[start..pos].to_owned(), pos + 1));
        }
        if !is_ident_char(c) {
            return Err(LexError::new(
                LexErrorKind::InvalidIdentChar(c),
                pos..pos + c.len_utf8(),
            ));
        }
    }
    Err(LexError::new(
        LexErrorKind::UnterminatedIdent,
        at..source.len(),
    ))
}

/// Reads an identifier at `at`: one alphanumeric character or a non-empty
/// quoted run. Returns `Ok(None)` when neither starts here.
pub(crate) fn ident<K: TokenKind>(
    source: &str,
    at: usize,
    kind: K,
) -> Result<Option<(Token<K>, usize)>, LexError> {
    let c = char_at(source, at);
    if c == '\'' {
        let (text, end) = quoted(source, at)?;
        if text.is_empty() {
            return Err(LexError::new(LexErrorKind::EmptyIdent, at..end));
        }
        return Ok(Some((Token::with_text(kind, text, at..end), end)));
    }
    if c.is_alphanumeric() {
        let end = at + c.len_utf8();
        return Ok(Some((Token::with_text(kind, c, at..end), end)));
    }
    Ok(None)
}

/// Offset of the first `stop` at or after `at`.
pub(crate) fn find(source: &str, at: usize, stop: char) -> Option<usize> {
    source[at..].find(stop).map(|i| at + i)
}
