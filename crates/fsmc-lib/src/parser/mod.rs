//! Parser infrastructure shared by the regex and automaton grammars.
//!
//! Every parser is recursive descent over a [`Cursor`]: one token of
//! lookahead, no backtracking. Lexical errors surface lazily, at the point the
//! parser first looks at the offending token.

mod error;


pub use error::{ParseError, ParseErrorKind};

use crate::Result;
use crate::lexer::{LexError, Lexer, Span, Token, TokenKind};

/// One-token lookahead over a token stream.
///
/// Once the stream is exhausted the cursor keeps answering with the
/// end-of-input token, so grammars never have to special-case running off the
/// end.
pub struct Cursor<'src, K> {
    tokens: Lexer<'src, K>,
    peeked: Option<Token<K>>,
    end: usize,
}

impl<'src, K: TokenKind> Cursor<'src, K> {
    pub fn new(tokens: Lexer<'src, K>) -> Self {
        let end = tokens.end();
        Self {
            tokens,
            peeked: None,
            end,
        }
    }

    fn pull(&mut self) -> std::result::Result<Token<K>, LexError> {
        self.tokens
            .next()
            .unwrap_or_else(|| Ok(Token::eof(self.end)))
    }

    pub fn peek(&mut self) -> std::result::Result<&Token<K>, LexError> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.pull()?,
        };
        let token: &Token<K> = self.peeked.insert(token);
        Ok(token)
    }

    pub fn peek_kind(&mut self) -> std::result::Result<K, LexError> {
        self.peek().map(|token| token.kind)
    }

    /// Consumes and returns the current token.
    pub fn bump(&mut self) -> std::result::Result<Token<K>, LexError> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.pull(),
        }
    }

    /// Consumes the current token if it has the given kind.
    pub fn eat(&mut self, kind: K) -> std::result::Result<bool, LexError> {
        if self.peek_kind()? != kind {
            return Ok(false);
        }
        self.bump()?;
        Ok(true)
    }

    /// Consumes a token of the given kind or fails naming what was found.
    pub fn expect(&mut self, kind: K) -> Result<Token<K>> {
        let token = self.bump()?;
        if token.kind != kind {
            return Err(unexpected(&token, &[kind]).into());
        }
        Ok(token)
    }

    /// Consumes a token of the given kind and returns its text.
    pub fn expect_text(&mut self, kind: K) -> Result<(String, Span)> {
        let token = self.expect(kind)?;
        let span = token.span.clone();
        Ok((token.into_text(), span))
    }
}

/// Error for `found` appearing where one of `expected` was required.
pub fn unexpected<K: TokenKind>(found: &Token<K>, expected: &[K]) -> ParseError {
    ParseError::new(
        ParseErrorKind::UnexpectedToken {
            expected: expected.iter().map(|kind| kind.name()).collect(),
            found: found.to_string(),
        },
        found.span.clone(),
    )
}
