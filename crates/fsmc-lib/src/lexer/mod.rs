//! Tokenizer infrastructure shared by every grammar.
//!
//! A grammar contributes only a [`ScanFn`]: given the source and a byte offset
//! that is known to start a token, it reads exactly one token and reports where
//! the next one may begin. [`Lexer`] drives that function over the input,
//! skipping whitespace between tokens and closing the stream with a single
//! end-of-input token.
//!
//! ## Error handling
//!
//! The first lexical error ends the stream. Nothing is yielded after it, so a
//! parser never observes tokens that follow malformed input.

mod error;
pub(crate) mod scan;


use std::fmt;
use std::iter::FusedIterator;
use std::ops::Range;

pub use error::{LexError, LexErrorKind};

/// Byte range into the text that was tokenized.
pub type Span = Range<usize>;

/// Closed set of token kinds for one grammar.
pub trait TokenKind: Copy + Eq + fmt::Debug {
    /// End-of-input marker; every token stream ends with exactly one.
    const EOF: Self;

    /// Human-readable name used in diagnostics.
    fn name(self) -> &'static str;
}

/// A token: kind plus the identifier text for kinds that carry one.
///
/// The span only feeds diagnostics. Two tokens are equal when their kind and
/// text are, wherever they came from.
#[derive(Debug, Clone)]
pub struct Token<K> {
    pub kind: K,
    pub text: Option<String>,
    pub span: Span,
}

impl<K: TokenKind> Token<K> {
    #[inline]
    pub fn new(kind: K, span: Span) -> Self {
        Self {
            kind,
            text: None,
            span,
        }
    }

    #[inline]
    pub fn with_text(kind: K, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: Some(text.into()),
            span,
        }
    }

    /// End-of-input token positioned at `at`.
    pub fn eof(at: usize) -> Self {
        Self::new(K::EOF, at..at)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == K::EOF
    }

    /// Takes the identifier text out of a token that carries one.
    ///
    /// # Panics
    /// Panics on a token without text. Scanners attach text to every
    /// identifier and literal token, so parsers call this only on those kinds.
    pub fn into_text(self) -> String {
        let kind = self.kind;
        self.text
            .unwrap_or_else(|| panic!("broken lexer invariant: {} token without text", kind.name()))
    }
}

impl<K: PartialEq> PartialEq for Token<K> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text
    }
}

impl<K: Eq> Eq for Token<K> {}

impl<K: TokenKind> fmt::Display for Token<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            Some(text) => write!(f, "{} '{}'", self.kind.name(), text),
            None => f.write_str(self.kind.name()),
        }
    }
}

/// Reads one token starting at a byte offset.
///
/// Returns the token and the offset just past it. The offset passed in always
/// points at a non-whitespace character.
pub type ScanFn<K> = fn(&str, usize) -> Result<(Token<K>, usize), LexError>;

/// Lazy token stream over `source`, terminated by one end-of-input token.
pub struct Lexer<'src, K> {
    source: &'src str,
    pos: usize,
    scan: ScanFn<K>,
    finished: bool,
}

impl<'src, K: TokenKind> Lexer<'src, K> {
    pub fn new(source: &'src str, scan: ScanFn<K>) -> Self {
        Self {
            source,
            pos: 0,
            scan,
            finished: false,
        }
    }

    /// Offset one past the last byte of the source.
    #[inline]
    pub fn end(&self) -> usize {
        self.source.len()
    }
}

impl<K: TokenKind> Iterator for Lexer<'_, K> {
    type Item = Result<Token<K>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let rest = &self.source[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();

        if self.pos >= self.source.len() {
            self.finished = true;
            return Some(Ok(Token::eof(self.source.len())));
        }

        match (self.scan)(self.source, self.pos) {
            Ok((token, next)) => {
                debug_assert!(next > self.pos, "scanner made no progress at {}", self.pos);
                self.pos = next;
                Some(Ok(token))
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

impl<K: TokenKind> FusedIterator for Lexer<'_, K> {}

/// Tokenizes `source` with a grammar's scan function.
pub fn tokenize<K: TokenKind>(source: &str, scan: ScanFn<K>) -> Lexer<'_, K> {
    Lexer::new(source, scan)
}
