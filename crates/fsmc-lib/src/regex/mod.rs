//! Regular expressions: syntax tree, parser, and Thompson construction.
//!
//! The language has symbols, grouping, Kleene star, concatenation by
//! juxtaposition, and alternation with `|`. A symbol is one alphanumeric
//! character or a quoted name such as `'if'`.

mod ast;
mod lexer;
mod parser;
mod thompson;

#[cfg(test)]
pub(crate) mod arbitrary;
#[cfg(test)]
mod lexer_tests;
#[cfg(test)]
mod parser_tests;

pub use ast::Expr;
pub use lexer::{RegexKind, lex};
pub use parser::parse_regex;
pub use thompson::{Thompson, regex_to_epsnfa};
