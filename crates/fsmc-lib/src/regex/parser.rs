//! Recursive descent for regular expressions.
//!
//! ```text
//! regex  := or EOF
//! or     := concat ('|' concat)*
//! concat := star star*
//! star   := atom '*'?
//! atom   := IDENT | '(' or ')'
//! ```

use super::ast::Expr;
use super::lexer::{RegexKind, lex};
use crate::Result;
use crate::parser::{Cursor, unexpected};

pub fn parse_regex(source: &str) -> Result<Expr> {
    let mut parser = RegexParser {
        cursor: Cursor::new(lex(source)),
    };
    let expr = parser.or()?;
    parser.cursor.expect(RegexKind::Eof)?;
    log::debug!("parsed regex {expr}");
    Ok(expr)
}

struct RegexParser<'src> {
    cursor: Cursor<'src, RegexKind>,
}

impl RegexParser<'_> {
    fn or(&mut self) -> Result<Expr> {
        let mut expr = self.concat()?;
        while self.cursor.eat(RegexKind::Pipe)? {
            expr = Expr::or(expr, self.concat()?);
        }
        Ok(expr)
    }

    fn concat(&mut self) -> Result<Expr> {
        let mut expr = self.star()?;
        while self.starts_atom()? {
            expr = Expr::concat(expr, self.star()?);
        }
        Ok(expr)
    }

    fn star(&mut self) -> Result<Expr> {
        let atom = self.atom()?;
        if self.cursor.eat(RegexKind::Star)? {
            return Ok(Expr::star(atom));
        }
        Ok(atom)
    }

    fn atom(&mut self) -> Result<Expr> {
        let token = self.cursor.bump()?;
        match token.kind {
            RegexKind::Ident => Ok(Expr::symbol(token.into_text())),
            RegexKind::ParenOpen => {
                let inner = self.or()?;
                self.cursor.expect(RegexKind::ParenClose)?;
                Ok(inner)
            }
            _ => Err(unexpected(&token, &[RegexKind::Ident, RegexKind::ParenOpen]).into()),
        }
    }

    fn starts_atom(&mut self) -> Result<bool> {
        let kind = self.cursor.peek_kind()?;
        Ok(matches!(kind, RegexKind::Ident | RegexKind::ParenOpen))
    }
}
