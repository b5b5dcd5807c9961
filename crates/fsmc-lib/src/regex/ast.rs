//! Regular expression syntax tree.

use std::fmt;

use fsmc_core::Symbol;
use fsmc_core::utils::quote_ident;

/// A regular expression over single symbols.
///
/// Binary nodes nest to the left: `a b c` is `Concat(Concat(a, b), c)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Symbol(Symbol),
    Star(Box<Expr>),
    Concat(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn symbol(symbol: impl Into<Symbol>) -> Self {
        Self::Symbol(symbol.into())
    }

    pub fn star(inner: Expr) -> Self {
        Self::Star(Box::new(inner))
    }

    pub fn concat(lhs: Expr, rhs: Expr) -> Self {
        Self::Concat(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Expr, rhs: Expr) -> Self {
        Self::Or(Box::new(lhs), Box::new(rhs))
    }

    /// Binding strength; higher binds tighter.
    fn precedence(&self) -> u8 {
        match self {
            Self::Or(..) => 0,
            Self::Concat(..) => 1,
            Self::Star(_) => 2,
            Self::Symbol(_) => 3,
        }
    }

    fn write_operand(&self, f: &mut fmt::Formatter<'_>, min: u8) -> fmt::Result {
        if self.precedence() < min {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

/// Regex syntax with the fewest parentheses that keep the tree shape.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(symbol) => f.write_str(&quote_ident(symbol.as_str())),
            Self::Star(inner) => {
                // `a**` does not parse, so a starred star keeps its parens.
                inner.write_operand(f, 3)?;
                f.write_str("*")
            }
            Self::Concat(lhs, rhs) => {
                lhs.write_operand(f, 1)?;
                rhs.write_operand(f, 2)
            }
            Self::Or(lhs, rhs) => {
                lhs.write_operand(f, 0)?;
                f.write_str("|")?;
                rhs.write_operand(f, 1)
            }
        }
    }
}
