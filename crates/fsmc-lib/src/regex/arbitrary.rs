//! Random regexes and words for property tests.

use fsmc_core::Symbol;
use proptest::{collection, prelude::*, sample};

use super::Expr;

/// Bare and quoted symbols, so rendering has to quote some of them.
const SYMBOLS: [&str; 5] = ["a", "b", "1", "if", "x-y"];

pub fn arb_expr() -> impl Strategy<Value = Expr> {
    let leaf = sample::select(SYMBOLS.to_vec()).prop_map(|symbol: &str| Expr::symbol(symbol));

    leaf.prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(Expr::star),
            (inner.clone(), inner.clone()).prop_map(|(lhs, rhs)| Expr::concat(lhs, rhs)),
            (inner.clone(), inner).prop_map(|(lhs, rhs)| Expr::or(lhs, rhs)),
        ]
    })
}

/// A regex together with a word over the symbols it mentions.
pub fn arb_expr_and_word() -> impl Strategy<Value = (Expr, Vec<Symbol>)> {
    arb_expr().prop_flat_map(|expr| {
        let alphabet = symbols(&expr);
        (Just(expr), collection::vec(sample::select(alphabet), 0..8))
    })
}

fn symbols(expr: &Expr) -> Vec<Symbol> {
    let mut out = Vec::new();
    let mut stack = vec![expr];
    while let Some(expr) = stack.pop() {
        match expr {
            Expr::Symbol(symbol) => {
                if !out.contains(symbol) {
                    out.push(symbol.clone());
                }
            }
            Expr::Star(inner) => stack.push(inner),
            Expr::Concat(lhs, rhs) | Expr::Or(lhs, rhs) => {
                stack.push(lhs);
                stack.push(rhs);
            }
        }
    }
    out
}
