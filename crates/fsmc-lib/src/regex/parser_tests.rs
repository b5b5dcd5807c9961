use super::{Expr, parse_regex};
use crate::Error;

fn sym(label: &str) -> Expr {
    Expr::symbol(label)
}

fn error(input: &str) -> String {
    let err = parse_regex(input).unwrap_err();
    format!("{err} @ {:?}", err.span().unwrap())
}

#[test]
fn single_symbol() {
    assert_eq!(parse_regex("a").unwrap(), sym("a"));
    assert_eq!(parse_regex(" 'long-name' ").unwrap(), sym("long-name"));
}

#[test]
fn star_binds_tighter_than_concat() {
    assert_eq!(
        parse_regex("ab*").unwrap(),
        Expr::concat(sym("a"), Expr::star(sym("b")))
    );
}

#[test]
fn concat_binds_tighter_than_or() {
    assert_eq!(
        parse_regex("ab|c").unwrap(),
        Expr::or(Expr::concat(sym("a"), sym("b")), sym("c"))
    );
}

#[test]
fn binary_operators_lean_left() {
    assert_eq!(
        parse_regex("abc").unwrap(),
        Expr::concat(Expr::concat(sym("a"), sym("b")), sym("c"))
    );
    assert_eq!(
        parse_regex("a|b|c").unwrap(),
        Expr::or(Expr::or(sym("a"), sym("b")), sym("c"))
    );
}

#[test]
fn groups_override_precedence() {
    assert_eq!(
        parse_regex("(1|2)*33*").unwrap(),
        Expr::concat(
            Expr::concat(Expr::star(Expr::or(sym("1"), sym("2"))), sym("3")),
            Expr::star(sym("3")),
        )
    );
    assert_eq!(
        parse_regex("a(b|c)").unwrap(),
        Expr::concat(sym("a"), Expr::or(sym("b"), sym("c")))
    );
    assert_eq!(parse_regex("((a))").unwrap(), sym("a"));
}

#[test]
fn parse_errors() {
    insta::assert_snapshot!(error(""), @"expected identifier or `(`, found end of input @ 0..0");
    insta::assert_snapshot!(error("a|"), @"expected identifier or `(`, found end of input @ 2..2");
    insta::assert_snapshot!(error("(a"), @"expected `)`, found end of input @ 2..2");
    insta::assert_snapshot!(error("a)"), @"expected end of input, found `)` @ 1..2");
    insta::assert_snapshot!(error("*a"), @"expected identifier or `(`, found `*` @ 0..1");
    insta::assert_snapshot!(error("a**"), @"expected end of input, found `*` @ 2..3");
    insta::assert_snapshot!(error("()"), @"expected identifier or `(`, found `)` @ 1..2");
}

#[test]
fn lexical_errors_surface_through_the_parser() {
    let err = parse_regex("a|#").unwrap_err();
    assert!(matches!(err, Error::Lex(_)));
    insta::assert_snapshot!(err, @"unexpected character '#' at position 2");
}
