use super::lex;

fn snapshot(input: &str) -> String {
    let mut out = String::new();
    for token in lex(input) {
        match token {
            Ok(token) => out.push_str(&format!("{token} {:?}\n", token.span)),
            Err(err) => out.push_str(&format!("error: {err}\n")),
        }
    }
    out
}

#[test]
fn operators_and_identifiers() {
    insta::assert_snapshot!(snapshot("(a|'bc')* 1"), @r"
    `(` 0..1
    identifier 'a' 1..2
    `|` 2..3
    identifier 'bc' 3..7
    `)` 7..8
    `*` 8..9
    identifier '1' 10..11
    end of input 11..11
    ");
}

#[test]
fn adjacent_characters_are_separate_symbols() {
    insta::assert_snapshot!(snapshot("ab"), @r"
    identifier 'a' 0..1
    identifier 'b' 1..2
    end of input 2..2
    ");
}

#[test]
fn unicode_letters_are_symbols() {
    insta::assert_snapshot!(snapshot("é"), @r"
    identifier 'é' 0..2
    end of input 2..2
    ");
}

#[test]
fn errors() {
    insta::assert_snapshot!(snapshot("a+b"), @r"
    identifier 'a' 0..1
    error: unexpected character '+' at position 1
    ");
    insta::assert_snapshot!(snapshot("''"), @"error: empty identifier is reserved for epsilon at position 0");
    insta::assert_snapshot!(snapshot("'ab"), @"error: unterminated quoted identifier at position 0");
    insta::assert_snapshot!(snapshot("'a,b'"), @"error: invalid character ',' in identifier at position 2");
}
