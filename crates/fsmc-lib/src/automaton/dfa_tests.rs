use fsmc_core::{State, Symbol, word};

use super::{AutomatonError, Dfa, LookupError, Universe};

fn universe(states: &[&str], alphabet: &[&str], initial: &str, accepting: &[&str]) -> Universe {
    Universe::new(
        states.iter().copied().map(State::from),
        alphabet.iter().copied().map(Symbol::from),
        State::from(initial),
        accepting.iter().copied().map(State::from),
    )
    .unwrap()
}

fn edge(state: &str, symbol: &str, target: &str) -> ((State, Symbol), State) {
    ((state.into(), symbol.into()), target.into())
}

/// Reads a binary number most significant bit first and tracks it modulo 3.
fn mod3(drop: Option<(&str, &str)>) -> Dfa {
    let edges = [
        edge("p", "0", "p"),
        edge("p", "1", "q"),
        edge("q", "0", "r"),
        edge("q", "1", "p"),
        edge("r", "0", "q"),
        edge("r", "1", "r"),
    ];
    let edges = edges.into_iter().filter(|((state, symbol), _)| {
        drop.is_none_or(|(s, a)| state.as_str() != s || symbol.as_str() != a)
    });
    Dfa::new(universe(&["p", "q", "r"], &["0", "1"], "p", &["p"]), edges).unwrap()
}

#[test]
fn mod3_counter() {
    let dfa = mod3(None);

    assert!(dfa.is_total());
    assert_eq!(dfa.accepts(&word("110110110")), Ok(true));
    assert_eq!(dfa.accepts(&word("111")), Ok(false));
    assert_eq!(dfa.accepts(&word("")), Ok(true));
    assert_eq!(dfa.accepts(&word("11")), Ok(true));
}

#[test]
fn missing_transition_is_a_lookup_error() {
    let dfa = mod3(Some(("r", "1")));

    assert!(!dfa.is_total());
    assert_eq!(dfa.accepts(&word("100")), Ok(false));
    let err = dfa.accepts(&word("101")).unwrap_err();
    assert_eq!(
        err,
        LookupError {
            state: "r".into(),
            symbol: "1".into(),
        }
    );
    insta::assert_snapshot!(err, @"no transition for (r, 1)");
}

#[test]
fn symbol_outside_alphabet_is_a_lookup_error() {
    let dfa = mod3(None);

    let err = dfa.accepts(&word("12")).unwrap_err();
    insta::assert_snapshot!(err, @"no transition for (q, 2)");
}

#[test]
fn step_follows_one_transition() {
    let dfa = mod3(None);

    let state = dfa.step(&"q".into(), &"0".into()).unwrap();
    assert_eq!(state.as_str(), "r");
}

#[test]
fn rejects_foreign_labels() {
    let err = Dfa::new(
        universe(&["p", "q"], &["0"], "p", &["q"]),
        [edge("p", "0", "x"), edge("z", "0", "q")],
    )
    .unwrap_err();
    insta::assert_snapshot!(err, @"invalid states in transition keys: {z}");

    let err = Dfa::new(
        universe(&["p", "q"], &["0"], "p", &["q"]),
        [edge("p", "1", "q"), edge("q", "2", "q")],
    )
    .unwrap_err();
    assert_eq!(
        err,
        AutomatonError::InvalidTransitionSymbols(vec!["1".into(), "2".into()])
    );

    let err = Dfa::new(
        universe(&["p", "q"], &["0"], "p", &["q"]),
        [edge("p", "0", "x"), edge("q", "0", "x")],
    )
    .unwrap_err();
    insta::assert_snapshot!(err, @"invalid states in transition targets: {x}");
}

#[test]
fn universe_checks_initial_and_accepting() {
    let err = Universe::new(
        [State::from("p")],
        [Symbol::from("0")],
        State::from("s"),
        [],
    )
    .unwrap_err();
    insta::assert_snapshot!(err, @"initial state s is not in states");

    let err = Universe::new(
        [State::from("p")],
        [Symbol::from("0")],
        State::from("p"),
        [State::from("y"), State::from("x"), State::from("y")],
    )
    .unwrap_err();
    insta::assert_snapshot!(err, @"invalid accepting states: {x, y}");
}
