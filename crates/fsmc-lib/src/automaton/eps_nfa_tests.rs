use fsmc_core::{State, StateSet, Symbol, word};

use super::{AutomatonError, EpsNfa, Universe};

fn set(labels: &[&str]) -> StateSet {
    labels.iter().copied().map(State::from).collect()
}

fn edge(state: &str, symbol: &str, targets: &[&str]) -> ((State, Symbol), StateSet) {
    ((state.into(), symbol.into()), set(targets))
}

/// Even number of zeros (`s1`, `s2`) or even number of ones (`s3`, `s4`).
fn parity() -> EpsNfa {
    let universe = Universe::new(
        set(&["s0", "s1", "s2", "s3", "s4"]),
        [Symbol::from("0"), Symbol::from("1")],
        State::from("s0"),
        set(&["s1", "s3"]),
    )
    .unwrap();
    EpsNfa::new(
        universe,
        [
            edge("s1", "0", &["s2"]),
            edge("s1", "1", &["s1"]),
            edge("s2", "0", &["s1"]),
            edge("s2", "1", &["s2"]),
            edge("s3", "0", &["s3"]),
            edge("s3", "1", &["s4"]),
            edge("s4", "0", &["s4"]),
            edge("s4", "1", &["s3"]),
        ],
        [(State::from("s0"), set(&["s1", "s3"]))],
    )
    .unwrap()
}

/// `a -ε-> b -ε-> c -ε-> a`, `c -ε-> d`.
fn cycle() -> EpsNfa {
    let universe = Universe::new(
        set(&["a", "b", "c", "d", "e"]),
        [Symbol::from("x")],
        State::from("a"),
        set(&["d"]),
    )
    .unwrap();
    EpsNfa::new(
        universe,
        [edge("d", "x", &["e"])],
        [
            (State::from("a"), set(&["b"])),
            (State::from("b"), set(&["c"])),
            (State::from("c"), set(&["a", "d"])),
        ],
    )
    .unwrap()
}

#[test]
fn parity_acceptance() {
    let eps_nfa = parity();

    assert!(eps_nfa.accepts(&word("10101")));
    assert!(eps_nfa.accepts(&word("")));
    assert!(eps_nfa.accepts(&word("0")));
    assert!(!eps_nfa.accepts(&word("1011")));
}

#[test]
fn start_set_is_closed() {
    assert_eq!(parity().start(), set(&["s0", "s1", "s3"]));
    assert_eq!(cycle().start(), set(&["a", "b", "c", "d"]));
}

#[test]
fn closure_follows_cycles() {
    let eps_nfa = cycle();

    assert_eq!(eps_nfa.epsilon_closure(&set(&["b"])), set(&["a", "b", "c", "d"]));
    assert_eq!(eps_nfa.epsilon_closure(&set(&["d"])), set(&["d"]));
    assert_eq!(eps_nfa.epsilon_closure(&set(&[])), set(&[]));
}

#[test]
fn closure_is_idempotent() {
    let eps_nfa = cycle();

    for labels in [vec!["a"], vec!["e"], vec!["c", "e"], vec!["a", "b", "c", "d", "e"]] {
        let once = eps_nfa.epsilon_closure(&set(&labels));
        let twice = eps_nfa.epsilon_closure(&once);
        assert_eq!(once, twice);
    }
}

#[test]
fn step_closes_after_moving() {
    let eps_nfa = cycle();

    assert_eq!(eps_nfa.step(&eps_nfa.start(), &"x".into()), set(&["e"]));
    assert!(eps_nfa.accepts(&word("")));
    assert!(!eps_nfa.accepts(&word("x")));
}

#[test]
fn rejects_foreign_epsilon_labels() {
    let universe = Universe::new(set(&["p"]), [Symbol::from("a")], "p".into(), []).unwrap();

    let err = EpsNfa::new(
        universe.clone(),
        [],
        [(State::from("q"), set(&["p"]))],
    )
    .unwrap_err();
    assert_eq!(err, AutomatonError::InvalidEpsilonSources(vec!["q".into()]));

    let err = EpsNfa::new(universe, [], [(State::from("p"), set(&["r"]))]).unwrap_err();
    insta::assert_snapshot!(err, @"invalid states in epsilon transition targets: {r}");
}
