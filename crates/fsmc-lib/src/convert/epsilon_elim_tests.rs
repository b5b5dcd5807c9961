use fsmc_core::{State, StateSet, Symbol, word};

use super::convert_to_nfa;
use crate::automaton::{EpsNfa, Universe};
use crate::parse_automaton;

fn set(labels: &[&str]) -> StateSet {
    labels.iter().copied().map(State::from).collect()
}

fn scenario() -> EpsNfa {
    let automaton = parse_automaton(
        "Q={i,q,f};A={0,1};I=i;F={f};(i,1)->{q,f};(q,0)->{q};(q,1)->{f};(f,'')->{i};",
    )
    .unwrap();
    automaton.as_eps_nfa().unwrap().clone()
}

#[test]
fn folds_closures_into_transitions() {
    let nfa = convert_to_nfa(&scenario());

    insta::assert_snapshot!(nfa, @r"
    Q = {i, q, f};
    A = {0, 1};
    I = i;
    F = {f};
    (i, 1) -> {f, i, q};
    (q, 0) -> {q};
    (q, 1) -> {f, i};
    (f, 1) -> {f, i, q};
    ");
}

#[test]
fn preserves_acceptance() {
    let eps_nfa = scenario();
    let nfa = convert_to_nfa(&eps_nfa);

    for text in ["", "1", "11", "101", "101101", "1000", "01", "110", "1101"] {
        assert_eq!(nfa.accepts(&word(text)), eps_nfa.accepts(&word(text)), "{text}");
    }
}

#[test]
fn closure_reaching_accepting_state_accepts() {
    let universe = Universe::new(
        set(&["a", "b", "c", "dead"]),
        [Symbol::from("x")],
        State::from("a"),
        set(&["c"]),
    )
    .unwrap();
    let eps_nfa = EpsNfa::new(
        universe,
        [((State::from("c"), Symbol::from("x")), set(&["a"]))],
        [
            (State::from("a"), set(&["b"])),
            (State::from("b"), set(&["c"])),
        ],
    )
    .unwrap();

    let nfa = convert_to_nfa(&eps_nfa);

    assert_eq!(nfa.universe().states(), eps_nfa.universe().states());
    assert!(nfa.universe().is_accepting(&"a".into()));
    assert!(nfa.universe().is_accepting(&"b".into()));
    assert!(!nfa.universe().is_accepting(&"dead".into()));
    assert_eq!(
        nfa.transitions()[&(State::from("a"), Symbol::from("x"))],
        set(&["a", "b", "c"])
    );
    assert_eq!(nfa.transitions().len(), 3);
    assert!(nfa.accepts(&word("")));
    assert!(nfa.accepts(&word("xxx")));
}
