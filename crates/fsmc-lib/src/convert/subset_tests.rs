use fsmc_core::{State, StateSet, Symbol, word};

use super::{convert_to_dfa, set_label};
use crate::automaton::{Nfa, Universe};

fn set(labels: &[&str]) -> StateSet {
    labels.iter().copied().map(State::from).collect()
}

fn nfa(accepting: &[&str], transitions: &[(&str, &str, &[&str])]) -> Nfa {
    let universe = Universe::new(
        set(&["p", "q", "r"]),
        [Symbol::from("0"), Symbol::from("1")],
        State::from("p"),
        set(accepting),
    )
    .unwrap();
    let transitions = transitions
        .iter()
        .map(|(state, symbol, targets)| ((State::from(*state), Symbol::from(*symbol)), set(targets)));
    Nfa::new(universe, transitions).unwrap()
}

#[test]
fn labels_list_sorted_members() {
    assert_eq!(set_label(&set(&["q", "p", "r"])).as_str(), "{p,q,r}");
    assert_eq!(set_label(&set(&["p"])).as_str(), "{p}");
    assert_eq!(set_label(&set(&[])).as_str(), "{}");
}

#[test]
fn words_ending_in_one() {
    let nfa = nfa(&["q"], &[("p", "1", &["p", "q"]), ("p", "0", &["p"])]);
    let dfa = convert_to_dfa(&nfa);

    insta::assert_snapshot!(dfa, @r"
    Q = {'{p}', '{p,q}'};
    A = {0, 1};
    I = '{p}';
    F = {'{p,q}'};
    ('{p}', 0) -> '{p}';
    ('{p}', 1) -> '{p,q}';
    ('{p,q}', 0) -> '{p}';
    ('{p,q}', 1) -> '{p,q}';
    ");
    assert_eq!(dfa.accepts(&word("011010101011")), Ok(true));
    assert_eq!(dfa.accepts(&word("000000")), Ok(false));
}

#[test]
fn empty_set_becomes_a_dead_state() {
    let nfa = nfa(&["q"], &[("p", "0", &["q"])]);
    let dfa = convert_to_dfa(&nfa);

    assert!(dfa.is_total());
    assert_eq!(dfa.universe().states().len(), 3);
    assert_eq!(dfa.step(&"{q}".into(), &"1".into()).unwrap().as_str(), "{}");
    assert_eq!(dfa.step(&"{}".into(), &"0".into()).unwrap().as_str(), "{}");
    assert_eq!(dfa.accepts(&word("0")), Ok(true));
    assert_eq!(dfa.accepts(&word("01")), Ok(false));
    assert_eq!(dfa.accepts(&word("1")), Ok(false));
}

#[test]
fn unreachable_states_are_dropped() {
    let nfa = nfa(&["q"], &[("p", "0", &["p"]), ("p", "1", &["p"]), ("r", "0", &["q"])]);
    let dfa = convert_to_dfa(&nfa);

    let states: Vec<&str> = dfa.universe().states().iter().map(State::as_str).collect();
    assert_eq!(states, ["{p}"]);
    assert!(dfa.universe().accepting().is_empty());
}

#[test]
fn accepting_start_set_accepts() {
    let nfa = nfa(&["p"], &[("p", "0", &["q"])]);
    let dfa = convert_to_dfa(&nfa);

    assert!(dfa.universe().is_accepting(&"{p}".into()));
    assert_eq!(dfa.accepts(&word("")), Ok(true));
    assert_eq!(dfa.accepts(&word("0")), Ok(false));
}
