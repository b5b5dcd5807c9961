//! Subset construction: NFA to DFA.

use std::collections::VecDeque;

use fsmc_core::{State, StateSet, Symbol};
use indexmap::IndexMap;

use crate::automaton::{Dfa, Nfa, Universe};
use crate::invariants::ensure_valid;

/// Label of the DFA state standing for `set`: `{a,b,c}` with members sorted,
/// `{}` for the empty set.
pub fn set_label(set: &StateSet) -> State {
    let members: Vec<&str> = set.iter().map(State::as_str).collect();
    State::new(format!("{{{}}}", members.join(",")))
}

/// Determinizes an epsilon-free NFA.
///
/// Only sets reachable from `{initial}` become states. Every state gets a
/// transition on every symbol, the empty set included, so the result is
/// total and never fails a lookup.
pub fn convert_to_dfa(nfa: &Nfa) -> Dfa {
    let universe = nfa.universe();
    let start = StateSet::from([universe.initial().clone()]);

    let mut labels: IndexMap<StateSet, State> = IndexMap::new();
    labels.insert(start.clone(), set_label(&start));
    let mut queue = VecDeque::from([start]);
    let mut transitions: IndexMap<(State, Symbol), State> = IndexMap::new();

    while let Some(current) = queue.pop_front() {
        let from = labels[&current].clone();
        for symbol in universe.alphabet() {
            let next = nfa.step(&current, symbol);
            let to = match labels.get(&next) {
                Some(label) => label.clone(),
                None => {
                    let label = set_label(&next);
                    log::trace!("subset construction: new state {label}");
                    labels.insert(next.clone(), label.clone());
                    queue.push_back(next);
                    label
                }
            };
            transitions.insert((from.clone(), symbol.clone()), to);
        }
    }

    let accepting = labels
        .iter()
        .filter(|(set, _)| set.iter().any(|state| universe.is_accepting(state)))
        .map(|(_, label)| label.clone());
    let built = Universe::new(
        labels.values().cloned(),
        universe.alphabet().iter().cloned(),
        set_label(&StateSet::from([universe.initial().clone()])),
        accepting,
    )
    .and_then(|universe| Dfa::new(universe, transitions));
    let dfa = ensure_valid(built, "subset construction");
    log::debug!(
        "subset construction: {} states, {} accepting, {} transitions",
        dfa.universe().states().len(),
        dfa.universe().accepting().len(),
        dfa.transitions().len(),
    );
    dfa
}
