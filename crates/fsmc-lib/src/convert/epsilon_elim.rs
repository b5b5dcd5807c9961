//! Epsilon elimination: ε-NFA to NFA over the same states.

use fsmc_core::{State, StateSet, Symbol};
use indexmap::IndexMap;

use crate::automaton::{EpsNfa, Nfa, Universe};
use crate::invariants::ensure_valid;

/// Folds epsilon moves into the symbol transitions.
///
/// A state accepts when its closure reaches an accepting state. On a symbol, a
/// state moves to the closure of everything its closure moves to. The state
/// set is kept as is, unreachable states included.
pub fn convert_to_nfa(eps_nfa: &EpsNfa) -> Nfa {
    let universe = eps_nfa.universe();
    let closures: IndexMap<&State, StateSet> = universe
        .states()
        .iter()
        .map(|state| (state, eps_nfa.epsilon_closure(&StateSet::from([state.clone()]))))
        .collect();

    let accepting = closures
        .iter()
        .filter(|(_, closure)| closure.iter().any(|state| universe.is_accepting(state)))
        .map(|(state, _)| (*state).clone());

    let mut transitions: IndexMap<(State, Symbol), StateSet> = IndexMap::new();
    for (state, closure) in &closures {
        for symbol in universe.alphabet() {
            let moved: StateSet = closure
                .iter()
                .flat_map(|from| eps_nfa.targets(from, symbol))
                .cloned()
                .collect();
            let targets = eps_nfa.epsilon_closure(&moved);
            if targets.is_empty() {
                continue;
            }
            log::trace!("epsilon elimination: ({state}, {symbol}) -> {}", targets.len());
            transitions.insert(((*state).clone(), symbol.clone()), targets);
        }
    }

    let built = Universe::new(
        universe.states().iter().cloned(),
        universe.alphabet().iter().cloned(),
        universe.initial().clone(),
        accepting,
    )
    .and_then(|universe| Nfa::new(universe, transitions));
    let nfa = ensure_valid(built, "epsilon elimination");
    log::debug!(
        "epsilon elimination: {} states, {} accepting, {} transitions",
        nfa.universe().states().len(),
        nfa.universe().accepting().len(),
        nfa.transitions().len(),
    );
    nfa
}
