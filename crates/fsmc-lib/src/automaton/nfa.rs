use fsmc_core::{State, StateSet, Symbol};
use indexmap::IndexMap;

use super::error::AutomatonError;
use super::universe::Universe;

/// Nondeterministic finite automaton without epsilon transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    universe: Universe,
    transitions: IndexMap<(State, Symbol), StateSet>,
}

impl Nfa {
    pub fn new(
        universe: Universe,
        transitions: impl IntoIterator<Item = ((State, Symbol), StateSet)>,
    ) -> Result<Self, AutomatonError> {
        let transitions: IndexMap<(State, Symbol), StateSet> = transitions.into_iter().collect();
        universe.check_transitions(transitions.keys(), transitions.values().flatten())?;
        Ok(Self {
            universe,
            transitions,
        })
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn transitions(&self) -> &IndexMap<(State, Symbol), StateSet> {
        &self.transitions
    }

    /// Successors of `state` on `symbol`; empty when no transition is declared.
    pub fn targets(&self, state: &State, symbol: &Symbol) -> impl Iterator<Item = &State> {
        successors(&self.transitions, state, symbol)
    }

    /// Every state reachable from some state of `active` on `symbol`.
    pub fn step(&self, active: &StateSet, symbol: &Symbol) -> StateSet {
        step(&self.transitions, active, symbol)
    }

    pub fn accepts(&self, word: &[Symbol]) -> bool {
        let start = StateSet::from([self.universe.initial().clone()]);
        let end = word
            .iter()
            .fold(start, |active, symbol| self.step(&active, symbol));
        end.iter().any(|state| self.universe.is_accepting(state))
    }
}

pub(super) fn successors<'a>(
    transitions: &'a IndexMap<(State, Symbol), StateSet>,
    state: &State,
    symbol: &Symbol,
) -> impl Iterator<Item = &'a State> + use<'a> {
    transitions
        .get(&(state.clone(), symbol.clone()))
        .into_iter()
        .flatten()
}

pub(super) fn step(
    transitions: &IndexMap<(State, Symbol), StateSet>,
    active: &StateSet,
    symbol: &Symbol,
) -> StateSet {
    active
        .iter()
        .flat_map(|state| successors(transitions, state, symbol))
        .cloned()
        .collect()
}
