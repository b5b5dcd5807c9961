use fsmc_core::{State, Symbol};
use indexmap::IndexMap;

use super::error::{AutomatonError, LookupError};
use super::universe::Universe;

/// Deterministic finite automaton.
///
/// The transition function may be partial. Running off its domain is a
/// [`LookupError`], not a rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa {
    universe: Universe,
    transitions: IndexMap<(State, Symbol), State>,
}

impl Dfa {
    pub fn new(
        universe: Universe,
        transitions: impl IntoIterator<Item = ((State, Symbol), State)>,
    ) -> Result<Self, AutomatonError> {
        let transitions: IndexMap<(State, Symbol), State> = transitions.into_iter().collect();
        universe.check_transitions(transitions.keys(), transitions.values())?;
        Ok(Self {
            universe,
            transitions,
        })
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn transitions(&self) -> &IndexMap<(State, Symbol), State> {
        &self.transitions
    }

    pub fn step(&self, state: &State, symbol: &Symbol) -> Result<&State, LookupError> {
        self.transitions
            .get(&(state.clone(), symbol.clone()))
            .ok_or_else(|| LookupError {
                state: state.clone(),
                symbol: symbol.clone(),
            })
    }

    /// Whether every state has a transition on every symbol.
    pub fn is_total(&self) -> bool {
        self.universe.states().iter().all(|state| {
            self.universe
                .alphabet()
                .iter()
                .all(|symbol| self.transitions.contains_key(&(state.clone(), symbol.clone())))
        })
    }

    pub fn accepts(&self, word: &[Symbol]) -> Result<bool, LookupError> {
        let mut state = self.universe.initial();
        for symbol in word {
            state = self.step(state, symbol)?;
        }
        Ok(self.universe.is_accepting(state))
    }
}
