use fsmc_core::{State, StateSet, Symbol};
use indexmap::IndexMap;

use super::error::AutomatonError;
use super::nfa;
use super::universe::Universe;

/// Nondeterministic finite automaton with epsilon transitions.
///
/// The epsilon relation is kept apart from the symbol transitions and keyed by
/// source state alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpsNfa {
    universe: Universe,
    transitions: IndexMap<(State, Symbol), StateSet>,
    epsilon: IndexMap<State, StateSet>,
}

impl EpsNfa {
    pub fn new(
        universe: Universe,
        transitions: impl IntoIterator<Item = ((State, Symbol), StateSet)>,
        epsilon: impl IntoIterator<Item = (State, StateSet)>,
    ) -> Result<Self, AutomatonError> {
        let transitions: IndexMap<(State, Symbol), StateSet> = transitions.into_iter().collect();
        universe.check_transitions(transitions.keys(), transitions.values().flatten())?;

        let epsilon: IndexMap<State, StateSet> = epsilon.into_iter().collect();
        universe.check_epsilon(epsilon.keys(), epsilon.values().flatten())?;

        Ok(Self {
            universe,
            transitions,
            epsilon,
        })
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn transitions(&self) -> &IndexMap<(State, Symbol), StateSet> {
        &self.transitions
    }

    pub fn epsilon(&self) -> &IndexMap<State, StateSet> {
        &self.epsilon
    }

    /// Successors of `state` on `symbol`, without epsilon moves.
    pub fn targets(&self, state: &State, symbol: &Symbol) -> impl Iterator<Item = &State> {
        nfa::successors(&self.transitions, state, symbol)
    }

    /// Every state reachable from `states` through zero or more epsilon moves.
    pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
        let mut closure = states.clone();
        let mut stack: Vec<&State> = states.iter().collect();
        while let Some(state) = stack.pop() {
            for next in self.epsilon.get(state).into_iter().flatten() {
                if closure.insert(next.clone()) {
                    stack.push(next);
                }
            }
        }
        closure
    }

    /// Closed start set: the closure of the initial state.
    pub fn start(&self) -> StateSet {
        self.epsilon_closure(&StateSet::from([self.universe.initial().clone()]))
    }

    /// One symbol step from a closed set, closed again afterwards.
    pub fn step(&self, active: &StateSet, symbol: &Symbol) -> StateSet {
        self.epsilon_closure(&nfa::step(&self.transitions, active, symbol))
    }

    pub fn accepts(&self, word: &[Symbol]) -> bool {
        let end = word
            .iter()
            .fold(self.start(), |active, symbol| self.step(&active, symbol));
        end.iter().any(|state| self.universe.is_accepting(state))
    }
}
