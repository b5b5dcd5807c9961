//! Parts shared by every automaton class.

use std::collections::BTreeSet;

use fsmc_core::{State, Symbol};
use indexmap::IndexSet;

use super::error::AutomatonError;

/// States, alphabet, initial state and accepting states of an automaton.
///
/// Declaration order is kept for rendering; membership is what matters for
/// semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Universe {
    states: IndexSet<State>,
    alphabet: IndexSet<Symbol>,
    initial: State,
    accepting: IndexSet<State>,
}

impl Universe {
    /// Checks that `initial` and every accepting state belong to `states`.
    pub fn new(
        states: impl IntoIterator<Item = State>,
        alphabet: impl IntoIterator<Item = Symbol>,
        initial: State,
        accepting: impl IntoIterator<Item = State>,
    ) -> Result<Self, AutomatonError> {
        let states: IndexSet<State> = states.into_iter().collect();
        if !states.contains(&initial) {
            return Err(AutomatonError::InitialNotInStates(initial));
        }

        let accepting: IndexSet<State> = accepting.into_iter().collect();
        let invalid = outside(accepting.iter(), &states);
        if !invalid.is_empty() {
            return Err(AutomatonError::InvalidAccepting(invalid));
        }

        Ok(Self {
            states,
            alphabet: alphabet.into_iter().collect(),
            initial,
            accepting,
        })
    }

    pub fn states(&self) -> &IndexSet<State> {
        &self.states
    }

    pub fn alphabet(&self) -> &IndexSet<Symbol> {
        &self.alphabet
    }

    pub fn initial(&self) -> &State {
        &self.initial
    }

    pub fn accepting(&self) -> &IndexSet<State> {
        &self.accepting
    }

    #[inline]
    pub fn is_accepting(&self, state: &State) -> bool {
        self.accepting.contains(state)
    }

    /// Checks the keys and targets of a symbol transition relation.
    pub(crate) fn check_transitions<'a>(
        &self,
        keys: impl Iterator<Item = &'a (State, Symbol)> + Clone,
        targets: impl Iterator<Item = &'a State>,
    ) -> Result<(), AutomatonError> {
        let invalid = outside(keys.clone().map(|(state, _)| state), &self.states);
        if !invalid.is_empty() {
            return Err(AutomatonError::InvalidTransitionSources(invalid));
        }

        let invalid = outside(keys.map(|(_, symbol)| symbol), &self.alphabet);
        if !invalid.is_empty() {
            return Err(AutomatonError::InvalidTransitionSymbols(invalid));
        }

        let invalid = outside(targets, &self.states);
        if !invalid.is_empty() {
            return Err(AutomatonError::InvalidTransitionTargets(invalid));
        }

        Ok(())
    }

    /// Checks the sources and targets of an epsilon relation.
    pub(crate) fn check_epsilon<'a>(
        &self,
        sources: impl Iterator<Item = &'a State>,
        targets: impl Iterator<Item = &'a State>,
    ) -> Result<(), AutomatonError> {
        let invalid = outside(sources, &self.states);
        if !invalid.is_empty() {
            return Err(AutomatonError::InvalidEpsilonSources(invalid));
        }

        let invalid = outside(targets, &self.states);
        if !invalid.is_empty() {
            return Err(AutomatonError::InvalidEpsilonTargets(invalid));
        }

        Ok(())
    }
}

/// Items not in `universe`, sorted and deduplicated.
fn outside<'a, T>(items: impl Iterator<Item = &'a T>, universe: &IndexSet<T>) -> Vec<T>
where
    T: Ord + Clone + std::hash::Hash + 'a,
{
    items
        .filter(|item| !universe.contains(*item))
        .cloned()
        .collect::<BTreeSet<T>>()
        .into_iter()
        .collect()
}
