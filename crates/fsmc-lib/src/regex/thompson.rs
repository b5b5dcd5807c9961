//! Thompson construction: regular expression to ε-NFA.
//!
//! Every node yields a complete automaton of its own. Composite nodes rename
//! the automata of their children with fresh labels before merging them, so
//! children never share a state.

use fsmc_core::{FreshNames, State, StateSet, Symbol};
use indexmap::{IndexMap, IndexSet};

use super::ast::Expr;
use crate::automaton::{EpsNfa, Universe};
use crate::invariants::ensure_valid;

/// Builds ε-NFAs from regular expressions, drawing labels from one generator.
///
/// Automata built by the same `Thompson` (or by several sharing a
/// [`FreshNames`]) have pairwise disjoint state sets.
pub struct Thompson<'n> {
    names: &'n mut FreshNames,
}

impl<'n> Thompson<'n> {
    pub fn new(names: &'n mut FreshNames) -> Self {
        Self { names }
    }

    pub fn build(&mut self, expr: &Expr) -> EpsNfa {
        match expr {
            Expr::Symbol(symbol) => self.symbol(symbol),
            Expr::Star(inner) => {
                let inner = self.build(inner);
                self.star(&inner)
            }
            Expr::Concat(lhs, rhs) => {
                let lhs = self.build(lhs);
                let rhs = self.build(rhs);
                self.concat(&lhs, &rhs)
            }
            Expr::Or(lhs, rhs) => {
                let lhs = self.build(lhs);
                let rhs = self.build(rhs);
                self.or(&lhs, &rhs)
            }
        }
    }

    fn symbol(&mut self, symbol: &Symbol) -> EpsNfa {
        let start = self.names.fresh("sym");
        let end = self.names.fresh("sym");
        let mut fragment = Fragment::new(start.clone());
        fragment.states.insert(end.clone());
        fragment.alphabet.insert(symbol.clone());
        fragment
            .transitions
            .insert((start, symbol.clone()), StateSet::from([end.clone()]));
        fragment.accepting.insert(end);
        fragment.finish()
    }

    fn star(&mut self, inner: &EpsNfa) -> EpsNfa {
        let mut fragment = self.rename(inner, "star");
        let loop_state = self.names.fresh("star");
        fragment.states.insert(loop_state.clone());
        let inner_initial = fragment.initial.clone();
        fragment.link(&loop_state, &inner_initial);
        for acc in std::mem::take(&mut fragment.accepting) {
            fragment.link(&acc, &loop_state);
        }
        fragment.accepting.insert(loop_state.clone());
        fragment.initial = loop_state;
        fragment.finish()
    }

    fn concat(&mut self, lhs: &EpsNfa, rhs: &EpsNfa) -> EpsNfa {
        let mut fragment = self.rename(lhs, "cat");
        let rhs = self.rename(rhs, "cat");
        let lhs_accepting = std::mem::take(&mut fragment.accepting);
        for acc in &lhs_accepting {
            fragment.link(acc, &rhs.initial);
        }
        fragment.absorb(rhs);
        fragment.finish()
    }

    fn or(&mut self, lhs: &EpsNfa, rhs: &EpsNfa) -> EpsNfa {
        let lhs = self.rename(lhs, "alt");
        let rhs = self.rename(rhs, "alt");
        let mut fragment = Fragment::new(self.names.fresh("alt"));
        let initial = fragment.initial.clone();
        fragment.link(&initial, &lhs.initial);
        fragment.link(&initial, &rhs.initial);
        fragment.absorb(lhs);
        fragment.absorb(rhs);
        fragment.finish()
    }

    /// Copies `nfa` with every state replaced by a fresh label.
    fn rename(&mut self, nfa: &EpsNfa, prefix: &str) -> Fragment {
        let universe = nfa.universe();
        let fresh: IndexMap<&State, State> = universe
            .states()
            .iter()
            .map(|state| (state, self.names.fresh(prefix)))
            .collect();
        let map = |state: &State| {
            fresh
                .get(state)
                .cloned()
                .unwrap_or_else(|| panic!("state {state} missing from its own automaton"))
        };
        let map_set = |states: &StateSet| states.iter().map(map).collect::<StateSet>();

        Fragment {
            states: fresh.values().cloned().collect(),
            alphabet: universe.alphabet().clone(),
            initial: map(universe.initial()),
            accepting: universe.accepting().iter().map(map).collect(),
            transitions: nfa
                .transitions()
                .iter()
                .map(|((state, symbol), targets)| ((map(state), symbol.clone()), map_set(targets)))
                .collect(),
            epsilon: nfa
                .epsilon()
                .iter()
                .map(|(state, targets)| (map(state), map_set(targets)))
                .collect(),
        }
    }
}

/// Builds the ε-NFA for `expr` with a generator of its own.
pub fn regex_to_epsnfa(expr: &Expr) -> EpsNfa {
    let mut names = FreshNames::new();
    let eps_nfa = Thompson::new(&mut names).build(expr);
    log::debug!(
        "thompson: {expr} -> {} states, {} transitions, {} epsilon sources",
        eps_nfa.universe().states().len(),
        eps_nfa.transitions().len(),
        eps_nfa.epsilon().len(),
    );
    eps_nfa
}

/// Mutable parts of an ε-NFA under construction.
struct Fragment {
    states: IndexSet<State>,
    alphabet: IndexSet<Symbol>,
    initial: State,
    accepting: IndexSet<State>,
    transitions: IndexMap<(State, Symbol), StateSet>,
    epsilon: IndexMap<State, StateSet>,
}

impl Fragment {
    fn new(initial: State) -> Self {
        Self {
            states: IndexSet::from([initial.clone()]),
            alphabet: IndexSet::new(),
            initial,
            accepting: IndexSet::new(),
            transitions: IndexMap::new(),
            epsilon: IndexMap::new(),
        }
    }

    /// Adds `from -ε-> to`, keeping existing epsilon edges of `from`.
    fn link(&mut self, from: &State, to: &State) {
        self.epsilon
            .entry(from.clone())
            .or_default()
            .insert(to.clone());
    }

    /// Merges a disjoint fragment, taking over its accepting states.
    fn absorb(&mut self, other: Fragment) {
        self.states.extend(other.states);
        self.alphabet.extend(other.alphabet);
        self.accepting.extend(other.accepting);
        self.transitions.extend(other.transitions);
        for (state, targets) in other.epsilon {
            self.epsilon.entry(state).or_default().extend(targets);
        }
    }

    fn finish(self) -> EpsNfa {
        let built = Universe::new(self.states, self.alphabet, self.initial, self.accepting)
            .and_then(|universe| EpsNfa::new(universe, self.transitions, self.epsilon));
        let eps_nfa = ensure_valid(built, "thompson");
        log::trace!(
            "thompson fragment: {} states, initial {}",
            eps_nfa.universe().states().len(),
            eps_nfa.universe().initial(),
        );
        eps_nfa
    }
}
