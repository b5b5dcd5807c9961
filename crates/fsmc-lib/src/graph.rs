//! Node and edge lists for external renderers.

use fsmc_core::{State, Symbol};
use serde::Serialize;

use crate::automaton::{Automaton, AutomatonKind, Universe};

/// An automaton flattened into nodes and labelled edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Graph {
    pub kind: AutomatonKind,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: State,
    pub initial: bool,
    pub accepting: bool,
}

/// One edge per target state. Epsilon edges have no symbol and serialize it
/// as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: State,
    pub symbol: Option<Symbol>,
    pub to: State,
}

impl Graph {
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

impl From<&Automaton> for Graph {
    fn from(automaton: &Automaton) -> Self {
        let mut edges = Vec::new();
        let mut edge = |from: &State, symbol: Option<&Symbol>, to: &State| {
            edges.push(Edge {
                from: from.clone(),
                symbol: symbol.cloned(),
                to: to.clone(),
            });
        };

        match automaton {
            Automaton::Dfa(dfa) => {
                for ((from, symbol), to) in dfa.transitions() {
                    edge(from, Some(symbol), to);
                }
            }
            Automaton::Nfa(nfa) => {
                for ((from, symbol), targets) in nfa.transitions() {
                    targets.iter().for_each(|to| edge(from, Some(symbol), to));
                }
            }
            Automaton::EpsNfa(eps_nfa) => {
                for ((from, symbol), targets) in eps_nfa.transitions() {
                    targets.iter().for_each(|to| edge(from, Some(symbol), to));
                }
                for (from, targets) in eps_nfa.epsilon() {
                    targets.iter().for_each(|to| edge(from, None, to));
                }
            }
        }

        Self {
            kind: automaton.kind(),
            nodes: nodes(automaton.universe()),
            edges,
        }
    }
}

fn nodes(universe: &Universe) -> Vec<Node> {
    universe
        .states()
        .iter()
        .map(|state| Node {
            id: state.clone(),
            initial: state == universe.initial(),
            accepting: universe.is_accepting(state),
        })
        .collect()
}
