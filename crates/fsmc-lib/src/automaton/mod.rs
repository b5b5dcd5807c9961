//! Finite automata: deterministic, nondeterministic, and nondeterministic with
//! epsilon moves.
//!
//! Every automaton is validated once, at construction, and never changes
//! afterwards. Conversions build new automata.

mod dfa;
mod display;
mod eps_nfa;
mod error;
mod nfa;
mod universe;

#[cfg(test)]
mod dfa_tests;
#[cfg(test)]
mod eps_nfa_tests;

pub use dfa::Dfa;
pub use eps_nfa::EpsNfa;
pub use error::{AutomatonError, LookupError};
pub use nfa::Nfa;
pub use universe::Universe;

use std::fmt;

use fsmc_core::Symbol;
use serde::Serialize;

use crate::{Error, Result, convert};

/// Class of an automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AutomatonKind {
    Dfa,
    Nfa,
    EpsNfa,
}

impl fmt::Display for AutomatonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dfa => "DFA",
            Self::Nfa => "NFA",
            Self::EpsNfa => "ε-NFA",
        })
    }
}

/// Any automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Automaton {
    Dfa(Dfa),
    Nfa(Nfa),
    EpsNfa(EpsNfa),
}

impl Automaton {
    pub fn kind(&self) -> AutomatonKind {
        match self {
            Self::Dfa(_) => AutomatonKind::Dfa,
            Self::Nfa(_) => AutomatonKind::Nfa,
            Self::EpsNfa(_) => AutomatonKind::EpsNfa,
        }
    }

    pub fn universe(&self) -> &Universe {
        match self {
            Self::Dfa(dfa) => dfa.universe(),
            Self::Nfa(nfa) => nfa.universe(),
            Self::EpsNfa(eps_nfa) => eps_nfa.universe(),
        }
    }

    /// Runs `word` through the automaton.
    ///
    /// Only a DFA can fail: its transition function may be partial.
    pub fn accepts(&self, word: &[Symbol]) -> std::result::Result<bool, LookupError> {
        match self {
            Self::Dfa(dfa) => dfa.accepts(word),
            Self::Nfa(nfa) => Ok(nfa.accepts(word)),
            Self::EpsNfa(eps_nfa) => Ok(eps_nfa.accepts(word)),
        }
    }

    /// Next conversion step: ε-NFA to NFA, NFA to DFA.
    pub fn convert(&self) -> Result<Automaton> {
        match self {
            Self::Dfa(_) => Err(Error::AlreadyDeterministic),
            Self::Nfa(nfa) => Ok(convert::convert_to_dfa(nfa).into()),
            Self::EpsNfa(eps_nfa) => Ok(convert::convert_to_nfa(eps_nfa).into()),
        }
    }

    pub fn as_dfa(&self) -> Option<&Dfa> {
        match self {
            Self::Dfa(dfa) => Some(dfa),
            _ => None,
        }
    }

    pub fn as_nfa(&self) -> Option<&Nfa> {
        match self {
            Self::Nfa(nfa) => Some(nfa),
            _ => None,
        }
    }

    pub fn as_eps_nfa(&self) -> Option<&EpsNfa> {
        match self {
            Self::EpsNfa(eps_nfa) => Some(eps_nfa),
            _ => None,
        }
    }
}

impl From<Dfa> for Automaton {
    fn from(dfa: Dfa) -> Self {
        Self::Dfa(dfa)
    }
}

impl From<Nfa> for Automaton {
    fn from(nfa: Nfa) -> Self {
        Self::Nfa(nfa)
    }
}

impl From<EpsNfa> for Automaton {
    fn from(eps_nfa: EpsNfa) -> Self {
        Self::EpsNfa(eps_nfa)
    }
}
