//! Rendering in automaton-definition syntax.
//!
//! Output parses back with `parse_automaton` as long as every label is a valid
//! identifier, every set is non-empty, and at least one symbol transition
//! exists.

use std::fmt::{self, Display, Formatter};

use fsmc_core::utils::quote_ident;

use super::{Automaton, Dfa, EpsNfa, Nfa, Universe};

impl Display for Dfa {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_universe(f, self.universe())?;
        for ((state, symbol), target) in self.transitions() {
            writeln!(f, "({}, {}) -> {};", label(state), label(symbol), label(target))?;
        }
        Ok(())
    }
}

impl Display for Nfa {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_universe(f, self.universe())?;
        for ((state, symbol), targets) in self.transitions() {
            writeln!(f, "({}, {}) -> {};", label(state), label(symbol), set(targets))?;
        }
        Ok(())
    }
}

impl Display for EpsNfa {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_universe(f, self.universe())?;
        for ((state, symbol), targets) in self.transitions() {
            writeln!(f, "({}, {}) -> {};", label(state), label(symbol), set(targets))?;
        }
        for (state, targets) in self.epsilon() {
            writeln!(f, "({}, '') -> {};", label(state), set(targets))?;
        }
        Ok(())
    }
}

impl Display for Automaton {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dfa(dfa) => dfa.fmt(f),
            Self::Nfa(nfa) => nfa.fmt(f),
            Self::EpsNfa(eps_nfa) => eps_nfa.fmt(f),
        }
    }
}

fn write_universe(f: &mut Formatter<'_>, universe: &Universe) -> fmt::Result {
    writeln!(f, "Q = {};", set(universe.states()))?;
    writeln!(f, "A = {};", set(universe.alphabet()))?;
    writeln!(f, "I = {};", label(universe.initial()))?;
    writeln!(f, "F = {};", set(universe.accepting()))
}

/// Identifier syntax for a label. Field markers are quoted too, since a bare
/// `Q` would lex as a marker at statement level.
fn label(label: &impl AsRef<str>) -> String {
    let label = label.as_ref();
    match label {
        "Q" | "A" | "I" | "F" => format!("'{label}'"),
        _ => quote_ident(label).into_owned(),
    }
}

fn set<'a, T: AsRef<str> + 'a>(items: impl IntoIterator<Item = &'a T>) -> String {
    let mut out = String::from("{");
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&label(item));
    }
    out.push('}');
    out
}
