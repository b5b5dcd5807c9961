//! Conversions between automaton classes.
//!
//! Both conversions take their input by reference and build a new automaton;
//! neither can fail on a valid input.

mod epsilon_elim;
mod subset;

#[cfg(test)]
mod epsilon_elim_tests;
#[cfg(test)]
mod subset_tests;

pub use epsilon_elim::convert_to_nfa;
pub use subset::{convert_to_dfa, set_label};
