//! Fresh state names for automaton construction.

use crate::State;

/// Monotonic source of unique state labels.
///
/// Every label carries the generator's running counter, so two labels from the
/// same generator never collide regardless of prefix. Automata that will be
/// merged must draw their names from one shared generator.
#[derive(Debug, Default)]
pub struct FreshNames {
    issued: u32,
}

impl FreshNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a label of the form `{prefix}{n}` never issued before by `self`.
    pub fn fresh(&mut self, prefix: &str) -> State {
        self.issued += 1;
        State::new(format!("{prefix}{}", self.issued))
    }

    /// Number of labels issued so far.
    #[inline]
    pub fn issued(&self) -> u32 {
        self.issued
    }
}
