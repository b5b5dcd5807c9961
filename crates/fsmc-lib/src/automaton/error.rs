use fsmc_core::{State, Symbol};

/// Construction failure: the parts of an automaton are inconsistent.
///
/// Offending labels are reported sorted and deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AutomatonError {
    #[error("initial state {0} is not in states")]
    InitialNotInStates(State),

    #[error("invalid accepting states: {}", list(.0))]
    InvalidAccepting(Vec<State>),

    #[error("invalid states in transition keys: {}", list(.0))]
    InvalidTransitionSources(Vec<State>),

    #[error("invalid symbols in transition keys: {}", list(.0))]
    InvalidTransitionSymbols(Vec<Symbol>),

    #[error("invalid states in transition targets: {}", list(.0))]
    InvalidTransitionTargets(Vec<State>),

    #[error("invalid states in epsilon transition keys: {}", list(.0))]
    InvalidEpsilonSources(Vec<State>),

    #[error("invalid states in epsilon transition targets: {}", list(.0))]
    InvalidEpsilonTargets(Vec<State>),
}

/// Runtime failure of a DFA: no transition for the current state and symbol.
///
/// Distinct from rejection; a partial DFA cannot decide the word at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no transition for ({state}, {symbol})")]
pub struct LookupError {
    pub state: State,
    pub symbol: Symbol,
}

fn list<T: std::fmt::Display>(items: &[T]) -> String {
    let items: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("{{{}}}", items.join(", "))
}
