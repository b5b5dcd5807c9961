//! Single-pass parser that builds the automaton while reading it.

use fsmc_core::{State, StateSet, Symbol};
use indexmap::{IndexMap, IndexSet};

use super::Field;
use super::lexer::{DefKind, lex};
use super::set::parse_set;
use super::transition::{Target, Transition, parse_transition};
use crate::Result;
use crate::automaton::{Automaton, Dfa, EpsNfa, Nfa, Universe};
use crate::lexer::Span;
use crate::parser::{Cursor, ParseError, ParseErrorKind, unexpected};

pub fn parse_automaton(source: &str) -> Result<Automaton> {
    let mut parser = DefParser {
        cursor: Cursor::new(lex(source)),
        states: None,
        alphabet: None,
        initial: None,
        accepting: None,
        single: IndexMap::new(),
        sets: IndexMap::new(),
        epsilon: IndexMap::new(),
    };
    parser.statements()?;
    let automaton = parser.finish(source.len()..source.len())?;
    log::debug!(
        "parsed {}: {} states, {} symbols",
        automaton.kind(),
        automaton.universe().states().len(),
        automaton.universe().alphabet().len(),
    );
    Ok(automaton)
}

struct DefParser<'src> {
    cursor: Cursor<'src, DefKind>,
    states: Option<IndexSet<String>>,
    alphabet: Option<IndexSet<String>>,
    initial: Option<String>,
    accepting: Option<IndexSet<String>>,
    /// `(q, a) -> p`
    single: IndexMap<(String, String), String>,
    /// `(q, a) -> {p, ...}`
    sets: IndexMap<(String, String), IndexSet<String>>,
    /// `(q, '') -> {p, ...}`
    epsilon: IndexMap<String, IndexSet<String>>,
}

impl DefParser<'_> {
    fn statements(&mut self) -> Result<()> {
        loop {
            let token = self.cursor.bump()?;
            match token.kind {
                DefKind::Eof => return Ok(()),
                DefKind::States => {
                    let value = self.set_value(Field::States, self.states.is_some(), token.span)?;
                    self.states = Some(value);
                }
                DefKind::Alphabet => {
                    let value =
                        self.set_value(Field::Alphabet, self.alphabet.is_some(), token.span)?;
                    self.alphabet = Some(value);
                }
                DefKind::Accepting => {
                    let value =
                        self.set_value(Field::Accepting, self.accepting.is_some(), token.span)?;
                    self.accepting = Some(value);
                }
                DefKind::Initial => {
                    if self.initial.is_some() {
                        return Err(already_defined(Field::Initial, token.span));
                    }
                    self.cursor.expect(DefKind::Equals)?;
                    let (initial, _) = self.cursor.expect_text(DefKind::Ident)?;
                    self.cursor.expect(DefKind::Semicolon)?;
                    self.initial = Some(initial);
                }
                DefKind::Transition => {
                    let span = token.span.clone();
                    let transition = parse_transition(&token.into_text())
                        .map_err(|err| err.offset(span.start))?;
                    self.cursor.expect(DefKind::Semicolon)?;
                    self.add(transition, span)?;
                }
                _ => {
                    let expected = [
                        DefKind::States,
                        DefKind::Alphabet,
                        DefKind::Initial,
                        DefKind::Accepting,
                        DefKind::Transition,
                        DefKind::Eof,
                    ];
                    return Err(unexpected(&token, &expected).into());
                }
            }
        }
    }

    /// `= {...};` after a set-valued field marker.
    fn set_value(&mut self, field: Field, defined: bool, span: Span) -> Result<IndexSet<String>> {
        if defined {
            return Err(already_defined(field, span));
        }
        self.cursor.expect(DefKind::Equals)?;
        let token = self.cursor.expect(DefKind::Set)?;
        let start = token.span.start;
        let value = parse_set(&token.into_text()).map_err(|err| err.offset(start))?;
        self.cursor.expect(DefKind::Semicolon)?;
        Ok(value)
    }

    /// Files a transition under its style. The first style seen decides; a
    /// later transition of a conflicting style is an error.
    fn add(&mut self, transition: Transition, span: Span) -> Result<()> {
        let Transition {
            state,
            symbol,
            target,
        } = transition;
        let fail = |kind: ParseErrorKind| -> Result<()> {
            Err(ParseError::new(kind, span.clone()).into())
        };

        match (symbol, target) {
            (None, Target::Set(targets)) => {
                if !self.single.is_empty() {
                    return fail(ParseErrorKind::SetTargetInDfa);
                }
                if self.epsilon.contains_key(&state) {
                    return fail(ParseErrorKind::DuplicateEpsilon { state });
                }
                self.epsilon.insert(state, targets);
            }
            (None, Target::Single(_)) => return fail(ParseErrorKind::EpsilonTargetNotSet),
            (Some(symbol), Target::Set(targets)) => {
                if !self.single.is_empty() {
                    return fail(ParseErrorKind::SetTargetInDfa);
                }
                let key = (state, symbol);
                if self.sets.contains_key(&key) {
                    let (state, symbol) = key;
                    return fail(ParseErrorKind::DuplicateTransition { state, symbol });
                }
                self.sets.insert(key, targets);
            }
            (Some(symbol), Target::Single(target)) => {
                if !self.sets.is_empty() || !self.epsilon.is_empty() {
                    return fail(ParseErrorKind::SingleTargetInNfa);
                }
                let key = (state, symbol);
                if self.single.contains_key(&key) {
                    let (state, symbol) = key;
                    return fail(ParseErrorKind::DuplicateTransition { state, symbol });
                }
                self.single.insert(key, target);
            }
        }
        Ok(())
    }

    fn finish(self, eof: Span) -> Result<Automaton> {
        let missing = |field| ParseError::new(ParseErrorKind::NotDefined(field), eof.clone());
        let states = self.states.ok_or_else(|| missing(Field::States))?;
        let alphabet = self.alphabet.ok_or_else(|| missing(Field::Alphabet))?;
        let initial = self.initial.ok_or_else(|| missing(Field::Initial))?;
        let accepting = self.accepting.ok_or_else(|| missing(Field::Accepting))?;
        if self.single.is_empty() && self.sets.is_empty() {
            return Err(ParseError::new(ParseErrorKind::TransitionsNotDefined, eof).into());
        }

        let universe = Universe::new(
            states.into_iter().map(State::from),
            alphabet.into_iter().map(Symbol::from),
            State::from(initial),
            accepting.into_iter().map(State::from),
        )?;
        let sets = self
            .sets
            .into_iter()
            .map(|(key, targets)| (labels(key), state_set(targets)));

        let automaton = if !self.epsilon.is_empty() {
            let epsilon = self
                .epsilon
                .into_iter()
                .map(|(state, targets)| (State::from(state), state_set(targets)));
            EpsNfa::new(universe, sets, epsilon)?.into()
        } else if !self.single.is_empty() {
            let single = self
                .single
                .into_iter()
                .map(|(key, target)| (labels(key), State::from(target)));
            Dfa::new(universe, single)?.into()
        } else {
            Nfa::new(universe, sets)?.into()
        };
        Ok(automaton)
    }
}

fn already_defined(field: Field, span: Span) -> crate::Error {
    ParseError::new(ParseErrorKind::AlreadyDefined(field), span).into()
}

fn labels((state, symbol): (String, String)) -> (State, Symbol) {
    (State::from(state), Symbol::from(symbol))
}

fn state_set(labels: IndexSet<String>) -> StateSet {
    labels.into_iter().map(State::from).collect()
}
