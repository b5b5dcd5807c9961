#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core label types for fsmc automata.
//!
//! States and symbols are reference-counted string labels. Cloning one is a
//! pointer copy; equality, hashing and ordering go through the label text, so
//! two independently created labels with the same text are interchangeable.

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

pub mod names;
pub mod utils;


pub use names::FreshNames;

macro_rules! label {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(Rc<str>);

        impl $name {
            pub fn new(label: impl Into<Rc<str>>) -> Self {
                Self(label.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({:?})", stringify!($name), self.as_str())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                self.as_str()
            }
        }

        impl From<&str> for $name {
            fn from(label: &str) -> Self {
                Self::new(label)
            }
        }

        impl From<String> for $name {
            fn from(label: String) -> Self {
                Self::new(label)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

label! {
    /// A state of a finite automaton.
    ///
    /// Labels are free-form: parsed automata use the identifiers from their
    /// definition, generated automata use synthesized names such as `sym3` or
    /// `{a,b}`.
    State
}

label! {
    /// An input symbol drawn from an automaton's alphabet.
    Symbol
}

/// A set of states, ordered by label.
///
/// Ordered so that it can key a map during subset construction and so that
/// rendering is deterministic.
pub type StateSet = BTreeSet<State>;

/// Splits `text` into a word of one symbol per character.
///
/// Multi-character symbols cannot be expressed this way; build the word by
/// hand when the alphabet contains them.
pub fn word(text: &str) -> Vec<Symbol> {
    let mut buf = [0u8; 4];
    text.chars()
        .map(|c| Symbol::new(&*c.encode_utf8(&mut buf)))
        .collect()
}
