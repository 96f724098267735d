//! Word and definition model
//!
//! A `Word` is the target of one round: its text plus the dictionary
//! meanings shown when the round ends. Identity is case-insensitive, which
//! is implemented by uppercasing exactly once here at the boundary instead
//! of folding case at every comparison.

use std::fmt;

use serde::Deserialize;

/// One part-of-speech block from the dictionary service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    pub definitions: Vec<DefinitionEntry>,
}

/// A single definition, optionally with a usage example.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DefinitionEntry {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
}

/// The word being guessed, with its dictionary meanings.
///
/// Immutable once acquired; the text is stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    meanings: Vec<Meaning>,
}

impl Word {
    /// Create a word, normalizing its text to uppercase.
    pub fn new(text: impl Into<String>, meanings: Vec<Meaning>) -> Self {
        Self {
            text: text.into().to_uppercase(),
            meanings,
        }
    }

    /// The word text, uppercase.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Dictionary meanings, in service order.
    #[inline]
    #[must_use]
    pub fn meanings(&self) -> &[Meaning] {
        &self.meanings
    }

    /// Whether the word contains a letter (case-insensitive).
    #[must_use]
    pub fn contains_letter(&self, letter: char) -> bool {
        self.text.contains(letter.to_ascii_uppercase())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
