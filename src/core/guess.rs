//! Guess classification
//!
//! A raw input line is either a single-letter guess or a whole-word guess.
//! Rejections form a closed set; each one is recovered locally by
//! re-prompting and never costs a turn.

use std::fmt;

/// A validated guess, normalized to uppercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guess {
    Letter(char),
    Word(String),
}

/// Why a raw input was not accepted as a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessRejection {
    /// Nothing was entered.
    Empty,
    /// The letter was already tried this round.
    AlreadyGuessedLetter,
    /// The character is outside the guessable alphabet.
    InvalidLetter,
    /// The whole-word guess was already tried this round.
    AlreadyGuessedWord,
}

impl fmt::Display for GuessRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Please enter a guess!"),
            Self::AlreadyGuessedLetter => write!(f, "You have already guessed this letter!"),
            Self::InvalidLetter => write!(f, "This is not a valid letter!"),
            Self::AlreadyGuessedWord => write!(f, "You have already guessed this word!"),
        }
    }
}

impl std::error::Error for GuessRejection {}
