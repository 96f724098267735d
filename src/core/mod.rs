//! Core domain types for the game
//!
//! The word model, guess classification, and the round state machine.
//! Everything here is pure and synchronous; remote acquisition and
//! terminal I/O live in their own modules.

mod guess;
mod round;
mod word;

pub use guess::{Guess, GuessRejection};
pub use round::{GuessEngine, Outcome, RoundState};
pub use word::{DefinitionEntry, Meaning, Word};
