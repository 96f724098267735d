//! Hangman
//!
//! A terminal hangman game that fetches its word and dictionary
//! definitions from public web services, then runs a turn-based guessing
//! loop until the word is revealed or the gallows is complete.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::config::GameConfig;
//! use hangman::core::{GuessEngine, Outcome, Word};
//!
//! let engine = GuessEngine::new(GameConfig::default());
//! let word = Word::new("cat", Vec::new());
//!
//! let mut state = engine.new_round();
//! let guess = engine.validate("c", &state).unwrap();
//! engine.apply(guess, &word, &mut state);
//!
//! assert_eq!(state.outcome(), Outcome::InProgress);
//! ```

// Core domain types
pub mod core;

// Fixed game settings
pub mod config;

// Remote word acquisition
pub mod lookup;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
