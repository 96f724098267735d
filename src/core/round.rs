//! Round state and the guess engine
//!
//! `GuessEngine` owns the rules of a round: it validates raw input against
//! the current state and applies accepted guesses. `RoundState` is created
//! fresh per round and mutated only through `apply`.
//!
//! Win detection here (letter-set completeness, or an exact whole-word
//! match) is the authoritative one; the masked preview's "fully revealed"
//! flag is derived display data.

use rustc_hash::FxHashSet;

use crate::config::GameConfig;
use crate::core::guess::{Guess, GuessRejection};
use crate::core::word::Word;

/// Where a round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// Mutable state of one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    letter_guesses: FxHashSet<char>,
    word_guesses: FxHashSet<String>,
    incorrect_count: usize,
    outcome: Outcome,
}

impl RoundState {
    fn new() -> Self {
        Self {
            letter_guesses: FxHashSet::default(),
            word_guesses: FxHashSet::default(),
            incorrect_count: 0,
            outcome: Outcome::InProgress,
        }
    }

    /// Letters tried so far, uppercase.
    #[inline]
    #[must_use]
    pub fn letter_guesses(&self) -> &FxHashSet<char> {
        &self.letter_guesses
    }

    /// Incorrect guesses so far; doubles as the art stage.
    #[inline]
    #[must_use]
    pub fn incorrect_count(&self) -> usize {
        self.incorrect_count
    }

    #[inline]
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

/// Applies the game rules to a round.
#[derive(Debug, Clone, Copy)]
pub struct GuessEngine {
    config: GameConfig,
}

impl GuessEngine {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Fresh state for a new round.
    #[must_use]
    pub fn new_round(&self) -> RoundState {
        RoundState::new()
    }

    /// Classify a raw input line against the current state.
    ///
    /// The input is uppercased first, then judged: empty input, a single
    /// character (letter guess), or anything longer (word guess, with no
    /// alphabet restriction).
    ///
    /// # Errors
    ///
    /// Returns the applicable `GuessRejection`; none of them counts as a
    /// turn, the caller just re-prompts.
    pub fn validate(&self, raw: &str, state: &RoundState) -> Result<Guess, GuessRejection> {
        let normalized = raw.to_uppercase();
        let mut chars = normalized.chars();

        match (chars.next(), chars.next()) {
            (None, _) => Err(GuessRejection::Empty),
            (Some(letter), None) => {
                if state.letter_guesses.contains(&letter) {
                    Err(GuessRejection::AlreadyGuessedLetter)
                } else if self.config.is_guessable(letter) {
                    Ok(Guess::Letter(letter))
                } else {
                    Err(GuessRejection::InvalidLetter)
                }
            }
            (Some(_), Some(_)) => {
                if state.word_guesses.contains(&normalized) {
                    Err(GuessRejection::AlreadyGuessedWord)
                } else {
                    Ok(Guess::Word(normalized))
                }
            }
        }
    }

    /// Apply a validated guess.
    ///
    /// A no-op once the round is over, so the incorrect count can never
    /// pass the configured bound.
    pub fn apply(&self, guess: Guess, word: &Word, state: &mut RoundState) {
        if state.outcome != Outcome::InProgress {
            return;
        }

        match guess {
            Guess::Letter(letter) => {
                state.letter_guesses.insert(letter);
                if !word.contains_letter(letter) {
                    state.incorrect_count += 1;
                }
            }
            Guess::Word(text) => {
                if text == word.text() {
                    // An exact match wins on the spot, whatever the count.
                    state.outcome = Outcome::Won;
                    return;
                }
                state.word_guesses.insert(text);
                state.incorrect_count += 1;
            }
        }

        state.outcome = if self.is_complete(word, &state.letter_guesses) {
            Outcome::Won
        } else if state.incorrect_count >= self.config.max_incorrect_guesses {
            Outcome::Lost
        } else {
            Outcome::InProgress
        };
    }

    /// Whether every guessable letter of the word has been tried.
    ///
    /// Characters outside the alphabet never block completion.
    #[must_use]
    pub fn is_complete(&self, word: &Word, letter_guesses: &FxHashSet<char>) -> bool {
        word.text()
            .chars()
            .filter(|c| self.config.is_guessable(*c))
            .all(|c| letter_guesses.contains(&c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> GuessEngine {
        GuessEngine::new(GameConfig::default())
    }

    fn word(text: &str) -> Word {
        Word::new(text, Vec::new())
    }

    fn apply_letter(engine: &GuessEngine, target: &Word, state: &mut RoundState, letter: &str) {
        let guess = engine.validate(letter, state).unwrap();
        engine.apply(guess, target, state);
    }

    #[test]
    fn empty_input_rejected() {
        let engine = engine();
        let state = engine.new_round();
        assert_eq!(engine.validate("", &state), Err(GuessRejection::Empty));
    }

    #[test]
    fn letter_guess_normalized_to_uppercase() {
        let engine = engine();
        let state = engine.new_round();
        assert_eq!(engine.validate("a", &state), Ok(Guess::Letter('A')));
        assert_eq!(engine.validate("A", &state), Ok(Guess::Letter('A')));
    }

    #[test]
    fn out_of_alphabet_letter_rejected() {
        let engine = engine();
        let state = engine.new_round();
        assert_eq!(engine.validate("7", &state), Err(GuessRejection::InvalidLetter));
        assert_eq!(engine.validate("!", &state), Err(GuessRejection::InvalidLetter));
    }

    #[test]
    fn word_guess_normalized_with_no_alphabet_check() {
        let engine = engine();
        let state = engine.new_round();
        assert_eq!(
            engine.validate("x-ray", &state),
            Ok(Guess::Word("X-RAY".to_string()))
        );
    }

    #[test]
    fn repeated_letter_rejected_and_state_unchanged() {
        let engine = engine();
        let target = word("CAT");
        let mut state = engine.new_round();

        apply_letter(&engine, &target, &mut state, "c");
        let snapshot = state.clone();

        assert_eq!(
            engine.validate("C", &state),
            Err(GuessRejection::AlreadyGuessedLetter)
        );
        assert_eq!(state, snapshot);
    }

    #[test]
    fn repeated_word_guess_rejected() {
        let engine = engine();
        let target = word("CAT");
        let mut state = engine.new_round();

        let guess = engine.validate("dog", &state).unwrap();
        engine.apply(guess, &target, &mut state);

        assert_eq!(
            engine.validate("DOG", &state),
            Err(GuessRejection::AlreadyGuessedWord)
        );
    }

    #[test]
    fn correct_letter_does_not_increment() {
        let engine = engine();
        let target = word("CAT");
        let mut state = engine.new_round();

        apply_letter(&engine, &target, &mut state, "c");
        assert_eq!(state.incorrect_count(), 0);
        assert_eq!(state.outcome(), Outcome::InProgress);
    }

    #[test]
    fn wrong_letter_increments() {
        let engine = engine();
        let target = word("CAT");
        let mut state = engine.new_round();

        apply_letter(&engine, &target, &mut state, "z");
        assert_eq!(state.incorrect_count(), 1);
        assert_eq!(state.outcome(), Outcome::InProgress);
    }

    #[test]
    fn guessing_all_letters_of_cat_wins() {
        let engine = engine();
        let target = word("CAT");
        let mut state = engine.new_round();

        apply_letter(&engine, &target, &mut state, "c");
        assert_eq!(state.outcome(), Outcome::InProgress);
        apply_letter(&engine, &target, &mut state, "a");
        assert_eq!(state.outcome(), Outcome::InProgress);
        apply_letter(&engine, &target, &mut state, "t");
        assert_eq!(state.outcome(), Outcome::Won);
        assert_eq!(state.incorrect_count(), 0);
    }

    #[test]
    fn tenth_wrong_letter_loses_and_not_earlier() {
        let engine = engine();
        let target = word("DOG");
        let mut state = engine.new_round();

        for (i, letter) in ["Z", "X", "Q", "W", "R", "Y", "U", "I", "P", "L"]
            .iter()
            .enumerate()
        {
            assert_eq!(state.outcome(), Outcome::InProgress, "lost after {i} misses");
            apply_letter(&engine, &target, &mut state, letter);
        }

        assert_eq!(state.incorrect_count(), 10);
        assert_eq!(state.outcome(), Outcome::Lost);
    }

    #[test]
    fn exact_word_guess_wins_any_case() {
        let engine = engine();
        let target = word("CAT");
        let mut state = engine.new_round();

        let guess = engine.validate("cAt", &state).unwrap();
        engine.apply(guess, &target, &mut state);
        assert_eq!(state.outcome(), Outcome::Won);
    }

    #[test]
    fn word_guess_win_preempts_the_bound() {
        let engine = engine();
        let target = word("DOG");
        let mut state = engine.new_round();

        // Nine misses, one away from losing.
        for letter in ["Z", "X", "Q", "W", "R", "Y", "U", "I", "P"] {
            apply_letter(&engine, &target, &mut state, letter);
        }
        assert_eq!(state.incorrect_count(), 9);

        let guess = engine.validate("dog", &state).unwrap();
        engine.apply(guess, &target, &mut state);
        assert_eq!(state.outcome(), Outcome::Won);
    }

    #[test]
    fn wrong_word_guess_increments_and_can_lose() {
        let engine = engine();
        let target = word("DOG");
        let mut state = engine.new_round();

        for letter in ["Z", "X", "Q", "W", "R", "Y", "U", "I", "P"] {
            apply_letter(&engine, &target, &mut state, letter);
        }

        let guess = engine.validate("cat", &state).unwrap();
        engine.apply(guess, &target, &mut state);
        assert_eq!(state.incorrect_count(), 10);
        assert_eq!(state.outcome(), Outcome::Lost);
    }

    #[test]
    fn apply_after_terminal_outcome_is_a_noop() {
        let engine = engine();
        let target = word("DOG");
        let mut state = engine.new_round();

        for letter in ["Z", "X", "Q", "W", "R", "Y", "U", "I", "P", "L"] {
            apply_letter(&engine, &target, &mut state, letter);
        }
        assert_eq!(state.outcome(), Outcome::Lost);

        let snapshot = state.clone();
        engine.apply(Guess::Letter('M'), &target, &mut state);
        assert_eq!(state, snapshot);
        assert!(state.incorrect_count() <= GameConfig::default().max_incorrect_guesses);
    }

    #[test]
    fn punctuation_never_blocks_the_win() {
        let engine = engine();
        let target = word("X-RAY");
        let mut state = engine.new_round();

        for letter in ["x", "r", "a", "y"] {
            apply_letter(&engine, &target, &mut state, letter);
        }
        assert_eq!(state.outcome(), Outcome::Won);
    }

    #[test]
    fn incorrect_count_bounded_for_reachable_states() {
        let engine = engine();
        let target = word("DOG");
        let mut state = engine.new_round();
        let max = GameConfig::default().max_incorrect_guesses;

        // Burn the whole alphabet plus word guesses; the bound must hold
        // at every step.
        for letter in 'A'..='Z' {
            if let Ok(guess) = engine.validate(&letter.to_string(), &state) {
                engine.apply(guess, &target, &mut state);
            }
            assert!(state.incorrect_count() <= max);
        }
        for text in ["CAR", "CART", "CARTS"] {
            if let Ok(guess) = engine.validate(text, &state) {
                engine.apply(guess, &target, &mut state);
            }
            assert!(state.incorrect_count() <= max);
        }
    }
}
