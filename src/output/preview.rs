//! Masked word preview
//!
//! A pure function of the word and the letters tried so far. The engine's
//! outcome is the authority on winning; `fully_revealed` exists for
//! display and must always agree with it.

use rustc_hash::FxHashSet;

use crate::config::GameConfig;
use crate::core::Word;

/// The rendered preview line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// The word with unguessed letters replaced by `_`.
    pub masked: String,
    /// True when no placeholder was emitted.
    pub fully_revealed: bool,
}

/// Mask the word against the guessed letters.
///
/// Guessed letters and characters outside the alphabet show literally;
/// everything else becomes a placeholder.
#[must_use]
pub fn render_preview(
    word: &Word,
    letter_guesses: &FxHashSet<char>,
    config: &GameConfig,
) -> Preview {
    let mut masked = String::with_capacity(word.text().len());
    let mut fully_revealed = true;

    for ch in word.text().chars() {
        if letter_guesses.contains(&ch) || !config.is_guessable(ch) {
            masked.push(ch);
        } else {
            masked.push('_');
            fully_revealed = false;
        }
    }

    Preview {
        masked,
        fully_revealed,
    }
}
