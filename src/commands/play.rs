//! The interactive game loop
//!
//! One session: acquire a word, run the round turn by turn, show the
//! summary, offer another round.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::ProgressBar;

use crate::config::GameConfig;
use crate::core::{Guess, GuessEngine, GuessRejection, Outcome, Word};
use crate::lookup::{Backoff, WordLookup, WordSource};
use crate::output::{
    available_letters, print_board, print_loss, print_win, print_word_info, render_preview,
    stage_art,
};

/// Run rounds until the player declines to continue.
///
/// # Errors
///
/// Fails when word acquisition exhausts its error budget (terminal, per
/// the retry policy) or on a broken terminal stream.
pub fn run_game<L: WordLookup, B: Backoff>(
    source: &WordSource<L, B>,
    config: GameConfig,
) -> Result<()> {
    loop {
        let word = acquire_word(source)?;
        play_round(&word, config)?;
        if !prompt_play_again()? {
            break;
        }
    }
    Ok(())
}

/// Fetch the round's word, with a spinner while the services answer.
fn acquire_word<L: WordLookup, B: Backoff>(source: &WordSource<L, B>) -> Result<Word> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Picking a word; please wait...");
    spinner.enable_steady_tick(Duration::from_millis(120));

    let result = source.acquire();
    spinner.finish_and_clear();

    result.context("could not fetch a word for you; are you connected to the internet?")
}

fn play_round(word: &Word, config: GameConfig) -> Result<()> {
    let engine = GuessEngine::new(config);
    let mut state = engine.new_round();

    loop {
        let preview = render_preview(word, state.letter_guesses(), &config);
        print_board(
            stage_art(state.incorrect_count()),
            &preview,
            &available_letters(&config, state.letter_guesses()),
        );

        match state.outcome() {
            Outcome::Won => {
                print_win();
                break;
            }
            Outcome::Lost => {
                print_loss();
                break;
            }
            Outcome::InProgress => {}
        }

        let guess = loop {
            let raw = read_line("Make a guess")?;
            match engine.validate(&raw, &state) {
                Ok(guess) => break guess,
                // Nothing typed: just ask again.
                Err(GuessRejection::Empty) => {}
                Err(rejection) => println!("{rejection}"),
            }
        };

        let correct = match &guess {
            Guess::Letter(letter) => word.contains_letter(*letter),
            Guess::Word(text) => text == word.text(),
        };
        let is_word_guess = matches!(guess, Guess::Word(_));
        engine.apply(guess, word, &mut state);

        if correct {
            println!("{}", "This guess was correct!".green());
        } else {
            println!("{}", "This guess was incorrect!".red());
        }

        // A winning whole-word guess ends the round without another board.
        if is_word_guess && state.outcome() == Outcome::Won {
            print_win();
            break;
        }
    }

    print_word_info(word);
    Ok(())
}

fn prompt_play_again() -> Result<bool> {
    loop {
        let answer = read_line("Do you want to play again? (Y/N)")?.to_uppercase();
        match answer.as_str() {
            "Y" => return Ok(true),
            "N" => return Ok(false),
            _ => println!("Please type Y or N."),
        }
    }
}

/// Prompt on stdout, read one trimmed line from stdin.
fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .context("failed to read input")?;
    if bytes == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed").into());
    }

    Ok(input.trim().to_string())
}
