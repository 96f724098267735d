//! Printing the board and round results

use colored::Colorize;

use crate::core::Word;
use crate::output::preview::Preview;

/// Print the per-turn board: separator, gallows, preview, free letters.
pub fn print_board(art: &str, preview: &Preview, available: &str) {
    println!("\n{}", "─".repeat(60).bright_black());
    print!("{art}");
    println!("The word is: {}", preview.masked.bold());
    println!("\nAvailable letters: {available}");
}

pub fn print_win() {
    println!(
        "\n{}\n",
        "Congratulations; you have guessed the word!".green().bold()
    );
}

pub fn print_loss() {
    println!("\n{}\n", "Oh no! Better luck next time!".red().bold());
}

/// End-of-round summary: the word and its dictionary definitions.
pub fn print_word_info(word: &Word) {
    println!(
        "The word was {}!\n",
        format!("\"{word}\"").bright_yellow().bold()
    );

    println!("    {}", "Definitions:".bright_cyan().bold());
    for meaning in word.meanings() {
        for entry in &meaning.definitions {
            println!(
                "    {}: {}",
                meaning.part_of_speech.cyan(),
                entry.definition
            );
            if let Some(example) = &entry.example {
                println!("        Example: {}", example.italic());
            }
        }
    }
}
