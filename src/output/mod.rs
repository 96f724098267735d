//! Terminal output formatting
//!
//! Pure presentation: the masked preview and the gallows frames are
//! functions of round state; the print helpers put them on screen.

pub mod art;
pub mod display;
pub mod formatters;
pub mod preview;

pub use art::stage_art;
pub use display::{print_board, print_loss, print_win, print_word_info};
pub use formatters::available_letters;
pub use preview::{Preview, render_preview};
