//! Gallows art
//!
//! Eleven fixed frames, one per incorrect-guess stage. Pure data; the only
//! logic is clamping the index.

/// Frames indexed by incorrect-guess count; every frame is nine lines tall
/// so the board height never jumps.
static STAGES: [&str; 11] = [
    // 0: empty scene
    "\n\n\n\n\n\n\n\n\n",
    // 1: base
    concat!("\n\n\n\n\n\n\n\n", "===+=============\n"),
    // 2: pole
    concat!(
        "\n",
        "   |\n", "   |\n", "   |\n", "   |\n", "   |\n", "   |\n", "   |\n",
        "===+=============\n",
    ),
    // 3: beam
    concat!(
        "   ________\n",
        "   |/\n",
        "   |\n", "   |\n", "   |\n", "   |\n", "   |\n", "   |\n",
        "===+=============\n",
    ),
    // 4: rope
    concat!(
        "   ________\n",
        "   |/     |\n",
        "   |      |\n",
        "   |\n", "   |\n", "   |\n", "   |\n", "   |\n",
        "===+=============\n",
    ),
    // 5: head
    concat!(
        "   ________\n",
        "   |/     |\n",
        "   |      |\n",
        "   |      O\n",
        "   |\n", "   |\n", "   |\n", "   |\n",
        "===+=============\n",
    ),
    // 6: torso
    concat!(
        "   ________\n",
        "   |/     |\n",
        "   |      |\n",
        "   |      O\n",
        "   |      +\n",
        "   |      |\n",
        "   |\n", "   |\n",
        "===+=============\n",
    ),
    // 7: one arm
    concat!(
        "   ________\n",
        "   |/     |\n",
        "   |      |\n",
        "   |      O\n",
        "   |     -+\n",
        "   |      |\n",
        "   |\n", "   |\n",
        "===+=============\n",
    ),
    // 8: both arms
    concat!(
        "   ________\n",
        "   |/     |\n",
        "   |      |\n",
        "   |      O\n",
        "   |     -+-\n",
        "   |      |\n",
        "   |\n", "   |\n",
        "===+=============\n",
    ),
    // 9: one leg
    concat!(
        "   ________\n",
        "   |/     |\n",
        "   |      |\n",
        "   |      O\n",
        "   |     -+-\n",
        "   |      |\n",
        "   |     /\n",
        "   |\n",
        "===+=============\n",
    ),
    // 10: complete
    concat!(
        "   ________\n",
        "   |/     |\n",
        "   |      |\n",
        "   |      O\n",
        "   |     -+-\n",
        "   |      |\n",
        "   |     / \\\n",
        "   |\n",
        "===+=============\n",
    ),
];

/// Frame for an incorrect-guess count, clamped to the final frame.
#[must_use]
pub fn stage_art(incorrect_count: usize) -> &'static str {
    STAGES[incorrect_count.min(STAGES.len() - 1)]
}
