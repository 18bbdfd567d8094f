//! Formatting utilities for terminal output

use crate::core::{ALPHABET, Feedback, TileStatus};
use crate::game::{Game, GameStatus};
use colored::{ColoredString, Colorize};

/// Render one tile with a coloured background
#[must_use]
pub fn colored_tile(ch: char, status: TileStatus) -> ColoredString {
    let text = format!(" {ch} ");
    match status {
        TileStatus::Correct => text.black().on_green().bold(),
        TileStatus::Present => text.black().on_yellow().bold(),
        TileStatus::Absent => text.white().on_bright_black(),
        TileStatus::Empty => text.normal(),
    }
}

/// Render a board row of `(char, status)` cells
#[must_use]
pub fn format_row(cells: &[(char, TileStatus)]) -> String {
    cells
        .iter()
        .map(|&(ch, status)| colored_tile(ch, status).to_string())
        .collect()
}

/// Render a guess next to its feedback tiles
#[must_use]
pub fn format_guess(guess: &str, feedback: &Feedback) -> String {
    let cells: Vec<(char, TileStatus)> = guess
        .chars()
        .zip(feedback.tiles().iter().copied())
        .collect();
    format_row(&cells)
}

/// Render the alphabet, each key coloured by its best status so far
#[must_use]
pub fn format_keyboard(game: &Game) -> String {
    ALPHABET
        .iter()
        .map(|&ch| colored_tile(ch, game.key_status(ch)).to_string())
        .collect()
}

/// Spoiler-free share text: header line then one emoji row per guess
///
/// Lost games show `X` in place of the guess count.
#[must_use]
pub fn share_text(game: &Game) -> String {
    let score = match game.status() {
        GameStatus::Won => game.rows().len().to_string(),
        GameStatus::Lost | GameStatus::InProgress => "X".to_string(),
    };

    let mut text = format!(
        "Numble {} {}/{}",
        game.puzzle().target(),
        score,
        game.config().max_guesses
    );
    for row in game.rows() {
        text.push('\n');
        text.push_str(&row.feedback.to_emoji());
    }
    text
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
