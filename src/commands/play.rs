//! Text-mode game loop
//!
//! Plays puzzles line by line on stdin/stdout.

use crate::core::is_alphabet;
use crate::game::{Game, GameConfig, GameStatus, Statistics};
use crate::output::formatters::{format_keyboard, format_row, share_text};
use crate::puzzles::{Puzzle, select};
use colored::Colorize;
use std::fmt;
use std::io::{self, Write};

/// One line of player input, parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    Quit,
    Help,
    /// Reveal a tile (0-based position)
    Hint(usize),
    Guess(String),
}

impl PlayCommand {
    /// Parse a line of input
    ///
    /// Hints are entered 1-based (`hint 3`) and stored 0-based.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "" => None,
            "quit" | "q" | "exit" => Some(Self::Quit),
            "help" | "h" | "?" => Some(Self::Help),
            lower => {
                if let Some(arg) = lower.strip_prefix("hint") {
                    let position: usize = arg.trim().parse().ok()?;
                    return position.checked_sub(1).map(Self::Hint);
                }
                Some(Self::Guess(line.chars().filter(|c| !c.is_whitespace()).collect()))
            }
        }
    }
}

/// Reasons a typed guess cannot be placed on the working row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryError {
    /// A character outside the digit/operator alphabet (0-based position)
    InvalidCharacter { ch: char, position: usize },
    /// The guess fits neither the whole row nor just its open tiles
    WrongLength {
        typed: usize,
        row: usize,
        open: usize,
    },
    /// A full-length guess disagrees with a revealed tile
    RevealedMismatch {
        position: usize,
        expected: char,
        typed: char,
    },
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { ch, position } => {
                write!(f, "Invalid character '{ch}' at tile {}", position + 1)
            }
            Self::WrongLength { typed, row, open } if row == open => {
                write!(f, "Guess has {typed} tiles, expected {row}")
            }
            Self::WrongLength { typed, row, open } => write!(
                f,
                "Guess has {typed} tiles, expected {row} (or {open} without revealed tiles)"
            ),
            Self::RevealedMismatch {
                position,
                expected,
                typed,
            } => write!(
                f,
                "Tile {} is revealed as '{expected}', not '{typed}'",
                position + 1
            ),
        }
    }
}

impl std::error::Error for EntryError {}

/// Replace the working row with a typed guess
///
/// A full-length guess must agree with every revealed tile. A guess as
/// long as the number of open tiles fills those tiles in order. Anything
/// else is rejected and the working row is left untouched.
///
/// # Errors
/// Returns `EntryError` for characters outside the alphabet, a length
/// matching neither form, or a full-length guess that contradicts a
/// revealed tile.
pub fn enter_guess(game: &mut Game, guess: &str) -> Result<(), EntryError> {
    let chars: Vec<char> = guess.chars().collect();

    if let Some((position, &ch)) = chars.iter().enumerate().find(|(_, c)| !is_alphabet(**c)) {
        return Err(EntryError::InvalidCharacter { ch, position });
    }

    let row = game.cells().len();
    let open = row - game.revealed().len();

    let typed: Vec<char> = if chars.len() == row {
        for &position in game.revealed() {
            let expected = game.cells()[position].unwrap_or(chars[position]);
            if chars[position] != expected {
                return Err(EntryError::RevealedMismatch {
                    position,
                    expected,
                    typed: chars[position],
                });
            }
        }
        chars
            .iter()
            .enumerate()
            .filter(|(i, _)| !game.revealed().contains(i))
            .map(|(_, &ch)| ch)
            .collect()
    } else if chars.len() == open {
        chars
    } else {
        return Err(EntryError::WrongLength {
            typed: chars.len(),
            row,
            open,
        });
    };

    game.clear_input();
    for ch in typed {
        game.input(ch);
    }
    Ok(())
}

/// Play puzzles until the player quits
///
/// The first game uses `puzzle`; further games draw at random from
/// `puzzles`. Finished games are recorded in `stats`.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play(
    puzzle: &Puzzle,
    puzzles: &[Puzzle],
    config: GameConfig,
    stats: &mut Statistics,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                           Numble                             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    let mut game = Game::new(puzzle.clone(), config);

    loop {
        print_game(&game);

        let Some(line) = get_user_input("Guess")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match PlayCommand::parse(&line) {
            None => continue,
            Some(PlayCommand::Quit) => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Some(PlayCommand::Help) => print_help(),
            Some(PlayCommand::Hint(position)) => match game.reveal(position) {
                Ok(ch) => println!("💡 Tile {} is '{ch}'\n", position + 1),
                Err(e) => println!("❌ {e}\n"),
            },
            Some(PlayCommand::Guess(guess)) => {
                if let Err(e) = enter_guess(&mut game, &guess) {
                    println!("❌ {e}\n");
                } else if let Err(e) = game.submit() {
                    println!("❌ {e}\n");
                }
            }
        }

        if game.is_over() {
            stats.record(&game);
            print_outcome(&game);

            let again = get_user_input("Play again? (yes/no)")?.unwrap_or_default();
            if !matches!(again.to_lowercase().as_str(), "yes" | "y") {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }

            let Some(next) = select::random(puzzles) else {
                return Err("No puzzles available".to_string());
            };
            game = Game::new(next.clone(), config);
            println!("\n🔄 New game started!\n");
        }
    }
}

fn print_help() {
    println!("Find the hidden equation. Every guess must be a valid equation");
    println!("that equals the target, using digits and + - * /.\n");
    println!("  - Green:  right character, right place");
    println!("  - Yellow: in the equation, wrong place");
    println!("  - Gray:   not in the equation (or no copies left)\n");
    println!("Commands: 'hint N' to reveal tile N, 'help', 'quit'\n");
}

fn print_game(game: &Game) {
    println!("────────────────────────────────────────────────────────────");
    println!(
        "Target: {}    Guesses left: {}",
        game.puzzle().target().to_string().bright_yellow().bold(),
        game.guesses_remaining()
    );
    println!("────────────────────────────────────────────────────────────");
    for row in game.display_rows() {
        println!("  {}", format_row(&row));
    }
    println!("\n  {}\n", format_keyboard(game));
}

fn print_outcome(game: &Game) {
    for row in game.display_rows() {
        println!("  {}", format_row(&row));
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    if game.status() == GameStatus::Won {
        let turns = game.rows().len();
        println!(
            "{}",
            "    🎉 🎊 ✨  N U M B L E   S O L V E D !  ✨ 🎊 🎉    "
                .bright_green()
                .bold()
        );
        println!(
            "\n  Solution found in {} {}",
            turns.to_string().bright_cyan().bold(),
            if turns == 1 { "guess" } else { "guesses" }
        );
    } else {
        println!("{}", "    Out of guesses!".red().bold());
        println!(
            "\n  The answer was {}",
            game.puzzle().solution().bright_white().bold()
        );
    }
    println!("\n{}\n", share_text(game));
    println!("{}", "═".repeat(70).bright_cyan());
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok((read > 0).then(|| input.trim().to_string()))
}
