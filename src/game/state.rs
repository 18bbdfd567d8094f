//! Game state reducer
//!
//! Owns the board for one puzzle: the working row being typed, the rows
//! already played, hint reveals, and win/loss detection. Rendering is left
//! to the caller; `display_rows` gives everything needed to draw the board.

use crate::core::{
    ExpressionError, Feedback, ScoreError, TileStatus, Value, check_syntax, evaluate, is_alphabet,
};
use crate::puzzles::Puzzle;
use std::collections::BTreeSet;
use std::fmt;

/// Game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_guesses: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self { max_guesses: 6 }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// A submitted guess with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub guess: String,
    pub feedback: Feedback,
}

/// Reasons a submission is rejected
///
/// A rejected submission does not use up a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    GameOver,
    /// Not every cell of the working row is filled
    Incomplete { filled: usize, required: usize },
    InvalidExpression(ExpressionError),
    /// The guess is valid but does not equal the target
    WrongValue { target: i64, actual: Value },
    Score(ScoreError),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "The game is over"),
            Self::Incomplete { filled, required } => {
                write!(f, "Only {filled} of {required} tiles filled")
            }
            Self::InvalidExpression(e) => write!(f, "Not a valid equation: {e}"),
            Self::WrongValue { target, actual } => {
                write!(f, "That equals {actual}, not {target}")
            }
            Self::Score(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Reasons a hint cannot be revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintError {
    GameOver,
    OutOfRange { position: usize, length: usize },
}

impl fmt::Display for HintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "The game is over"),
            Self::OutOfRange { position, length } => {
                write!(f, "Position {position} is outside the {length}-tile row")
            }
        }
    }
}

impl std::error::Error for HintError {}

/// One game of a single puzzle
///
/// The cursor ranges over `0..=len`; `len` means "past the last tile".
/// Revealed tiles are locked: typing skips over them and erasing leaves
/// them in place.
#[derive(Debug, Clone)]
pub struct Game {
    puzzle: Puzzle,
    config: GameConfig,
    rows: Vec<Row>,
    cells: Vec<Option<char>>,
    cursor: usize,
    revealed: BTreeSet<usize>,
    status: GameStatus,
}

impl Game {
    #[must_use]
    pub fn new(puzzle: Puzzle, config: GameConfig) -> Self {
        let cells = vec![None; puzzle.len()];
        Self {
            puzzle,
            config,
            rows: Vec::new(),
            cells,
            cursor: 0,
            revealed: BTreeSet::new(),
            status: GameStatus::InProgress,
        }
    }

    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Cells of the working row (`None` = unfilled)
    #[must_use]
    pub fn cells(&self) -> &[Option<char>] {
        &self.cells
    }

    /// Positions revealed by hints
    #[must_use]
    pub fn revealed(&self) -> &BTreeSet<usize> {
        &self.revealed
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        self.config.max_guesses.saturating_sub(self.rows.len())
    }

    /// The working row as text, with unfilled cells as spaces
    #[must_use]
    pub fn working_input(&self) -> String {
        self.cells.iter().map(|c| c.unwrap_or(' ')).collect()
    }

    fn len(&self) -> usize {
        self.cells.len()
    }

    fn is_locked(&self, position: usize) -> bool {
        self.revealed.contains(&position)
    }

    /// Type a character at the cursor and advance
    ///
    /// Returns `false` (and changes nothing) if the game is over, the
    /// character is outside the alphabet, or no editable cell remains.
    pub fn input(&mut self, ch: char) -> bool {
        if self.is_over() || !is_alphabet(ch) {
            return false;
        }

        let Some(position) = (self.cursor..self.len()).find(|&i| !self.is_locked(i)) else {
            return false;
        };

        self.cells[position] = Some(ch);
        self.cursor = position + 1;
        true
    }

    /// Step back one cell and clear it
    pub fn backspace(&mut self) {
        if self.is_over() {
            return;
        }
        self.cursor = self.cursor.saturating_sub(1);
        self.clear_at_cursor();
    }

    /// Clear the cell under the cursor without moving
    pub fn delete(&mut self) {
        if self.is_over() {
            return;
        }
        self.clear_at_cursor();
    }

    /// Clear every unlocked cell and return the cursor to the first one
    pub fn clear_input(&mut self) {
        if self.is_over() {
            return;
        }
        self.reset_working_row();
    }

    fn clear_at_cursor(&mut self) {
        if self.cursor < self.len() && !self.is_locked(self.cursor) {
            self.cells[self.cursor] = None;
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    /// Submit the working row as a guess
    ///
    /// The guess must be a complete, valid expression equal to the target.
    /// On acceptance the row is scored, recorded, and the working row is
    /// reset (keeping revealed tiles).
    ///
    /// # Errors
    /// Returns `SubmitError` if the game is over or the guess is rejected.
    pub fn submit(&mut self) -> Result<Feedback, SubmitError> {
        if self.is_over() {
            return Err(SubmitError::GameOver);
        }

        let guess = self.complete_guess()?;
        if let Err(e) = self.check_guess(&guess) {
            log::debug!("Rejected guess '{guess}': {e}");
            return Err(e);
        }

        let feedback =
            Feedback::calculate(&guess, self.puzzle.solution()).map_err(SubmitError::Score)?;

        self.rows.push(Row {
            guess,
            feedback: feedback.clone(),
        });

        if feedback.is_perfect() {
            self.status = GameStatus::Won;
            log::info!("Solved {} in {} guesses", self.puzzle, self.rows.len());
        } else if self.rows.len() >= self.config.max_guesses {
            self.status = GameStatus::Lost;
            log::info!("Out of guesses for {}", self.puzzle);
        }

        self.reset_working_row();
        Ok(feedback)
    }

    fn complete_guess(&self) -> Result<String, SubmitError> {
        let guess: Option<String> = self.cells.iter().copied().collect();
        guess.ok_or_else(|| SubmitError::Incomplete {
            filled: self.cells.iter().filter(|c| c.is_some()).count(),
            required: self.len(),
        })
    }

    fn check_guess(&self, guess: &str) -> Result<(), SubmitError> {
        check_syntax(guess).map_err(SubmitError::InvalidExpression)?;
        let actual = evaluate(guess).map_err(SubmitError::InvalidExpression)?;

        let target = self.puzzle.target();
        if actual != Value::from_integer(target) {
            return Err(SubmitError::WrongValue { target, actual });
        }
        Ok(())
    }

    fn reset_working_row(&mut self) {
        for (i, cell) in self.cells.iter_mut().enumerate() {
            *cell = if self.revealed.contains(&i) {
                self.puzzle.char_at(i)
            } else {
                None
            };
        }
        self.cursor = (0..self.cells.len())
            .find(|i| !self.revealed.contains(i))
            .unwrap_or(self.cells.len());
    }

    /// Reveal the solution character at `position` into the working row
    ///
    /// # Errors
    /// Returns `HintError` if the game is over or the position is outside the row.
    pub fn reveal(&mut self, position: usize) -> Result<char, HintError> {
        if self.is_over() {
            return Err(HintError::GameOver);
        }

        let ch = self.puzzle.char_at(position).ok_or(HintError::OutOfRange {
            position,
            length: self.len(),
        })?;

        self.cells[position] = Some(ch);
        self.revealed.insert(position);
        if self.cursor == position {
            self.cursor = (position..self.len())
                .find(|&i| !self.is_locked(i))
                .unwrap_or(self.len());
        }

        log::debug!("Revealed '{ch}' at position {position}");
        Ok(ch)
    }

    /// Every board row as `(char, status)` cells
    ///
    /// Played rows carry their feedback; the working row and unplayed rows
    /// are `Empty`, with unfilled cells shown as spaces.
    #[must_use]
    pub fn display_rows(&self) -> Vec<Vec<(char, TileStatus)>> {
        let mut board: Vec<Vec<(char, TileStatus)>> = self
            .rows
            .iter()
            .map(|row| {
                row.guess
                    .chars()
                    .zip(row.feedback.tiles().iter().copied())
                    .collect()
            })
            .collect();

        if !self.is_over() {
            board.push(
                self.cells
                    .iter()
                    .map(|c| (c.unwrap_or(' '), TileStatus::Empty))
                    .collect(),
            );
        }

        let blank = vec![(' ', TileStatus::Empty); self.len()];
        while board.len() < self.config.max_guesses {
            board.push(blank.clone());
        }

        board
    }

    /// Best status seen for a character across all played rows
    ///
    /// Used to colour an on-screen keyboard. `Empty` means never guessed.
    #[must_use]
    pub fn key_status(&self, ch: char) -> TileStatus {
        self.rows
            .iter()
            .flat_map(|row| row.guess.chars().zip(row.feedback.tiles().iter().copied()))
            .filter(|&(c, _)| c == ch)
            .map(|(_, status)| status)
            .max()
            .unwrap_or(TileStatus::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileStatus::{Absent, Correct, Empty, Present};

    fn game() -> Game {
        Game::new(Puzzle::new(20, "10+5*2").unwrap(), GameConfig::new())
    }

    fn type_str(game: &mut Game, text: &str) {
        for ch in text.chars() {
            game.input(ch);
        }
    }

    #[test]
    fn input_fills_and_advances() {
        let mut game = game();
        assert!(game.input('1'));
        assert!(game.input('+'));
        assert_eq!(game.cursor(), 2);
        assert_eq!(game.working_input(), "1+    ");
    }

    #[test]
    fn input_rejects_foreign_characters_and_overflow() {
        let mut game = game();
        assert!(!game.input('='));
        assert!(!game.input('a'));
        type_str(&mut game, "123456");
        assert!(!game.input('7'));
        assert_eq!(game.working_input(), "123456");
        assert_eq!(game.cursor(), 6);
    }

    #[test]
    fn backspace_and_delete() {
        let mut game = game();
        type_str(&mut game, "123");
        game.backspace();
        assert_eq!(game.working_input(), "12    ");
        assert_eq!(game.cursor(), 2);

        game.move_left();
        game.delete();
        assert_eq!(game.working_input(), "1     ");
        assert_eq!(game.cursor(), 1);

        game.move_left();
        game.move_left();
        assert_eq!(game.cursor(), 0);
        game.backspace();
        assert_eq!(game.working_input(), "      ");
    }

    #[test]
    fn cursor_movement_clamps() {
        let mut game = game();
        for _ in 0..10 {
            game.move_right();
        }
        assert_eq!(game.cursor(), 6);
        game.move_left();
        assert!(game.input('9'));
        assert_eq!(game.working_input(), "     9");
    }

    #[test]
    fn submit_incomplete_row() {
        let mut game = game();
        type_str(&mut game, "10+5");
        assert_eq!(
            game.submit(),
            Err(SubmitError::Incomplete {
                filled: 4,
                required: 6
            })
        );
        assert!(game.rows().is_empty());
    }

    #[test]
    fn submit_invalid_expression_does_not_use_a_guess() {
        let mut game = game();
        type_str(&mut game, "10++52");
        assert!(matches!(
            game.submit(),
            Err(SubmitError::InvalidExpression(_))
        ));
        assert_eq!(game.guesses_remaining(), 6);
        assert_eq!(game.working_input(), "10++52");
    }

    #[test]
    fn submit_wrong_value() {
        let mut game = game();
        type_str(&mut game, "10+5*3");
        assert_eq!(
            game.submit(),
            Err(SubmitError::WrongValue {
                target: 20,
                actual: Value::from_integer(25)
            })
        );
    }

    #[test]
    fn submit_accepted_guess_is_scored() {
        let mut game = game();
        type_str(&mut game, "5*2+10");
        let feedback = game.submit().unwrap();

        assert_eq!(
            feedback.tiles(),
            &[Present, Present, Present, Present, Present, Present]
        );
        assert_eq!(game.rows().len(), 1);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.working_input(), "      ");
        assert_eq!(game.cursor(), 0);
    }

    #[test]
    fn submit_commuted_solution_is_not_a_win() {
        let mut game = game();
        type_str(&mut game, "10+2*5");
        let feedback = game.submit().unwrap();
        assert!(!feedback.is_perfect());
        assert_eq!(feedback.count_correct(), 4);
    }

    #[test]
    fn winning_guess_ends_game() {
        let mut game = game();
        type_str(&mut game, "10+5*2");
        assert!(game.submit().unwrap().is_perfect());
        assert_eq!(game.status(), GameStatus::Won);
        assert!(!game.input('1'));
        assert_eq!(game.submit(), Err(SubmitError::GameOver));
        assert_eq!(game.reveal(0), Err(HintError::GameOver));
    }

    #[test]
    fn running_out_of_guesses_loses() {
        let mut game = Game::new(
            Puzzle::new(20, "10+5*2").unwrap(),
            GameConfig { max_guesses: 2 },
        );
        type_str(&mut game, "5*2+10");
        game.submit().unwrap();
        type_str(&mut game, "18+2*1");
        game.submit().unwrap();
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.guesses_remaining(), 0);
    }

    #[test]
    fn reveal_splices_solution_character() {
        let mut game = game();
        assert_eq!(game.reveal(3), Ok('5'));
        assert_eq!(game.working_input(), "   5  ");
        assert!(game.revealed().contains(&3));

        // Typing skips the locked tile
        type_str(&mut game, "10+*2");
        assert_eq!(game.working_input(), "10+5*2");

        // Erasing leaves the revealed tile alone
        game.move_left();
        game.move_left();
        game.move_left();
        assert_eq!(game.cursor(), 3);
        game.delete();
        assert_eq!(game.working_input(), "10+5*2");
    }

    #[test]
    fn reveal_at_cursor_moves_cursor() {
        let mut game = game();
        game.reveal(0).unwrap();
        assert_eq!(game.cursor(), 1);
        assert!(game.input('0'));
        assert_eq!(game.working_input(), "10    ");
    }

    #[test]
    fn reveal_survives_submission() {
        let mut game = game();
        game.reveal(0).unwrap();
        type_str(&mut game, "8+2*1");
        game.submit().unwrap();
        assert_eq!(game.rows()[0].guess, "18+2*1");
        assert_eq!(game.working_input(), "1     ");
        assert_eq!(game.cursor(), 1);
    }

    #[test]
    fn clear_input_keeps_revealed_tiles() {
        let mut game = game();
        game.reveal(2).unwrap();
        type_str(&mut game, "1234");
        assert_eq!(game.working_input(), "12+34 ");

        game.clear_input();
        assert_eq!(game.working_input(), "  +   ");
        assert_eq!(game.cursor(), 0);
    }

    #[test]
    fn reveal_out_of_range() {
        let mut game = game();
        assert_eq!(
            game.reveal(6),
            Err(HintError::OutOfRange {
                position: 6,
                length: 6
            })
        );
    }

    #[test]
    fn display_rows_pads_board() {
        let mut game = game();
        type_str(&mut game, "5*2+10");
        game.submit().unwrap();
        type_str(&mut game, "1");

        let board = game.display_rows();
        assert_eq!(board.len(), 6);
        assert_eq!(board[0][0], ('5', Present));
        assert_eq!(board[1][0], ('1', Empty));
        assert_eq!(board[1][1], (' ', Empty));
        assert!(board[5].iter().all(|&(c, s)| c == ' ' && s == Empty));
    }

    #[test]
    fn key_status_keeps_best_result() {
        let mut game = game();
        type_str(&mut game, "10+2*5");
        game.submit().unwrap();

        assert_eq!(game.key_status('1'), Correct);
        assert_eq!(game.key_status('2'), Present);
        assert_eq!(game.key_status('9'), Empty);

        type_str(&mut game, "19+1*1");
        game.submit().unwrap();
        assert_eq!(game.key_status('9'), Absent);
        assert_eq!(game.key_status('1'), Correct);
    }
}
