//! Session statistics
//!
//! Kept in memory for the lifetime of a play session.

use super::{Game, GameStatus};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// `guess_distribution[n]` = games won in exactly `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    /// Record a finished game
    ///
    /// Returns `false` and records nothing if the game is still in progress.
    pub fn record(&mut self, game: &Game) -> bool {
        match game.status() {
            GameStatus::InProgress => return false,
            GameStatus::Won => {
                let guesses = game.rows().len();
                if self.guess_distribution.len() <= guesses {
                    self.guess_distribution.resize(guesses + 1, 0);
                }
                self.guess_distribution[guesses] += 1;
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
            }
            GameStatus::Lost => self.current_streak = 0,
        }
        self.total_games += 1;
        true
    }

    /// Percentage of games won (0 when no games were played)
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}
