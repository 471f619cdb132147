//! Win/loss tally for the current run
//!
//! Kept in memory only; nothing is written to disk.

use super::{Outcome, Session};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// `guess_distribution[n]` = games won in `n` rounds
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    /// Record a finished game
    ///
    /// Sessions that are still active are ignored.
    pub fn record(&mut self, session: &Session<'_>) {
        match session.outcome() {
            Outcome::Active => {}
            Outcome::Won => {
                let rounds = session.rounds_played();
                self.games_played += 1;
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
                if self.guess_distribution.len() <= rounds {
                    self.guess_distribution.resize(rounds + 1, 0);
                }
                self.guess_distribution[rounds] += 1;
            }
            Outcome::Lost => {
                self.games_played += 1;
                self.current_streak = 0;
            }
        }
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Game counts are tiny
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::{Dictionary, Word};

    fn finished<'a>(dict: &'a Dictionary, guesses: &[&str]) -> Session<'a> {
        let config = GameConfig::new(5, 2).unwrap();
        let mut game = Session::new(Word::new("apple").unwrap(), dict, &config).unwrap();
        for guess in guesses {
            game.submit_guess(guess).unwrap();
        }
        game
    }

    #[test]
    fn records_wins_and_losses() {
        let dict = Dictionary::from_entries(["apple", "lemon", "melon"], 5);
        let mut stats = Statistics::default();

        stats.record(&finished(&dict, &["apple"]));
        stats.record(&finished(&dict, &["lemon", "apple"]));
        assert_eq!(stats.current_streak, 2);

        stats.record(&finished(&dict, &["lemon", "melon"]));

        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.guess_distribution, vec![0, 1, 1]);
        assert!((stats.win_rate() - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn ignores_unfinished_games() {
        let dict = Dictionary::from_entries(["apple", "lemon"], 5);
        let mut stats = Statistics::default();

        stats.record(&finished(&dict, &["lemon"]));

        assert_eq!(stats, Statistics::default());
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }
}
