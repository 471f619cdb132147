//! Game session state
//!
//! A session owns the secret word and the feedback history for one game.
//! It validates raw guesses, scores the accepted ones, and stops accepting
//! input once the game is won or the round limit is reached.

use super::{Dictionary, GuessError, Pattern, Verdict, Word, is_single_token, normalize};
use crate::config::{ConfigError, GameConfig};
use rustc_hash::FxHashMap;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Active,
    Won,
    Lost,
}

/// One game against a fixed secret word
#[derive(Debug, Clone)]
pub struct Session<'a> {
    secret: Word,
    dictionary: &'a Dictionary,
    max_rounds: usize,
    guesses: Vec<Word>,
    history: Vec<Pattern>,
    outcome: Outcome,
}

impl<'a> Session<'a> {
    /// Start a game
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration is invalid or the secret does
    /// not have the configured length.
    pub fn new(
        secret: Word,
        dictionary: &'a Dictionary,
        config: &GameConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if secret.len() != config.word_length {
            return Err(ConfigError::SecretLength {
                word: secret.text().to_string(),
                expected: config.word_length,
                actual: secret.len(),
            });
        }

        log::debug!(
            "new session: {} letters, {} rounds, {} allowed words",
            secret.len(),
            config.max_rounds,
            dictionary.len()
        );

        Ok(Self {
            secret,
            dictionary,
            max_rounds: config.max_rounds,
            guesses: Vec::with_capacity(config.max_rounds),
            history: Vec::with_capacity(config.max_rounds),
            outcome: Outcome::Active,
        })
    }

    /// Validate, score and record a raw guess
    ///
    /// Checks run in order: game still active, single token, length after
    /// normalization, dictionary membership. A rejected guess leaves the
    /// session unchanged and does not use up a round.
    ///
    /// # Errors
    /// Returns the first `GuessError` that applies.
    pub fn submit_guess(&mut self, raw: &str) -> Result<Pattern, GuessError> {
        let result = self.try_guess(raw);
        match &result {
            Ok(pattern) => log::debug!(
                "round {}/{}: {}",
                self.history.len(),
                self.max_rounds,
                pattern.to_markers()
            ),
            Err(e) => log::debug!("guess rejected: {e}"),
        }
        result
    }

    fn try_guess(&mut self, raw: &str) -> Result<Pattern, GuessError> {
        if self.is_terminal() {
            return Err(GuessError::GameOver);
        }

        if !is_single_token(raw) {
            return Err(GuessError::MalformedInput);
        }

        let normalized = normalize(raw);

        let actual = normalized.chars().count();
        if actual != self.secret.len() {
            return Err(GuessError::LengthMismatch {
                expected: self.secret.len(),
                actual,
            });
        }

        let guess = self
            .dictionary
            .get(&normalized)
            .cloned()
            .ok_or(GuessError::NotInDictionary(normalized))?;

        let pattern = Pattern::evaluate(&guess, &self.secret)?;

        self.guesses.push(guess);
        self.history.push(pattern.clone());

        if pattern.is_perfect() {
            self.outcome = Outcome::Won;
            log::info!("game won in {} rounds", self.history.len());
        } else if self.history.len() >= self.max_rounds {
            self.outcome = Outcome::Lost;
            log::info!("game lost after {} rounds", self.history.len());
        }

        Ok(pattern)
    }

    /// Feedback for every accepted guess, oldest first
    #[must_use]
    pub fn history(&self) -> &[Pattern] {
        &self.history
    }

    /// Accepted guesses, parallel to [`Self::history`]
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome != Outcome::Active
    }

    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    #[must_use]
    pub fn rounds_remaining(&self) -> usize {
        self.max_rounds.saturating_sub(self.history.len())
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Best verdict seen so far for each guessed letter
    #[must_use]
    pub fn letter_hints(&self) -> FxHashMap<u8, Verdict> {
        let mut hints: FxHashMap<u8, Verdict> = FxHashMap::default();
        for (guess, pattern) in self.guesses.iter().zip(&self.history) {
            for (&letter, &verdict) in guess.letters().iter().zip(pattern.verdicts()) {
                hints
                    .entry(letter)
                    .and_modify(|best| *best = (*best).max(verdict))
                    .or_insert(verdict);
            }
        }
        hints
    }
}
