//! Reasons a guess can be turned away

use thiserror::Error;

/// Rejection raised while submitting or evaluating a guess
///
/// None of these consume a round; the session is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    /// Input was more than one token
    #[error("Only one word per line!")]
    MalformedInput,

    #[error("The word needs to have {expected} letters!")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Invalid word! '{0}' is not in the dictionary")]
    NotInDictionary(String),

    /// Evaluator called with words of different lengths
    #[error("cannot compare a {guess_len}-letter guess with a {secret_len}-letter word")]
    InvalidInput { guess_len: usize, secret_len: usize },

    #[error("The game is already over")]
    GameOver,
}
