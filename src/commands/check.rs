//! Single-guess scoring
//!
//! Scores one guess against a given secret word without a dictionary or a
//! session. Handy for checking how repeated letters are credited.

use crate::core::{Pattern, Word, normalize};
use anyhow::{Context, Result};

/// Result of scoring one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub secret: Word,
    pub guess: Word,
    pub pattern: Pattern,
}

/// Normalize both words and score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word is not alphabetic after normalization or
/// the two words differ in length.
pub fn check_guess(secret: &str, guess: &str) -> Result<CheckResult> {
    let secret = Word::new(normalize(secret)).context("invalid secret word")?;
    let guess = Word::new(normalize(guess)).context("invalid guess")?;
    let pattern = Pattern::evaluate(&guess, &secret)?;

    Ok(CheckResult {
        secret,
        guess,
        pattern,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GuessError;

    #[test]
    fn scores_normalized_words() {
        let result = check_guess("lemon", "Mélon").unwrap();
        assert_eq!(result.guess.text(), "MELON");
        assert_eq!(result.secret.text(), "LEMON");
        assert_eq!(result.pattern.to_markers(), "POPOO");
    }

    #[test]
    fn does_not_need_dictionary_words() {
        let result = check_guess("xyzzy", "zzzzz").unwrap();
        assert_eq!(result.pattern.to_markers(), "XXOOX");
    }

    #[test]
    fn length_mismatch_is_invalid_input() {
        let err = check_guess("apple", "ap").unwrap_err();
        assert_eq!(
            err.downcast_ref::<GuessError>(),
            Some(&GuessError::InvalidInput {
                guess_len: 2,
                secret_len: 5
            })
        );
    }

    #[test]
    fn non_letters_rejected() {
        assert!(check_guess("apple", "app1e").is_err());
        assert!(check_guess("", "apple").is_err());
    }
}
