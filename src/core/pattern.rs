//! Guess evaluation and feedback representation
//!
//! A [`Pattern`] holds one [`Verdict`] per letter of a guess:
//! - `Exact`   = letter in the correct position
//! - `Present` = letter in the word, wrong position
//! - `Absent`  = letter contributes no further matches
//!
//! Repeated letters are credited at most as many times as they occur in the
//! secret word. Exact matches are claimed first, then the remaining letters are
//! handed out left to right.

use super::{GuessError, Word};
use rustc_hash::FxHashMap;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Verdict {
    Absent,
    Present,
    Exact,
}

impl Verdict {
    /// Marker letter: `O` exact, `P` present, `X` absent
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::Exact => 'O',
            Self::Present => 'P',
            Self::Absent => 'X',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Per-position feedback for one guess
///
/// Its length always equals the length of the secret word it was scored against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Vec<Verdict>);

impl Pattern {
    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches
    /// 2. Count the secret's letters that were not matched exactly
    /// 3. Second pass, left to right: a non-exact guess letter is `Present` if
    ///    its count is still positive, and the count is decremented
    ///
    /// # Errors
    /// Returns [`GuessError::InvalidInput`] if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Pattern, Verdict, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("slate").unwrap();
    /// let pattern = Pattern::evaluate(&guess, &secret).unwrap();
    ///
    /// assert_eq!(pattern.to_markers(), "XXOXO");
    /// assert_eq!(pattern.verdicts()[2], Verdict::Exact);
    /// ```
    pub fn evaluate(guess: &Word, secret: &Word) -> Result<Self, GuessError> {
        if guess.len() != secret.len() {
            return Err(GuessError::InvalidInput {
                guess_len: guess.len(),
                secret_len: secret.len(),
            });
        }

        let guess = guess.letters();
        let secret = secret.letters();

        // First pass: exact matches
        let mut verdicts: Vec<Verdict> = guess
            .iter()
            .zip(secret)
            .map(|(g, s)| if g == s { Verdict::Exact } else { Verdict::Absent })
            .collect();

        // Letters still available for present matches
        let mut remaining: FxHashMap<u8, usize> = FxHashMap::default();
        for (&letter, verdict) in secret.iter().zip(&verdicts) {
            if *verdict != Verdict::Exact {
                *remaining.entry(letter).or_insert(0) += 1;
            }
        }

        // Second pass: present matches, earliest position first
        for (&letter, verdict) in guess.iter().zip(verdicts.iter_mut()) {
            if *verdict == Verdict::Exact {
                continue;
            }
            if let Some(count) = remaining.get_mut(&letter)
                && *count > 0
            {
                *verdict = Verdict::Present;
                *count -= 1;
            }
        }

        Ok(Self(verdicts))
    }

    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is an exact match
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&v| v == Verdict::Exact)
    }

    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.count(Verdict::Exact)
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(Verdict::Present)
    }

    fn count(&self, wanted: Verdict) -> usize {
        self.0.iter().filter(|&&v| v == wanted).count()
    }

    /// Render as marker letters, e.g. `"OPXXO"`
    #[must_use]
    pub fn to_markers(&self) -> String {
        self.0.iter().map(|v| v.marker()).collect()
    }

    /// Render as emoji squares, e.g. `"🟩🟨⬜⬜🟩"`
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}
