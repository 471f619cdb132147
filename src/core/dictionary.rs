//! Allowed-word set
//!
//! Holds the normalized, fixed-length words a player may guess and from which
//! secret words are drawn.

use super::{Word, normalize};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;

/// Set of valid words of a single length
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    word_length: usize,
    words: Vec<Word>,
    index: FxHashMap<String, usize>,
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// Every entry is normalized. Entries that are not purely alphabetic or do
    /// not have `word_length` letters are skipped, and duplicates collapse.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Dictionary;
    ///
    /// let dict = Dictionary::from_entries(["apple", "Maçãs", "it's", "kiwi", "APPLE"], 5);
    /// assert_eq!(dict.len(), 2);
    /// assert!(dict.contains("MACAS"));
    /// ```
    pub fn from_entries<I, S>(entries: I, word_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self {
            word_length,
            ..Self::default()
        };
        let mut skipped = 0usize;

        for entry in entries {
            let normalized = normalize(entry.as_ref());
            if normalized.is_empty() {
                continue;
            }
            match Word::new(normalized) {
                Ok(word) if word.len() == word_length => dict.insert(word),
                _ => skipped += 1,
            }
        }

        log::debug!(
            "dictionary: kept {} words of length {word_length}, skipped {skipped}",
            dict.words.len()
        );
        dict
    }

    fn insert(&mut self, word: Word) {
        if self.index.contains_key(word.text()) {
            return;
        }
        self.index.insert(word.text().to_string(), self.words.len());
        self.words.push(word);
    }

    /// Look up an already-normalized word
    #[must_use]
    pub fn get(&self, normalized: &str) -> Option<&Word> {
        self.index.get(normalized).map(|&i| &self.words[i])
    }

    #[must_use]
    pub fn contains(&self, normalized: &str) -> bool {
        self.index.contains_key(normalized)
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick a random secret word
    ///
    /// Returns `None` if the dictionary is empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }
}
