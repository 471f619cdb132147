//! Word lists for the game
//!
//! The bundled dictionary is compiled into the binary; a custom newline-delimited
//! file can be loaded instead.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{DictionaryError, load_dictionary};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_list_has_five_letter_words() {
        let dict = Dictionary::from_entries(WORDS, 5);
        assert!(dict.len() > 300, "only {} five-letter words", dict.len());
        for word in ["APPLE", "LEMON", "MELON", "ROBOT", "OZONE"] {
            assert!(dict.contains(word), "{word} missing from bundled list");
        }
    }

    #[test]
    fn embedded_list_has_other_lengths() {
        assert!(!Dictionary::from_entries(WORDS, 4).is_empty());
        assert!(!Dictionary::from_entries(WORDS, 6).is_empty());
    }

    #[test]
    fn embedded_accented_entries_are_normalized() {
        let six = Dictionary::from_entries(WORDS, 6);
        assert!(six.contains("ARVORE"));
        assert!(six.contains("RESUME"));
    }
}
