//! Word list loading utilities
//!
//! Builds a [`Dictionary`] from the embedded list or from a newline-delimited
//! file on disk.

use super::WORDS;
use crate::core::Dictionary;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name that selects the embedded list instead of a file
pub const EMBEDDED: &str = "embedded";

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read word list {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list '{source_name}' has no usable {word_length}-letter words")]
    Empty {
        source_name: String,
        word_length: usize,
    },
}

/// Load words from a file
///
/// Blank lines and lines starting with `#` are ignored; every other line is
/// normalized and kept if it has `word_length` letters.
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let dict = load_from_file("words.txt", 5).unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    word_length: usize,
) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Dictionary::from_entries(entries(&content), word_length))
}

/// Build a dictionary from the embedded list
#[must_use]
pub fn load_embedded(word_length: usize) -> Dictionary {
    Dictionary::from_entries(WORDS, word_length)
}

/// Load the embedded list or a file, refusing to return an empty dictionary
///
/// # Errors
///
/// Returns `DictionaryError` if the file cannot be read or no word of the
/// requested length survives filtering.
pub fn load_dictionary(source: &str, word_length: usize) -> Result<Dictionary, DictionaryError> {
    let dict = if source == EMBEDDED {
        load_embedded(word_length)
    } else {
        load_from_file(source, word_length)?
    };

    if dict.is_empty() {
        return Err(DictionaryError::Empty {
            source_name: source.to_string(),
            word_length,
        });
    }

    log::info!(
        "loaded {} words of length {word_length} from {source}",
        dict.len()
    );
    Ok(dict)
}

fn entries(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "wordle_game_{}_{name}.txt",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_and_filters_file() {
        let path = temp_file(
            "filter",
            "# comment\napple\n\nlemon\r\nkiwi\nit's\nÁgua\nbananas\n",
        );
        let dict = load_from_file(&path, 5).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(dict.len(), 2);
        assert!(dict.contains("APPLE"));
        assert!(dict.contains("LEMON"));

        let path = temp_file("four", "agua\nÁgua\nkiwi\n");
        let four = load_from_file(&path, 4).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(four.len(), 2);
        assert!(four.contains("AGUA"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_from_file("/definitely/not/here.txt", 5).unwrap_err();
        assert!(matches!(err, DictionaryError::Io { .. }));
    }

    #[test]
    fn embedded_source_by_name() {
        let dict = load_dictionary(EMBEDDED, 5).unwrap();
        assert!(dict.contains("APPLE"));
        assert_eq!(dict.word_length(), 5);
    }

    #[test]
    fn empty_result_is_an_error() {
        let err = load_dictionary(EMBEDDED, 12).unwrap_err();
        assert!(matches!(
            err,
            DictionaryError::Empty {
                word_length: 12,
                ..
            }
        ));
    }
}
