//! Input normalization
//!
//! Guesses and dictionary entries are folded onto the same alphabet before
//! they are compared: accented letters are transliterated to their base form
//! and everything is upper-cased.

use deunicode::deunicode;

/// Strip diacritics and upper-case `raw`
///
/// Surrounding whitespace is removed. The result is ASCII but is not
/// guaranteed to be purely alphabetic; callers decide what to do with digits
/// or punctuation.
///
/// # Examples
/// ```
/// use wordle_game::core::normalize;
///
/// assert_eq!(normalize("Árvore"), "ARVORE");
/// assert_eq!(normalize("  maçãs "), "MACAS");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    deunicode(raw.trim()).to_ascii_uppercase()
}

/// Check whether `raw` holds more than one token
#[must_use]
pub fn is_single_token(raw: &str) -> bool {
    !raw.trim().chars().any(char::is_whitespace)
}
