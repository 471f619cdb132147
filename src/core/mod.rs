//! Core domain types for the word game
//!
//! Evaluation and session state are pure and synchronous; input and output
//! live in `commands`, `output` and `interactive`.

mod dictionary;
mod error;
mod normalize;
mod pattern;
mod session;
mod stats;
mod word;

pub use dictionary::Dictionary;
pub use error::GuessError;
pub use normalize::{is_single_token, normalize};
pub use pattern::{Pattern, Verdict};
pub use session::{Outcome, Session};
pub use stats::Statistics;
pub use word::{Word, WordError};
