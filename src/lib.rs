//! Wordle Game
//!
//! A terminal word-guessing game. Guesses are scored letter by letter against a
//! secret word, with repeated letters credited no more often than they occur.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::config::GameConfig;
//! use wordle_game::core::{Dictionary, Outcome, Session, Word};
//!
//! let dictionary = Dictionary::from_entries(["lemon", "melon"], 5);
//! let secret = Word::new("lemon").unwrap();
//! let mut game = Session::new(secret, &dictionary, &GameConfig::default()).unwrap();
//!
//! let pattern = game.submit_guess("melon").unwrap();
//! assert_eq!(pattern.to_markers(), "POPOO");
//! assert_eq!(game.outcome(), Outcome::Active);
//! ```

// Core domain types
pub mod core;

// Word length and round limit
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
