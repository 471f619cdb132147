//! Command implementations

pub mod check;
pub mod play;

pub use check::{CheckResult, check_guess};
pub use play::{PlayOptions, choose_secret, play_game, run_play};
