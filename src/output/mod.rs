//! Terminal output formatting
//!
//! Feedback rendering and end-of-game display.

pub mod display;
pub mod formatters;

pub use display::{write_check_result, write_last_round, write_statistics, write_summary};
pub use formatters::{FeedbackStyle, render_feedback};
