//! Full-screen terminal game

mod app;
pub mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};
