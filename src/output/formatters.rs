//! Formatting utilities for terminal output

use crate::core::{Pattern, Verdict, Word};
use clap::ValueEnum;
use colored::Colorize;

/// How a feedback row is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FeedbackStyle {
    /// Guess letters on green/yellow/grey backgrounds
    #[default]
    Color,
    /// `O` exact, `P` present, `X` absent
    Letters,
    /// 🟩🟨⬜
    Emoji,
}

/// Render one feedback row
///
/// `guess` is only used by [`FeedbackStyle::Color`].
#[must_use]
pub fn render_feedback(guess: &Word, pattern: &Pattern, style: FeedbackStyle) -> String {
    match style {
        FeedbackStyle::Letters => pattern.to_markers(),
        FeedbackStyle::Emoji => pattern.to_emoji(),
        FeedbackStyle::Color => colored_letters(guess, pattern),
    }
}

fn colored_letters(guess: &Word, pattern: &Pattern) -> String {
    guess
        .letters()
        .iter()
        .zip(pattern.verdicts())
        .map(|(&letter, &verdict)| {
            let cell = format!(" {} ", letter as char);
            match verdict {
                Verdict::Exact => cell.black().on_green().bold().to_string(),
                Verdict::Present => cell.black().on_yellow().bold().to_string(),
                Verdict::Absent => cell.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// "round" or "rounds"
#[must_use]
pub const fn rounds_label(count: usize) -> &'static str {
    if count == 1 { "round" } else { "rounds" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(guess: &str, secret: &str) -> (Word, Pattern) {
        let guess = Word::new(guess).unwrap();
        let pattern = Pattern::evaluate(&guess, &Word::new(secret).unwrap()).unwrap();
        (guess, pattern)
    }

    #[test]
    fn letters_style_uses_markers() {
        let (guess, pattern) = scored("melon", "lemon");
        assert_eq!(
            render_feedback(&guess, &pattern, FeedbackStyle::Letters),
            "POPOO"
        );
    }

    #[test]
    fn emoji_style() {
        let (guess, pattern) = scored("apple", "apple");
        assert_eq!(
            render_feedback(&guess, &pattern, FeedbackStyle::Emoji),
            "🟩🟩🟩🟩🟩"
        );
    }

    #[test]
    fn color_style_keeps_letters_in_order() {
        colored::control::set_override(false);
        let (guess, pattern) = scored("crane", "slate");
        assert_eq!(
            render_feedback(&guess, &pattern, FeedbackStyle::Color),
            " C  R  A  N  E "
        );
    }

    #[test]
    fn rounds_label_pluralizes() {
        assert_eq!(rounds_label(1), "round");
        assert_eq!(rounds_label(0), "rounds");
        assert_eq!(rounds_label(6), "rounds");
    }
}
