//! Display functions for game and command results

use super::formatters::{FeedbackStyle, render_feedback, rounds_label};
use crate::commands::CheckResult;
use crate::core::{Outcome, Session, Statistics};
use colored::Colorize;
use std::io::{self, Write};

/// Print the most recent round's feedback
///
/// # Errors
/// Propagates write failures.
pub fn write_last_round<W: Write>(
    out: &mut W,
    session: &Session<'_>,
    style: FeedbackStyle,
) -> io::Result<()> {
    if let (Some(guess), Some(pattern)) = (session.guesses().last(), session.history().last()) {
        writeln!(out, "{}", render_feedback(guess, pattern, style))?;
        writeln!(out)?;
    }
    Ok(())
}

/// Print the end-of-game banner and every round's feedback
///
/// # Errors
/// Propagates write failures.
pub fn write_summary<W: Write>(
    out: &mut W,
    session: &Session<'_>,
    style: FeedbackStyle,
) -> io::Result<()> {
    let rounds = session.rounds_played();
    match session.outcome() {
        Outcome::Won => writeln!(
            out,
            "{}",
            format!("You won in {rounds} {}!", rounds_label(rounds))
                .green()
                .bold()
        )?,
        Outcome::Lost => {
            writeln!(
                out,
                "{}",
                format!("You lost in {rounds} {}!", rounds_label(rounds))
                    .red()
                    .bold()
            )?;
            writeln!(out, "The word was {}.", session.secret().text().bold())?;
        }
        Outcome::Active => writeln!(
            out,
            "Game abandoned after {rounds} {}.",
            rounds_label(rounds)
        )?,
    }

    if rounds == 0 {
        return Ok(());
    }

    writeln!(out, "\nYour game:")?;
    for (guess, pattern) in session.guesses().iter().zip(session.history()) {
        writeln!(out, "{}", render_feedback(guess, pattern, style))?;
    }
    writeln!(out)
}

/// Print the running tally for this run
///
/// # Errors
/// Propagates write failures.
pub fn write_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(
        out,
        "Played: {} | Won: {} | Win rate: {:.0}% | Streak: {} (best {})",
        stats.games_played,
        stats.games_won,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    )?;

    let total = stats.games_won.max(1);
    for (rounds, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let width = count * 30 / total;
        writeln!(
            out,
            "  {rounds:>2}: {}{} {count}",
            "█".repeat(width).green(),
            "░".repeat(30 - width).bright_black()
        )?;
    }
    Ok(())
}

/// Print the result of scoring a single guess
///
/// # Errors
/// Propagates write failures.
pub fn write_check_result<W: Write>(
    out: &mut W,
    result: &CheckResult,
    style: FeedbackStyle,
) -> io::Result<()> {
    writeln!(
        out,
        "{} vs {}",
        result.guess.text().bright_yellow().bold(),
        result.secret.text().bright_cyan().bold()
    )?;
    writeln!(
        out,
        "{}",
        render_feedback(&result.guess, &result.pattern, style)
    )?;
    writeln!(
        out,
        "exact: {}  present: {}  absent: {}",
        result.pattern.count_exact(),
        result.pattern.count_present(),
        result.pattern.len() - result.pattern.count_exact() - result.pattern.count_present()
    )
}
