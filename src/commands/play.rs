//! Line-mode game
//!
//! Reads one guess per line, prints feedback after each accepted guess, and
//! offers another game once the current one is over.

use crate::config::GameConfig;
use crate::core::{Dictionary, Session, Statistics, Word, normalize};
use crate::output::{FeedbackStyle, write_last_round, write_statistics, write_summary};
use anyhow::{Context, Result, bail};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{BufRead, Write};

/// Settings for a line-mode run
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    pub config: GameConfig,
    pub style: FeedbackStyle,
    /// Seed for secret selection; random when `None`
    pub seed: Option<u64>,
    /// Fixed secret word; disables the play-again prompt
    pub secret: Option<String>,
}

/// Run games until the player stops or input ends
///
/// # Errors
///
/// Returns an error on I/O failure, if the fixed secret is unusable, or if the
/// dictionary is empty.
pub fn run_play<R: BufRead, W: Write>(
    dictionary: &Dictionary,
    options: &PlayOptions,
    input: &mut R,
    out: &mut W,
) -> Result<Statistics> {
    let mut rng = options
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let mut stats = Statistics::default();

    writeln!(
        out,
        "Guess the {}-letter word in {} tries. One word per line.",
        options.config.word_length, options.config.max_rounds
    )?;
    writeln!(
        out,
        "{}\n",
        "O = right letter, right place | P = right letter, wrong place | X = not in the word"
            .bright_black()
    )?;

    loop {
        let secret = choose_secret(dictionary, options.secret.as_deref(), &mut rng)?;
        let mut session = Session::new(secret, dictionary, &options.config)?;

        let input_open = play_game(&mut session, input, out, options.style)?;
        write_summary(out, &session, options.style)?;
        stats.record(&session);

        if !input_open || options.secret.is_some() {
            break;
        }

        write_statistics(out, &stats)?;
        write!(out, "\nPlay again? (yes/no): ")?;
        out.flush()?;
        match read_line(input)?.map(|answer| answer.trim().to_lowercase()) {
            Some(answer) if answer == "yes" || answer == "y" => writeln!(out)?,
            _ => break,
        }
    }

    writeln!(out, "\nThanks for playing!")?;
    Ok(stats)
}

/// Play one game to completion
///
/// Returns `false` if input ran out before the game ended.
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn play_game<R: BufRead, W: Write>(
    session: &mut Session<'_>,
    input: &mut R,
    out: &mut W,
    style: FeedbackStyle,
) -> Result<bool> {
    while !session.is_terminal() {
        write!(
            out,
            "Guess {}/{}: ",
            session.rounds_played() + 1,
            session.max_rounds()
        )?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            writeln!(out)?;
            return Ok(false);
        };

        match session.submit_guess(&line) {
            Ok(_) => write_last_round(out, session, style)?,
            Err(e) => writeln!(out, "\n{}\n", e.to_string().red())?,
        }
    }
    Ok(true)
}

/// Pick the secret word: the fixed one if given, otherwise at random
///
/// # Errors
///
/// Returns an error if the fixed word is not in the dictionary or the
/// dictionary is empty.
pub fn choose_secret<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    fixed: Option<&str>,
    rng: &mut R,
) -> Result<Word> {
    if let Some(raw) = fixed {
        let normalized = normalize(raw);
        return dictionary
            .get(&normalized)
            .cloned()
            .with_context(|| format!("secret word '{raw}' is not a valid dictionary word"));
    }

    match dictionary.choose(rng) {
        Some(word) => Ok(word.clone()),
        None => bail!("dictionary is empty"),
    }
}

/// Read one line, replacing bytes that are not UTF-8
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = Vec::new();
    let read = input
        .read_until(b'\n', &mut buf)
        .context("failed to read from input")?;
    Ok((read > 0).then(|| String::from_utf8_lossy(&buf).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Outcome;
    use std::io::Cursor;

    fn dictionary() -> Dictionary {
        Dictionary::from_entries(
            ["apple", "lemon", "melon", "robin", "crane", "slate", "irate"],
            5,
        )
    }

    fn options(secret: &str, max_rounds: usize) -> PlayOptions {
        PlayOptions {
            config: GameConfig::new(5, max_rounds).unwrap(),
            style: FeedbackStyle::Letters,
            seed: Some(1),
            secret: Some(secret.to_string()),
        }
    }

    fn run(dict: &Dictionary, options: &PlayOptions, input: &str) -> (Statistics, String) {
        colored::control::set_override(false);
        let mut input = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let stats = run_play(dict, options, &mut input, &mut out).unwrap();
        (stats, String::from_utf8(out).unwrap())
    }

    #[test]
    fn rejections_are_reported_and_game_is_won() {
        let dict = dictionary();
        let (stats, text) = run(
            &dict,
            &options("apple", 6),
            "ap ple\nAP\nzzzzz\nlemon\napple\n",
        );

        assert!(text.contains("Only one word per line!"));
        assert!(text.contains("The word needs to have 5 letters!"));
        assert!(text.contains("Invalid word!"));
        assert!(text.contains("PPXXX"));
        assert!(text.contains("You won in 2 rounds!"));
        // Rejected input does not advance the round counter
        assert!(text.contains("Guess 2/6"));
        assert!(!text.contains("Guess 3/6"));
        assert_eq!(stats.games_won, 1);
    }

    #[test]
    fn six_misses_lose() {
        let dict = dictionary();
        let (stats, text) = run(
            &dict,
            &options("apple", 6),
            "lemon\nmelon\nrobin\ncrane\nslate\nirate\n",
        );

        assert!(text.contains("You lost in 6 rounds!"));
        assert!(text.contains("The word was APPLE."));
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 0);
    }

    #[test]
    fn garbled_line_is_rejected_not_fatal() {
        colored::control::set_override(false);
        let dict = dictionary();
        let mut input = Cursor::new(b"\xff\xfe\napple\n".to_vec());
        let mut out = Vec::new();

        let stats = run_play(&dict, &options("apple", 6), &mut input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        // The garbled line is refused without using up the first round
        assert_eq!(text.matches("Guess 1/6").count(), 2);
        assert!(text.contains("You won in 1 round!"));
        assert_eq!(stats.games_won, 1);
    }

    #[test]
    fn end_of_input_abandons_game() {
        let dict = dictionary();
        let (stats, text) = run(&dict, &options("apple", 6), "lemon\n");

        assert!(text.contains("Game abandoned after 1 round."));
        assert_eq!(stats.games_played, 0);
    }

    #[test]
    fn play_game_stops_at_terminal_state() {
        let dict = dictionary();
        let config = GameConfig::new(5, 6).unwrap();
        let mut session = Session::new(Word::new("apple").unwrap(), &dict, &config).unwrap();
        let mut input = Cursor::new(b"apple\nlemon\n".to_vec());
        let mut out = Vec::new();

        let open = play_game(&mut session, &mut input, &mut out, FeedbackStyle::Letters).unwrap();

        assert!(open);
        assert_eq!(session.outcome(), Outcome::Won);
        assert_eq!(session.history().len(), 1);
        // The second line is left unread
        let mut rest = String::new();
        input.read_line(&mut rest).unwrap();
        assert_eq!(rest, "lemon\n");
    }

    #[test]
    fn random_games_replay_until_declined() {
        let dict = Dictionary::from_entries(["apple"], 5);
        let options = PlayOptions {
            config: GameConfig::new(5, 6).unwrap(),
            style: FeedbackStyle::Letters,
            seed: Some(42),
            secret: None,
        };

        let (stats, text) = run(&dict, &options, "apple\ny\napple\nno\n");

        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.max_streak, 2);
        assert!(text.contains("Play again?"));
        assert!(text.contains("Thanks for playing!"));
    }

    #[test]
    fn fixed_secret_is_normalized() {
        let dict = dictionary();
        let mut rng = StdRng::seed_from_u64(0);
        let word = choose_secret(&dict, Some(" Lemon "), &mut rng).unwrap();
        assert_eq!(word.text(), "LEMON");
    }

    #[test]
    fn fixed_secret_must_be_in_dictionary() {
        let dict = dictionary();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(choose_secret(&dict, Some("zzzzz"), &mut rng).is_err());
        assert!(choose_secret(&dict, Some("kiwi"), &mut rng).is_err());
    }

    #[test]
    fn seeded_choice_is_reproducible() {
        let dict = dictionary();
        let a = choose_secret(&dict, None, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = choose_secret(&dict, None, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_dictionary_is_an_error() {
        let dict = Dictionary::from_entries(Vec::<String>::new(), 5);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(choose_secret(&dict, None, &mut rng).is_err());
    }
}
