//! Wordle Game - CLI
//!
//! Line-mode and full-screen word-guessing game.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use wordle_game::{
    commands::{PlayOptions, check_guess, run_play},
    config::{DEFAULT_MAX_ROUNDS, DEFAULT_WORD_LENGTH, GameConfig},
    output::{FeedbackStyle, write_check_result},
    wordlists::{load_dictionary, loader::EMBEDDED},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the secret word; each guess is scored letter by letter",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = EMBEDDED)]
    wordlist: String,

    /// Number of letters in the secret word
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Guesses allowed before the game is lost
    #[arg(short = 'r', long, global = true, default_value_t = DEFAULT_MAX_ROUNDS)]
    max_rounds: usize,

    /// Feedback style for line mode
    #[arg(long, global = true, value_enum, default_value_t = FeedbackStyle::Color)]
    style: FeedbackStyle,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal, one guess per line (default)
    Play {
        /// Seed for choosing the secret word
        #[arg(long)]
        seed: Option<u64>,

        /// Use this secret word instead of a random one
        #[arg(long)]
        word: Option<String>,
    },

    /// Full-screen interactive mode
    Tui {
        /// Seed for choosing secret words
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Score a single guess against a secret word
    Check {
        /// The secret word
        secret: String,

        /// The guess to score
        guess: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = GameConfig::new(cli.length, cli.max_rounds).context("invalid game settings")?;

    // Default to line mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        seed: None,
        word: None,
    });

    match command {
        Commands::Play { seed, word } => {
            let options = PlayOptions {
                config,
                style: cli.style,
                seed,
                secret: word,
            };
            run_play_command(&cli.wordlist, &options)
        }
        Commands::Tui { seed } => run_tui_command(&cli.wordlist, config, seed),
        Commands::Check { secret, guess } => run_check_command(&secret, &guess, cli.style),
    }
}

fn run_play_command(wordlist: &str, options: &PlayOptions) -> Result<()> {
    let dictionary = load_dictionary(wordlist, options.config.word_length)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    run_play(&dictionary, options, &mut input, &mut out)?;
    Ok(())
}

fn run_tui_command(wordlist: &str, config: GameConfig, seed: Option<u64>) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let dictionary = load_dictionary(wordlist, config.word_length)?;
    let app = App::new(&dictionary, config, seed)?;
    run_tui(app)
}

fn run_check_command(secret: &str, guess: &str, style: FeedbackStyle) -> Result<()> {
    let result = check_guess(secret, guess)?;
    write_check_result(&mut io::stdout().lock(), &result, style)?;
    Ok(())
}
