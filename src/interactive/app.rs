//! TUI application state and logic

use crate::commands::choose_secret;
use crate::config::GameConfig;
use crate::core::{Dictionary, Outcome, Session, Statistics};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest raw input accepted into the buffer
const MAX_INPUT: usize = 32;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub config: GameConfig,
    pub session: Session<'a>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if the dictionary is empty or the configuration is invalid.
    pub fn new(dictionary: &'a Dictionary, config: GameConfig, seed: Option<u64>) -> Result<Self> {
        let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let secret = choose_secret(dictionary, None, &mut rng)?;
        let session = Session::new(secret, dictionary, &config)?;

        let mut app = Self {
            dictionary,
            config,
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            rng,
        };
        app.add_message(
            &format!(
                "Guess the {}-letter word in {} tries.",
                config.word_length, config.max_rounds
            ),
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Submit the input buffer as a guess
    pub fn submit(&mut self) {
        let raw = std::mem::take(&mut self.input_buffer);

        match self.session.submit_guess(&raw) {
            Ok(pattern) => {
                if let Some(guess) = self.session.guesses().last() {
                    let text = format!("{} {}", guess.text(), pattern.to_markers());
                    self.add_message(&text, MessageStyle::Info);
                }
                if self.session.is_terminal() {
                    self.finish_game();
                }
            }
            Err(e) => {
                // Keep the rejected text so it can be edited
                self.input_buffer = raw;
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    fn finish_game(&mut self) {
        self.stats.record(&self.session);
        self.input_mode = InputMode::GameOver;

        let rounds = self.session.rounds_played();
        match self.session.outcome() {
            Outcome::Won => {
                let celebration = match rounds {
                    1 => "HOLE IN ONE!".to_string(),
                    2 => "Magnificent! Two rounds!".to_string(),
                    3 => "Splendid! Three rounds!".to_string(),
                    n => format!("Solved in {n} rounds!"),
                };
                self.add_message(&celebration, MessageStyle::Success);
            }
            Outcome::Lost => {
                let text = format!(
                    "Out of rounds! The word was {}.",
                    self.session.secret().text()
                );
                self.add_message(&text, MessageStyle::Error);
            }
            Outcome::Active => {}
        }
        self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Start a fresh game with a new secret word
    pub fn new_game(&mut self) {
        let session = choose_secret(self.dictionary, None, &mut self.rng)
            .and_then(|secret| {
                Session::new(secret, self.dictionary, &self.config).map_err(Into::into)
            });

        match session {
            Ok(session) => {
                self.session = session;
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 8 messages
        if self.messages.len() > 8 {
            self.messages.remove(0);
        }
    }

    pub fn push_char(&mut self, c: char) {
        if self.input_buffer.chars().count() < MAX_INPUT {
            self.input_buffer.push(c);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.push_char(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    log::info!(
        "leaving TUI after {} games ({} won)",
        app.stats.games_played,
        app.stats.games_won
    );
    Ok(())
}
