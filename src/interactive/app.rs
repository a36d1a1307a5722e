//! TUI application state and logic

use crate::game::{Command, Game, GameView};
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub game: Game<'a>,
    pub games_started: usize,
    pub should_quit: bool,
    rng: StdRng,
    reveal: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, mut rng: StdRng, reveal: bool) -> Self {
        let game = Self::start_game(dictionary, &mut rng, reveal);

        Self {
            dictionary,
            game,
            games_started: 1,
            should_quit: false,
            rng,
            reveal,
        }
    }

    fn start_game(dictionary: &'a Dictionary, rng: &mut StdRng, reveal: bool) -> Game<'a> {
        let game = Game::new(dictionary, rng);
        if reveal { game.revealed() } else { game }
    }

    /// Replace the finished game with a fresh one
    pub fn new_game(&mut self) {
        self.game = Self::start_game(self.dictionary, &mut self.rng, self.reveal);
        self.games_started += 1;
        debug!("game {} started", self.games_started);
    }

    /// Translate a key press into a game command
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab if self.game.status().is_over() => {
                self.new_game();
            }
            KeyCode::Char(c) => self.game.apply(Command::Letter(c)),
            KeyCode::Backspace => self.game.apply(Command::Backspace),
            KeyCode::Enter => self.game.apply(Command::Enter),
            _ => {}
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

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
