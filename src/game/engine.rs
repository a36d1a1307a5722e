//! Game engine: the per-attempt state machine
//!
//! All state is owned here and changes only through the three input commands.
//! Once the game is won or lost every command is a no-op.

use super::grid::{Cursor, Grid, GuessRow, MAX_ATTEMPTS};
use super::message::{GameStatus, Message};
use crate::core::{Feedback, Keyboard, WORD_LEN, Word, normalize_letter};
use crate::wordlists::Dictionary;
use log::debug;
use rand::Rng;

/// An input command from the keyboard (physical or on-screen)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Letter(char),
    Backspace,
    Enter,
}

/// A single game of Wordle
///
/// Borrows the dictionary read-only; one dictionary can back many games.
#[derive(Debug, Clone)]
pub struct Game<'a> {
    dictionary: &'a Dictionary,
    secret: Word,
    grid: Grid,
    cursor: Cursor,
    pub(super) status: GameStatus,
    keyboard: Keyboard,
    pub(super) message: Message,
}

impl<'a> Game<'a> {
    /// Start a game with a secret drawn from the dictionary
    ///
    /// Performs exactly one draw from `rng`.
    pub fn new<R: Rng + ?Sized>(dictionary: &'a Dictionary, rng: &mut R) -> Self {
        let secret = dictionary.pick_secret(rng);
        Self::with_secret(dictionary, secret)
    }

    /// Start a game with a fixed secret
    ///
    /// The secret does not have to be an allowed guess.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{Game, GameStatus, GameView};
    /// use wordle_game::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_strs(&["crane", "acorn"]).unwrap();
    /// let mut game = Game::with_secret(&dictionary, Word::new("crane").unwrap());
    ///
    /// game.type_word("crane");
    /// game.submit();
    /// assert_eq!(game.status(), GameStatus::Won);
    /// assert_eq!(game.message().to_string(), "You win!");
    /// ```
    #[must_use]
    pub fn with_secret(dictionary: &'a Dictionary, secret: Word) -> Self {
        debug!("new game started");
        Self {
            dictionary,
            secret,
            grid: [GuessRow::default(); MAX_ATTEMPTS],
            cursor: Cursor::START,
            status: GameStatus::InProgress,
            keyboard: Keyboard::new(),
            message: Message::Welcome,
        }
    }

    /// Show the secret in the status line before the first guess
    #[must_use]
    pub fn revealed(mut self) -> Self {
        if self.status == GameStatus::InProgress {
            self.message = Message::Reveal(self.secret);
        }
        self
    }

    /// Dispatch a command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Letter(ch) => self.input_letter(ch),
            Command::Backspace => self.backspace(),
            Command::Enter => self.submit(),
        }
    }

    /// Type each character of `text` into the active row
    ///
    /// Characters past a full row are ignored like any other letter input.
    pub fn type_word(&mut self, text: &str) {
        for ch in text.chars() {
            self.input_letter(ch);
        }
    }

    /// Append a letter to the active row
    ///
    /// Uppercase ASCII is accepted and lowercased; anything outside `a..z`
    /// is ignored, as is input into a full row.
    pub fn input_letter(&mut self, ch: char) {
        if self.status.is_over() || self.cursor.is_row_full() {
            return;
        }
        let Some(letter) = normalize_letter(ch) else {
            debug!("ignoring non-letter input {ch:?}");
            return;
        };

        let index = self.cursor.col - 1;
        self.active_row_mut().set_letter(index, letter);
        self.cursor.col += 1;
    }

    /// Remove the last letter of the active row
    pub fn backspace(&mut self) {
        if self.status.is_over() || self.cursor.col <= 1 {
            return;
        }
        self.cursor.col -= 1;
        let index = self.cursor.col - 1;
        self.active_row_mut().clear_letter(index);
    }

    /// Submit the active row
    pub fn submit(&mut self) {
        if self.status.is_over() {
            return;
        }
        if !self.cursor.is_row_full() {
            self.message = Message::Incomplete;
            return;
        }

        // A full row always holds five letters
        let Some(guess) = self.grid[self.cursor.row - 1].word() else {
            self.message = Message::Incomplete;
            return;
        };

        if !self.dictionary.contains(&guess) {
            debug!("rejected guess {guess}: not in dictionary");
            self.message = Message::NotAWord;
            return;
        }

        let feedback = Feedback::calculate(&guess, &self.secret);
        self.active_row_mut().submit(feedback);
        self.keyboard.record(&guess, &feedback);
        debug!("row {}: {guess} {feedback}", self.cursor.row);

        if guess == self.secret {
            self.status = GameStatus::Won;
            self.message = Message::Won;
        } else if self.cursor.row == MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
            self.message = Message::Lost(self.secret);
        } else {
            self.message = Message::Accepted;
            self.cursor = Cursor {
                row: self.cursor.row + 1,
                col: 1,
            };
        }
    }

    fn active_row_mut(&mut self) -> &mut GuessRow {
        &mut self.grid[self.cursor.row - 1]
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub const fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    /// The secret; a front-end should only show it once the game is over
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Number of submitted rows
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.grid.iter().filter(|row| row.is_submitted()).count()
    }

    /// Letters typed into the active row so far
    #[must_use]
    pub const fn typed_len(&self) -> usize {
        if self.cursor.col > WORD_LEN {
            WORD_LEN
        } else {
            self.cursor.col - 1
        }
    }
}
