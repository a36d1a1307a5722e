//! Wordle Game
//!
//! A terminal Wordle: six attempts at a hidden five-letter word, with exact
//! duplicate-letter feedback and a keyboard that only ever learns.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{Game, GameView};
//! use wordle_game::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::from_strs(&["crane", "acorn"]).unwrap();
//! let mut game = Game::with_secret(&dictionary, Word::new("crane").unwrap());
//!
//! game.type_word("acorn");
//! game.submit();
//! println!("{}", game.message()); // It's a word
//! ```

// Core domain types
pub mod core;

// Game engine and view contract
pub mod game;

// Word lists and dictionary
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
