//! Simple interactive CLI mode
//!
//! Text-based game without TUI: one guess per line.

use crate::core::WORD_LEN;
use crate::game::{Command, Game, GameView};
use crate::output::print_game;
use crate::wordlists::Dictionary;
use rand::Rng;
use std::io::{self, Write};

/// What the loop should do after a line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    Continue,
    NewGame,
    Quit,
    /// More than five letters on the line; nothing was submitted
    TooLong,
}

/// Apply one line of player input to the game
///
/// The active row is cleared, the line typed in, and submitted.
pub fn handle_line(game: &mut Game, line: &str) -> LineAction {
    match line.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => LineAction::Quit,
        "new" | "n" => LineAction::NewGame,
        word if word.chars().count() > WORD_LEN => LineAction::TooLong,
        word => {
            for _ in 0..WORD_LEN {
                game.apply(Command::Backspace);
            }
            game.type_word(word);
            game.apply(Command::Enter);
            LineAction::Continue
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    rng: &mut R,
    reveal: bool,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║           W O R D L E                ║");
    println!("╚══════════════════════════════════════╝\n");
    println!("Guess the five-letter word in six tries.");
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut game = new_game(dictionary, rng, reveal);

    loop {
        print_game(&game);

        if game.status().is_over() {
            match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                "yes" | "y" => {
                    game = new_game(dictionary, rng, reveal);
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        let line = get_user_input(&format!("Guess {}", game.cursor().row))?;
        match handle_line(&mut game, &line) {
            LineAction::Continue => {}
            LineAction::NewGame => {
                println!("\n🔄 New game started! The word was {}\n", game.secret());
                game = new_game(dictionary, rng, reveal);
            }
            LineAction::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineAction::TooLong => println!("❌ Five letters only!"),
        }
    }
}

fn new_game<'a, R: Rng + ?Sized>(dictionary: &'a Dictionary, rng: &mut R, reveal: bool) -> Game<'a> {
    let game = Game::new(dictionary, rng);
    if reveal { game.revealed() } else { game }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    // EOF behaves like quit
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{Cursor, GameStatus};

    fn dictionary() -> Dictionary {
        Dictionary::from_strs(&["crane", "acorn", "abbey"]).unwrap()
    }

    #[test]
    fn line_submits_a_guess() {
        let dictionary = dictionary();
        let mut game = Game::with_secret(&dictionary, Word::new("crane").unwrap());

        assert_eq!(handle_line(&mut game, "Acorn\n"), LineAction::Continue);
        assert_eq!(game.cursor(), Cursor { row: 2, col: 1 });
        assert_eq!(game.message().to_string(), "It's a word");
    }

    #[test]
    fn line_replaces_rejected_row() {
        let dictionary = dictionary();
        let mut game = Game::with_secret(&dictionary, Word::new("crane").unwrap());

        handle_line(&mut game, "slate");
        assert_eq!(game.message().to_string(), "Not a word");

        handle_line(&mut game, "crane");
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn short_line_is_incomplete() {
        let dictionary = dictionary();
        let mut game = Game::with_secret(&dictionary, Word::new("crane").unwrap());

        handle_line(&mut game, "cra");
        assert_eq!(game.message().to_string(), "Enter a Complete Word");
        assert_eq!(game.cursor(), Cursor { row: 1, col: 4 });
    }

    #[test]
    fn long_line_and_commands() {
        let dictionary = dictionary();
        let mut game = Game::with_secret(&dictionary, Word::new("crane").unwrap());

        assert_eq!(handle_line(&mut game, "cranes"), LineAction::TooLong);
        assert_eq!(game.cursor(), Cursor::START);
        assert_eq!(handle_line(&mut game, "QUIT"), LineAction::Quit);
        assert_eq!(handle_line(&mut game, "new"), LineAction::NewGame);
    }
}
