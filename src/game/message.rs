//! Status messages and game status

use crate::core::Word;
use std::fmt;

/// Overall game state; `Won` and `Lost` are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// The status line, reflecting the last event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Welcome,
    /// Start-of-game disclosure, only when explicitly requested
    Reveal(Word),
    Incomplete,
    NotAWord,
    Accepted,
    Won,
    Lost(Word),
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Welcome => f.write_str("Let's Play Wordle"),
            Self::Reveal(secret) => write!(f, "The word is {secret}"),
            Self::Incomplete => f.write_str("Enter a Complete Word"),
            Self::NotAWord => f.write_str("Not a word"),
            Self::Accepted => f.write_str("It's a word"),
            Self::Won => f.write_str("You win!"),
            Self::Lost(secret) => write!(f, "The word was {secret}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_strings_are_exact() {
        let crane = Word::new("crane").unwrap();
        assert_eq!(Message::Incomplete.to_string(), "Enter a Complete Word");
        assert_eq!(Message::NotAWord.to_string(), "Not a word");
        assert_eq!(Message::Accepted.to_string(), "It's a word");
        assert_eq!(Message::Won.to_string(), "You win!");
        assert_eq!(Message::Lost(crane).to_string(), "The word was crane");
        assert_eq!(Message::Reveal(crane).to_string(), "The word is crane");
    }

    #[test]
    fn status_terminal() {
        assert!(!GameStatus::InProgress.is_over());
        assert!(GameStatus::Won.is_over());
        assert!(GameStatus::Lost.is_over());
    }
}
