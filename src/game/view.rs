//! Read-only queries a renderer uses to draw the game
//!
//! Rows and columns are 1-based, in display order. Queries outside the grid
//! return `None`.

use super::engine::Game;
use super::grid::MAX_ATTEMPTS;
use super::message::{GameStatus, Message};
use crate::core::{LetterStatus, Verdict, WORD_LEN};

/// Snapshot queries over a game
pub trait GameView {
    /// Letter in a cell, or `None` if the cell is empty
    fn letter_at(&self, row: usize, col: usize) -> Option<char>;

    /// Verdict for a cell; `None` until its row is submitted
    fn verdict_at(&self, row: usize, col: usize) -> Option<Verdict>;

    /// Best-known status of a letter
    fn letter_status(&self, letter: char) -> LetterStatus;

    fn status(&self) -> GameStatus;

    fn message(&self) -> &Message;
}

/// Map 1-based coordinates to 0-based indices
fn cell_index(row: usize, col: usize) -> Option<(usize, usize)> {
    ((1..=MAX_ATTEMPTS).contains(&row) && (1..=WORD_LEN).contains(&col))
        .then(|| (row - 1, col - 1))
}

impl GameView for Game<'_> {
    fn letter_at(&self, row: usize, col: usize) -> Option<char> {
        let (r, c) = cell_index(row, col)?;
        self.grid()[r].letter(c)
    }

    fn verdict_at(&self, row: usize, col: usize) -> Option<Verdict> {
        let (r, c) = cell_index(row, col)?;
        self.grid()[r].feedback().map(|f| f.verdict_at(c))
    }

    fn letter_status(&self, letter: char) -> LetterStatus {
        self.keyboard().status(letter)
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn message(&self) -> &Message {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::Dictionary;

    #[test]
    fn out_of_range_queries_are_empty() {
        let dictionary = Dictionary::from_strs(&["crane"]).unwrap();
        let mut game = Game::with_secret(&dictionary, Word::new("crane").unwrap());
        game.type_word("crane");
        game.submit();

        assert_eq!(game.letter_at(0, 1), None);
        assert_eq!(game.letter_at(1, 0), None);
        assert_eq!(game.letter_at(7, 1), None);
        assert_eq!(game.verdict_at(1, 6), None);
        assert_eq!(game.letter_at(1, 1), Some('c'));
        assert_eq!(game.verdict_at(1, 5), Some(Verdict::Correct));
    }

    #[test]
    fn typed_but_unsubmitted_row_has_no_verdicts() {
        let dictionary = Dictionary::from_strs(&["crane"]).unwrap();
        let mut game = Game::with_secret(&dictionary, Word::new("crane").unwrap());
        game.type_word("cr");

        assert_eq!(game.letter_at(1, 2), Some('r'));
        assert_eq!(game.verdict_at(1, 1), None);
    }
}
