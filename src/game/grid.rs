//! Attempts grid and input cursor

use crate::core::{Feedback, WORD_LEN, Word};

/// Number of attempts in a game
pub const MAX_ATTEMPTS: usize = 6;

/// One attempt: letters typed so far and, once submitted, their feedback
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuessRow {
    letters: [Option<u8>; WORD_LEN],
    feedback: Option<Feedback>,
}

impl GuessRow {
    /// Letter in a cell (0-4)
    #[must_use]
    pub fn letter(&self, index: usize) -> Option<char> {
        self.letters.get(index).copied().flatten().map(char::from)
    }

    #[must_use]
    pub const fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.feedback.is_some()
    }

    /// The row as a word, if all five cells are filled
    #[must_use]
    pub fn word(&self) -> Option<Word> {
        let mut letters = [0u8; WORD_LEN];
        for (slot, cell) in letters.iter_mut().zip(self.letters) {
            *slot = cell?;
        }
        Word::from_letters(letters)
    }

    pub(super) fn set_letter(&mut self, index: usize, letter: u8) {
        self.letters[index] = Some(letter);
    }

    pub(super) fn clear_letter(&mut self, index: usize) {
        self.letters[index] = None;
    }

    pub(super) fn submit(&mut self, feedback: Feedback) {
        self.feedback = Some(feedback);
    }
}

/// Six attempts in display order
pub type Grid = [GuessRow; MAX_ATTEMPTS];

/// Input position, 1-based
///
/// `col == 6` means the active row is full and waiting for submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    pub const START: Self = Self { row: 1, col: 1 };

    /// The row holds five letters
    #[must_use]
    pub const fn is_row_full(self) -> bool {
        self.col > WORD_LEN
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::START
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_word_requires_all_cells() {
        let mut row = GuessRow::default();
        for (i, &b) in b"cran".iter().enumerate() {
            row.set_letter(i, b);
        }
        assert_eq!(row.word(), None);

        row.set_letter(4, b'e');
        assert_eq!(row.word(), Word::new("crane").ok());
        assert_eq!(row.letter(0), Some('c'));
        assert_eq!(row.letter(5), None);
    }

    #[test]
    fn row_clear_letter() {
        let mut row = GuessRow::default();
        row.set_letter(0, b'a');
        row.clear_letter(0);
        assert_eq!(row, GuessRow::default());
    }

    #[test]
    fn cursor_full_at_col_six() {
        assert!(!Cursor::START.is_row_full());
        assert!(Cursor { row: 3, col: 6 }.is_row_full());
    }
}
