//! Formatting utilities for terminal output

use crate::core::{LetterStatus, Verdict, WORD_LEN};
use crate::game::GameView;
use colored::{ColoredString, Colorize};

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Colour a letter tile by its status
///
/// Correct is green, Present yellow, Absent gray; Unknown stays plain.
#[must_use]
pub fn colored_tile(letter: char, status: LetterStatus) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    let tile = tile.as_str();
    match status {
        LetterStatus::Correct => tile.black().on_green().bold(),
        LetterStatus::Present => tile.black().on_yellow().bold(),
        LetterStatus::Absent => tile.white().on_bright_black(),
        LetterStatus::Unknown => tile.normal(),
    }
}

/// Format a word with per-letter verdict colours
#[must_use]
pub fn colored_guess(letters: &[u8; WORD_LEN], verdicts: &[Verdict; WORD_LEN]) -> String {
    letters
        .iter()
        .zip(verdicts)
        .map(|(&b, &v)| colored_tile(char::from(b), v.into()).to_string())
        .collect()
}

/// Format one board row; empty cells render as underscores
#[must_use]
pub fn board_row(view: &impl GameView, row: usize) -> String {
    (1..=WORD_LEN)
        .map(|col| match (view.letter_at(row, col), view.verdict_at(row, col)) {
            (Some(letter), Some(verdict)) => colored_tile(letter, verdict.into()).to_string(),
            (Some(letter), None) => colored_tile(letter, LetterStatus::Unknown).to_string(),
            (None, _) => " _ ".dimmed().to_string(),
        })
        .collect()
}

/// Format the keyboard, one line per layout row
#[must_use]
pub fn keyboard_lines(view: &impl GameView) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|ch| colored_tile(ch, view.letter_status(ch)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_layout_covers_alphabet() {
        let mut letters: Vec<char> = KEYBOARD_ROWS.iter().flat_map(|r| r.chars()).collect();
        letters.sort_unstable();
        let alphabet: Vec<char> = ('a'..='z').collect();
        assert_eq!(letters, alphabet);
    }

    #[test]
    fn tile_is_uppercase_and_padded() {
        colored::control::set_override(false);
        assert_eq!(colored_tile('a', LetterStatus::Correct).to_string(), " A ");
        assert_eq!(
            colored_guess(b"crane", &[Verdict::Absent; WORD_LEN]),
            " C  R  A  N  E "
        );
    }
}
