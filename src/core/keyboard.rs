//! Aggregated per-letter knowledge shown on the on-screen keyboard

use super::feedback::{Feedback, Verdict};
use super::word::{ALPHABET_LEN, Word, letter_index, normalize_letter};

/// Best-known status of one alphabet letter
///
/// Variants are declared weakest first so the derived `Ord` is the precedence
/// used when folding guesses: `Unknown < Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    #[default]
    Unknown,
    Absent,
    Present,
    Correct,
}

impl From<Verdict> for LetterStatus {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Correct => Self::Correct,
            Verdict::Present => Self::Present,
            Verdict::Absent => Self::Absent,
        }
    }
}

/// Letter statuses for `a..=z`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard {
    statuses: [LetterStatus; ALPHABET_LEN],
}

impl Keyboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a submitted guess into the keyboard
    ///
    /// A letter only ever moves up the precedence order, so a letter known
    /// Correct stays Correct even when a later guess places it elsewhere.
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &verdict) in guess.letters().iter().zip(feedback.verdicts()) {
            let slot = &mut self.statuses[letter_index(letter)];
            *slot = (*slot).max(LetterStatus::from(verdict));
        }
    }

    /// Status of a letter; case-insensitive, `Unknown` for non-letters
    #[must_use]
    pub fn status(&self, letter: char) -> LetterStatus {
        normalize_letter(letter).map_or(LetterStatus::Unknown, |b| {
            self.statuses[letter_index(b)]
        })
    }

    /// Iterate `(letter, status)` pairs in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        (b'a'..=b'z').zip(self.statuses.iter().copied()).map(|(b, s)| (char::from(b), s))
    }
}
