//! Core domain types for Wordle
//!
//! Pure rules with no I/O: words, per-guess feedback and the keyboard
//! aggregate. Everything here is deterministic and testable in isolation.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Feedback, Verdict};
pub use keyboard::{Keyboard, LetterStatus};
pub use word::{ALPHABET_LEN, WORD_LEN, Word, WordError, normalize_letter};
