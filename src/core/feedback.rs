//! Wordle feedback calculation and representation
//!
//! Feedback is one `Verdict` per letter position:
//! - Correct = right letter, right place (green)
//! - Present = letter in the secret, wrong place (yellow)
//! - Absent  = no unclaimed occurrence left in the secret (gray)

use super::word::{WORD_LEN, Word, letter_index};
use std::fmt;
use std::str::FromStr;

/// Verdict for a single letter position of a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Correct,
    Present,
    Absent,
}

impl Verdict {
    /// Emoji square used for share-style rows
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Verdict; WORD_LEN]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Verdict::Correct; WORD_LEN]);

    #[must_use]
    pub const fn new(verdicts: [Verdict; WORD_LEN]) -> Self {
        Self(verdicts)
    }

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// Each occurrence of a letter in the secret covers at most one guess
    /// position, and exact matches claim their occurrence before any
    /// displaced match does.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches Correct and remove them from the pool
    /// 2. Second pass: mark remaining letters Present while the pool has them
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Word};
    ///
    /// let guess = Word::new("babes").unwrap();
    /// let secret = Word::new("abbey").unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret);
    ///
    /// assert_eq!(feedback, "YYGG-".parse::<Feedback>().unwrap());
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut verdicts = [Verdict::Absent; WORD_LEN];
        let mut remaining = secret.letter_counts();

        // Allow: Index needed to compare guess[i] with secret[i] and set verdicts[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            let letter = guess.letter_at(i);
            if letter == secret.letter_at(i) {
                verdicts[i] = Verdict::Correct;
                remaining[letter_index(letter)] -= 1;
            }
        }

        for (verdict, &letter) in verdicts.iter_mut().zip(guess.letters()) {
            if *verdict == Verdict::Correct {
                continue;
            }
            let count = &mut remaining[letter_index(letter)];
            if *count > 0 {
                *verdict = Verdict::Present;
                *count -= 1;
            }
        }

        Self(verdicts)
    }

    /// Per-position verdicts
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LEN] {
        &self.0
    }

    /// Verdict at a position (0-4)
    #[inline]
    #[must_use]
    pub const fn verdict_at(&self, position: usize) -> Verdict {
        self.0[position]
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl FromStr for Feedback {
    type Err = String;

    /// Parse from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for Correct
    /// - 'Y'/'y'/🟨 for Present
    /// - '-'/'_'/⬜ for Absent
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LEN {
            return Err(format!("Invalid feedback string: {s}"));
        }

        let mut verdicts = [Verdict::Absent; WORD_LEN];
        for (verdict, ch) in verdicts.iter_mut().zip(chars) {
            *verdict = match ch {
                'G' | 'g' | '🟩' => Verdict::Correct,
                'Y' | 'y' | '🟨' => Verdict::Present,
                '-' | '_' | '⬜' => Verdict::Absent,
                _ => return Err(format!("Invalid feedback string: {s}")),
            };
        }

        Ok(Self(verdicts))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
