//! Score command
//!
//! Evaluates a single guess against a given secret.

use crate::core::{Feedback, Word};
use crate::wordlists::Dictionary;

/// Result of scoring a guess
pub struct ScoreResult {
    pub guess: Word,
    pub secret: Word,
    pub feedback: Feedback,
    /// Whether the game would accept the guess
    pub guess_allowed: bool,
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word is not five letters `a..z`.
pub fn score_guess(guess: &str, secret: &str, dictionary: &Dictionary) -> Result<ScoreResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let secret = Word::new(secret).map_err(|e| format!("Invalid secret: {e}"))?;

    Ok(ScoreResult {
        guess,
        secret,
        feedback: Feedback::calculate(&guess, &secret),
        guess_allowed: dictionary.contains(&guess),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_reports_feedback_and_membership() {
        let dictionary = Dictionary::from_strs(&["crane", "acorn"]).unwrap();

        let result = score_guess("ACORN", "crane", &dictionary).unwrap();
        assert_eq!(result.feedback, "YY-YY".parse::<Feedback>().unwrap());
        assert!(result.guess_allowed);

        let result = score_guess("slate", "crane", &dictionary).unwrap();
        assert!(!result.guess_allowed);
    }

    #[test]
    fn score_rejects_invalid_words() {
        let dictionary = Dictionary::from_strs(&["crane"]).unwrap();
        assert!(score_guess("cran", "crane", &dictionary).is_err());
        assert!(score_guess("crane", "cr4ne", &dictionary).is_err());
    }
}
