//! Allowed-word dictionary and secret selection

use super::loader;
use crate::core::Word;
use log::debug;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::path::Path;
use thiserror::Error;

/// Errors raised while building a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary contains no valid five-letter words")]
    Empty,
    #[error("failed to read word list {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Immutable set of allowed words
///
/// Keeps the admitted list in source order as the selection domain, so a
/// word listed twice is twice as likely to be picked. Membership is
/// set-semantic.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    allowed: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from admitted words
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, DictionaryError> {
        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }
        let allowed: FxHashSet<Word> = words.iter().copied().collect();
        debug!(
            "dictionary built: {} entries, {} distinct",
            words.len(),
            allowed.len()
        );
        Ok(Self { words, allowed })
    }

    /// Build from raw strings, applying the loader's admission policy
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if no entry is a valid word.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_strs(&["crane", "SLATE", "nope"]).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains_str("Slate"));
    /// ```
    pub fn from_strs(words: &[&str]) -> Result<Self, DictionaryError> {
        Self::new(loader::words_from_slice(words))
    }

    /// Load a dictionary from a file with one word per line
    ///
    /// # Errors
    /// Returns `DictionaryError::Io` if the file cannot be read and
    /// `DictionaryError::Empty` if it holds no valid word.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let words = loader::load_from_file(path).map_err(|source| DictionaryError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::new(words)
    }

    /// The dictionary compiled into the binary
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if the embedded list is empty.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::from_strs(super::WORDS)
    }

    /// Whether `word` is an allowed guess
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.allowed.contains(word)
    }

    /// Case-insensitive membership test on a raw string
    #[must_use]
    pub fn contains_str(&self, word: &str) -> bool {
        Word::new(word.trim()).is_ok_and(|w| self.contains(&w))
    }

    /// Pick a secret uniformly from `[0, N)` over the admitted list
    pub fn pick_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        self.words[rng.random_range(0..self.words.len())]
    }

    /// Number of admitted entries (the selection domain)
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed dictionary
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Admitted words in source order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn dictionary_rejects_empty() {
        assert!(matches!(Dictionary::new(Vec::new()), Err(DictionaryError::Empty)));
        assert!(matches!(
            Dictionary::from_strs(&["", "toolong", "1234"]),
            Err(DictionaryError::Empty)
        ));
    }

    #[test]
    fn dictionary_contains_is_case_insensitive() {
        let dictionary = Dictionary::from_strs(&["crane", "acorn"]).unwrap();

        assert!(dictionary.contains(&Word::new("CRANE").unwrap()));
        assert!(dictionary.contains_str("Acorn"));
        assert!(dictionary.contains_str(" crane "));
        assert!(!dictionary.contains_str("slate"));
        assert!(!dictionary.contains_str("cran"));
    }

    #[test]
    fn dictionary_duplicates_keep_selection_domain() {
        let dictionary = Dictionary::from_strs(&["crane", "crane", "slate"]).unwrap();
        assert_eq!(dictionary.len(), 3);
        assert!(!dictionary.is_empty());
    }

    #[test]
    fn pick_secret_returns_member() {
        let dictionary = Dictionary::from_strs(&["crane", "slate", "acorn", "abbey"]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let secret = dictionary.pick_secret(&mut rng);
            assert!(dictionary.contains(&secret));
        }
    }

    #[test]
    fn pick_secret_is_deterministic_for_a_seed() {
        let dictionary = Dictionary::from_strs(&["crane", "slate", "acorn", "abbey"]).unwrap();

        let a = dictionary.pick_secret(&mut StdRng::seed_from_u64(42));
        let b = dictionary.pick_secret(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn pick_secret_reaches_every_index() {
        let dictionary = Dictionary::from_strs(&["crane", "slate", "acorn"]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let seen: FxHashSet<Word> = (0..200).map(|_| dictionary.pick_secret(&mut rng)).collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn embedded_dictionary_loads() {
        let dictionary = Dictionary::embedded().unwrap();
        assert_eq!(dictionary.len(), super::super::WORDS_COUNT);
        assert!(dictionary.contains_str("crane"));
    }

    #[test]
    fn from_file_missing_is_io_error() {
        let err = Dictionary::from_file("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, DictionaryError::Io { .. }));
    }
}
