//! Sources of root words and random root selection.

use rand::Rng;
use rand::seq::IndexedRandom;
use std::path::PathBuf;
use tracing::{debug, info, instrument, warn};

use crate::types::FALLBACK_ROOT_WORD;

/// Eight-letter root words compiled into the binary.
const BUNDLED_ROOT_WORDS: &str = include_str!("../assets/eight_letter_words.txt");

/// Supplies the candidate root words for a game.
pub trait WordSource {
    /// Loads every root word candidate.
    ///
    /// # Errors
    ///
    /// Returns [`WordSourceError`] if the source cannot be read. Callers treat
    /// this as fatal.
    fn load_root_word_candidates(&self) -> Result<Vec<String>, WordSourceError>;
}

/// Word source backed by the bundled eight-letter word list.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledWordSource;

impl WordSource for BundledWordSource {
    #[instrument(skip(self))]
    fn load_root_word_candidates(&self) -> Result<Vec<String>, WordSourceError> {
        let words = parse_word_list(BUNDLED_ROOT_WORDS);
        debug!(count = words.len(), "Loaded bundled root words");
        Ok(words)
    }
}

/// Word source reading a newline-separated file.
#[derive(Debug, Clone)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    /// Creates a word source for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileWordSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load_root_word_candidates(&self) -> Result<Vec<String>, WordSourceError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            WordSourceError::new(format!(
                "Failed to read word list {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let words = parse_word_list(&content);
        info!(count = words.len(), "Loaded root words from file");
        Ok(words)
    }
}

/// Splits a word list into trimmed, lowercased, non-blank entries.
#[instrument(skip(content), fields(bytes = content.len()))]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Picks a root word uniformly at random.
///
/// Falls back to [`FALLBACK_ROOT_WORD`] when `candidates` is empty.
#[instrument(skip(candidates, rng), fields(count = candidates.len()))]
pub fn choose_root_word<R: Rng + ?Sized>(candidates: &[String], rng: &mut R) -> String {
    match candidates.choose(rng) {
        Some(word) => word.clone(),
        None => {
            warn!(fallback = FALLBACK_ROOT_WORD, "No root word candidates, using fallback");
            FALLBACK_ROOT_WORD.to_string()
        }
    }
}

crate::location_error! {
    /// Word source error.
    pub struct WordSourceError("Word source error");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_parse_skips_blank_lines() {
        let words = parse_word_list("silkworm\n\n  Agitated \n");
        assert_eq!(words, ["silkworm", "agitated"]);
    }

    #[test]
    fn test_bundled_words_are_eight_letters() {
        let words = BundledWordSource.load_root_word_candidates().unwrap();
        assert!(!words.is_empty());
        assert!(words.iter().all(|w| w.chars().count() == 8), "{words:?}");
    }

    #[test]
    fn test_choose_from_empty_falls_back() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(choose_root_word(&[], &mut rng), FALLBACK_ROOT_WORD);
    }

    #[test]
    fn test_choose_returns_a_candidate() {
        let mut rng = StdRng::seed_from_u64(7);
        let candidates = vec!["agitated".to_string(), "silkworm".to_string()];
        let chosen = choose_root_word(&candidates, &mut rng);
        assert!(candidates.contains(&chosen));
    }
}
