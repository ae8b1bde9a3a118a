//! Dictionary oracle used by the recognition rule.

use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, instrument};

/// English word list compiled into the binary.
const BUNDLED_ENGLISH: &str = include_str!("../assets/dictionary_en.txt");

/// Language tag of the bundled word list.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Reports whether a string is a recognized word.
///
/// Implementations must be side-effect free; the engine may ask the same
/// question any number of times.
pub trait Dictionary {
    /// Returns true if `word` is a word in `language`.
    fn is_recognized_word(&self, word: &str, language: &str) -> bool;
}

/// Dictionary backed by an in-memory set of lowercase words for one language.
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: HashSet<String>,
}

impl WordListDictionary {
    /// Builds a dictionary from an iterator of words.
    ///
    /// Words are trimmed and lowercased; blank entries are dropped.
    #[instrument(skip(words))]
    pub fn from_words<I, S>(language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        debug!(language, count = words.len(), "Built word list dictionary");
        Self {
            language: language.to_string(),
            words,
        }
    }

    /// Returns the bundled English dictionary.
    #[instrument]
    pub fn bundled() -> Self {
        Self::from_words(DEFAULT_LANGUAGE, BUNDLED_ENGLISH.lines())
    }

    /// Loads a newline-separated word list from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError`] if the file cannot be read or holds no words.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(language: &str, path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            DictionaryError::new(format!(
                "Failed to read dictionary {}: {}",
                path.display(),
                e
            ))
        })?;

        let dictionary = Self::from_words(language, content.lines());
        if dictionary.is_empty() {
            return Err(DictionaryError::new(format!(
                "Dictionary {} contains no words",
                path.display()
            )));
        }

        info!(count = dictionary.len(), "Loaded dictionary from file");
        Ok(dictionary)
    }

    /// Returns the language tag this dictionary answers for.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordListDictionary {
    fn is_recognized_word(&self, word: &str, language: &str) -> bool {
        language.eq_ignore_ascii_case(&self.language) && self.words.contains(&word.to_lowercase())
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn is_recognized_word(&self, word: &str, language: &str) -> bool {
        (**self).is_recognized_word(word, language)
    }
}

crate::location_error! {
    /// Dictionary loading error.
    pub struct DictionaryError("Dictionary error");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case() {
        let dict = WordListDictionary::from_words("en", ["Worm"]);
        assert!(dict.is_recognized_word("worm", "en"));
        assert!(dict.is_recognized_word("WORM", "EN"));
    }

    #[test]
    fn test_blank_entries_are_dropped() {
        let dict = WordListDictionary::from_words("en", ["", "  ", "sow"]);
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_bundled_covers_default_scenario() {
        let dict = WordListDictionary::bundled();
        assert_eq!(dict.language(), DEFAULT_LANGUAGE);
        assert!(dict.is_recognized_word("sow", "en"));
        assert!(dict.is_recognized_word("silkworm", "en"));
        assert!(!dict.is_recognized_word("xqzv", "en"));
    }

    #[test]
    fn test_bundled_knows_common_words_from_roots() {
        let dict = WordListDictionary::bundled();
        let samples = [
            ("baseball", &["ball", "sale", "bale", "label", "sable", "seal"][..]),
            ("bookcase", &["book", "cook", "case", "soak", "oboe"]),
            ("pastries", &["stripe", "pirate", "sister", "spite", "traps"]),
            ("shoulder", &["hold", "house", "loud", "horse", "solder"]),
            ("triangle", &["tangle", "alert", "grain", "trial"]),
            ("mountain", &["mount", "nation", "union", "amount"]),
        ];

        for (root, words) in samples {
            assert!(dict.is_recognized_word(root, "en"), "{root}");
            for word in words {
                assert!(dict.is_recognized_word(word, "en"), "{root}/{word}");
            }
        }
    }

    #[test]
    fn test_bundled_knows_words_outside_any_root() {
        let dict = WordListDictionary::bundled();
        for word in ["bass", "kiss", "balls", "labels"] {
            assert!(dict.is_recognized_word(word, "en"), "{word}");
        }
    }
}
