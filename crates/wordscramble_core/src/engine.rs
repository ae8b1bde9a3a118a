//! Validation and scoring engine.

use tracing::{debug, instrument};

use crate::dictionary::{DEFAULT_LANGUAGE, Dictionary};
use crate::rules::{is_constructible, is_long_enough, is_original, is_recognized};
use crate::scoring::{REJECTION_PENALTY, bonus_for_length};
use crate::types::{Verdict, VerdictReason, normalize};

/// Decides whether candidates are accepted and what they score.
///
/// The engine owns its dictionary and language; round state is passed in on
/// every call so evaluation never mutates anything.
#[derive(Debug, Clone)]
pub struct ScrambleEngine<D> {
    dictionary: D,
    language: String,
}

impl<D: Dictionary> ScrambleEngine<D> {
    /// Creates an engine that checks words against `dictionary` in English.
    pub fn new(dictionary: D) -> Self {
        Self::with_language(dictionary, DEFAULT_LANGUAGE)
    }

    /// Creates an engine for a specific language tag.
    pub fn with_language(dictionary: D, language: impl Into<String>) -> Self {
        Self {
            dictionary,
            language: language.into(),
        }
    }

    /// Returns the dictionary.
    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// Returns the language tag used for lookups.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Evaluates `candidate` against the round.
    ///
    /// Rules run in order (length, originality, dictionary,
    /// constructibility) and the first failure is reported. Every rejection
    /// costs [`REJECTION_PENALTY`]; acceptance earns the length bonus.
    #[instrument(skip(self, accepted), fields(accepted_count = accepted.len()))]
    pub fn evaluate(&self, candidate: &str, root: &str, accepted: &[String]) -> Verdict {
        let candidate = normalize(candidate);
        let reason = self.reason_for(&candidate, root, accepted);

        let delta = match reason {
            VerdictReason::Accepted => bonus_for_length(candidate.chars().count()),
            _ => REJECTION_PENALTY,
        };

        debug!(%candidate, %reason, delta, "Evaluated candidate");
        Verdict::new(candidate, reason, delta)
    }

    fn reason_for(&self, candidate: &str, root: &str, accepted: &[String]) -> VerdictReason {
        if !is_long_enough(candidate) {
            VerdictReason::TooShort
        } else if !is_original(candidate, accepted) {
            VerdictReason::AlreadyUsed
        } else if !is_recognized(candidate, &self.dictionary, &self.language) {
            VerdictReason::NotInDictionary
        } else if !is_constructible(candidate, &root.to_lowercase()) {
            VerdictReason::NotConstructibleFromRoot
        } else {
            VerdictReason::Accepted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;

    fn engine() -> ScrambleEngine<WordListDictionary> {
        ScrambleEngine::new(WordListDictionary::from_words(
            "en",
            ["sow", "worm", "silk", "silkworm", "silkworms", "moss", "sax"],
        ))
    }

    #[test]
    fn test_length_checked_before_dictionary() {
        let verdict = engine().evaluate("xy", "silkworm", &[]);
        assert_eq!(*verdict.reason(), VerdictReason::TooShort);
        assert_eq!(*verdict.delta(), -1);
    }

    #[test]
    fn test_originality_checked_before_dictionary() {
        // "ows" is not in the dictionary, but the repeat is reported first.
        let accepted = vec!["ows".to_string()];
        let verdict = engine().evaluate("ows", "silkworm", &accepted);
        assert_eq!(*verdict.reason(), VerdictReason::AlreadyUsed);
    }

    #[test]
    fn test_dictionary_checked_before_constructibility() {
        let verdict = engine().evaluate("zzz", "silkworm", &[]);
        assert_eq!(*verdict.reason(), VerdictReason::NotInDictionary);
    }

    #[test]
    fn test_unconstructible_word_rejected() {
        let verdict = engine().evaluate("sax", "silkworm", &[]);
        assert_eq!(*verdict.reason(), VerdictReason::NotConstructibleFromRoot);
        assert_eq!(*verdict.delta(), -1);
    }

    #[test]
    fn test_candidate_is_normalized() {
        let verdict = engine().evaluate("  WORM \n", "silkworm", &[]);
        assert_eq!(verdict.candidate(), "worm");
        assert_eq!(*verdict.reason(), VerdictReason::Accepted);
        assert_eq!(*verdict.delta(), 2);
    }

    #[test]
    fn test_language_mismatch_rejects_everything() {
        let engine = ScrambleEngine::with_language(
            WordListDictionary::from_words("en", ["sow"]),
            "de",
        );
        let verdict = engine.evaluate("sow", "silkworm", &[]);
        assert_eq!(*verdict.reason(), VerdictReason::NotInDictionary);
    }
}
