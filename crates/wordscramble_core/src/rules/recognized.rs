//! Dictionary rule: the candidate must be a real word.

use crate::dictionary::Dictionary;
use tracing::instrument;

/// Asks `dictionary` whether the candidate is a word in `language`.
#[instrument(skip(dictionary))]
pub fn is_recognized<D: Dictionary + ?Sized>(candidate: &str, dictionary: &D, language: &str) -> bool {
    dictionary.is_recognized_word(candidate, language)
}
