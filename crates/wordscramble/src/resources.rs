//! Loads the word list and dictionary named by the configuration.

use tracing::{info, instrument, warn};
use wordscramble_core::{
    BundledWordSource, DEFAULT_LANGUAGE, Dictionary, DictionaryError, FileWordSource,
    ScrambleEngine, WordListDictionary, WordSource, WordSourceError,
};

use crate::config::GameConfig;

/// Returns the word source selected by `config`.
#[instrument(skip(config))]
pub fn word_source(config: &GameConfig) -> Box<dyn WordSource> {
    match config.word_list() {
        Some(path) => {
            info!(path = %path.display(), "Using root word file");
            Box::new(FileWordSource::new(path))
        }
        None => Box::new(BundledWordSource),
    }
}

/// Loads every root word candidate.
///
/// # Errors
///
/// Returns [`WordSourceError`] if the configured word list cannot be read.
#[instrument(skip(config))]
pub fn load_root_words(config: &GameConfig) -> Result<Vec<String>, WordSourceError> {
    let words = word_source(config).load_root_word_candidates()?;
    if words.is_empty() {
        warn!("Root word list is empty");
    }
    Ok(words)
}

/// Builds the engine with the configured dictionary and language.
///
/// # Errors
///
/// Returns [`DictionaryError`] if the configured dictionary cannot be loaded.
#[instrument(skip(config), fields(language = %config.language()))]
pub fn load_engine(
    config: &GameConfig,
) -> Result<ScrambleEngine<Box<dyn Dictionary>>, DictionaryError> {
    let dictionary = match config.dictionary() {
        Some(path) => WordListDictionary::from_file(config.language(), path)?,
        None => {
            if !config.language().eq_ignore_ascii_case(DEFAULT_LANGUAGE) {
                warn!(
                    language = %config.language(),
                    "Bundled dictionary only covers English; configure a dictionary file"
                );
            }
            WordListDictionary::bundled()
        }
    };

    info!(words = dictionary.len(), "Dictionary ready");
    let dictionary: Box<dyn Dictionary> = Box::new(dictionary);
    Ok(ScrambleEngine::with_language(dictionary, config.language().clone()))
}
