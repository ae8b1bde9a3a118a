//! Word scramble game logic.
//!
//! A round has a root word. Players submit candidate words built from the
//! root's letters; the [`ScrambleEngine`] checks each one and the
//! [`GameSession`] keeps the accepted words and score.
//!
//! # Example
//!
//! ```
//! use wordscramble_core::{GameSession, ScrambleEngine, VerdictReason, WordListDictionary};
//!
//! let engine = ScrambleEngine::new(WordListDictionary::from_words("en", ["sow", "worm"]));
//! let mut session = GameSession::new("silkworm");
//!
//! let verdict = session.submit(&engine, "Sow");
//! assert_eq!(*verdict.reason(), VerdictReason::Accepted);
//! assert_eq!(*session.score(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod dictionary;
mod engine;
mod error;
pub mod rules;
mod scoring;
mod session;
mod types;
mod word_source;

pub use dictionary::{DEFAULT_LANGUAGE, Dictionary, DictionaryError, WordListDictionary};
pub use engine::ScrambleEngine;
pub use scoring::{REJECTION_PENALTY, bonus_for_length};
pub use session::{GameSession, SessionEvent, SessionEvents};
pub use types::{FALLBACK_ROOT_WORD, Verdict, VerdictReason, normalize};
pub use word_source::{
    BundledWordSource, FileWordSource, WordSource, WordSourceError, choose_root_word,
    parse_word_list,
};
