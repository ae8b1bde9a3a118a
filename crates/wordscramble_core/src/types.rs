//! Core domain types for word scramble.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Root word used when the word source yields no candidates.
pub const FALLBACK_ROOT_WORD: &str = "silkworm";

/// Outcome of validating a candidate against the current round.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
pub enum VerdictReason {
    /// Candidate has two letters or fewer.
    TooShort,
    /// Candidate was already accepted this round.
    AlreadyUsed,
    /// The dictionary does not recognize the candidate.
    NotInDictionary,
    /// Candidate needs letters the root word does not supply.
    NotConstructibleFromRoot,
    /// Candidate passed every rule.
    Accepted,
}

impl VerdictReason {
    /// Returns true for [`VerdictReason::Accepted`].
    pub fn is_accepted(self) -> bool {
        self == Self::Accepted
    }

    /// Alert title shown to the player, `None` for accepted words.
    #[instrument]
    pub fn title(self) -> Option<&'static str> {
        match self {
            Self::TooShort => Some("Word is too short"),
            Self::AlreadyUsed => Some("Word used already"),
            Self::NotInDictionary => Some("Word isn't in the dictionary"),
            Self::NotConstructibleFromRoot => Some("Word can't be made with root word"),
            Self::Accepted => None,
        }
    }

    /// Alert message shown under the title, `None` for accepted words.
    #[instrument]
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::TooShort => Some("Use at least three letters"),
            Self::AlreadyUsed => Some("Be more original"),
            Self::NotInDictionary => Some("Be smarter"),
            Self::NotConstructibleFromRoot => Some("Be more accurate"),
            Self::Accepted => None,
        }
    }
}

/// The engine's decision for one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct Verdict {
    /// Normalized candidate that was evaluated.
    candidate: String,
    /// Why the candidate was accepted or rejected.
    reason: VerdictReason,
    /// Score change to apply.
    delta: i64,
}

impl Verdict {
    /// Returns true if the candidate was accepted.
    pub fn is_accepted(&self) -> bool {
        self.reason.is_accepted()
    }
}

/// Trims surrounding whitespace and lowercases a raw submission.
#[instrument]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
