//! Minimum length rule.

use tracing::instrument;

/// Shortest candidate length, in characters, that can be accepted.
pub const MIN_WORD_LENGTH: usize = 3;

/// Checks that the candidate has at least [`MIN_WORD_LENGTH`] characters.
#[instrument]
pub fn is_long_enough(candidate: &str) -> bool {
    candidate.chars().count() >= MIN_WORD_LENGTH
}
