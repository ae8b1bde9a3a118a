//! Originality rule: a word may only be scored once per round.

use tracing::instrument;

/// Checks that the candidate does not already appear in `accepted`.
///
/// Comparison ignores case.
#[instrument(skip(accepted), fields(accepted_count = accepted.len()))]
pub fn is_original(candidate: &str, accepted: &[String]) -> bool {
    let candidate = candidate.to_lowercase();
    !accepted.iter().any(|word| word.to_lowercase() == candidate)
}
