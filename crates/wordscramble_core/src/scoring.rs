//! Score table for accepted words and the flat rejection penalty.

use tracing::instrument;

/// Score change applied on any rejection.
pub const REJECTION_PENALTY: i64 = -1;

/// Bonus awarded for an accepted word of `length` characters.
///
/// Lengths outside 3..=8 score nothing.
#[instrument]
pub fn bonus_for_length(length: usize) -> i64 {
    match length {
        3 => 1,
        4 => 2,
        5 => 4,
        6 => 7,
        7 => 10,
        8 => 20,
        _ => 0,
    }
}
