//! Constructibility rule: the candidate must be spelled from the root's
//! letters, each letter used at most as often as the root supplies it.

use tracing::{debug, instrument};

/// Checks that every character of `candidate` can be drawn from `root`.
///
/// Each matched character is removed from a working copy of the root, so a
/// letter repeated in the candidate must be repeated in the root as well.
#[instrument]
pub fn is_constructible(candidate: &str, root: &str) -> bool {
    let mut remaining: Vec<char> = root.chars().collect();

    for letter in candidate.chars() {
        match remaining.iter().position(|&c| c == letter) {
            Some(index) => {
                remaining.remove(index);
            }
            None => {
                debug!(%letter, "Letter not available in root word");
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subset_is_constructible() {
        assert!(is_constructible("sow", "silkworm"));
    }

    #[test]
    fn test_root_itself_is_constructible() {
        assert!(is_constructible("silkworm", "silkworm"));
    }

    #[test]
    fn test_missing_letter_is_not_constructible() {
        assert!(!is_constructible("sax", "silkworm"));
    }

    #[test]
    fn test_multiplicity_is_enforced() {
        // Needs two s's; silkworm has one.
        assert!(!is_constructible("silkworms", "silkworm"));
        assert!(!is_constructible("moss", "silkworm"));
    }

    #[test]
    fn test_repeated_letters_available_in_root() {
        assert!(is_constructible("tot", "tomatoes"));
        assert!(!is_constructible("tomtom", "tomatoes"));
    }

    #[test]
    fn test_order_does_not_matter() {
        assert!(is_constructible("mrow", "silkworm"));
    }
}
