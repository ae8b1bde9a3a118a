//! Validation rules for word scramble.
//!
//! Each rule is a pure predicate over the candidate and round state. The
//! engine runs them in a fixed order and the first failure decides the
//! verdict.

pub mod constructible;
pub mod length;
pub mod originality;
pub mod recognized;

pub use constructible::is_constructible;
pub use length::{MIN_WORD_LENGTH, is_long_enough};
pub use originality::is_original;
pub use recognized::is_recognized;
