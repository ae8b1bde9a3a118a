//! Error types that record where they were raised.

/// Declares an error struct carrying a message and the caller's location.
///
/// The generated type has public `message`, `line` and `file` fields, a
/// `#[track_caller]` constructor, and displays as
/// `"<label>: <message> at <file>:<line>"`.
///
/// ```
/// wordscramble_core::location_error! {
///     /// Save file error.
///     pub struct SaveError("Save error");
/// }
///
/// let err = SaveError::new("disk full");
/// assert_eq!(err.message, "disk full");
/// assert!(err.to_string().starts_with("Save error: disk full at "));
/// ```
#[macro_export]
macro_rules! location_error {
    ($(#[$meta:meta])* $vis:vis struct $name:ident($label:literal);) => {
        $(#[$meta])*
        #[derive(Debug, Clone, ::derive_more::Error)]
        $vis struct $name {
            /// Error message.
            pub message: String,
            /// Line number where error occurred.
            pub line: u32,
            /// Source file where error occurred.
            pub file: &'static str,
        }

        impl $name {
            /// Creates a new error with caller location tracking.
            #[track_caller]
            #[::tracing::instrument(skip(message))]
            pub fn new(message: impl Into<String>) -> Self {
                let loc = ::std::panic::Location::caller();
                Self {
                    message: message.into(),
                    line: loc.line(),
                    file: loc.file(),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}: {} at {}:{}", $label, self.message, self.file, self.line)
            }
        }
    };
}
