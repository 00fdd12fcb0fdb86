//! User input validation errors.

/// Specific validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Topic was empty or whitespace
    #[display("No topic provided")]
    EmptyTopic,
    /// Theme selection outside 1..=available
    #[display("Theme index {} is out of range (1-{})", index, available)]
    ThemeIndexOutOfRange {
        /// The 1-based index that was requested
        index: usize,
        /// Number of themes on offer
        available: usize,
    },
    /// Input could not be read as a number
    #[display("Not a valid number: {}", _0)]
    InvalidNumber(String),
}

/// Validation error with location tracking.
///
/// # Examples
///
/// ```
/// use scribe_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::ThemeIndexOutOfRange { index: 9, available: 5 });
/// assert!(format!("{}", err).contains("out of range"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The kind of error that occurred
    pub kind: ValidationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
