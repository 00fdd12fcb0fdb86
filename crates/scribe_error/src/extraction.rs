//! Errors raised while pulling a structured list out of model output.

/// Why a list could not be extracted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ExtractionErrorKind {
    /// No bracketed block exists anywhere in the response
    #[display("no array found in model response")]
    NoArrayFound,
    /// A bracketed block exists but is not a list of non-empty strings
    #[display("malformed array: {}", _0)]
    Malformed(String),
}

/// Extraction error with source location tracking.
///
/// # Examples
///
/// ```
/// use scribe_error::{ExtractionError, ExtractionErrorKind};
///
/// let err = ExtractionError::new(ExtractionErrorKind::NoArrayFound);
/// assert!(format!("{}", err).contains("no array found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Extraction Error: {} at line {} in {}", kind, line, file)]
pub struct ExtractionError {
    /// The kind of error that occurred
    pub kind: ExtractionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ExtractionError {
    /// Create a new ExtractionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExtractionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
