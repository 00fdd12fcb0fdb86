//! Model collaborator error types.

/// Model-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ModelErrorKind {
    /// API key not found in environment
    #[display("GEMINI_API_KEY (or GOOGLE_API_KEY) environment variable not set")]
    MissingApiKey,
    /// Failed to create the model client
    #[display("Failed to create model client: {}", _0)]
    ClientCreation(String),
    /// API request failed
    #[display("Model API request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// The model answered with no text at all
    #[display("Model returned an empty response")]
    EmptyResponse,
    /// The model is unavailable (used by mock and offline drivers)
    #[display("Model unavailable: {}", _0)]
    Unavailable(String),
}

impl ModelErrorKind {
    /// Whether this failure stems from missing or rejected credentials.
    pub fn is_auth_failure(&self) -> bool {
        match self {
            ModelErrorKind::MissingApiKey => true,
            ModelErrorKind::HttpError { status_code, .. } => matches!(*status_code, 401 | 403),
            _ => false,
        }
    }
}

/// Model error with source location tracking.
///
/// # Examples
///
/// ```
/// use scribe_error::{ModelError, ModelErrorKind};
///
/// let err = ModelError::new(ModelErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Model Error: {} at line {} in {}", kind, line, file)]
pub struct ModelError {
    /// The kind of error that occurred
    pub kind: ModelErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ModelError {
    /// Create a new ModelError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ModelErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
