//! Top-level error wrapper types.

use crate::{
    BuilderError, ConfigError, ExtractionError, ModelError, ScriptError, StorageError,
    ValidationError,
};

/// Every error condition the Scribe workspace can surface.
///
/// # Examples
///
/// ```
/// use scribe_error::{ScribeError, StorageError, StorageErrorKind};
///
/// let storage_err = StorageError::new(StorageErrorKind::FileWrite("disk full".to_string()));
/// let err: ScribeError = storage_err.into();
/// assert!(format!("{}", err).contains("Storage Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ScribeErrorKind {
    /// Structured list could not be extracted from a model response
    #[from(ExtractionError)]
    Extraction(ExtractionError),
    /// Model collaborator failed (transport, auth, quota)
    #[from(ModelError)]
    Model(ModelError),
    /// Bad user input
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Persistence failure
    #[from(StorageError)]
    Storage(StorageError),
    /// Script pipeline failure
    #[from(ScriptError)]
    Script(ScriptError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
}

/// Scribe error with kind discrimination.
///
/// # Examples
///
/// ```
/// use scribe_error::{ConfigError, ScribeErrorKind, ScribeResult};
///
/// fn might_fail() -> ScribeResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), ScribeErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Scribe Error: {}", _0)]
pub struct ScribeError(Box<ScribeErrorKind>);

impl ScribeError {
    /// Create a new error from a kind.
    pub fn new(kind: ScribeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScribeErrorKind {
        &self.0
    }

    /// Consume the error and return its kind.
    pub fn into_kind(self) -> ScribeErrorKind {
        *self.0
    }
}

// Generic From implementation for any type that converts to ScribeErrorKind
impl<T> From<T> for ScribeError
where
    T: Into<ScribeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Scribe operations.
pub type ScribeResult<T> = std::result::Result<T, ScribeError>;
