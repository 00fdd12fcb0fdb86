//! Errors from loading or validating `scribe.toml`.

/// A configuration layer could not be read, parsed, or failed validation.
///
/// # Examples
///
/// ```
/// use scribe_error::{ConfigError, ScribeError, ScribeErrorKind};
///
/// let err: ScribeError = ConfigError::new("drafting.target_words must be at least 1").into();
/// assert!(matches!(err.kind(), ScribeErrorKind::Config(_)));
/// assert!(err.to_string().contains("target_words"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What was wrong with the configuration
    pub message: String,
    /// Line number where the error was raised
    pub line: u32,
    /// File where the error was raised
    pub file: &'static str,
}

impl ConfigError {
    /// Record a configuration failure at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_records_caller() {
        let err = ConfigError::new("model.name must not be empty");
        assert_eq!(err.message, "model.name must not be empty");
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Configuration Error: model.name"));
    }
}
